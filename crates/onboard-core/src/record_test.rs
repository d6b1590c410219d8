use super::*;

fn brand_with_competitors(names: &[&str]) -> BrandEntry {
    let mut brand = BrandEntry::new("Acme Shoes");
    brand.data.competitor_analysis = Some(CompetitorAnalysis {
        brand_socials: SocialLinks::default(),
        competitors: names
            .iter()
            .map(|n| Competitor {
                name: (*n).to_string(),
                socials: SocialLinks::default(),
            })
            .collect(),
    });
    brand
}

#[test]
fn report_type_serializes_as_label() {
    let json = serde_json::to_string(&ReportType::CompetitorAnalysis).unwrap();
    assert_eq!(json, "\"Competitor Analysis\"");
    let parsed: ReportType = serde_json::from_str("\"Google Ads\"").unwrap();
    assert_eq!(parsed, ReportType::GoogleAds);
}

#[test]
fn pitch_allows_only_two_reports() {
    assert!(ReportType::CompetitorAnalysis.allowed_for(RecordType::Pitch));
    assert!(ReportType::SocialListening.allowed_for(RecordType::Pitch));
    assert!(!ReportType::GoogleTrends.allowed_for(RecordType::Pitch));
    assert!(ReportType::GoogleAds.allowed_for(RecordType::Onboard));
}

#[test]
fn platform_labels_use_first_letter_capitalization() {
    assert_eq!(SocialPlatform::Tiktok.label(), "Tiktok");
    assert_eq!(SocialPlatform::Linkedin.label(), "Linkedin");
    assert_eq!(SocialPlatform::Youtube.label(), "Youtube");
    assert_eq!(PlatformAccessKey::GoogleAnalytics.label(), "Google Analytics");
    assert_eq!(PlatformAccessKey::MetaPlatform.label(), "Meta Platform");
}

#[test]
fn social_platform_from_str_is_case_insensitive() {
    assert_eq!(
        "Instagram".parse::<SocialPlatform>().unwrap(),
        SocialPlatform::Instagram
    );
    assert!(matches!(
        "myspace".parse::<SocialPlatform>(),
        Err(RecordError::UnknownPlatform(_))
    ));
}

#[test]
fn social_links_entries_follow_display_order() {
    let mut links = SocialLinks::default();
    links.set(SocialPlatform::Website, "acme.com");
    links.set(SocialPlatform::Facebook, "fb.com/acme");
    links.set(SocialPlatform::Twitter, "");
    let entries: Vec<_> = links.entries().collect();
    assert_eq!(
        entries,
        vec![
            (SocialPlatform::Facebook, "fb.com/acme"),
            (SocialPlatform::Twitter, ""),
            (SocialPlatform::Website, "acme.com"),
        ]
    );
}

#[test]
fn social_links_null_reads_as_absent() {
    let links: SocialLinks =
        serde_json::from_str(r#"{"facebook": null, "instagram": "ig.com/acme"}"#).unwrap();
    assert!(links.get(SocialPlatform::Facebook).is_none());
    assert_eq!(links.get(SocialPlatform::Instagram), Some("ig.com/acme"));
}

#[test]
fn brand_data_rejects_unknown_section() {
    let result = serde_json::from_str::<BrandData>(r#"{"tiktok_ads": "x"}"#);
    assert!(result.is_err());
}

#[test]
fn brand_data_populated_reports_in_report_order() {
    let data = BrandData {
        google_ads: Some("acct 123".to_string()),
        google_trends: Some(GoogleTrends::default()),
        ..BrandData::default()
    };
    assert_eq!(
        data.populated_reports(),
        vec![ReportType::GoogleTrends, ReportType::GoogleAds]
    );
    assert!(!data.is_empty());
    assert!(BrandData::default().is_empty());
}

#[test]
fn client_record_reads_legacy_json() {
    let json = r#"{
        "executive_name": "Dana",
        "organization": "Acme",
        "brands": [{"name": "Acme Shoes", "data": {}}],
        "reports": ["Competitor Analysis", "Social Listening"],
        "presentation_date": "2024-03-05",
        "type": "pitch",
        "id": "20240305101112123456",
        "created_at": "2024-03-05T10:11:12.123456"
    }"#;
    let record: ClientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.record_type, RecordType::Pitch);
    assert_eq!(record.id.as_deref(), Some("20240305101112123456"));
    assert_eq!(
        record.effective_date(),
        NaiveDate::from_ymd_opt(2024, 3, 5)
    );
    assert_eq!(record.reports_label(), "Competitor Analysis, Social Listening");
    assert!(record.created_at.is_some());
}

#[test]
fn client_record_without_executive_reads_as_none() {
    let json = r#"{"organization": "Acme", "type": "onboard", "onboard_date": "2024-01-01"}"#;
    let record: ClientRecord = serde_json::from_str(json).unwrap();
    assert!(record.executive_name.is_none());
    assert!(record.brands.is_empty());
    assert!(record.id.is_none());
}

#[test]
fn remove_brand_drops_every_match() {
    let json = r#"{"organization": "Acme", "type": "onboard",
        "brands": [{"name": "A"}, {"name": "B"}, {"name": "A"}]}"#;
    let mut record: ClientRecord = serde_json::from_str(json).unwrap();
    assert!(record.remove_brand("A"));
    assert_eq!(record.brand_names(), vec!["B"]);
    assert!(!record.remove_brand("Z"));
}

#[test]
fn web_traffic_must_come_from_competitors() {
    let mut brand = brand_with_competitors(&["Rival", "Other"]);
    let err = brand
        .apply_section(SectionUpdate::WebTraffic(WebTraffic {
            selected_competitors: vec!["Stranger".to_string()],
        }))
        .unwrap_err();
    assert_eq!(err, RecordError::UnknownCompetitor("Stranger".to_string()));
    assert!(brand.data.web_traffic.is_none());
}

#[test]
fn web_traffic_limited_to_four() {
    let mut brand = brand_with_competitors(&["A", "B", "C", "D", "E"]);
    let err = brand
        .apply_section(SectionUpdate::WebTraffic(WebTraffic {
            selected_competitors: ["A", "B", "C", "D", "E"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }))
        .unwrap_err();
    assert_eq!(err, RecordError::TooManyWebTrafficCompetitors(5));
}

#[test]
fn social_listening_section_rejects_duplicate_hashtags() {
    let mut brand = BrandEntry::new("Acme Shoes");
    let err = brand
        .apply_section(SectionUpdate::SocialListening(SocialListening {
            enabled: true,
            brand_health: Some(BrandHealth {
                keywords: vec!["shoes".to_string()],
                hashtags: vec!["#acme".to_string(), "#acme".to_string()],
            }),
        }))
        .unwrap_err();
    assert!(err.to_string().contains("hashtag '#acme' already exists"));
}

#[test]
fn too_many_keywords_message_names_limit() {
    let health = BrandHealth {
        keywords: (0..11).map(|i| format!("kw{i}")).collect(),
        hashtags: vec![],
    };
    let err = validate_brand_health(&health).unwrap_err();
    assert_eq!(err.to_string(), "at most 10 keywords are allowed, got 11");
}

#[test]
fn platform_access_section_sets_all_four_keys() {
    let mut brand = BrandEntry::new("Acme Shoes");
    brand
        .apply_section(SectionUpdate::PlatformAccess(PlatformAccessNotes {
            meta_platform: "Acme Page".to_string(),
            google_ads: "123-456".to_string(),
            ..PlatformAccessNotes::default()
        }))
        .unwrap();
    assert_eq!(
        brand.data.platform_access(PlatformAccessKey::MetaPlatform),
        Some("Acme Page")
    );
    assert_eq!(
        brand.data.platform_access(PlatformAccessKey::GoogleAnalytics),
        Some("")
    );
}

#[test]
fn section_parses_from_kebab_or_snake_case() {
    assert_eq!(
        "google_trends".parse::<Section>().unwrap(),
        Section::GoogleTrends
    );
    assert_eq!(
        "Platform Access".parse::<Section>().unwrap(),
        Section::PlatformAccess
    );
    assert!("budget".parse::<Section>().is_err());
}

#[test]
fn platform_access_section_covers_four_reports() {
    assert_eq!(Section::PlatformAccess.reports().len(), 4);
    assert_eq!(
        Section::WebTraffic.reports(),
        &[ReportType::WebTraffic]
    );
    assert_eq!(
        ReportType::GoogleAds.platform_access_key(),
        Some(PlatformAccessKey::GoogleAds)
    );
    assert_eq!(ReportType::GoogleTrends.platform_access_key(), None);
}

#[test]
fn competitor_edit_must_keep_web_traffic_picks() {
    let mut brand = brand_with_competitors(&["Rival", "Other"]);
    brand
        .apply_section(SectionUpdate::WebTraffic(WebTraffic {
            selected_competitors: vec!["Rival".to_string()],
        }))
        .unwrap();

    let replacement = brand_with_competitors(&["Newcomer"])
        .data
        .competitor_analysis
        .unwrap();
    let err = brand
        .apply_section(SectionUpdate::CompetitorAnalysis(replacement))
        .unwrap_err();
    assert_eq!(err, RecordError::UnknownCompetitor("Rival".to_string()));
    assert_eq!(brand.data.competitor_names(), vec!["Rival", "Other"]);

    let kept = brand_with_competitors(&["Rival", "Newcomer"])
        .data
        .competitor_analysis
        .unwrap();
    brand
        .apply_section(SectionUpdate::CompetitorAnalysis(kept))
        .unwrap();
    assert_eq!(brand.data.competitor_names(), vec!["Rival", "Newcomer"]);
}

#[test]
fn social_links_get_reads_each_platform() {
    let mut links = SocialLinks::default();
    links.set(SocialPlatform::Youtube, "youtube.com/acme");
    assert_eq!(links.get(SocialPlatform::Youtube), Some("youtube.com/acme"));
    assert_eq!(links.get(SocialPlatform::Website), None);
}
