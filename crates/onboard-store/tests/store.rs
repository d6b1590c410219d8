//! File-backed tests for the client record store. Each test works in its own
//! temporary directory.

use chrono::NaiveDate;
use onboard_core::{
    flatten_record, BrandData, BrandEntry, Category, ClientRecord, CompetitorAnalysis, RecordType,
    ReportType, SocialLinks, SocialPlatform,
};
use onboard_store::RecordStore;

fn store_in(dir: &tempfile::TempDir) -> RecordStore {
    RecordStore::new(dir.path().join("data").join("clients.json"))
}

fn acme_record(organization: &str, brand: &str) -> ClientRecord {
    let mut socials = SocialLinks::default();
    socials.set(SocialPlatform::Facebook, "fb.com/acme");
    ClientRecord {
        id: None,
        record_type: RecordType::Onboard,
        organization: organization.to_string(),
        executive_name: None,
        reports: vec![ReportType::CompetitorAnalysis],
        onboard_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        presentation_date: None,
        created_at: None,
        brands: vec![BrandEntry {
            name: brand.to_string(),
            data: BrandData {
                competitor_analysis: Some(CompetitorAnalysis {
                    brand_socials: socials,
                    competitors: vec![],
                }),
                ..BrandData::default()
            },
        }],
    }
}

#[test]
fn load_all_creates_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.load_all().is_empty());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn add_assigns_id_and_created_at() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let stored = store.add(acme_record("Acme", "Acme Shoes")).unwrap();
    let id = stored.id.clone().expect("id assigned");
    assert_eq!(id.len(), 20);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
    assert!(stored.created_at.is_some());

    let all = store.load_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], stored);

    let rows = flatten_record(&all[0]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, Category::BrandSocials);
    assert_eq!(rows[0].sub_category, "Facebook");
    assert_eq!(rows[0].detail, "fb.com/acme");
}

#[test]
fn add_keeps_existing_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let mut record = acme_record("Acme", "Acme Shoes");
    record.id = Some("fixed".to_string());
    let stored = store.add(record).unwrap();
    assert_eq!(stored.id.as_deref(), Some("fixed"));
}

#[test]
fn records_keep_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    for org in ["Zeta", "Alpha", "Mid"] {
        store.add(acme_record(org, "Brand")).unwrap();
    }
    let orgs: Vec<String> = store
        .load_all()
        .into_iter()
        .map(|r| r.organization)
        .collect();
    assert_eq!(orgs, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn file_is_indented_with_four_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.add(acme_record("Acme", "Acme Shoes")).unwrap();
    let content = std::fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with("[\n    {\n        \""));
    assert!(content.contains("\"type\": \"onboard\""));
}

#[test]
fn update_replaces_matching_record_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.add(acme_record("Other", "Other Brand")).unwrap();
    let mut record = store.add(acme_record("Acme", "Acme Shoes")).unwrap();

    record.append_brands([BrandEntry::new("Acme Boots")]);
    assert!(store.update(&record).unwrap());
    let once = std::fs::read_to_string(store.path()).unwrap();
    assert!(store.update(&record).unwrap());
    let twice = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(once, twice);

    let found = store.find_by_organization("Acme").unwrap();
    assert_eq!(found.brand_names(), vec!["Acme Shoes", "Acme Boots"]);
    assert_eq!(store.load_all().len(), 2);
}

#[test]
fn update_of_unknown_id_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.add(acme_record("Acme", "Acme Shoes")).unwrap();
    let before = store.load_all();

    let mut stray = acme_record("Ghost", "Ghost Brand");
    stray.id = Some("does-not-exist".to_string());
    assert!(!store.update(&stray).unwrap());

    let without_id = acme_record("Ghost", "Ghost Brand");
    assert!(!store.update(&without_id).unwrap());

    assert_eq!(store.load_all(), before);
}

#[test]
fn delete_removes_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let keep = store.add(acme_record("Keep", "Keep Brand")).unwrap();
    let mut gone = acme_record("Gone", "Gone Brand");
    gone.id = Some("gone-id".to_string());
    store.add(gone).unwrap();

    assert_eq!(store.delete("gone-id").unwrap(), 1);
    let all = store.load_all();
    assert!(all.iter().all(|r| r.id.as_deref() != Some("gone-id")));
    assert_eq!(all, vec![keep]);

    assert_eq!(store.delete("gone-id").unwrap(), 0);
}

#[test]
fn find_by_organization_returns_first_added() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let first = store.add(acme_record("Acme", "First Brand")).unwrap();
    store.add(acme_record("Acme", "Second Brand")).unwrap();

    assert_eq!(store.find_by_organization("Acme"), Some(first));
    assert!(store.find_by_organization("Nobody").is_none());
    assert_eq!(
        store.brands_for_organization("Acme"),
        vec!["First Brand", "Second Brand"]
    );
}

#[test]
fn list_organizations_is_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    for org in ["Beta", "Acme", "Beta"] {
        store.add(acme_record(org, "Brand")).unwrap();
    }
    assert_eq!(store.list_organizations(), vec!["Acme", "Beta"]);
}

#[test]
fn malformed_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{ not json").unwrap();
    assert!(store.load_all().is_empty());

    // The next write replaces the corrupt content.
    store.add(acme_record("Acme", "Acme Shoes")).unwrap();
    assert_eq!(store.load_all().len(), 1);
}

#[test]
fn unknown_brand_section_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"[{"organization": "Acme", "type": "onboard",
            "brands": [{"name": "A", "data": {"tiktok_ads": "x"}}]}]"#,
    )
    .unwrap();
    assert!(store.load_all().is_empty());
}

#[test]
fn legacy_records_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"[
    {
        "executive_name": "Dana",
        "organization": "Acme",
        "brands": [
            {
                "name": "Acme Shoes",
                "data": {
                    "competitor_analysis": {
                        "brand_socials": {
                            "facebook": "fb.com/acme",
                            "instagram": null,
                            "twitter": null,
                            "tiktok": null,
                            "linkedin": null,
                            "youtube": null,
                            "website": null
                        },
                        "competitors": []
                    },
                    "social_listening": {"enabled": false}
                }
            }
        ],
        "reports": ["Competitor Analysis", "Social Listening"],
        "onboard_date": "2024-01-01",
        "type": "onboard",
        "id": "20240101120000000001",
        "created_at": "2024-01-01T12:00:00.000001"
    }
]"#,
    )
    .unwrap();

    let all = store.load_all();
    assert_eq!(all.len(), 1);
    let rows = flatten_record(&all[0]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].detail, "fb.com/acme");
}

#[test]
fn next_write_after_schema_failure_replaces_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"[{"organization": "Old", "type": "onboard", "brands": []},
            {"organization": "Bad", "type": "onboard",
             "brands": [{"name": "A", "data": {"tiktok_ads": "x"}}]}]"#,
    )
    .unwrap();

    store.add(acme_record("Acme", "Acme Shoes")).unwrap();
    assert_eq!(store.list_organizations(), vec!["Acme"]);
}
