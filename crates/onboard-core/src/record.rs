//! Typed client record model.
//!
//! A [`ClientRecord`] is one onboarding or pitch event for an organization.
//! Each record carries an ordered list of [`BrandEntry`] values whose
//! [`BrandData`] holds one optional section per report type. Sections reject
//! unknown keys when read from JSON.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Web traffic reports compare a brand against at most this many competitors.
pub const MAX_WEB_TRAFFIC_COMPETITORS: usize = 4;

/// Upper bound for both the keyword and the hashtag list of a brand-health
/// listening setup.
pub const MAX_BRAND_HEALTH_TERMS: usize = 10;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Onboard,
    Pitch,
}

impl RecordType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Onboard => "onboard",
            RecordType::Pitch => "pitch",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report kinds a client can sign up for. Serialized as their display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Competitor Analysis")]
    CompetitorAnalysis,
    #[serde(rename = "Google Trends")]
    GoogleTrends,
    #[serde(rename = "Web Traffic")]
    WebTraffic,
    #[serde(rename = "Social Listening")]
    SocialListening,
    #[serde(rename = "Meta Platform")]
    MetaPlatform,
    #[serde(rename = "Google Analytics")]
    GoogleAnalytics,
    #[serde(rename = "Meta Campaigns")]
    MetaCampaigns,
    #[serde(rename = "Google Ads")]
    GoogleAds,
}

impl ReportType {
    pub const ALL: [ReportType; 8] = [
        ReportType::CompetitorAnalysis,
        ReportType::GoogleTrends,
        ReportType::WebTraffic,
        ReportType::SocialListening,
        ReportType::MetaPlatform,
        ReportType::GoogleAnalytics,
        ReportType::MetaCampaigns,
        ReportType::GoogleAds,
    ];

    /// Pitches only cover the two reports that can be prepared before the
    /// client grants platform access.
    pub const PITCH: [ReportType; 2] =
        [ReportType::CompetitorAnalysis, ReportType::SocialListening];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReportType::CompetitorAnalysis => "Competitor Analysis",
            ReportType::GoogleTrends => "Google Trends",
            ReportType::WebTraffic => "Web Traffic",
            ReportType::SocialListening => "Social Listening",
            ReportType::MetaPlatform => "Meta Platform",
            ReportType::GoogleAnalytics => "Google Analytics",
            ReportType::MetaCampaigns => "Meta Campaigns",
            ReportType::GoogleAds => "Google Ads",
        }
    }

    /// Report options offered for a record of the given type.
    #[must_use]
    pub fn options_for(record_type: RecordType) -> &'static [ReportType] {
        match record_type {
            RecordType::Onboard => &Self::ALL,
            RecordType::Pitch => &Self::PITCH,
        }
    }

    #[must_use]
    pub fn allowed_for(self, record_type: RecordType) -> bool {
        Self::options_for(record_type).contains(&self)
    }

    /// The access note this report is collected into, for the four
    /// platform access reports.
    #[must_use]
    pub fn platform_access_key(self) -> Option<PlatformAccessKey> {
        PlatformAccessKey::ALL.into_iter().find(|k| k.report() == self)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of social platforms collected for brands and competitors,
/// in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Tiktok,
    Linkedin,
    Youtube,
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 7] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::Tiktok,
        SocialPlatform::Linkedin,
        SocialPlatform::Youtube,
        SocialPlatform::Website,
    ];

    /// JSON key for the platform.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Website => "website",
        }
    }

    /// Key with only the first letter upper-cased (`"tiktok"` -> `"Tiktok"`).
    #[must_use]
    pub fn label(self) -> String {
        capitalize(self.key())
    }
}

impl std::str::FromStr for SocialPlatform {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| RecordError::UnknownPlatform(s.to_string()))
    }
}

/// The four free-text platform access notes stored per brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformAccessKey {
    MetaPlatform,
    GoogleAnalytics,
    MetaCampaigns,
    GoogleAds,
}

impl PlatformAccessKey {
    pub const ALL: [PlatformAccessKey; 4] = [
        PlatformAccessKey::MetaPlatform,
        PlatformAccessKey::GoogleAnalytics,
        PlatformAccessKey::MetaCampaigns,
        PlatformAccessKey::GoogleAds,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            PlatformAccessKey::MetaPlatform => "meta_platform",
            PlatformAccessKey::GoogleAnalytics => "google_analytics",
            PlatformAccessKey::MetaCampaigns => "meta_campaigns",
            PlatformAccessKey::GoogleAds => "google_ads",
        }
    }

    /// Title-cased key with underscores as spaces (`"Google Ads"`).
    #[must_use]
    pub fn label(self) -> String {
        self.key()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn report(self) -> ReportType {
        match self {
            PlatformAccessKey::MetaPlatform => ReportType::MetaPlatform,
            PlatformAccessKey::GoogleAnalytics => ReportType::GoogleAnalytics,
            PlatformAccessKey::MetaCampaigns => ReportType::MetaCampaigns,
            PlatformAccessKey::GoogleAds => ReportType::GoogleAds,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Report sections
// ---------------------------------------------------------------------------

/// Social links keyed by platform. `None` means the field was never filled
/// in; `Some("")` means it was shown on the form and left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl SocialLinks {
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        self.slot(platform).map(String::as_str)
    }

    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        *self.slot_mut(platform) = Some(url.into());
    }

    /// Platforms that hold a value, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|url| (p, url)))
    }

    fn slot(&self, platform: SocialPlatform) -> Option<&String> {
        match platform {
            SocialPlatform::Facebook => self.facebook.as_ref(),
            SocialPlatform::Instagram => self.instagram.as_ref(),
            SocialPlatform::Twitter => self.twitter.as_ref(),
            SocialPlatform::Tiktok => self.tiktok.as_ref(),
            SocialPlatform::Linkedin => self.linkedin.as_ref(),
            SocialPlatform::Youtube => self.youtube.as_ref(),
            SocialPlatform::Website => self.website.as_ref(),
        }
    }

    fn slot_mut(&mut self, platform: SocialPlatform) -> &mut Option<String> {
        match platform {
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Tiktok => &mut self.tiktok,
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Youtube => &mut self.youtube,
            SocialPlatform::Website => &mut self.website,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Competitor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetitorAnalysis {
    #[serde(default)]
    pub brand_socials: SocialLinks,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

impl CompetitorAnalysis {
    pub fn competitor_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.competitors.iter().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoogleTrends {
    #[serde(default)]
    pub link: String,
    /// Free text, conventionally comma separated.
    #[serde(default)]
    pub search_terms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebTraffic {
    #[serde(default)]
    pub selected_competitors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandHealth {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialListening {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_health: Option<BrandHealth>,
}

/// All four platform access notes, replaced together by the Manage workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformAccessNotes {
    #[serde(default)]
    pub meta_platform: String,
    #[serde(default)]
    pub google_analytics: String,
    #[serde(default)]
    pub meta_campaigns: String,
    #[serde(default)]
    pub google_ads: String,
}

/// Report results for a single brand, one optional section per report type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<CompetitorAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_trends: Option<GoogleTrends>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_traffic: Option<WebTraffic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_listening: Option<SocialListening>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_campaigns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_ads: Option<String>,
}

impl BrandData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated_reports().is_empty()
    }

    #[must_use]
    pub fn platform_access(&self, key: PlatformAccessKey) -> Option<&str> {
        match key {
            PlatformAccessKey::MetaPlatform => self.meta_platform.as_deref(),
            PlatformAccessKey::GoogleAnalytics => self.google_analytics.as_deref(),
            PlatformAccessKey::MetaCampaigns => self.meta_campaigns.as_deref(),
            PlatformAccessKey::GoogleAds => self.google_ads.as_deref(),
        }
    }

    pub fn set_platform_access(&mut self, key: PlatformAccessKey, text: Option<String>) {
        let slot = match key {
            PlatformAccessKey::MetaPlatform => &mut self.meta_platform,
            PlatformAccessKey::GoogleAnalytics => &mut self.google_analytics,
            PlatformAccessKey::MetaCampaigns => &mut self.meta_campaigns,
            PlatformAccessKey::GoogleAds => &mut self.google_ads,
        };
        *slot = text;
    }

    /// Report types whose section is present, in report order.
    #[must_use]
    pub fn populated_reports(&self) -> Vec<ReportType> {
        let mut reports = Vec::new();
        if self.competitor_analysis.is_some() {
            reports.push(ReportType::CompetitorAnalysis);
        }
        if self.google_trends.is_some() {
            reports.push(ReportType::GoogleTrends);
        }
        if self.web_traffic.is_some() {
            reports.push(ReportType::WebTraffic);
        }
        if self.social_listening.is_some() {
            reports.push(ReportType::SocialListening);
        }
        for key in PlatformAccessKey::ALL {
            if self.platform_access(key).is_some() {
                reports.push(key.report());
            }
        }
        reports
    }

    /// Names of the competitors entered under competitor analysis.
    #[must_use]
    pub fn competitor_names(&self) -> Vec<&str> {
        self.competitor_analysis
            .as_ref()
            .map(|ca| ca.competitor_names().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    #[serde(default)]
    pub data: BrandData,
}

impl BrandEntry {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BrandData::default(),
        }
    }

    /// Replace one section of this brand's data.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the new section breaks an entry limit:
    /// more than four web-traffic competitors or one not entered as a
    /// competitor of this brand, or an over-long or duplicated keyword or
    /// hashtag list. A new competitor list must still contain every
    /// competitor picked for web traffic.
    pub fn apply_section(&mut self, update: SectionUpdate) -> Result<(), RecordError> {
        match update {
            SectionUpdate::CompetitorAnalysis(ca) => {
                if let Some(wt) = &self.data.web_traffic {
                    let names: Vec<&str> = ca.competitor_names().collect();
                    validate_web_traffic(wt, &names)?;
                }
                self.data.competitor_analysis = Some(ca);
            }
            SectionUpdate::GoogleTrends(gt) => {
                self.data.google_trends = Some(gt);
            }
            SectionUpdate::WebTraffic(wt) => {
                validate_web_traffic(&wt, &self.data.competitor_names())?;
                self.data.web_traffic = Some(wt);
            }
            SectionUpdate::SocialListening(sl) => {
                if let Some(ref health) = sl.brand_health {
                    validate_brand_health(health)?;
                }
                self.data.social_listening = Some(sl);
            }
            SectionUpdate::PlatformAccess(notes) => {
                self.data.meta_platform = Some(notes.meta_platform);
                self.data.google_analytics = Some(notes.google_analytics);
                self.data.meta_campaigns = Some(notes.meta_campaigns);
                self.data.google_ads = Some(notes.google_ads);
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Client record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Assigned by the store on first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executive_name: Option<String>,
    #[serde(default)]
    pub reports: Vec<ReportType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboard_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_date: Option<NaiveDate>,
    /// Local wall-clock time of the first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub brands: Vec<BrandEntry>,
}

impl ClientRecord {
    /// Onboard date when set, otherwise the presentation date.
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.onboard_date.or(self.presentation_date)
    }

    /// Selected reports joined with `", "`.
    #[must_use]
    pub fn reports_label(&self) -> String {
        self.reports
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn brand_names(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.name.as_str()).collect()
    }

    /// First brand with the given name.
    #[must_use]
    pub fn brand(&self, name: &str) -> Option<&BrandEntry> {
        self.brands.iter().find(|b| b.name == name)
    }

    pub fn brand_mut(&mut self, name: &str) -> Option<&mut BrandEntry> {
        self.brands.iter_mut().find(|b| b.name == name)
    }

    pub fn append_brands(&mut self, entries: impl IntoIterator<Item = BrandEntry>) {
        self.brands.extend(entries);
    }

    /// Removes every brand with the given name. Returns `true` if any was removed.
    pub fn remove_brand(&mut self, name: &str) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b.name != name);
        self.brands.len() != before
    }
}

// ---------------------------------------------------------------------------
// Section edits
// ---------------------------------------------------------------------------

/// Brand data sections that can be edited independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CompetitorAnalysis,
    GoogleTrends,
    WebTraffic,
    SocialListening,
    PlatformAccess,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::CompetitorAnalysis,
        Section::GoogleTrends,
        Section::WebTraffic,
        Section::SocialListening,
        Section::PlatformAccess,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Section::CompetitorAnalysis => "competitor-analysis",
            Section::GoogleTrends => "google-trends",
            Section::WebTraffic => "web-traffic",
            Section::SocialListening => "social-listening",
            Section::PlatformAccess => "platform-access",
        }
    }

    /// Reports whose data lives in this section.
    #[must_use]
    pub fn reports(self) -> &'static [ReportType] {
        match self {
            Section::CompetitorAnalysis => &[ReportType::CompetitorAnalysis],
            Section::GoogleTrends => &[ReportType::GoogleTrends],
            Section::WebTraffic => &[ReportType::WebTraffic],
            Section::SocialListening => &[ReportType::SocialListening],
            Section::PlatformAccess => &[
                ReportType::MetaPlatform,
                ReportType::GoogleAnalytics,
                ReportType::MetaCampaigns,
                ReportType::GoogleAds,
            ],
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Section {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|section| section.key() == wanted)
            .ok_or_else(|| RecordError::UnknownSection(s.to_string()))
    }
}

/// Replacement content for one [`Section`] of a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionUpdate {
    CompetitorAnalysis(CompetitorAnalysis),
    GoogleTrends(GoogleTrends),
    WebTraffic(WebTraffic),
    SocialListening(SocialListening),
    PlatformAccess(PlatformAccessNotes),
}

impl SectionUpdate {
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            SectionUpdate::CompetitorAnalysis(_) => Section::CompetitorAnalysis,
            SectionUpdate::GoogleTrends(_) => Section::GoogleTrends,
            SectionUpdate::WebTraffic(_) => Section::WebTraffic,
            SectionUpdate::SocialListening(_) => Section::SocialListening,
            SectionUpdate::PlatformAccess(_) => Section::PlatformAccess,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry limits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Keyword,
    Hashtag,
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermKind::Keyword => write!(f, "keyword"),
            TermKind::Hashtag => write!(f, "hashtag"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("at most 4 web traffic competitors may be selected, got {0}")]
    TooManyWebTrafficCompetitors(usize),
    #[error("'{0}' is not one of this brand's competitors")]
    UnknownCompetitor(String),
    #[error("competitor '{0}' is already selected")]
    DuplicateCompetitor(String),
    #[error("at most 10 {kind}s are allowed, got {count}")]
    TooManyTerms { kind: TermKind, count: usize },
    #[error("{kind} '{term}' already exists")]
    DuplicateTerm { kind: TermKind, term: String },
    #[error("{0} must not be blank")]
    BlankTerm(TermKind),
    #[error("social listening must be enabled before adding {0}s")]
    ListeningDisabled(TermKind),
    #[error("unknown social platform '{0}'")]
    UnknownPlatform(String),
    #[error("unknown section '{0}'; expected one of competitor-analysis, google-trends, web-traffic, social-listening, platform-access")]
    UnknownSection(String),
}

/// Check a web traffic selection against the brand's competitor names.
///
/// # Errors
///
/// Returns [`RecordError`] if more than four competitors are selected, a name
/// is repeated, or a name is not in `competitors`.
pub fn validate_web_traffic(wt: &WebTraffic, competitors: &[&str]) -> Result<(), RecordError> {
    let selected = &wt.selected_competitors;
    if selected.len() > MAX_WEB_TRAFFIC_COMPETITORS {
        return Err(RecordError::TooManyWebTrafficCompetitors(selected.len()));
    }
    for (i, name) in selected.iter().enumerate() {
        if !competitors.contains(&name.as_str()) {
            return Err(RecordError::UnknownCompetitor(name.clone()));
        }
        if selected[..i].contains(name) {
            return Err(RecordError::DuplicateCompetitor(name.clone()));
        }
    }
    Ok(())
}

/// Check keyword and hashtag lists for size, blanks and duplicates.
///
/// # Errors
///
/// Returns [`RecordError`] on the first list that violates a limit.
pub fn validate_brand_health(health: &BrandHealth) -> Result<(), RecordError> {
    validate_terms(&health.keywords, TermKind::Keyword)?;
    validate_terms(&health.hashtags, TermKind::Hashtag)
}

fn validate_terms(terms: &[String], kind: TermKind) -> Result<(), RecordError> {
    if terms.len() > MAX_BRAND_HEALTH_TERMS {
        return Err(RecordError::TooManyTerms {
            kind,
            count: terms.len(),
        });
    }
    for (i, term) in terms.iter().enumerate() {
        if term.trim().is_empty() {
            return Err(RecordError::BlankTerm(kind));
        }
        if terms[..i].contains(term) {
            return Err(RecordError::DuplicateTerm {
                kind,
                term: term.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
