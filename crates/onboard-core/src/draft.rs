//! Request-scoped entry draft.
//!
//! A [`RecordDraft`] collects the values of one Onboard, Pitch or Update
//! workflow. Entry limits (web traffic picks, keyword and hashtag lists) are
//! enforced as values are added; presence checks run once on
//! [`RecordDraft::submit`]. Dropping a draft discards it.

use chrono::NaiveDate;
use thiserror::Error;

use crate::record::{
    BrandData, BrandEntry, BrandHealth, ClientRecord, Competitor, CompetitorAnalysis,
    GoogleTrends, PlatformAccessKey, RecordError, RecordType, ReportType, SocialLinks,
    SocialListening, SocialPlatform, TermKind, WebTraffic, MAX_BRAND_HEALTH_TERMS,
    MAX_WEB_TRAFFIC_COMPETITORS,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("data entry executive name is required")]
    MissingExecutiveName,
    #[error("organization name is required")]
    MissingOrganization,
    #[error("add at least one brand to proceed")]
    NoBrands,
    #[error("{0} date is required")]
    MissingDate(RecordType),
    #[error("report '{report}' is not available for {record_type} records")]
    ReportNotAllowed {
        report: ReportType,
        record_type: RecordType,
    },
    #[error("brand '{brand}' has {report} data but that report is not selected")]
    SectionNotSelected { brand: String, report: ReportType },
    #[error(transparent)]
    Entry(#[from] RecordError),
}

#[derive(Debug, Clone)]
pub struct RecordDraft {
    record_type: RecordType,
    organization: String,
    executive_name: Option<String>,
    date: Option<NaiveDate>,
    reports: Vec<ReportType>,
    brands: Vec<BrandDraft>,
}

impl RecordDraft {
    #[must_use]
    pub fn new(record_type: RecordType, organization: impl Into<String>) -> Self {
        Self {
            record_type,
            organization: organization.into(),
            executive_name: None,
            date: None,
            reports: Vec::new(),
            brands: Vec::new(),
        }
    }

    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    #[must_use]
    pub fn reports(&self) -> &[ReportType] {
        &self.reports
    }

    #[must_use]
    pub fn brands(&self) -> &[BrandDraft] {
        &self.brands
    }

    pub fn set_executive_name(&mut self, name: impl Into<String>) {
        self.executive_name = Some(name.into());
    }

    /// Onboard date for onboard drafts, presentation date for pitches.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Add a report to the selection. Selecting the same report twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::ReportNotAllowed`] when the report is not offered
    /// for this record type.
    pub fn select_report(&mut self, report: ReportType) -> Result<(), DraftError> {
        if !report.allowed_for(self.record_type) {
            return Err(DraftError::ReportNotAllowed {
                report,
                record_type: self.record_type,
            });
        }
        if !self.reports.contains(&report) {
            self.reports.push(report);
        }
        Ok(())
    }

    /// Returns the brand with this name, adding it first if needed.
    pub fn add_brand(&mut self, name: impl Into<String>) -> &mut BrandDraft {
        let name = name.into().trim().to_string();
        let idx = match self.brands.iter().position(|b| b.name == name) {
            Some(idx) => idx,
            None => {
                self.brands.push(BrandDraft::new(name));
                self.brands.len() - 1
            }
        };
        &mut self.brands[idx]
    }

    pub fn brand_mut(&mut self, name: &str) -> Option<&mut BrandDraft> {
        self.brands.iter_mut().find(|b| b.name == name)
    }

    /// Returns `true` if a brand was removed.
    pub fn remove_brand(&mut self, name: &str) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b.name != name);
        self.brands.len() != before
    }

    /// Turn the draft into a record ready for the store.
    ///
    /// The record has no `id` or `created_at`; the store assigns both.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when the executive name, organization, date or
    /// every brand is missing, or when a brand carries data for a report that
    /// was not selected.
    pub fn submit(self) -> Result<ClientRecord, DraftError> {
        let executive_name = self
            .executive_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(DraftError::MissingExecutiveName)?
            .to_string();
        let organization = self.organization.trim().to_string();
        if organization.is_empty() {
            return Err(DraftError::MissingOrganization);
        }
        let date = self.date.ok_or(DraftError::MissingDate(self.record_type))?;
        let record_type = self.record_type;
        let reports = self.reports.clone();
        let brands = self.into_brand_entries()?;

        let (onboard_date, presentation_date) = match record_type {
            RecordType::Onboard => (Some(date), None),
            RecordType::Pitch => (None, Some(date)),
        };

        Ok(ClientRecord {
            id: None,
            record_type,
            organization,
            executive_name: Some(executive_name),
            reports,
            onboard_date,
            presentation_date,
            created_at: None,
            brands,
        })
    }

    /// Brand-only validation used when appending brands to an existing record.
    ///
    /// Brands with blank names are dropped, matching the entry form.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::NoBrands`] if no named brand remains, or
    /// [`DraftError::SectionNotSelected`] for data outside the selected reports.
    pub fn into_brand_entries(self) -> Result<Vec<BrandEntry>, DraftError> {
        let brands: Vec<BrandEntry> = self
            .brands
            .into_iter()
            .filter(|b| !b.name.is_empty())
            .map(BrandDraft::into_entry)
            .collect();
        if brands.is_empty() {
            return Err(DraftError::NoBrands);
        }
        for brand in &brands {
            if let Some(report) = brand
                .data
                .populated_reports()
                .into_iter()
                .find(|r| !self.reports.contains(r))
            {
                return Err(DraftError::SectionNotSelected {
                    brand: brand.name.clone(),
                    report,
                });
            }
        }
        Ok(brands)
    }
}

#[derive(Debug, Clone)]
pub struct BrandDraft {
    name: String,
    data: BrandData,
}

impl BrandDraft {
    fn new(name: String) -> Self {
        Self {
            name,
            data: BrandData::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn data(&self) -> &BrandData {
        &self.data
    }

    fn into_entry(self) -> BrandEntry {
        BrandEntry {
            name: self.name,
            data: self.data,
        }
    }

    fn competitor_analysis(&mut self) -> &mut CompetitorAnalysis {
        self.data
            .competitor_analysis
            .get_or_insert_with(CompetitorAnalysis::default)
    }

    /// Create the empty section for a selected report if it is not there yet.
    ///
    /// Mirrors the entry form, which shows every selected report's section for
    /// every brand: social listening starts disabled and platform access notes
    /// start blank.
    pub fn open_section(&mut self, report: ReportType) {
        match report {
            ReportType::CompetitorAnalysis => {
                self.competitor_analysis();
            }
            ReportType::GoogleTrends => {
                self.data.google_trends.get_or_insert_with(GoogleTrends::default);
            }
            ReportType::WebTraffic => {
                self.data.web_traffic.get_or_insert_with(WebTraffic::default);
            }
            ReportType::SocialListening => {
                self.data
                    .social_listening
                    .get_or_insert_with(SocialListening::default);
            }
            ReportType::MetaPlatform
            | ReportType::GoogleAnalytics
            | ReportType::MetaCampaigns
            | ReportType::GoogleAds => {
                if let Some(key) = report.platform_access_key() {
                    if self.data.platform_access(key).is_none() {
                        self.data.set_platform_access(key, Some(String::new()));
                    }
                }
            }
        }
    }

    pub fn set_social(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        self.competitor_analysis().brand_socials.set(platform, url);
    }

    /// Adds a competitor. Blank names are skipped and `false` is returned.
    pub fn add_competitor(&mut self, name: &str, socials: SocialLinks) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.competitor_analysis().competitors.push(Competitor {
            name: name.to_string(),
            socials,
        });
        true
    }

    pub fn set_google_trends(&mut self, link: impl Into<String>, search_terms: impl Into<String>) {
        self.data.google_trends = Some(GoogleTrends {
            link: link.into(),
            search_terms: search_terms.into(),
        });
    }

    /// Pick a competitor for the web traffic comparison.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the name is not one of this brand's
    /// competitors, is already picked, or four are already picked.
    pub fn select_web_traffic_competitor(&mut self, name: &str) -> Result<(), RecordError> {
        if !self.data.competitor_names().contains(&name) {
            return Err(RecordError::UnknownCompetitor(name.to_string()));
        }
        let wt = self.data.web_traffic.get_or_insert_with(WebTraffic::default);
        if wt.selected_competitors.iter().any(|c| c == name) {
            return Err(RecordError::DuplicateCompetitor(name.to_string()));
        }
        if wt.selected_competitors.len() >= MAX_WEB_TRAFFIC_COMPETITORS {
            return Err(RecordError::TooManyWebTrafficCompetitors(
                wt.selected_competitors.len() + 1,
            ));
        }
        wt.selected_competitors.push(name.to_string());
        Ok(())
    }

    pub fn enable_social_listening(&mut self) {
        let sl = self
            .data
            .social_listening
            .get_or_insert_with(SocialListening::default);
        sl.enabled = true;
        sl.brand_health.get_or_insert_with(BrandHealth::default);
    }

    /// Records that social listening was offered and declined.
    pub fn disable_social_listening(&mut self) {
        self.data.social_listening = Some(SocialListening {
            enabled: false,
            brand_health: None,
        });
    }

    /// # Errors
    ///
    /// See [`BrandDraft::add_hashtag`].
    pub fn add_keyword(&mut self, keyword: &str) -> Result<(), RecordError> {
        self.add_term(keyword, TermKind::Keyword)
    }

    /// # Errors
    ///
    /// Returns [`RecordError`] if listening is not enabled, the term is blank
    /// or already present, or the list already holds ten entries.
    pub fn add_hashtag(&mut self, hashtag: &str) -> Result<(), RecordError> {
        self.add_term(hashtag, TermKind::Hashtag)
    }

    fn add_term(&mut self, term: &str, kind: TermKind) -> Result<(), RecordError> {
        let health = self
            .data
            .social_listening
            .as_mut()
            .filter(|sl| sl.enabled)
            .and_then(|sl| sl.brand_health.as_mut())
            .ok_or(RecordError::ListeningDisabled(kind))?;
        let list = match kind {
            TermKind::Keyword => &mut health.keywords,
            TermKind::Hashtag => &mut health.hashtags,
        };

        let term = term.trim();
        if term.is_empty() {
            return Err(RecordError::BlankTerm(kind));
        }
        if list.iter().any(|t| t == term) {
            return Err(RecordError::DuplicateTerm {
                kind,
                term: term.to_string(),
            });
        }
        if list.len() >= MAX_BRAND_HEALTH_TERMS {
            return Err(RecordError::TooManyTerms {
                kind,
                count: list.len() + 1,
            });
        }
        list.push(term.to_string());
        Ok(())
    }

    pub fn set_platform_access(&mut self, key: PlatformAccessKey, text: impl Into<String>) {
        self.data.set_platform_access(key, Some(text.into()));
    }
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;
