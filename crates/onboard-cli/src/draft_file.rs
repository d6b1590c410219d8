//! YAML draft files for the entry workflows.
//!
//! A draft file holds the values a user would type into the entry form. It is
//! replayed through [`RecordDraft`] so the same entry limits apply as for
//! interactive entry.

use std::path::Path;

use chrono::NaiveDate;
use onboard_core::{
    BrandDraft, CompetitorAnalysis, GoogleTrends, PlatformAccessKey, PlatformAccessNotes,
    RecordDraft, RecordType, ReportType, Section, SectionUpdate, SocialListening, WebTraffic,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DraftFile {
    #[serde(default)]
    pub executive_name: Option<String>,
    /// Ignored by `update`, which takes the organization from `--org`.
    #[serde(default)]
    pub organization: Option<String>,
    /// Onboard date or presentation date, depending on the workflow.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub reports: Vec<ReportType>,
    #[serde(default)]
    pub brands: Vec<BrandInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BrandInput {
    pub name: String,
    #[serde(default)]
    pub competitor_analysis: Option<CompetitorAnalysis>,
    #[serde(default)]
    pub google_trends: Option<GoogleTrends>,
    /// Names of competitors to compare web traffic against.
    #[serde(default)]
    pub web_traffic: Option<Vec<String>>,
    #[serde(default)]
    pub social_listening: Option<ListeningInput>,
    #[serde(default)]
    pub meta_platform: Option<String>,
    #[serde(default)]
    pub google_analytics: Option<String>,
    #[serde(default)]
    pub meta_campaigns: Option<String>,
    #[serde(default)]
    pub google_ads: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ListeningInput {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl DraftFile {
    pub(crate) fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).map_err(|e| anyhow::anyhow!("invalid draft file: {e}"))
    }

    /// Replay the file into a draft for the given record type.
    ///
    /// Every selected report opens its section on every brand, then the
    /// brand's values are entered one by one.
    ///
    /// # Errors
    ///
    /// Returns an error if a report is not offered for `record_type` or a
    /// value breaks an entry limit.
    pub(crate) fn into_draft(
        self,
        record_type: RecordType,
        organization: &str,
    ) -> anyhow::Result<RecordDraft> {
        let mut draft = RecordDraft::new(record_type, organization);
        if let Some(name) = self.executive_name {
            draft.set_executive_name(name);
        }
        if let Some(date) = self.date {
            draft.set_date(date);
        }
        for report in self.reports {
            draft.select_report(report)?;
        }

        let reports = draft.reports().to_vec();
        for input in self.brands {
            let brand = draft.add_brand(input.name.as_str());
            for report in &reports {
                brand.open_section(*report);
            }
            input
                .enter_into(brand)
                .map_err(|e| anyhow::anyhow!("brand '{}': {e}", input.name))?;
        }
        Ok(draft)
    }
}

impl BrandInput {
    fn enter_into(&self, brand: &mut BrandDraft) -> anyhow::Result<()> {
        if let Some(ca) = &self.competitor_analysis {
            for (platform, url) in ca.brand_socials.entries() {
                brand.set_social(platform, url);
            }
            for competitor in &ca.competitors {
                if !brand.add_competitor(&competitor.name, competitor.socials.clone()) {
                    tracing::warn!(brand = %self.name, "skipping competitor without a name");
                }
            }
        }
        if let Some(gt) = &self.google_trends {
            brand.set_google_trends(gt.link.as_str(), gt.search_terms.as_str());
        }
        for name in self.web_traffic.iter().flatten() {
            brand.select_web_traffic_competitor(name)?;
        }
        if let Some(listening) = &self.social_listening {
            if listening.enabled {
                brand.enable_social_listening();
                for keyword in &listening.keywords {
                    brand.add_keyword(keyword)?;
                }
                for hashtag in &listening.hashtags {
                    brand.add_hashtag(hashtag)?;
                }
            } else {
                brand.disable_social_listening();
            }
        }
        for (key, text) in [
            (PlatformAccessKey::MetaPlatform, &self.meta_platform),
            (PlatformAccessKey::GoogleAnalytics, &self.google_analytics),
            (PlatformAccessKey::MetaCampaigns, &self.meta_campaigns),
            (PlatformAccessKey::GoogleAds, &self.google_ads),
        ] {
            if let Some(text) = text {
                brand.set_platform_access(key, text.as_str());
            }
        }
        Ok(())
    }
}

/// Read and parse a draft file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid draft.
pub(crate) fn load_draft_file(path: &Path) -> anyhow::Result<DraftFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read draft file {}: {e}", path.display()))?;
    DraftFile::from_yaml(&content)
}

/// Parse replacement content for one section of a brand.
///
/// `web-traffic` takes `selected_competitors`, `platform-access` takes all
/// four access notes; the other sections use their stored shape.
///
/// # Errors
///
/// Returns an error if the YAML does not match the section's shape.
pub(crate) fn parse_section(section: Section, content: &str) -> anyhow::Result<SectionUpdate> {
    let invalid = |e: serde_yaml::Error| anyhow::anyhow!("invalid {section} input: {e}");
    let update = match section {
        Section::CompetitorAnalysis => {
            SectionUpdate::CompetitorAnalysis(serde_yaml::from_str(content).map_err(invalid)?)
        }
        Section::GoogleTrends => {
            SectionUpdate::GoogleTrends(serde_yaml::from_str(content).map_err(invalid)?)
        }
        Section::WebTraffic => {
            SectionUpdate::WebTraffic(serde_yaml::from_str::<WebTraffic>(content).map_err(invalid)?)
        }
        Section::SocialListening => SectionUpdate::SocialListening(
            serde_yaml::from_str::<SocialListening>(content).map_err(invalid)?,
        ),
        Section::PlatformAccess => SectionUpdate::PlatformAccess(
            serde_yaml::from_str::<PlatformAccessNotes>(content).map_err(invalid)?,
        ),
    };
    Ok(update)
}

#[cfg(test)]
#[path = "draft_file_test.rs"]
mod tests;
