//! Flatten client records into tabular rows for display and export.
//!
//! [`flatten_record`] produces the detailed per-brand breakdown written to
//! spreadsheets; [`summarize_records`] produces one row per record and brand
//! for the overview listing. Both are pure and never fail: missing optional
//! values become empty strings.
//!
//! Row order is part of the output contract. Spreadsheet consumers group by
//! brand, so every brand's rows are contiguous and follow the category order
//! of [`Category`].

use crate::record::{BrandEntry, ClientRecord, PlatformAccessKey};

/// Header of the detailed flatten, in cell order.
pub const DETAIL_COLUMNS: [&str; 9] = [
    "Executive Name",
    "Organization",
    "Type",
    "Date",
    "Brand",
    "Reports Selected",
    "Category",
    "Sub-Category",
    "Detail",
];

/// Header of the overview flatten, in cell order.
pub const SUMMARY_COLUMNS: [&str; 5] = ["Organization", "Type", "Date", "Brand", "Reports"];

/// Row categories, declared in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    BrandSocials,
    CompetitorAnalysis,
    GoogleTrends,
    WebTraffic,
    SocialListening,
    PlatformAccess,
    NoData,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::BrandSocials => "Brand Socials",
            Category::CompetitorAnalysis => "Competitor Analysis",
            Category::GoogleTrends => "Google Trends",
            Category::WebTraffic => "Web Traffic",
            Category::SocialListening => "Social Listening",
            Category::PlatformAccess => "Platform Access",
            Category::NoData => "No Data",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub executive_name: String,
    pub organization: String,
    pub record_type: String,
    pub date: String,
    pub brand: String,
    pub reports: String,
    pub category: Category,
    pub sub_category: String,
    pub detail: String,
}

impl DetailRow {
    /// Cell values in [`DETAIL_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.executive_name,
            &self.organization,
            &self.record_type,
            &self.date,
            &self.brand,
            &self.reports,
            self.category.label(),
            &self.sub_category,
            &self.detail,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub organization: String,
    pub record_type: String,
    pub date: String,
    pub brand: String,
    pub reports: String,
}

impl SummaryRow {
    /// Cell values in [`SUMMARY_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.organization,
            &self.record_type,
            &self.date,
            &self.brand,
            &self.reports,
        ]
    }
}

/// Columns repeated on every detailed row of one record.
struct SharedColumns<'a> {
    executive_name: &'a str,
    organization: &'a str,
    record_type: &'static str,
    date: String,
    reports: String,
}

impl<'a> SharedColumns<'a> {
    fn of(record: &'a ClientRecord) -> Self {
        Self {
            executive_name: record.executive_name.as_deref().unwrap_or_default(),
            organization: &record.organization,
            record_type: record.record_type.as_str(),
            date: effective_date_label(record),
            reports: record.reports_label(),
        }
    }

    fn row(&self, brand: &str, category: Category, sub_category: String, detail: &str) -> DetailRow {
        DetailRow {
            executive_name: self.executive_name.to_string(),
            organization: self.organization.to_string(),
            record_type: self.record_type.to_string(),
            date: self.date.clone(),
            brand: brand.to_string(),
            reports: self.reports.clone(),
            category,
            sub_category,
            detail: detail.to_string(),
        }
    }
}

fn effective_date_label(record: &ClientRecord) -> String {
    record
        .effective_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Flatten one record into detailed rows, brand by brand.
///
/// A record that yields no rows at all (no brands, or only brands without
/// data) produces a single `No Data` row with an empty brand. When other
/// brands do yield rows, an empty brand gets its own `No Data` row so it
/// still appears in its group.
#[must_use]
pub fn flatten_record(record: &ClientRecord) -> Vec<DetailRow> {
    let shared = SharedColumns::of(record);
    let per_brand: Vec<(&BrandEntry, Vec<DetailRow>)> = record
        .brands
        .iter()
        .map(|brand| (brand, flatten_brand(&shared, brand)))
        .collect();

    if per_brand.iter().all(|(_, rows)| rows.is_empty()) {
        return vec![shared.row("", Category::NoData, String::new(), "")];
    }

    let mut rows = Vec::new();
    for (brand, brand_rows) in per_brand {
        if brand_rows.is_empty() {
            rows.push(shared.row(&brand.name, Category::NoData, String::new(), ""));
        } else {
            rows.extend(brand_rows);
        }
    }
    rows
}

fn flatten_brand(shared: &SharedColumns<'_>, brand: &BrandEntry) -> Vec<DetailRow> {
    let name = brand.name.as_str();
    let data = &brand.data;
    let mut rows = Vec::new();

    if let Some(ca) = &data.competitor_analysis {
        for (platform, url) in ca.brand_socials.entries() {
            rows.push(shared.row(name, Category::BrandSocials, platform.label(), url));
        }

        for (i, competitor) in ca.competitors.iter().enumerate() {
            let competitor_name = if competitor.name.trim().is_empty() {
                format!("Competitor {}", i + 1)
            } else {
                competitor.name.clone()
            };
            for (platform, url) in competitor.socials.entries() {
                rows.push(shared.row(
                    name,
                    Category::CompetitorAnalysis,
                    format!("{competitor_name} - {}", platform.label()),
                    url,
                ));
            }
        }
    }

    if let Some(gt) = &data.google_trends {
        rows.push(shared.row(name, Category::GoogleTrends, "Link".to_string(), &gt.link));
        rows.push(shared.row(
            name,
            Category::GoogleTrends,
            "Search Terms".to_string(),
            &gt.search_terms,
        ));
    }

    if let Some(wt) = &data.web_traffic {
        rows.push(shared.row(
            name,
            Category::WebTraffic,
            "Selected Competitors".to_string(),
            &wt.selected_competitors.join(", "),
        ));
    }

    if let Some(sl) = data.social_listening.as_ref().filter(|sl| sl.enabled) {
        if let Some(health) = &sl.brand_health {
            if !health.keywords.is_empty() {
                rows.push(shared.row(
                    name,
                    Category::SocialListening,
                    "Keywords".to_string(),
                    &health.keywords.join(", "),
                ));
            }
            if !health.hashtags.is_empty() {
                rows.push(shared.row(
                    name,
                    Category::SocialListening,
                    "Hashtags".to_string(),
                    &health.hashtags.join(", "),
                ));
            }
        }
    }

    for key in PlatformAccessKey::ALL {
        if let Some(text) = data.platform_access(key).filter(|t| !t.is_empty()) {
            rows.push(shared.row(name, Category::PlatformAccess, key.label(), text));
        }
    }

    rows
}

/// One overview row per (record, brand) pair, in stored order.
///
/// Records without brands contribute no rows.
#[must_use]
pub fn summarize_records(records: &[ClientRecord]) -> Vec<SummaryRow> {
    records
        .iter()
        .flat_map(|record| {
            let date = effective_date_label(record);
            let reports = record.reports_label();
            record.brands.iter().map(move |brand| SummaryRow {
                organization: record.organization.clone(),
                record_type: record.record_type.as_str().to_string(),
                date: date.clone(),
                brand: brand.name.clone(),
                reports: reports.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
