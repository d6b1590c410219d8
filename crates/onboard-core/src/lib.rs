pub mod app_config;
pub mod config;
pub mod draft;
pub mod flatten;
pub mod record;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use draft::{BrandDraft, DraftError, RecordDraft};
pub use flatten::{
    flatten_record, summarize_records, Category, DetailRow, SummaryRow, DETAIL_COLUMNS,
    SUMMARY_COLUMNS,
};
pub use record::{
    BrandData, BrandEntry, BrandHealth, ClientRecord, Competitor, CompetitorAnalysis,
    GoogleTrends, PlatformAccessKey, PlatformAccessNotes, RecordError, RecordType, ReportType,
    Section, SectionUpdate, SocialLinks, SocialListening, SocialPlatform, TermKind, WebTraffic,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
