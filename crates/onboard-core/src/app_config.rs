use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON file holding every client record.
    pub data_path: PathBuf,
    /// Directory that spreadsheet and CSV exports are written into.
    pub export_dir: PathBuf,
}

impl AppConfig {
    /// Returns a copy with the data path and export directory replaced when
    /// an override is given.
    #[must_use]
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, export_dir: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(dir) = export_dir {
            self.export_dir = dir;
        }
        self
    }
}
