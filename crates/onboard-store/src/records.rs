use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use onboard_core::{AppConfig, ClientRecord};
use serde::Serialize;

use crate::StoreError;

/// Record ids are the save time down to the microsecond, e.g.
/// `20240101093015123456`.
#[must_use]
pub fn new_record_id(now: NaiveDateTime) -> String {
    now.format("%Y%m%d%H%M%S%6f").to_string()
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.data_path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Create the parent directory and an empty `[]` file if missing.
    fn ensure_file(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        if !self.path.exists() {
            fs::write(&self.path, "[]").map_err(|e| self.io_error(e))?;
            tracing::info!(path = %self.path.display(), "created empty client store");
        }
        Ok(())
    }

    /// Returns every stored record in insertion order.
    ///
    /// A missing, unreadable or malformed file reads as an empty collection;
    /// the cause is logged at `warn`. This includes a single unknown key in
    /// any brand section: the whole file then reads as empty, and the next
    /// `add`, `update` or `delete` overwrites every record in it.
    #[must_use]
    pub fn load_all(&self) -> Vec<ClientRecord> {
        if let Err(e) = self.ensure_file() {
            tracing::warn!(error = %e, "client store unavailable; treating as empty");
            return Vec::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read client store; treating as empty"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "client store is not a valid record list; treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the backing file with the full collection, indented with
    /// four spaces.
    fn save_all(&self, records: &[ClientRecord]) -> Result<(), StoreError> {
        self.ensure_file()?;
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        fs::write(&self.path, buf).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved client store");
        Ok(())
    }

    /// Append a record, assigning `id` and `created_at` when absent.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn add(&self, mut record: ClientRecord) -> Result<ClientRecord, StoreError> {
        let now = Local::now().naive_local();
        if record.id.is_none() {
            record.id = Some(new_record_id(now));
        }
        if record.created_at.is_none() {
            record.created_at = Some(now);
        }

        let mut records = self.load_all();
        records.push(record.clone());
        self.save_all(&records)?;

        tracing::info!(
            id = record.id.as_deref().unwrap_or_default(),
            organization = %record.organization,
            brands = record.brands.len(),
            "added client record"
        );
        Ok(record)
    }

    /// Replace the first stored record with the same `id`.
    ///
    /// Returns `false` when no record matched; the collection is still
    /// rewritten unchanged. A record without an `id` never matches.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn update(&self, record: &ClientRecord) -> Result<bool, StoreError> {
        let mut records = self.load_all();
        let slot = record
            .id
            .as_deref()
            .and_then(|id| records.iter().position(|r| r.id.as_deref() == Some(id)));

        let replaced = match slot {
            Some(idx) => {
                records[idx] = record.clone();
                true
            }
            None => {
                tracing::warn!(
                    id = record.id.as_deref().unwrap_or_default(),
                    organization = %record.organization,
                    "update matched no stored record; change dropped"
                );
                false
            }
        };
        self.save_all(&records)?;
        Ok(replaced)
    }

    /// Remove every record with this `id`. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be written.
    pub fn delete(&self, id: &str) -> Result<usize, StoreError> {
        let mut records = self.load_all();
        let before = records.len();
        records.retain(|r| r.id.as_deref() != Some(id));
        let removed = before - records.len();
        if removed == 0 {
            tracing::warn!(id, "delete matched no stored record");
        }
        self.save_all(&records)?;
        Ok(removed)
    }

    /// Distinct organization names, sorted.
    #[must_use]
    pub fn list_organizations(&self) -> Vec<String> {
        self.load_all()
            .into_iter()
            .map(|r| r.organization)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First record, in stored order, for the organization.
    #[must_use]
    pub fn find_by_organization(&self, name: &str) -> Option<ClientRecord> {
        self.load_all().into_iter().find(|r| r.organization == name)
    }

    /// Brand names across every record of the organization, in stored order.
    #[must_use]
    pub fn brands_for_organization(&self, name: &str) -> Vec<String> {
        self.load_all()
            .into_iter()
            .filter(|r| r.organization == name)
            .flat_map(|r| r.brands.into_iter().map(|b| b.name))
            .collect()
    }
}
