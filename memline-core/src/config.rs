//! Configuration at ~/.config/memline/config.toml.
//!
//! All remote-service settings and secrets live here. A missing file or a
//! missing required secret is the one fatal startup condition.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MemlineError, MemlineResult};

fn default_sheet_range() -> String {
    "Sheet1".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemlineConfig {
    /// Spreadsheet holding the event rows.
    pub spreadsheet_id: String,

    /// Sheet name or A1 range to read and append to.
    #[serde(default = "default_sheet_range")]
    pub sheet_range: String,

    /// Leading rows to skip when reading (header rows).
    #[serde(default)]
    pub header_rows: usize,

    /// OAuth bearer token with spreadsheets scope.
    pub sheets_token: String,

    pub aws_access_key: String,
    pub aws_secret_key: String,

    /// Object-storage bucket for uploaded images.
    pub bucket: String,

    #[serde(default = "default_region")]
    pub region: String,

    /// Optional overrides for the timeline's static title block.
    pub title_headline: Option<String>,
    pub title_text: Option<String>,
}

impl MemlineConfig {
    pub fn config_path() -> MemlineResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MemlineError::Config("Could not determine config directory".into()))?;

        Ok(config_dir.join("memline").join("config.toml"))
    }

    pub fn load() -> MemlineResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Err(MemlineError::Config(format!(
                "Config not found.\n\n\
                Create {} with:\n\n\
                spreadsheet_id = \"your-spreadsheet-id\"\n\
                sheet_range = \"Sheet1\"\n\
                header_rows = 0\n\
                sheets_token = \"your-oauth-token\"\n\
                aws_access_key = \"AKIA...\"\n\
                aws_secret_key = \"...\"\n\
                bucket = \"your-bucket\"\n\
                region = \"us-east-1\"",
                path.display()
            )));
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> MemlineResult<Self> {
        let contents = std::fs::read_to_string(path)?;

        let config: MemlineConfig = toml::from_str(&contents).map_err(|e| {
            MemlineError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Every required secret must be present and non-empty at startup.
    fn validate(&self) -> MemlineResult<()> {
        let required = [
            ("spreadsheet_id", &self.spreadsheet_id),
            ("sheets_token", &self.sheets_token),
            ("aws_access_key", &self.aws_access_key),
            ("aws_secret_key", &self.aws_secret_key),
            ("bucket", &self.bucket),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MemlineError::Config(format!(
                "Missing required config: {}",
                missing.join(", ")
            )))
        }
    }
}
