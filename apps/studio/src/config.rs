//! Studio configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/pupstyle/studio.toml`
//! - Windows: `%APPDATA%/pupstyle/studio.toml`
//!
//! `PUPSTYLE_API_URL` overrides `api_base_url` for the current run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pupstyle_intake::IntakePolicy;

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "PUPSTYLE_API_URL";

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Studio configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudioConfig {
    /// Base URL of the styling backend. Empty means relative requests.
    #[serde(default)]
    pub api_base_url: String,

    /// MIME types accepted for upload.
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,

    /// Upload size limit in megabytes.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,

    /// Images shown in the example carousel on the upload view.
    #[serde(default)]
    pub example_images: Vec<PathBuf>,
}

fn default_allowed_types() -> Vec<String> {
    vec!["image/png".into(), "image/jpeg".into()]
}

fn default_max_upload_mb() -> u64 {
    10
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            allowed_types: default_allowed_types(),
            max_upload_mb: default_max_upload_mb(),
            example_images: Vec::new(),
        }
    }
}

impl StudioConfig {
    /// Loads configuration from disk, or creates a default if not found,
    /// then applies the environment override.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path()?;
        let config = Self::load_from(&path)?;
        Ok(config.with_api_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Reads `path`, writing a default file first if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: StudioConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = StudioConfig::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Writes the configuration as pretty TOML.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Replaces the base URL when an override is set and non-empty.
    pub fn with_api_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::info!(api_base_url = %url, "using {API_URL_ENV}");
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// Intake policy built from the accepted types and size limit.
    pub fn intake_policy(&self) -> IntakePolicy {
        IntakePolicy::new(
            self.allowed_types.iter().cloned(),
            self.max_upload_mb.saturating_mul(BYTES_PER_MB),
        )
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home)
            .join(".config")
            .join("pupstyle")
            .join("studio.toml"))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        Ok(PathBuf::from(appdata).join("pupstyle").join("studio.toml"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Ok(PathBuf::from("/tmp/pupstyle/studio.toml"))
    }
}
