//! Configuration types mapping to the TOML schema.
//!
//! ```toml
//! [client]
//! base_url = "http://www.spore.com"
//! timeout_secs = 30
//! user_agent = "spore/0.1.0"
//!
//! [download]
//! output_dir = "./spore-assets"
//! page_size = 20
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Origin of the public Spore content service.
pub const DEFAULT_BASE_URL: &str = "http://www.spore.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of assets requested per page during bulk downloads.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level Config
// ─────────────────────────────────────────────────────────────────────────────

/// Root configuration structure.
///
/// All sections are optional so that partial configs (project-local
/// overrides) can be loaded and merged on top of the user config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SporeConfig {
    /// Service connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientSection>,

    /// Bulk download settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<DownloadSection>,
}

impl SporeConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with every field populated from the defaults, used by
    /// `spore config init`.
    pub fn with_defaults() -> Self {
        Self {
            client: Some(ClientSection {
                base_url: Some(DEFAULT_BASE_URL.to_string()),
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
                user_agent: None,
            }),
            download: Some(DownloadSection {
                output_dir: Some(PathBuf::from(".")),
                page_size: Some(DEFAULT_PAGE_SIZE),
            }),
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge another config on top of this one (other takes priority).
    ///
    /// Merging happens field by field, so a project file that only sets
    /// `client.base_url` keeps the user's `client.timeout_secs`.
    pub fn merge(&mut self, other: SporeConfig) {
        if let Some(client) = other.client {
            let base = self.client.get_or_insert_with(ClientSection::default);
            if client.base_url.is_some() {
                base.base_url = client.base_url;
            }
            if client.timeout_secs.is_some() {
                base.timeout_secs = client.timeout_secs;
            }
            if client.user_agent.is_some() {
                base.user_agent = client.user_agent;
            }
        }

        if let Some(download) = other.download {
            let base = self.download.get_or_insert_with(DownloadSection::default);
            if download.output_dir.is_some() {
                base.output_dir = download.output_dir;
            }
            if download.page_size.is_some() {
                base.page_size = download.page_size;
            }
        }
    }

    /// Resolve connection settings, filling in defaults.
    pub fn client_settings(&self) -> Result<ClientSettings> {
        let section = self.client.clone().unwrap_or_default();
        let timeout_secs = section.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(ClientSettings {
            base_url: section
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: section.user_agent,
        })
    }

    /// Resolve download settings, filling in defaults.
    pub fn download_settings(&self) -> Result<DownloadSettings> {
        let section = self.download.clone().unwrap_or_default();
        let page_size = section.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "download.page_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(DownloadSettings {
            output_dir: section.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            page_size,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// `[client]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSection {
    /// Service origin, e.g. `http://www.spore.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Per-request timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Custom `User-Agent` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// `[download]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSection {
    /// Directory bulk downloads are written into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Assets requested per listing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved settings
// ─────────────────────────────────────────────────────────────────────────────

/// Fully resolved connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

/// Fully resolved download settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSettings {
    pub output_dir: PathBuf,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_resolves_defaults() {
        let config = SporeConfig::new();
        let client = config.client_settings().unwrap();
        assert_eq!(client, ClientSettings::default());
        assert_eq!(client.base_url, "http://www.spore.com");

        let download = config.download_settings().unwrap();
        assert_eq!(download.output_dir, PathBuf::from("."));
        assert_eq!(download.page_size, 20);
    }

    #[test]
    fn test_parse_full_config() {
        let config = SporeConfig::from_toml(
            r#"
[client]
base_url = "http://localhost:9000"
timeout_secs = 5
user_agent = "tester"

[download]
output_dir = "/tmp/spore"
page_size = 50
"#,
        )
        .unwrap();

        let client = config.client_settings().unwrap();
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.user_agent.as_deref(), Some("tester"));

        let download = config.download_settings().unwrap();
        assert_eq!(download.output_dir, PathBuf::from("/tmp/spore"));
        assert_eq!(download.page_size, 50);
    }

    #[test]
    fn test_merge_is_field_wise() {
        let mut base = SporeConfig::from_toml(
            r#"
[client]
base_url = "http://one"
timeout_secs = 10
"#,
        )
        .unwrap();
        let overlay = SporeConfig::from_toml(
            r#"
[client]
base_url = "http://two"
"#,
        )
        .unwrap();

        base.merge(overlay);
        let client = base.client_settings().unwrap();
        assert_eq!(client.base_url, "http://two");
        assert_eq!(client.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = SporeConfig::from_toml("[client]\ntimeout_secs = 0\n").unwrap();
        let err = config.client_settings().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = SporeConfig::from_toml("[download]\npage_size = 0\n").unwrap();
        assert!(config.download_settings().is_err());
    }

    #[test]
    fn test_defaults_roundtrip_through_toml() {
        let config = SporeConfig::with_defaults();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[client]"));
        assert!(text.contains("base_url = \"http://www.spore.com\""));
        assert_eq!(SporeConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() {
        let err = SporeConfig::from_toml("[client]\ntimeout_secs = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
