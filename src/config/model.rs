//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Nominatim-compatible search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Nominatim's usage policy rejects requests without an identifying agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Send the UI language as `accept-language` so result names match it.
    #[serde(default = "default_true")]
    pub send_language: bool,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            send_language: true,
        }
    }
}

/// Which marker/zoom behaviour the state container follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Zoom 14 on search, one replaceable click marker, language toggle.
    #[default]
    Bilingual,
    /// Zoom 12 on search, click markers share the capped search list.
    Baseline,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            language: Language::default(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log file settings. The TUI owns stdout, so logs go to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// `tracing` filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            file: None,
        }
    }
}

/// Companion backend. Read at startup only; no calls are made to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: Option<String>,
}

fn default_endpoint() -> String {
    "https://nominatim.openstreetmap.org/search".into()
}

fn default_user_agent() -> String {
    format!("mapscout/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.geocoder.endpoint, default_endpoint());
        assert!(cfg.geocoder.send_language);
        assert_eq!(cfg.ui.variant, Variant::Bilingual);
        assert_eq!(cfg.ui.language, Language::Fr);
        assert!(cfg.logging.enabled);
        assert!(cfg.backend.url.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            variant = "baseline"
            language = "en"

            [backend]
            url = "http://localhost:8001"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.variant, Variant::Baseline);
        assert_eq!(cfg.ui.language, Language::En);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(cfg.backend.url.as_deref(), Some("http://localhost:8001"));
        assert_eq!(cfg.logging.level, "info");
    }
}
