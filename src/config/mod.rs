pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, GeocoderConfig, LoggingConfig, Variant};

/// Environment variable (or `.env` entry) naming the companion backend.
pub const BACKEND_URL_ENV: &str = "MAPSCOUT_BACKEND_URL";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mapscout")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?
    } else {
        AppConfig::default()
    };

    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();
    apply_env(&mut config, std::env::var(BACKEND_URL_ENV).ok());
    Ok(config)
}

fn apply_env(config: &mut AppConfig, backend_url: Option<String>) {
    if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
        config.backend.url = Some(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_backend_url() {
        let mut cfg = AppConfig::default();
        cfg.backend.url = Some("http://from-file".into());
        apply_env(&mut cfg, Some("http://from-env".into()));
        assert_eq!(cfg.backend.url.as_deref(), Some("http://from-env"));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let mut cfg = AppConfig::default();
        cfg.backend.url = Some("http://from-file".into());
        apply_env(&mut cfg, Some("  ".into()));
        apply_env(&mut cfg, None);
        assert_eq!(cfg.backend.url.as_deref(), Some("http://from-file"));
    }
}
