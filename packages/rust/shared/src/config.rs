//! Application configuration for cocktaildex.
//!
//! Config lives at `./cocktaildex.toml`, next to where the generator runs.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CocktaildexError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "cocktaildex.toml";

// ---------------------------------------------------------------------------
// Config structs (matching cocktaildex.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream drinks API settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Catalog artifact settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Translation table settings.
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// `[source]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the drinks API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Minimum ms between successive API calls.
    #[serde(default = "default_rate_limit")]
    pub rate_limit_ms: u64,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            rate_limit_ms: default_rate_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.thecocktaildb.com/api/json/v1/1".into()
}
fn default_rate_limit() -> u64 {
    1000
}
fn default_timeout_secs() -> u64 {
    15
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated catalog, relative to the working directory.
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "data/cocktails.json".into()
}

/// `[lexicon]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Path to an external translation table (TOML). When unset, the
    /// tables compiled into the lexicon crate are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

// ---------------------------------------------------------------------------
// Fetch config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime fetch configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the drinks API.
    pub base_url: String,
    /// Minimum ms between successive API calls.
    pub rate_limit_ms: u64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.source.base_url.clone(),
            rate_limit_ms: config.source.rate_limit_ms,
            timeout_secs: config.source.timeout_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config file (`./cocktaildex.toml`).
pub fn config_file_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path();

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CocktaildexError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        CocktaildexError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Write a default config file to the working directory.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let path = config_file_path();
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CocktaildexError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CocktaildexError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Check that the configured base URL is an absolute http(s) URL.
pub fn validate_base_url(config: &AppConfig) -> Result<url::Url> {
    let raw = &config.source.base_url;
    let parsed = url::Url::parse(raw)
        .map_err(|e| CocktaildexError::config(format!("invalid source.base_url {raw:?}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CocktaildexError::config(format!(
            "unsupported source.base_url scheme {other:?}, expected http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("data/cocktails.json"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.source.rate_limit_ms, 1000);
        assert_eq!(parsed.source.timeout_secs, 15);
        assert_eq!(parsed.output.path, "data/cocktails.json");
        assert!(parsed.lexicon.path.is_none());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[source]
rate_limit_ms = 0

[lexicon]
path = "tables/ja.toml"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.source.rate_limit_ms, 0);
        assert_eq!(
            config.source.base_url,
            "https://www.thecocktaildb.com/api/json/v1/1"
        );
        assert_eq!(config.lexicon.path.as_deref(), Some("tables/ja.toml"));
    }

    #[test]
    fn fetch_config_from_app_config() {
        let app = AppConfig::default();
        let fetch = FetchConfig::from(&app);
        assert_eq!(fetch.rate_limit_ms, 1000);
        assert_eq!(fetch.timeout_secs, 15);
        assert!(fetch.base_url.starts_with("https://"));
    }

    #[test]
    fn base_url_validation() {
        let mut config = AppConfig::default();
        assert!(validate_base_url(&config).is_ok());

        config.source.base_url = "not a url".into();
        let result = validate_base_url(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base_url"));

        config.source.base_url = "ftp://example.com".into();
        assert!(validate_base_url(&config).is_err());
    }
}
