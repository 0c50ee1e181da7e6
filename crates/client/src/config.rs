//! Console configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (`HALQA_CONFIG`, falling back to `halqa-admin.toml` in the working
//! directory), then environment variables. A `.env` file is read first so
//! its entries count as environment variables.
//!
//! | Variable             | Field                    |
//! |----------------------|--------------------------|
//! | `HALQA_API_URL`      | `api_base_url`           |
//! | `HALQA_TIMEOUT_SECS` | `request_timeout_secs`   |
//! | `HALQA_SESSION_FILE` | `session_file`           |
//! | `HALQA_LOG`          | `log_level`              |

use std::path::{Path, PathBuf};
use std::time::Duration;

use halqa_core::{ConsoleError, ConsoleResult, ResultExt, Validatable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "halqa-admin.toml";

/// Session file name under the config directory
const SESSION_FILE_NAME: &str = "session.json";

// ============================================================================
// ConsoleConfig
// ============================================================================

/// Runtime settings of the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL every API path is appended to
    pub api_base_url: String,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// How long the form shows its success banner before closing
    pub success_close_delay_ms: u64,

    /// Where the auth session is persisted; platform default when unset
    pub session_file: Option<PathBuf>,

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            request_timeout_secs: 30,
            success_close_delay_ms: 1500,
            session_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load defaults, file, `.env`, and environment, then validate
    pub fn load() -> ConsoleResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }

        let explicit = std::env::var("HALQA_CONFIG").ok().map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            info!(path = %path.display(), "Reading configuration file");
            Self::from_file(&path)?
        } else if explicit.is_some() {
            return Err(ConsoleError::config(format!(
                "Config file {} does not exist",
                path.display()
            )));
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(source: &str) -> ConsoleResult<Self> {
        toml::from_str(source).map_err(|e| ConsoleError::config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(format!("Reading {}", path.display()))?;
        Self::from_toml(&source)
    }

    /// Apply `HALQA_*` overrides from a variable source
    pub fn apply_overrides<F>(&mut self, var: F) -> ConsoleResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("HALQA_API_URL") {
            self.api_base_url = url;
        }
        if let Some(raw) = var("HALQA_TIMEOUT_SECS") {
            self.request_timeout_secs = raw.trim().parse().map_err(|_| {
                ConsoleError::config(format!("HALQA_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?;
        }
        if let Some(path) = var("HALQA_SESSION_FILE") {
            self.session_file = Some(PathBuf::from(path));
        }
        if let Some(level) = var("HALQA_LOG") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn success_close_delay(&self) -> Duration {
        Duration::from_millis(self.success_close_delay_ms)
    }

    /// Session file, explicit or under the platform config directory
    pub fn session_path(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(default_session_path)
    }
}

impl Validatable for ConsoleConfig {
    fn validate(&self) -> ConsoleResult<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConsoleError::config(format!(
                "api_base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConsoleError::config("request_timeout_secs must be greater than 0"));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConsoleError::config("log_level cannot be empty"));
        }
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/halqa-admin/session.json`, else `~/.config/...`
///
/// Falls back to the working directory when neither variable is set.
pub fn default_session_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

    match base {
        Some(dir) => dir.join("halqa-admin").join(SESSION_FILE_NAME),
        None => PathBuf::from("halqa-session.json"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConsoleConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.success_close_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConsoleConfig::from_toml(
            r#"
            api_base_url = "https://halqa.example.org/api/"
            request_timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://halqa.example.org/api");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.success_close_delay_ms, 1500);
    }

    #[test]
    fn test_env_overrides_file() {
        let vars = HashMap::from([
            ("HALQA_API_URL", "http://10.0.0.5:5000"),
            ("HALQA_TIMEOUT_SECS", "5"),
            ("HALQA_SESSION_FILE", "/tmp/halqa.json"),
        ]);
        let mut config = ConsoleConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.5:5000");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.session_path(), PathBuf::from("/tmp/halqa.json"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bad_timeout_override() {
        let mut config = ConsoleConfig::default();
        let err = config
            .apply_overrides(|key| (key == "HALQA_TIMEOUT_SECS").then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn test_validation() {
        let config = ConsoleConfig {
            api_base_url: "localhost:5000".into(),
            ..Default::default()
        };
        assert!(!config.is_valid());

        let config = ConsoleConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("halqa-admin.toml");
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();
        let config = ConsoleConfig::from_file(&path).unwrap();
        assert_eq!(config.log_level, "debug");

        let missing = ConsoleConfig::from_file(&dir.path().join("nope.toml"));
        assert!(missing.is_err());
    }
}
