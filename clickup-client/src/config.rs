//! Client configuration.
//!
//! Resolution order: built-in defaults → TOML config file → environment.
//!
//! Config file discovery (first match wins):
//! 1. an explicit path (`--config` / `CLICKUP_MCP_CONFIG`)
//! 2. `./.clickup-mcp.toml` (project-local)
//! 3. `~/.config/clickup-mcp.toml` (user-global)

use std::fmt;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Public ClickUp v2 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";
/// Per-request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const TOKEN_ENV: &str = "CLICKUP_PERSONAL_TOKEN";
pub const BASE_URL_ENV: &str = "CLICKUP_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "CLICKUP_TIMEOUT_MS";

const CONFIG_FILENAME: &str = ".clickup-mcp.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "clickup-mcp.toml";

/// Raw contents of a config file. Every key is optional.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Fully resolved configuration for [`crate::ClickUpApiClient`].
#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: SecretString,
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Config pointing at the public API with the given personal token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: SecretString::from(token.into()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Load configuration from the discovered (or explicit) config file and the
    /// process environment.
    pub fn load(explicit_path: Option<&Path>) -> ClientResult<Self> {
        let path = match explicit_path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::find_config_file(),
        };

        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading ClickUp config file");
                Self::load_file(&path)?
            }
            None => {
                debug!("No ClickUp config file found, using environment only");
                ConfigFile::default()
            }
        };

        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Parse a TOML config file.
    pub fn load_file(path: &Path) -> ClientResult<ConfigFile> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::config_error(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            ClientError::config_error(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Search for a config file in precedence order.
    pub fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILENAME);
        if local.is_file() {
            return Some(local);
        }

        let home = std::env::var("HOME").ok().map(PathBuf::from)?;
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        global.is_file().then_some(global)
    }

    /// Overlay environment values on top of a parsed file.
    ///
    /// `env` is injected so resolution can be tested without touching the
    /// process environment.
    pub fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let token = non_empty(env(TOKEN_ENV))
            .or_else(|| non_empty(file.token))
            .ok_or_else(|| {
                ClientError::config_error(format!(
                    "no ClickUp API token configured; set {} or `token` in {}",
                    TOKEN_ENV, CONFIG_FILENAME
                ))
            })?;

        let base_url = non_empty(env(BASE_URL_ENV))
            .or_else(|| non_empty(file.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_ms = match non_empty(env(TIMEOUT_ENV)) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ClientError::config_error(format!(
                    "{} must be a whole number of milliseconds, got '{}'",
                    TIMEOUT_ENV, raw
                ))
            })?,
            None => file.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        };

        if timeout_ms == 0 {
            return Err(ClientError::config_error("timeout_ms must be greater than zero"));
        }

        Ok(Self {
            base_url,
            token: SecretString::from(token),
            timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_env_token() {
        let config =
            ClientConfig::resolve(ConfigFile::default(), env_from(&[(TOKEN_ENV, "pk_env")]))
                .unwrap();
        assert_eq!(config.token.expose_secret(), "pk_env");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_env_overrides_file() {
        let file: ConfigFile = toml::from_str(
            r#"
token = "pk_file"
base_url = "http://file.example/api/v2"
timeout_ms = 1000
"#,
        )
        .unwrap();
        let config = ClientConfig::resolve(
            file,
            env_from(&[
                (TOKEN_ENV, "pk_env"),
                (BASE_URL_ENV, "http://env.example/api/v2"),
            ]),
        )
        .unwrap();
        assert_eq!(config.token.expose_secret(), "pk_env");
        assert_eq!(config.base_url, "http://env.example/api/v2");
        assert_eq!(config.timeout_ms, 1000);
    }

    #[test]
    fn test_file_only() {
        let file: ConfigFile = toml::from_str(r#"token = "pk_file""#).unwrap();
        let config = ClientConfig::resolve(file, env_from(&[])).unwrap();
        assert_eq!(config.token.expose_secret(), "pk_file");
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = ClientConfig::resolve(ConfigFile::default(), env_from(&[])).unwrap_err();
        assert!(matches!(err, ClientError::ConfigError(_)));
        assert!(err.to_string().contains(TOKEN_ENV));
    }

    #[test]
    fn test_blank_token_is_missing() {
        let err = ClientConfig::resolve(ConfigFile::default(), env_from(&[(TOKEN_ENV, "  ")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::ConfigError(_)));
    }

    #[test]
    fn test_invalid_timeout_env() {
        let err = ClientConfig::resolve(
            ConfigFile::default(),
            env_from(&[(TOKEN_ENV, "pk"), (TIMEOUT_ENV, "soon")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file: ConfigFile = toml::from_str("token = \"pk\"\ntimeout_ms = 0").unwrap();
        assert!(ClientConfig::resolve(file, env_from(&[])).is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let parsed: Result<ConfigFile, _> = toml::from_str(r#"tokn = "typo""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let file: ConfigFile = toml::from_str(r#"token = "pk_secret""#).unwrap();
        assert!(!format!("{file:?}").contains("pk_secret"));

        let config = ClientConfig::new("pk_secret");
        assert!(!format!("{config:?}").contains("pk_secret"));
    }
}
