//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kindred/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KindredConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILE: &str = "kindred.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub server_url: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.kindred/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kindred").join("config.toml"))
}

/// Load config from `~/.kindred/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KindredConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<KindredConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KindredConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] but for an explicit path.
pub fn load_config_from(path: &Path) -> Result<KindredConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(KindredConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: KindredConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Kindred Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://127.0.0.1:5000"   # Or set KINDRED_SERVER_URL, or pass --server-url

# [logging]
# file = "kindred.log"                 # Or set KINDRED_LOG_FILE
# level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_server_url` is from the `--server-url` flag (None = not specified).
pub fn resolve(config: &KindredConfig, cli_server_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_server_url, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
pub fn resolve_with_env(
    config: &KindredConfig,
    cli_server_url: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Server URL: CLI → env → config → default
    let server_url = cli_server_url
        .map(|s| s.to_string())
        .or_else(|| env("KINDRED_SERVER_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    // Log file: env → config → default
    let log_file = env("KINDRED_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default. Unknown names fall back to the default.
    let log_level = env("KINDRED_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        server_url,
        log_file,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = KindredConfig::default();
        assert!(config.server.base_url.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = KindredConfig::default();
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.server_url, DEFAULT_SERVER_URL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = KindredConfig {
            server: ServerConfig {
                base_url: Some("http://10.0.0.5:5000".to_string()),
            },
            logging: LoggingConfig {
                file: Some("/tmp/kindred-test.log".to_string()),
                level: Some("warn".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.server_url, "http://10.0.0.5:5000");
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/kindred-test.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = KindredConfig {
            server: ServerConfig {
                base_url: Some("http://from-config".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "KINDRED_SERVER_URL" => Some("http://from-env".to_string()),
            "KINDRED_LOG_LEVEL" => Some("error".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.server_url, "http://from-env");
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_cli_server_url_wins() {
        let config = KindredConfig {
            server: ServerConfig {
                base_url: Some("http://from-config".to_string()),
            },
            ..Default::default()
        };
        let env = |_: &str| Some("http://from-env".to_string());
        let resolved = resolve_with_env(&config, Some("http://from-cli"), env);
        assert_eq!(resolved.server_url, "http://from-cli");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = KindredConfig {
            logging: LoggingConfig {
                level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[server]
base_url = "http://192.168.1.100:5000"

[logging]
file = "/var/log/kindred.log"
level = "info"
"#;
        let config: KindredConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.100:5000")
        );
        assert_eq!(config.logging.file.as_deref(), Some("/var/log/kindred.log"));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[logging]
level = "trace"
"#;
        let config: KindredConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
        assert!(config.server.base_url.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("kindred-cfg-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[server\nbase_url = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("kindred-cfg-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.server.base_url.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.server.base_url.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
