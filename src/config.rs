//! Optional TOML configuration and settings resolution.
//!
//! Precedence for each value: command-line flag (or its environment variable),
//! then `config.toml`, then the built-in default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::constants;
use crate::error::{ClientError, Result};

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config file.
    ///
    /// An explicitly named file must exist. The per-user default location is
    /// optional and yields an empty config when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/personctl/config.toml`, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::APP_NAME).join(constants::CONFIG_FILE_NAME))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&content)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: Url,
    pub timeout: Option<Duration>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Settings {
    /// Merges flag overrides over the config file and validates the endpoint.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] if the resulting URL is not an absolute
    /// `http`/`https` URL.
    pub fn resolve(config: Config, overrides: Overrides) -> Result<Self> {
        let raw_url = overrides
            .url
            .or(config.url)
            .unwrap_or_else(|| constants::DEFAULT_URL.to_string());
        let url = parse_endpoint(&raw_url)?;

        let log_level = if overrides.verbose {
            constants::VERBOSE_LOG_LEVEL.to_string()
        } else {
            config
                .log_level
                .unwrap_or_else(|| constants::DEFAULT_LOG_LEVEL.to_string())
        };

        Ok(Self {
            url,
            timeout: overrides
                .timeout_secs
                .or(config.timeout_secs)
                .map(Duration::from_secs),
            log_file: overrides
                .log_file
                .or(config.log_file)
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_LOG_FILE)),
            log_level,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ClientError::Validation(format!("invalid --url {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::Validation(format!(
            "invalid --url {raw:?}: unsupported scheme {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(Config::default(), Overrides::default()).unwrap();
        assert_eq!(settings.url.as_str(), constants::DEFAULT_URL);
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.log_file, PathBuf::from(constants::DEFAULT_LOG_FILE));
        assert_eq!(settings.log_level, constants::DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_config_values_apply() {
        let config = Config::from_toml(
            r#"
url = "http://soap.internal:9000/persons"
timeout_secs = 15
log_file = "/tmp/personctl.log"
log_level = "warn"
"#,
        )
        .unwrap();
        let settings = Settings::resolve(config, Overrides::default()).unwrap();

        assert_eq!(settings.url.as_str(), "http://soap.internal:9000/persons");
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.log_file, PathBuf::from("/tmp/personctl.log"));
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            url: Some("http://from-config/".into()),
            timeout_secs: Some(15),
            log_file: None,
            log_level: Some("warn".into()),
        };
        let overrides = Overrides {
            url: Some("https://from-flag/soap".into()),
            timeout_secs: Some(2),
            log_file: Some(PathBuf::from("flag.log")),
            verbose: true,
        };
        let settings = Settings::resolve(config, overrides).unwrap();

        assert_eq!(settings.url.as_str(), "https://from-flag/soap");
        assert_eq!(settings.timeout, Some(Duration::from_secs(2)));
        assert_eq!(settings.log_file, PathBuf::from("flag.log"));
        assert_eq!(settings.log_level, constants::VERBOSE_LOG_LEVEL);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("retries = 3").is_err());
    }

    #[test]
    fn test_bad_url_is_validation_error() {
        for raw in ["not a url", "ftp://host/soap"] {
            let overrides = Overrides {
                url: Some(raw.into()),
                ..Overrides::default()
            };
            let err = Settings::resolve(Config::default(), overrides).unwrap_err();
            assert!(matches!(err, ClientError::Validation(_)), "{raw}");
        }
    }

    #[test]
    fn test_explicit_missing_file_is_config_error() {
        let err = Config::load(Some(Path::new("/nonexistent/personctl.toml"))).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "url = \"http://127.0.0.1:1/soap\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.url.as_deref(), Some("http://127.0.0.1:1/soap"));
    }
}
