use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the current directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "repo-health.toml";

const MAX_PAGE_SIZE: u8 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Number of items requested from list endpoints (1..=100)
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Time allowed for each API request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Overall score below which `--error-if-below` fails when given no explicit value (0..=100)
    #[serde(default)]
    pub minimum_score: u8,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_page_size() -> u8 {
    MAX_PAGE_SIZE
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `repo-health.toml` in `base_dir` is used when present.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading repo-health configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no configuration file at '{path}', using defaults");
                    return Self::from_toml(DEFAULT_CONFIG_TOML).into_app_err("parsing built-in default configuration");
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading repo-health configuration file '{path}'")),
            }
        };

        let config = Self::from_toml(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    fn from_toml(text: &str) -> core::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base_url).into_app_err_with(|| format!("api_base_url '{}' is not a valid URL", self.api_base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("api_base_url must use http or https, got '{}'", url.scheme()));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(app_err!("page_size must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.minimum_score > 100 {
            return Err(app_err!("minimum_score must be between 0 and 100, got {}", self.minimum_score));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            request_timeout: default_request_timeout(),
            minimum_score: 0,
        }
    }
}
