//! Global gigcal configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::calendar_id::DEFAULT_CALENDAR_ID;
use crate::error::{GigcalError, GigcalResult};

static DEFAULT_DOWNLOAD_DIR: &str = "~/Downloads";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

fn default_calendar_id() -> String {
    DEFAULT_CALENDAR_ID.to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DOWNLOAD_DIR)
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Configuration at ~/.config/gigcal/config.toml
///
/// Every key can be overridden from the environment with a `GIGCAL_` prefix,
/// e.g. `GIGCAL_CALENDAR_ID`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GigcalConfig {
    /// Calendar used when a command is not given `--calendar`
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Default for GigcalConfig {
    fn default() -> Self {
        GigcalConfig {
            calendar_id: default_calendar_id(),
            download_dir: default_download_dir(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl GigcalConfig {
    pub fn config_path() -> GigcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GigcalError::Config("Could not determine config directory".into()))?
            .join("gigcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> GigcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> GigcalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("GIGCAL"))
            .build()
            .map_err(|e| GigcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GigcalError::Config(e.to_string()))
    }

    /// Download directory with `~` expanded.
    pub fn download_dir(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.download_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GigcalResult<()> {
        let contents = format!(
            "\
# gigcal configuration

# Calendar to show and subscribe to:
# calendar_id = \"{}\"

# Where downloaded .ics files are saved:
# download_dir = \"{}\"

# Timeout for calendar downloads and probes, in seconds:
# http_timeout_secs = {}
",
            DEFAULT_CALENDAR_ID, DEFAULT_DOWNLOAD_DIR, DEFAULT_HTTP_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GigcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GigcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GigcalConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.calendar_id, DEFAULT_CALENDAR_ID);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn commented_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gigcal").join("config.toml");

        GigcalConfig::create_default_config(&path).unwrap();
        let config = GigcalConfig::load_from(&path).unwrap();

        assert_eq!(config.calendar_id, DEFAULT_CALENDAR_ID);
        assert_eq!(config.download_dir, PathBuf::from("~/Downloads"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "calendar_id = \"crew@group.calendar.google.com\"\n\
             download_dir = \"/tmp/gigs\"\n\
             http_timeout_secs = 5\n",
        )
        .unwrap();

        let config = GigcalConfig::load_from(&path).unwrap();

        assert_eq!(config.calendar_id, "crew@group.calendar.google.com");
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/gigs"));
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn tilde_is_expanded() {
        let config = GigcalConfig::default();
        assert!(!config.download_dir().to_string_lossy().starts_with('~'));
    }
}
