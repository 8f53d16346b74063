// Configuration loading and defaults.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = ".symera";
const CONFIG_FILE_NAME: &str = "config.toml";
const SNAPSHOT_FILE_NAME: &str = "snapshot.json";

fn default_upcoming_limit() -> usize {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            week_start: WeekStart::default(),
            upcoming_limit: default_upcoming_limit(),
            log_level: default_log_level(),
        }
    }
}

/// `~/.symera`, the home of the default config and snapshot files.
pub fn app_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(APP_DIR_NAME))
}

impl Config {
    /// Reads `path`, or `~/.symera/config.toml` when none is given.
    /// A missing file means defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => app_dir()?.join(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Snapshot file location: the configured one, else `~/.symera/snapshot.json`.
    pub fn data_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(p) => Ok(p.clone()),
            None => Ok(app_dir()?.join(SNAPSHOT_FILE_NAME)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.upcoming_limit, 5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            week_start = "monday"
            data_file = "/tmp/events.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/events.json"));
        assert_eq!(config.upcoming_limit, 5);
    }

    #[test]
    fn test_bad_week_start_is_rejected() {
        assert!(Config::from_toml(r#"week_start = "friday""#).is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "upcoming_limit = 3\nlog_level = \"debug\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.upcoming_limit, 3);
        assert_eq!(config.log_level, "debug");
    }
}
