use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WPM: u32 = 300;

const KEYRING_SERVICE: &str = "speedfeed";
const KEYRING_USER: &str = "miniflux-token";

/// Settings and lifetime counters that survive between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_wpm")]
    pub wpm: u32,
    #[serde(default)]
    pub theme_index: usize,
    #[serde(default)]
    pub ramp_speed: bool,
    #[serde(default)]
    pub zen_mode: bool,
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub total_words: u64,
    #[serde(default)]
    pub miniflux_url: String,
}

fn default_wpm() -> u32 {
    DEFAULT_WPM
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            theme_index: 0,
            ramp_speed: false,
            zen_mode: false,
            total_articles: 0,
            total_words: 0,
            miniflux_url: String::new(),
        }
    }
}

impl Config {
    /// Fold one run's counters into the lifetime totals.
    pub fn record_session(&mut self, articles: u64, words: u64) {
        self.total_articles += articles;
        self.total_words += words;
    }
}

fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
        .join("speedfeed");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Directory for rolling log files
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("speedfeed")
        .join("logs")
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    let mut config: Config = serde_json::from_str(&contents)?;
    if config.wpm == 0 {
        config.wpm = DEFAULT_WPM;
    }
    Ok(config)
}

/// Load the user's config. Missing or unreadable files give the defaults.
pub fn load_config() -> Config {
    let loaded = config_path().and_then(|path| load_config_from(&path));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "could not load config, using defaults");
            Config::default()
        }
    }
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&config_path()?, config)
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("keyring unavailable: {0}")]
    Keyring(#[from] keyring::Error),
}

/// API token storage in the platform keyring
pub struct CredentialStore {
    service: String,
    user: String,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE, KEYRING_USER)
    }
}

impl CredentialStore {
    pub fn new(service: &str, user: &str) -> Self {
        Self {
            service: service.to_string(),
            user: user.to_string(),
        }
    }

    /// `Ok(None)` when nothing has been stored yet.
    pub fn get(&self) -> Result<Option<String>, CredentialError> {
        let entry = keyring::Entry::new(&self.service, &self.user)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(&self, secret: &str) -> Result<(), CredentialError> {
        let entry = keyring::Entry::new(&self.service, &self.user)?;
        entry.set_password(secret)?;
        Ok(())
    }
}
