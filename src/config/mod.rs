use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File path or http(s) URL of the menu CSV
    #[serde(default)]
    pub menu_source: String,
    /// File path or http(s) URL of the opening-hours CSV
    #[serde(default)]
    pub hours_source: Option<String>,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "default_status_interval")]
    pub status_interval_secs: u64,
    #[serde(default)]
    pub lite_mode: bool,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

fn default_cache_dir() -> String {
    Config::config_dir().join("cache").to_string_lossy().to_string()
}
fn default_status_interval() -> u64 {
    60
}
fn default_http_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_source: String::new(),
            hours_source: None,
            cache_dir: default_cache_dir(),
            status_interval_secs: default_status_interval(),
            lite_mode: false,
            http_timeout_secs: default_http_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("MENUBOARD_HOME") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("menuboard")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".menuboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("menuboard.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        let (cfg, upgraded) = migrate::upgrade(&content)?;
        if upgraded {
            tracing::info!(path = %path.display(), "configuration upgraded from an older layout");
        }
        Ok(cfg)
    }

    /// Create config dir, default config file (unless it exists) and cache dir.
    /// Returns true when a new config file was written.
    pub fn init_all(is_test: bool) -> AppResult<bool> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let cfg = Self::load()?;
        fs::create_dir_all(&cfg.cache_dir)?;

        let path = Self::config_file();
        if is_test || path.exists() {
            return Ok(false);
        }

        let yaml = serde_yaml::to_string(&cfg)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
