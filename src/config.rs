use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RmsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub maps_dir: PathBuf,
    pub out_dir: PathBuf,
    pub style_path: PathBuf,
    pub env_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    String::from("info")
}

fn env_name() -> String {
    env::var("RMS_ENV").unwrap_or_else(|_| String::from("default"))
}

impl Default for Config {
    fn default() -> Self {
        let maps_dir = env::var("RMS_MAPS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("maps"));
        let out_dir = env::var("RMS_OUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("out"));
        let style_path = env::var("RMS_STYLE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Path::new("style").join("style.css"));

        Config {
            maps_dir,
            out_dir,
            style_path,
            env_name: env_name(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads the config of the current environment. A missing config file gives the defaults;
    /// `rms config init` writes them out. A file that can't be read or parsed is an error.
    pub fn load() -> Result<Self, RmsError> {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, RmsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, RmsError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".rms")
            .join(env_name())
            .join("config.json")
    }
}
