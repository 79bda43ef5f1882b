//! Configuration file handling.
//!
//! The configuration is loaded once at process start and passed by reference
//! everywhere it is needed. Reloading means building a new `Config`.

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarConfig {
    /// JSON export of the calendar events
    pub events_file: String,
    /// Re-filter today's events by date instead of trusting the range query
    #[serde(default)]
    pub today_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// JSON export of the mind-map nodes
    pub board_file: String,
    /// Id of the node whose children are the focus areas
    #[serde(default)]
    pub root_id: String,
    /// Fallback lookup of the root node by content
    #[serde(default = "default_root_label")]
    pub root_label: String,
    #[serde(default = "default_thoughts_label")]
    pub conceptual_thoughts_label: String,
    #[serde(default = "default_selection_label")]
    pub meeting_selection_label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagingConfig {
    /// Append messages to this file instead of printing them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbox_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub board: BoardConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
}

fn default_root_label() -> String {
    "Key vectors".to_string()
}
fn default_thoughts_label() -> String {
    "Conceptual thoughts".to_string()
}
fn default_selection_label() -> String {
    "Meeting selection".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            calendar: CalendarConfig {
                events_file: dir.join("calendar.json").to_string_lossy().to_string(),
                today_only: false,
            },
            board: BoardConfig {
                board_file: dir.join("board.json").to_string_lossy().to_string(),
                root_id: String::new(),
                root_label: default_root_label(),
                conceptual_thoughts_label: default_thoughts_label(),
                meeting_selection_label: default_selection_label(),
            },
            messaging: MessagingConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dailybrief")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".dailybrief")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dailybrief.conf")
    }

    /// Load and validate the configuration. Any problem here is fatal.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every required setting is present.
    pub fn validate(&self) -> AppResult<()> {
        let mut missing = Vec::new();

        if self.calendar.events_file.trim().is_empty() {
            missing.push("calendar.events_file");
        }
        if self.board.board_file.trim().is_empty() {
            missing.push("board.board_file");
        }
        if self.board.root_id.trim().is_empty() && self.board.root_label.trim().is_empty() {
            missing.push("board.root_id or board.root_label");
        }
        if let Some(outbox) = &self.messaging.outbox_file
            && outbox.trim().is_empty()
        {
            missing.push("messaging.outbox_file");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn events_path(&self) -> PathBuf {
        expand_tilde(&self.calendar.events_file)
    }

    pub fn outbox_path(&self) -> Option<PathBuf> {
        self.messaging.outbox_file.as_deref().map(expand_tilde)
    }

    /// Write a default configuration file. Existing files are kept.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(true)
    }
}
