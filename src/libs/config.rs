//! Configuration management for the tasq application.
//!
//! Settings are stored as JSON in the platform application data
//! directory next to the task file. A missing configuration file means
//! defaults: the application is fully usable without ever running the
//! setup wizard.
//!
//! ```rust,no_run
//! use tasq::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let reminder = config.reminder.unwrap_or_default();
//! println!("scanning every {} seconds", reminder.scan_interval);
//! # Ok(())
//! # }
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Reminder scanner settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReminderConfig {
    /// Seconds between scans of the task collection.
    pub scan_interval: u64,

    /// Width of the due-soon window in minutes: a task is announced when
    /// its due instant lies after "now" and at most this many minutes
    /// ahead.
    pub window: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            scan_interval: 30,
            window: 5,
        }
    }
}

/// Application configuration root.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, resetting to defaults.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as the
    /// defaults so re-running the wizard only changes what the user
    /// touches.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.reminder.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleReminder);
        config.reminder = Some(ReminderConfig {
            scan_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptScanInterval.to_string())
                .default(default.scan_interval)
                .interact_text()?,

            window: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptReminderWindow.to_string())
                .default(default.window)
                .interact_text()?,
        });

        Ok(config)
    }
}
