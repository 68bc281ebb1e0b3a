//! Configuration management for the sewalog application.
//!
//! Settings live in a JSON file under the platform data directory and cover
//! the two things a venue actually tunes: the counter suggestion list and
//! the default in/out times pre-filling the entry form. Reading a missing
//! file yields the built-in defaults, so the application works before
//! `sewalog init` has ever run.

use crate::libs::counter::DEFAULT_COUNTERS;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::time_input::parse_canonical;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;

/// Configuration file name within the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Autocomplete suggestions for the counter field. A suggestion list,
    /// not a closed set: entries outside it are accepted verbatim.
    pub counters: Vec<String>,
    /// Canonical "HH:MM" check-in time pre-filling the add flow.
    pub default_in: String,
    /// Canonical "HH:MM" check-out time pre-filling immediate mark-out.
    pub default_out: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            counters: DEFAULT_COUNTERS.iter().map(|c| c.to_string()).collect(),
            default_in: "09:00".to_string(),
            default_out: "17:00".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup wizard. Starts from the current configuration so
    /// re-running it edits rather than resets.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let counters: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCounterList.to_string())
            .default(current.counters.join(", "))
            .interact_text()?;

        let default_in: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultInTime.to_string())
            .default(current.default_in.clone())
            .validate_with(|input: &String| parse_canonical(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        let default_out: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultOutTime.to_string())
            .default(current.default_out.clone())
            .validate_with(|input: &String| parse_canonical(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?;

        Ok(Config {
            counters: counters
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            default_in,
            default_out,
        })
    }
}
