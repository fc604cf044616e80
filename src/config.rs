use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, clock::SystemClock, date::LocaleProfile};

/// The placeholder shown on the trigger button until a date is picked.
pub const DEFAULT_PLACEHOLDER: &str = "Pick a date";

/// Settings a host form chooses for an embedded date picker.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "placeholder_text": "Purchase date", "locale": "en-us", "timezone": "Pacific/Auckland" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Shown on the trigger button while nothing is selected.
    pub placeholder_text: String,
    /// How the selected date is shown on the trigger button.
    pub locale: LocaleProfile,
    /// The canonical name of the timezone that decides what "today" is.
    /// The host's local timezone is used when unset.
    pub timezone: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            placeholder_text: DEFAULT_PLACEHOLDER.to_owned(),
            locale: LocaleProfile::default(),
            timezone: None,
        }
    }
}

impl CalendarConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|error| Error::InvalidConfig(error.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|error| Error::ConfigReadError(path.display().to_string(), error.to_string()))?;

        Self::from_json(&text)
    }

    /// A wall clock for the configured timezone.
    pub fn clock(&self) -> Result<SystemClock, Error> {
        match &self.timezone {
            Some(timezone) => SystemClock::in_timezone(timezone),
            None => Ok(SystemClock::local()),
        }
    }
}
