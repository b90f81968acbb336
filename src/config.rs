use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind: String,
    pub timezone: String,
    /// The day the hours list on the page starts with.
    pub display_start: String,
    /// Day name to `"HH:MM-HH:MM"` entries. Closing hours of 24 or more
    /// run past midnight, e.g. `"27:00"` is 3 AM the next day.
    pub hours: HashMap<String, Vec<String>>,
    pub headlines: Headlines,
    /// Seconds between status re-evaluations. 0 turns them off.
    pub status_refresh_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Headlines {
    pub messages: Vec<String>,
    /// Seconds between rotations. 0 keeps the first headline.
    pub interval_secs: u64,
}

impl Config {
    pub fn from_config(config: &str) -> Result<Self> {
        Ok(serde_json::from_str(config)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(&fs::read_to_string(path)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        let hours = [
            ("Sunday", "09:00-22:00"),
            ("Monday", "09:00-24:00"),
            ("Tuesday", "09:00-27:00"),
            ("Wednesday", "09:00-24:00"),
            ("Thursday", "09:00-24:00"),
            ("Friday", "09:00-28:00"),
            ("Saturday", "09:00-28:00"),
        ]
        .into_iter()
        .map(|(day, range)| (day.to_string(), vec![range.to_string()]))
        .collect();

        Self {
            bind: "127.0.0.1:7878".to_string(),
            timezone: "America/New_York".to_string(),
            display_start: "Saturday".to_string(),
            hours,
            headlines: Headlines::default(),
            status_refresh_secs: 60,
        }
    }
}

impl Default for Headlines {
    fn default() -> Self {
        Self {
            messages: vec![
                "Fresh • Fast • Open Late".to_string(),
                "Halal • Boar’s Head • Made to Order".to_string(),
                "Gyros • Chopped Cheese • Deli Classics".to_string(),
            ],
            interval_secs: 4,
        }
    }
}
