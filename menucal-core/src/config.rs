//! Run configuration.
//!
//! Defaults describe the Windsong Elementary lunch calendar. An optional
//! TOML file can override any field; it still describes one school and one
//! meal type.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::DEFAULT_WINDOW_DAYS;
use crate::error::{MenuCalError, MenuCalResult};

/// Everything the pipeline needs to know about the school and the output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuCalConfig {
    /// Nutrislice district subdomain, e.g. `prosperisd`.
    pub district: String,
    /// School slug as it appears in Nutrislice URLs.
    pub school: String,
    /// Menu type slug (`lunch`, `breakfast`, ...). Deployments sometimes use
    /// custom slugs, check the real URL in the browser if requests 404.
    pub meal_type: String,
    /// Value of `X-WR-CALNAME`.
    pub calendar_name: String,
    /// Value of `PRODID`.
    pub product_id: String,
    /// Prefix of each event's SUMMARY.
    pub event_title: String,
    pub output_path: PathBuf,
    /// Length of the rolling window starting today.
    pub window_days: i64,
}

impl Default for MenuCalConfig {
    fn default() -> Self {
        MenuCalConfig {
            district: "prosperisd".to_string(),
            school: "windsong-elementary".to_string(),
            meal_type: "lunch".to_string(),
            calendar_name: "Windsong ES Lunch".to_string(),
            product_id: "-//LeetFamily//Windsong Lunch//EN".to_string(),
            event_title: "Windsong Lunch".to_string(),
            output_path: PathBuf::from("windsong_lunch.ics"),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl MenuCalConfig {
    /// Default override location: ~/.config/menucal/config.toml
    pub fn config_path() -> MenuCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MenuCalError::Config("Could not determine config directory".into()))?
            .join("menucal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> MenuCalResult<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(MenuCalError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match Self::config_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml(content: &str) -> MenuCalResult<Self> {
        let mut config: MenuCalConfig =
            toml::from_str(content).map_err(|e| MenuCalError::Config(e.to_string()))?;
        config.output_path = expand_path(&config.output_path)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> MenuCalResult<()> {
        for (key, value) in [
            ("district", &self.district),
            ("school", &self.school),
            ("meal_type", &self.meal_type),
        ] {
            if value.trim().is_empty() {
                return Err(MenuCalError::Config(format!("'{}' must not be empty", key)));
            }
        }
        if self.window_days < 0 {
            return Err(MenuCalError::Config(format!(
                "'window_days' must not be negative (got {})",
                self.window_days
            )));
        }
        Ok(())
    }

    /// Stable per-day event identifier.
    pub fn event_uid(&self, ymd: &str) -> String {
        format!(
            "{}-{}-{}@{}.nutrislice",
            self.school, self.meal_type, ymd, self.district
        )
    }
}

/// Expand a leading `~` (and `$VARS`) in a configured path.
fn expand_path(path: &Path) -> MenuCalResult<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded =
        shellexpand::full(&raw).map_err(|e| MenuCalError::Config(e.to_string()))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
