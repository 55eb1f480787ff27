//! TOML configuration.
//!
//! ```toml
//! [sources]
//! structured = "data.json"
//! delimited = "https://docs.google.com/spreadsheets/d/e/.../pub?output=tsv"
//!
//! [calendar]
//! timezone = "America/Bogota"
//! today = "2025-09-15"
//! ```
//!
//! Every key is optional. An empty source location removes that source from
//! the chain.

use chrono_tz::Tz;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::io::loaders::{ScheduleLoader, ScheduleSourceType};
use crate::io::sources::source_for_location;
use crate::time::{parse_canonical, today_in};

/// File searched by [`ScheduleConfig::load_default`].
pub const DEFAULT_CONFIG_FILE: &str = "schedule.toml";

/// Published sheet export used as the delimited source.
pub const DEFAULT_TSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vS1NNboTYyyWcE03e4GA8oz8y79DdeFlX1HNCMM1FbzG5LJon33IM87ReTKiJdYc41179gfRWYn0EsW/pub?gid=219655054&single=true&output=tsv";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub calendar: CalendarSettings,
}

/// Source locations, tried in the order structured then delimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_structured")]
    pub structured: String,
    #[serde(default = "default_delimited")]
    pub delimited: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Fixed reference date; resolved from the clock when absent.
    #[serde(default)]
    pub today: Option<String>,
}

fn default_structured() -> String {
    "data.json".to_string()
}

fn default_delimited() -> String {
    DEFAULT_TSV_URL.to_string()
}

fn default_timezone() -> String {
    "America/Bogota".to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            structured: default_structured(),
            delimited: default_delimited(),
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            today: None,
        }
    }
}

impl ScheduleConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ScheduleConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `schedule.toml` from the working directory, or defaults if absent.
    pub fn load_default() -> ConfigResult<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// The configured timezone.
    ///
    /// # Returns
    /// * `Err(ConfigError::Invalid)` if the name is not a known IANA zone
    pub fn timezone(&self) -> ConfigResult<Tz> {
        self.calendar.timezone.parse::<Tz>().map_err(|e| {
            ConfigError::Invalid(format!(
                "Unknown timezone '{}': {}",
                self.calendar.timezone, e
            ))
        })
    }

    /// Reference "today" for upcoming filters and countdowns.
    ///
    /// A fixed `calendar.today` wins; otherwise the current date in the
    /// configured timezone.
    pub fn reference_date(&self) -> ConfigResult<String> {
        match self.calendar.today.as_deref().map(str::trim) {
            Some(fixed) if !fixed.is_empty() => {
                if parse_canonical(fixed).is_none() {
                    return Err(ConfigError::Invalid(format!(
                        "calendar.today must be YYYY-MM-DD, got '{}'",
                        fixed
                    )));
                }
                Ok(fixed.to_string())
            }
            _ => Ok(today_in(self.timezone()?)),
        }
    }

    /// Loader for the configured sources, structured first.
    pub fn build_loader(&self) -> ScheduleLoader {
        let chain = [
            (ScheduleSourceType::Json, self.sources.structured.trim()),
            (ScheduleSourceType::Tsv, self.sources.delimited.trim()),
        ];

        chain
            .into_iter()
            .filter(|(_, location)| !location.is_empty())
            .fold(ScheduleLoader::new(), |loader, (source_type, location)| {
                loader.with_boxed_source(source_type, source_for_location(location))
            })
    }
}
