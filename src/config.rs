// config.rs

use std::{collections::BTreeMap, fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::ConfigKey;

/// Where the transmitter fetches its hosted data files from.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/bill-orange/Soil-Resistance-Transmitter/master/data";

pub const DEFAULT_UNITS: &str = "metric";

const REDACTED: &str = "********";

/// Device settings. Built once at startup and handed to whoever needs them.
///
/// Every value is kept exactly as entered. Nothing is checked or normalized
/// here, an empty string means "not set" and consumers decide what that
/// implies. See [`TxConfig::check`] for an advisory report.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "TxConfig::empty")]
pub struct TxConfig {
    pub wifi_ssid: String,
    pub wifi_pass: String,

    pub chatgpt_api_key: String,
    pub openweather_api_key: String,

    pub lat: String,
    pub lon: String,

    pub units: String,
    pub language: String,
    pub location: String,
}

impl Default for TxConfig {
    /// Values baked in by build.rs from `.env` and `SOILTX_*` variables.
    fn default() -> Self {
        Self {
            wifi_ssid: option_env!("SOILTX_WIFI_SSID").unwrap_or("").into(),
            wifi_pass: option_env!("SOILTX_WIFI_PASS").unwrap_or("").into(),

            chatgpt_api_key: option_env!("SOILTX_CHATGPT_API_KEY").unwrap_or("").into(),
            openweather_api_key: option_env!("SOILTX_OPENWEATHER_API_KEY")
                .unwrap_or("")
                .into(),

            lat: option_env!("SOILTX_LAT").unwrap_or("").into(),
            lon: option_env!("SOILTX_LON").unwrap_or("").into(),

            units: option_env!("SOILTX_UNITS").unwrap_or(DEFAULT_UNITS).into(),
            language: option_env!("SOILTX_LANGUAGE").unwrap_or("").into(),
            location: option_env!("SOILTX_LOCATION").unwrap_or("").into(),
        }
    }
}

impl TxConfig {
    /// Placeholder template: everything unset except the units.
    pub fn empty() -> Self {
        Self {
            wifi_ssid: String::new(),
            wifi_pass: String::new(),
            chatgpt_api_key: String::new(),
            openweather_api_key: String::new(),
            lat: String::new(),
            lon: String::new(),
            units: DEFAULT_UNITS.into(),
            language: String::new(),
            location: String::new(),
        }
    }

    pub fn data_url(&self) -> &'static str {
        DATA_URL
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::WifiSsid => &self.wifi_ssid,
            ConfigKey::WifiPass => &self.wifi_pass,
            ConfigKey::ChatGptApiKey => &self.chatgpt_api_key,
            ConfigKey::OpenWeatherApiKey => &self.openweather_api_key,
            ConfigKey::DataUrl => DATA_URL,
            ConfigKey::Lat => &self.lat,
            ConfigKey::Lon => &self.lon,
            ConfigKey::Units => &self.units,
            ConfigKey::Language => &self.language,
            ConfigKey::Location => &self.location,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) -> anyhow::Result<()> {
        match self.slot_mut(key) {
            Some(slot) => *slot = value.into(),
            None => bail!("{key} is fixed and cannot be changed"),
        }
        Ok(())
    }

    fn slot_mut(&mut self, key: ConfigKey) -> Option<&mut String> {
        match key {
            ConfigKey::WifiSsid => Some(&mut self.wifi_ssid),
            ConfigKey::WifiPass => Some(&mut self.wifi_pass),
            ConfigKey::ChatGptApiKey => Some(&mut self.chatgpt_api_key),
            ConfigKey::OpenWeatherApiKey => Some(&mut self.openweather_api_key),
            ConfigKey::DataUrl => None,
            ConfigKey::Lat => Some(&mut self.lat),
            ConfigKey::Lon => Some(&mut self.lon),
            ConfigKey::Units => Some(&mut self.units),
            ConfigKey::Language => Some(&mut self.language),
            ConfigKey::Location => Some(&mut self.location),
        }
    }

    /// All values by name, `DATA_URL` included, in declaration order.
    pub fn entries(&self) -> BTreeMap<ConfigKey, &str> {
        ConfigKey::ALL.into_iter().map(|k| (k, self.get(k))).collect()
    }

    /// Copy with every non-empty secret masked. Safe to log or display.
    pub fn redacted(&self) -> Self {
        let mut c = self.clone();
        for key in ConfigKey::ALL.into_iter().filter(|k| k.is_secret()) {
            if let Some(slot) = c.slot_mut(key).filter(|s| !s.is_empty()) {
                *slot = REDACTED.into();
            }
        }
        c
    }

    pub fn units(&self) -> Option<Units> {
        self.units.parse().ok()
    }

    pub fn latitude(&self) -> Option<f64> {
        parse_degrees(&self.lat, 90.0)
    }

    pub fn longitude(&self) -> Option<f64> {
        parse_degrees(&self.lon, 180.0)
    }
}

impl fmt::Debug for TxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.redacted();
        f.debug_struct("TxConfig")
            .field("wifi_ssid", &c.wifi_ssid)
            .field("wifi_pass", &c.wifi_pass)
            .field("chatgpt_api_key", &c.chatgpt_api_key)
            .field("openweather_api_key", &c.openweather_api_key)
            .field("data_url", &DATA_URL)
            .field("lat", &c.lat)
            .field("lon", &c.lon)
            .field("units", &c.units)
            .field("language", &c.language)
            .field("location", &c.location)
            .finish()
    }
}

// Decimal degrees within +-limit, None when unset or not a number in range.
pub(crate) fn parse_degrees(s: &str, limit: f64) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    (v.is_finite() && (-limit..=limit).contains(&v)).then_some(v)
}

/// Unit system for the weather display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => bail!("Unknown units {s:?}, expected metric or imperial"),
        }
    }
}


// EOF
