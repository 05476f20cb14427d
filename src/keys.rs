// keys.rs

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Recognized configuration names. Consumers and the key/value file
/// refer to the settings by these names only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum ConfigKey {
    WifiSsid,
    WifiPass,
    ChatGptApiKey,
    OpenWeatherApiKey,
    DataUrl,
    Lat,
    Lon,
    Units,
    Language,
    Location,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 10] = [
        ConfigKey::WifiSsid,
        ConfigKey::WifiPass,
        ConfigKey::ChatGptApiKey,
        ConfigKey::OpenWeatherApiKey,
        ConfigKey::DataUrl,
        ConfigKey::Lat,
        ConfigKey::Lon,
        ConfigKey::Units,
        ConfigKey::Language,
        ConfigKey::Location,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::WifiSsid => "WIFI_SSID",
            ConfigKey::WifiPass => "WIFI_PASS",
            ConfigKey::ChatGptApiKey => "CHATGPT_API_KEY",
            ConfigKey::OpenWeatherApiKey => "OPENWEATHER_API_KEY",
            ConfigKey::DataUrl => "DATA_URL",
            ConfigKey::Lat => "LAT",
            ConfigKey::Lon => "LON",
            ConfigKey::Units => "UNITS",
            ConfigKey::Language => "LANGUAGE",
            ConfigKey::Location => "LOCATION",
        }
    }

    /// Secrets are masked in logs and in `show` output.
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            ConfigKey::WifiPass | ConfigKey::ChatGptApiKey | ConfigKey::OpenWeatherApiKey
        )
    }

    /// Everything except the hosted data location can be edited.
    pub fn is_editable(self) -> bool {
        self != ConfigKey::DataUrl
    }

    /// One-line hint, written as a comment above the key in the secrets file.
    pub fn help(self) -> &'static str {
        match self {
            ConfigKey::WifiSsid => "WiFi network name to join",
            ConfigKey::WifiPass => "WiFi password",
            ConfigKey::ChatGptApiKey => "OpenAI API key for the chat service",
            ConfigKey::OpenWeatherApiKey => "API key from your OpenWeather account",
            ConfigKey::DataUrl => "Hosted data files (fixed)",
            ConfigKey::Lat => "Latitude, 90.0000 to -90.0000, negative for the southern hemisphere",
            ConfigKey::Lon => "Longitude, 180.0000 to -180.0000, negative for west",
            ConfigKey::Units => "metric or imperial",
            ConfigKey::Language => "Locale code for the display, e.g. en",
            ConfigKey::Location => "City and country code, e.g. Berlin,DE",
        }
    }

    pub fn editable() -> impl Iterator<Item = ConfigKey> {
        Self::ALL.into_iter().filter(|k| k.is_editable())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::ALL.into_iter().find(|k| k.name() == s) {
            Some(k) => Ok(k),
            None => bail!("Unknown config key {s:?}"),
        }
    }
}

impl From<ConfigKey> for &'static str {
    fn from(k: ConfigKey) -> Self {
        k.name()
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}


// EOF
