// check.rs

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::config::parse_degrees;
use crate::*;

// Features stay dark while these are empty.
const NEEDED: [ConfigKey; 6] = [
    ConfigKey::WifiSsid,
    ConfigKey::ChatGptApiKey,
    ConfigKey::OpenWeatherApiKey,
    ConfigKey::Lat,
    ConfigKey::Lon,
    ConfigKey::Location,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Placeholder left empty.
    Unset,
    /// Value present but consumers cannot use it.
    Invalid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub key: ConfigKey,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn unset(key: ConfigKey) -> Self {
        Self {
            key,
            severity: Severity::Unset,
            message: "not set, features using it will not work".into(),
        }
    }

    fn invalid(key: ConfigKey, message: String) -> Self {
        Self {
            key,
            severity: Severity::Invalid,
            message,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Unset => "unset",
            Severity::Invalid => "INVALID",
        };
        write!(f, "{sev:>7} {}: {}", self.key, self.message)
    }
}

impl TxConfig {
    /// Advisory report of what consumers will trip over.
    /// Never changes the config, and loading never calls it.
    pub fn check(&self) -> Vec<Finding> {
        let mut findings: Vec<Finding> = NEEDED
            .into_iter()
            .filter(|k| self.get(*k).is_empty())
            .map(Finding::unset)
            .collect();

        check_degrees(&mut findings, ConfigKey::Lat, &self.lat, 90.0);
        check_degrees(&mut findings, ConfigKey::Lon, &self.lon, 180.0);

        if !self.units.is_empty() && self.units().is_none() {
            findings.push(Finding::invalid(
                ConfigKey::Units,
                format!("{:?} is neither metric nor imperial", self.units),
            ));
        }

        if let Err(msg) = check_url(self.data_url()) {
            findings.push(Finding::invalid(ConfigKey::DataUrl, msg));
        }

        findings.sort_by_key(|f| f.key);
        findings
    }
}

fn check_degrees(findings: &mut Vec<Finding>, key: ConfigKey, value: &str, limit: f64) {
    if value.is_empty() || parse_degrees(value, limit).is_some() {
        return;
    }
    findings.push(Finding::invalid(
        key,
        format!("{value:?} is not a decimal degree value between -{limit} and {limit}"),
    ));
}

fn check_url(s: &str) -> Result<(), String> {
    let url = Url::parse(s).map_err(|e| format!("{s:?} is not a URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{s:?} is not an http(s) URL"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("{s:?} has no host"));
    }
    Ok(())
}


// EOF
