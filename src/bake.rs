// bake.rs
//
// Also compiled into build.rs via #[path], so no crate imports here.

use std::collections::BTreeMap;

// Editable keys, see src/keys.rs. DATA_URL is fixed in the source.
pub const BAKED_KEYS: [&str; 9] = [
    "WIFI_SSID",
    "WIFI_PASS",
    "CHATGPT_API_KEY",
    "OPENWEATHER_API_KEY",
    "LAT",
    "LON",
    "UNITS",
    "LANGUAGE",
    "LOCATION",
];

pub const ENV_PREFIX: &str = "SOILTX_";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Baked {
    /// Key name without prefix -> value to bake in.
    pub values: BTreeMap<String, String>,
    /// Unknown keys found in `.env`.
    pub ignored: Vec<String>,
    /// Keys whose value has a line break, rustc-env cannot carry those.
    pub skipped: Vec<String>,
}

pub fn env_var_name(key: &str) -> String {
    format!("{ENV_PREFIX}{key}")
}

/// `.env` pairs first, then `SOILTX_<KEY>` variables on top.
pub fn merge<I, F>(dotenv: I, env_var: F) -> Baked
where
    I: IntoIterator<Item = (String, String)>,
    F: Fn(&str) -> Option<String>,
{
    let mut baked = Baked::default();

    for (key, value) in dotenv {
        if BAKED_KEYS.contains(&key.as_str()) {
            baked.values.insert(key, value);
        } else {
            baked.ignored.push(key);
        }
    }

    for key in BAKED_KEYS {
        if let Some(value) = env_var(&env_var_name(key)) {
            baked.values.insert(key.to_string(), value);
        }
    }

    baked.values.retain(|key, value| {
        if value.contains(['\n', '\r']) {
            baked.skipped.push(key.clone());
            false
        } else {
            true
        }
    });

    baked
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pairs(p: &[(&str, &str)]) -> Vec<(String, String)> {
        p.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn baked_keys_are_the_editable_keys() {
        let editable: Vec<&str> = crate::ConfigKey::editable().map(|k| k.name()).collect();
        assert_eq!(editable, BAKED_KEYS.to_vec());
    }

    #[test]
    fn dotenv_values_are_baked() {
        let b = merge(pairs(&[("LAT", "52.5200"), ("UNITS", "imperial")]), no_env);
        assert_eq!(b.values.get("LAT").map(String::as_str), Some("52.5200"));
        assert_eq!(b.values.get("UNITS").map(String::as_str), Some("imperial"));
        assert_eq!(b.values.len(), 2);
        assert!(b.ignored.is_empty());
        assert!(b.skipped.is_empty());
    }

    #[test]
    fn prefixed_env_overrides_dotenv() {
        let b = merge(pairs(&[("LAT", "1.0"), ("LON", "2.0")]), |name| {
            (name == "SOILTX_LAT").then(|| "52.5200".to_string())
        });
        assert_eq!(b.values.get("LAT").map(String::as_str), Some("52.5200"));
        assert_eq!(b.values.get("LON").map(String::as_str), Some("2.0"));
    }

    #[test]
    fn unprefixed_env_is_not_read() {
        let b = merge(Vec::new(), |name| {
            (name == "LANGUAGE").then(|| "en_US:en".to_string())
        });
        assert_eq!(b, Baked::default());
    }

    #[test]
    fn unknown_dotenv_keys_are_ignored() {
        let b = merge(pairs(&[("GITHUBURL", "x"), ("DATA_URL", "y"), ("LAT", "1")]), no_env);
        assert_eq!(b.ignored, vec!["GITHUBURL".to_string(), "DATA_URL".to_string()]);
        assert_eq!(b.values.keys().cloned().collect::<Vec<_>>(), vec!["LAT".to_string()]);
    }

    #[test]
    fn line_breaks_are_skipped() {
        let b = merge(pairs(&[("WIFI_PASS", "two\nlines"), ("LAT", "1")]), |name| {
            (name == "SOILTX_LOCATION").then(|| "Oslo\r\n".to_string())
        });
        assert_eq!(b.skipped, vec!["LOCATION".to_string(), "WIFI_PASS".to_string()]);
        assert_eq!(b.values.keys().cloned().collect::<Vec<_>>(), vec!["LAT".to_string()]);
    }

    #[test]
    fn env_override_can_fix_a_skipped_value() {
        let b = merge(pairs(&[("WIFI_PASS", "two\nlines")]), |name| {
            (name == "SOILTX_WIFI_PASS").then(|| "oneline".to_string())
        });
        assert!(b.skipped.is_empty());
        assert_eq!(b.values.get("WIFI_PASS").map(String::as_str), Some("oneline"));
    }
}

// EOF
