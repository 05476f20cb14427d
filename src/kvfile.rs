// kvfile.rs
//
// Hand-editable key/value file, dotenv syntax:
//
//     WIFI_SSID='garden'
//     LAT=52.5200

use std::{collections::HashSet, fs, io, path::Path};

use anyhow::Context;
use askama::Template;
use log::*;

use crate::*;

#[derive(Template)]
#[template(path = "secrets.env.ask", escape = "none")]
struct SecretsFile<'a> {
    version: &'a str,
    data_url_help: &'a str,
    data_url: &'a str,
    entries: Vec<SecretsEntry>,
}

struct SecretsEntry {
    key: &'static str,
    help: &'static str,
    value: String,
}

impl TxConfig {
    /// Reads `KEY=VALUE` pairs on top of [`TxConfig::empty`].
    /// Values are stored exactly as the dotenv parser yields them.
    pub fn from_kv_reader<R: io::Read>(reader: R) -> anyhow::Result<Self> {
        let mut config = Self::empty();
        let mut seen = HashSet::new();

        for (n, item) in dotenvy::from_read_iter(reader).enumerate() {
            let (name, value) = item.with_context(|| format!("Cannot parse entry #{}", n + 1))?;

            let key = match name.parse::<ConfigKey>() {
                Ok(k) => k,
                Err(_) => {
                    warn!("Ignoring unknown key {name}");
                    continue;
                }
            };
            if !key.is_editable() {
                warn!("Ignoring {key}, it is fixed to {DATA_URL}");
                continue;
            }
            if !seen.insert(key) {
                warn!("{key} given more than once, using the last value");
            }
            config.set(key, value)?;
        }

        debug!("Parsed {n} keys", n = seen.len());
        Ok(config)
    }

    pub fn from_kv_str(text: &str) -> anyhow::Result<Self> {
        Self::from_kv_reader(text.as_bytes())
    }

    pub fn from_kv_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        info!("Reading config from {}", path.display());
        let file = fs::File::open(path)
            .with_context(|| format!("Cannot open config file {}", path.display()))?;
        Self::from_kv_reader(file)
            .with_context(|| format!("Cannot read config file {}", path.display()))
    }

    /// Renders the editable file. Reading the result back gives an equal config.
    pub fn to_kv_string(&self) -> anyhow::Result<String> {
        let file = SecretsFile {
            version: FW_VERSION,
            data_url_help: ConfigKey::DataUrl.help(),
            data_url: DATA_URL,
            entries: ConfigKey::editable()
                .map(|k| SecretsEntry {
                    key: k.name(),
                    help: k.help(),
                    value: quote(self.get(k)),
                })
                .collect(),
        };

        let mut text = file.render().context("Cannot render config template")?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }
}

// Single quotes are taken literally by the parser, except that a backslash
// right before the closing quote escapes it. Values with a quote, a backslash
// or a line break go in double quotes with the parser's escapes.
fn quote(value: &str) -> String {
    if !value.contains(['\'', '\\', '\n']) {
        return format!("'{value}'");
    }

    let mut q = String::with_capacity(value.len() + 8);
    q.push('"');
    for c in value.chars() {
        match c {
            '\\' => q.push_str("\\\\"),
            '"' => q.push_str("\\\""),
            '$' => q.push_str("\\$"),
            '\n' => q.push_str("\\n"),
            c => q.push(c),
        }
    }
    q.push('"');
    q
}


// EOF
