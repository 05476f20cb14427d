// bin/soiltx.rs

use std::{fs, io::Write, path::PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::*;
use soiltx::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "soiltx",
    version = FW_VERSION,
    about = "Inspect and generate Soil Resistance Transmitter settings",
    long_about = None
)]
struct Cli {
    /// Settings file (KEY=VALUE lines) to use instead of the values built into this binary
    #[arg(short, long, global = true, env = "SOILTX_FILE")]
    file: Option<PathBuf>,

    /// Override one value, KEY=VALUE (can be used multiple times)
    #[arg(short, long, global = true)]
    set: Vec<String>,

    /// More log output (-v, -vv, ...)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every setting
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Print secrets in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Print one value exactly as stored
    Get {
        /// Setting name, e.g. LAT
        key: ConfigKey,
    },

    /// Report empty placeholders and values consumers cannot use
    Check {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an editable settings file
    Template {
        /// Leave every value empty
        #[arg(long)]
        blank: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List recognized setting names
    Keys,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    debug!("Using config:\n{config:#?}");

    match cli.command {
        Commands::Show { json, reveal } => show(&config, json, reveal),
        Commands::Get { key } => {
            println!("{}", config.get(key));
            Ok(())
        }
        Commands::Check { json } => check(&config, json),
        Commands::Template { blank, output } => {
            let config = if blank { TxConfig::empty() } else { config };
            template(&config, output)
        }
        Commands::Keys => {
            for key in ConfigKey::ALL {
                let mut flags = Vec::new();
                if key.is_secret() {
                    flags.push("secret");
                }
                if !key.is_editable() {
                    flags.push("fixed");
                }
                println!("{:<20} {:<14} {}", key.name(), flags.join(","), key.help());
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<TxConfig> {
    let mut config = match &cli.file {
        Some(path) => TxConfig::from_kv_file(path)?,
        None => {
            info!("Using built-in config");
            TxConfig::default()
        }
    };

    for kv in &cli.set {
        let Some((name, value)) = kv.split_once('=') else {
            bail!("--set expects KEY=VALUE, got {kv:?}");
        };
        let key: ConfigKey = name.trim().parse()?;
        config
            .set(key, value)
            .with_context(|| format!("Cannot apply --set {kv:?}"))?;
    }

    Ok(config)
}

fn show(config: &TxConfig, json: bool, reveal: bool) -> anyhow::Result<()> {
    let shown = if reveal {
        config.clone()
    } else {
        config.redacted()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&shown.entries())?);
        return Ok(());
    }

    for (key, value) in shown.entries() {
        println!("{:<20} = {value}", key.name());
    }
    Ok(())
}

fn check(config: &TxConfig, json: bool) -> anyhow::Result<()> {
    let findings = config.check();

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else if findings.is_empty() {
        println!("All settings look usable.");
    } else {
        for f in &findings {
            println!("{f}");
        }
    }

    let invalid = findings
        .iter()
        .filter(|f| f.severity == Severity::Invalid)
        .count();
    if invalid > 0 {
        bail!("{invalid} setting(s) cannot be used as given");
    }
    Ok(())
}

fn template(config: &TxConfig, output: Option<PathBuf>) -> anyhow::Result<()> {
    let text = config.to_kv_string()?;

    match output {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}

// EOF
