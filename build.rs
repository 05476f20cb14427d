// build.rs

use std::{env, path::Path};

#[path = "src/bake.rs"]
mod bake;

fn main() -> anyhow::Result<()> {
    // The firmware has no filesystem to read secrets from at runtime,
    // so the values end up as compile-time constants via option_env!()
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=src/bake.rs");

    let mut dotenv = Vec::new();
    if Path::new(".env").exists() {
        for item in dotenvy::from_path_iter(".env")? {
            dotenv.push(item?);
        }
    }

    for key in bake::BAKED_KEYS {
        println!("cargo:rerun-if-env-changed={}", bake::env_var_name(key));
    }

    let baked = bake::merge(dotenv, |name| env::var(name).ok());

    for key in &baked.ignored {
        println!("cargo:warning=.env: ignoring key {key}");
    }
    for key in &baked.skipped {
        println!("cargo:warning={key} contains a line break and cannot be baked in, skipped");
    }
    for (key, value) in &baked.values {
        println!("cargo:rustc-env={}={value}", bake::env_var_name(key));
    }

    Ok(())
}

// EOF
