// lib.rs

mod keys;
pub use keys::*;

mod config;
pub use config::*;

mod kvfile;

mod check;
pub use check::*;

// compiled for real by build.rs
#[cfg(test)]
mod bake;

pub const FW_VERSION: &str = env!("CARGO_PKG_VERSION");

// EOF
