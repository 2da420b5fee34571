pub mod check;
pub mod form;
pub mod generate;
pub mod init;

use std::io::Read;

use anyhow::{Context, Result};

use raiz::RaizConfig;

/// Load `raiz.toml` (if any), apply `profile`, and set up terminal colors.
pub fn load_config(profile: Option<&str>) -> Result<RaizConfig> {
    let config = RaizConfig::load().context("Failed to load raiz.toml")?;
    let config = match profile {
        Some(name) => config.with_profile(name),
        None => config,
    };
    if !config.output.color {
        colored::control::set_override(false);
    }
    Ok(config)
}

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
