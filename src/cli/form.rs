use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use raiz::output::{format_report, OutputFormat};
use raiz::{validate_json, FormKind};

use super::{load_config, read_stdin};

pub fn run_form(
    kind: FormKind,
    file: Option<&Path>,
    format: OutputFormat,
    profile: Option<&str>,
) -> Result<()> {
    let config = load_config(profile)?;

    let json = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    let report = validate_json(kind, &json, &config.form_rules())
        .with_context(|| format!("Invalid {kind} form payload"))?;

    let output = format_report(kind, &report, format);
    println!("{}", output.trim_end());

    if !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}
