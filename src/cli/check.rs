use anyhow::Result;

use raiz::output::{format_checks, CpfCheck, OutputFormat};
use raiz::{check_lines, Strictness};

use super::{load_config, read_stdin};

pub fn run_check(
    candidates: &[String],
    format: OutputFormat,
    relaxed: bool,
    profile: Option<&str>,
) -> Result<()> {
    let config = load_config(profile)?;
    let strictness = if relaxed {
        Strictness::LengthOnly
    } else {
        config.cpf.strictness
    };
    if strictness == Strictness::LengthOnly {
        tracing::warn!("check digits are not enforced (strictness = length_only)");
    }

    let checks: Vec<CpfCheck> = if candidates.is_empty() {
        check_lines(&read_stdin()?, strictness)
    } else {
        candidates
            .iter()
            .map(|c| CpfCheck::run(c, strictness))
            .collect()
    };

    if checks.is_empty() {
        anyhow::bail!("No CPF given. Pass candidates as arguments or one per line on stdin.");
    }

    let output = format_checks(&checks, format, &config.redaction());
    println!("{}", output.trim_end());

    if checks.iter().any(|c| !c.valid) {
        std::process::exit(1);
    }

    Ok(())
}
