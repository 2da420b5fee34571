use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::engine::{FieldError, FormKind, ValidationReport};
use crate::output::redact::{redact_cpf, RedactionConfig};
use crate::output::report::{summarize, CheckSummary, CpfCheck};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {s}. Valid options: terminal, json")),
        }
    }
}

#[derive(Serialize)]
struct ChecksOutput {
    checks: Vec<CpfCheck>,
    summary: CheckSummary,
}

#[derive(Serialize)]
struct FormOutput<'a> {
    form: FormKind,
    valid: bool,
    errors: &'a [FieldError],
}

fn redacted(check: &CpfCheck, redaction: &RedactionConfig) -> CpfCheck {
    CpfCheck {
        input: redact_cpf(&check.input, redaction),
        formatted: check.formatted.as_deref().map(|f| redact_cpf(f, redaction)),
        ..check.clone()
    }
}

#[must_use]
pub fn format_checks(
    checks: &[CpfCheck],
    format: OutputFormat,
    redaction: &RedactionConfig,
) -> String {
    let visible: Vec<CpfCheck> = checks.iter().map(|c| redacted(c, redaction)).collect();
    match format {
        OutputFormat::Terminal => format_checks_terminal(&visible),
        OutputFormat::Json => format_checks_json(visible),
    }
}

fn format_checks_terminal(checks: &[CpfCheck]) -> String {
    let mut output = String::new();

    for check in checks {
        let shown = check.formatted.as_deref().unwrap_or(&check.input);
        if check.valid {
            let _ = write!(output, "{} {}", "✓".green().bold(), shown.bright_white());
            if let Some(reason) = &check.reason {
                let _ = write!(output, "  {}", format!("(unchecked: {reason})").dimmed());
            }
        } else {
            let _ = write!(
                output,
                "{} {}  {}",
                "✗".red().bold(),
                shown.bright_white(),
                check.reason.as_deref().unwrap_or("invalid CPF").red()
            );
        }
        output.push('\n');
    }

    let summary = summarize(checks);
    let verdict = format!("{} valid, {} invalid", summary.valid, summary.invalid);
    if summary.invalid == 0 {
        let _ = writeln!(output, "{}", verdict.green().bold());
    } else {
        let _ = writeln!(output, "{}", verdict.red().bold());
    }

    output
}

fn format_checks_json(checks: Vec<CpfCheck>) -> String {
    let summary = summarize(&checks);
    let output = ChecksOutput { checks, summary };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

#[must_use]
pub fn format_report(kind: FormKind, report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal => format_report_terminal(kind, report),
        OutputFormat::Json => {
            let output = FormOutput {
                form: kind,
                valid: report.is_valid(),
                errors: report.errors(),
            };
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

fn format_report_terminal(kind: FormKind, report: &ValidationReport) -> String {
    let mut output = String::new();

    if report.is_valid() {
        let _ = writeln!(
            output,
            "{} {} form is valid",
            "✓".green().bold(),
            kind.to_string().bright_cyan().bold()
        );
        return output;
    }

    let _ = writeln!(
        output,
        "{} {} form has {} invalid field{}",
        "✗".red().bold(),
        kind.to_string().bright_cyan().bold(),
        report.errors().len(),
        if report.errors().len() == 1 { "" } else { "s" }
    );
    for error in report.errors() {
        let _ = writeln!(
            output,
            "  {:<18} {}",
            error.field.bright_white(),
            error.message.red()
        );
    }

    output
}
