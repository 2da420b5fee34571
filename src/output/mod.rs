mod formatter;
mod redact;
mod report;

pub use formatter::{format_checks, format_report, OutputFormat};
pub use redact::{redact_cpf, redact_for_log, RedactionConfig};
pub use report::{summarize, CheckSummary, CpfCheck};
