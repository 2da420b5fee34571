use serde::Serialize;

use crate::domain::Strictness;
use crate::engine::{diagnose_cpf, has_valid_length, mask_cpf};

/// Verdict for one candidate passed to `raiz check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpfCheck {
    pub input: String,
    pub valid: bool,
    pub strictness: Strictness,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CpfCheck {
    /// Under `LengthOnly` a candidate may be valid and still carry a
    /// `reason`: the check-digit failure that was not enforced.
    #[must_use]
    pub fn run(input: &str, strictness: Strictness) -> Self {
        let diagnosis = diagnose_cpf(input);
        let valid = match strictness {
            Strictness::Strict => diagnosis.is_ok(),
            Strictness::LengthOnly => has_valid_length(input),
        };
        Self {
            input: input.to_string(),
            valid,
            strictness,
            formatted: valid.then(|| mask_cpf(input)),
            reason: diagnosis.err().map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub valid: usize,
    pub invalid: usize,
}

#[must_use]
pub fn summarize(checks: &[CpfCheck]) -> CheckSummary {
    let valid = checks.iter().filter(|c| c.valid).count();
    CheckSummary {
        valid,
        invalid: checks.len() - valid,
    }
}
