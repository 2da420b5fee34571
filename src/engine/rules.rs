//! Field-level rules shared by the form schemas.
//!
//! A rule inspects one value and yields `Err(message)` on the first
//! constraint it breaks. [`ValidationReport`] keeps one message per field.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::Strictness;
use crate::engine::cpf::{diagnose_cpf, has_valid_length};
use crate::output::redact_for_log;

pub type RuleResult = Result<(), &'static str>;

pub const INVALID_CPF: &str = "invalid CPF";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$|^\d{10,11}$").expect("phone regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a field's rules. Only the first error per field is kept.
    pub fn check(&mut self, field: &'static str, result: RuleResult) {
        let Err(message) = result else {
            return;
        };
        if self.errors.iter().any(|e| e.field == field) {
            return;
        }
        tracing::debug!(field, message, "form field rejected");
        self.errors.push(FieldError { field, message });
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// # Errors
/// `too_short` below `min` characters, `too_long` above `max`.
pub fn length_between(
    value: &str,
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
) -> RuleResult {
    let len = char_len(value);
    if len < min {
        return Err(too_short);
    }
    if len > max {
        return Err(too_long);
    }
    Ok(())
}

/// # Errors
/// `message` when `value` has fewer than `min` characters.
pub fn min_length(value: &str, min: usize, message: &'static str) -> RuleResult {
    if char_len(value) < min {
        return Err(message);
    }
    Ok(())
}

/// # Errors
/// `message` when `value` is empty.
pub fn not_empty(value: &str, message: &'static str) -> RuleResult {
    min_length(value, 1, message)
}

/// # Errors
/// `message` when `re` does not match `value`.
pub fn matches(value: &str, re: &Regex, message: &'static str) -> RuleResult {
    if re.is_match(value) {
        Ok(())
    } else {
        Err(message)
    }
}

/// # Errors
/// [`INVALID_CPF`] when the CPF validator rejects `value` under `strictness`.
pub fn cpf(value: &str, strictness: Strictness) -> RuleResult {
    match strictness {
        Strictness::Strict => diagnose_cpf(value).map(|_| ()).map_err(|reason| {
            tracing::debug!(cpf = %redact_for_log(value), %reason, "CPF rejected");
            INVALID_CPF
        }),
        Strictness::LengthOnly if has_valid_length(value) => Ok(()),
        Strictness::LengthOnly => {
            tracing::debug!(cpf = %redact_for_log(value), "CPF rejected on length");
            Err(INVALID_CPF)
        }
    }
}

/// # Errors
/// `"invalid email"` when `value` is not shaped like `local@domain.tld`.
pub fn email(value: &str) -> RuleResult {
    matches(value, &EMAIL_RE, "invalid email")
}

/// # Errors
/// `"invalid phone format"` unless `value` is `(dd) dddd-dddd`,
/// `(dd) ddddd-dddd`, or 10 to 11 bare digits.
pub fn phone_format(value: &str) -> RuleResult {
    matches(value, &PHONE_RE, "invalid phone format")
}
