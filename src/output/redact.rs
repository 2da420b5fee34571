use crate::utils::ascii_digits;

#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub enabled: bool,
    pub visible_digits: usize,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            visible_digits: 2,
        }
    }
}

/// Hide all but the trailing digits of an identifier.
///
/// Punctuation is dropped, so `529.982.247-25` becomes `*********25`.
#[must_use]
pub fn redact_cpf(candidate: &str, config: &RedactionConfig) -> String {
    if !config.enabled {
        return candidate.to_string();
    }

    let digits = ascii_digits(candidate);
    if digits.len() <= config.visible_digits {
        return "[REDACTED]".to_string();
    }

    let hidden = digits.len() - config.visible_digits;
    format!("{}{}", "*".repeat(hidden), &digits[hidden..])
}

/// Redaction used for log events, which never carry full identifiers.
#[must_use]
pub fn redact_for_log(candidate: &str) -> String {
    redact_cpf(candidate, &RedactionConfig::default())
}
