//! CPF validation and registration form rules for the Mãe Raiz platform.
//!
//! The core is [`validate_cpf`], the Brazilian CPF Módulo 11 check. Around it
//! sit a typed [`Cpf`] value, per-step diagnostics, check-digit generation,
//! input masks and the canonical solo-mother, professional and login schemas.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod utils;

pub use config::RaizConfig;
pub use domain::{Cpf, CpfError, Strictness, UserKind};
pub use engine::{
    compute_check_digits, diagnose_cpf, generate_cpf, generate_cpfs, has_valid_length, mask_cpf,
    mask_phone, normalize_digits, validate_cpf, validate_cpf_with, validate_json, Form, FormKind,
    FormRules, LoginForm, ProfessionalForm, SoloMotherForm, ValidationReport,
};
pub use error::{RaizError, Result as RaizResult};
pub use output::{OutputFormat, RedactionConfig};

/// Check every line of `text` as a CPF candidate, skipping blank lines.
///
/// # Example
/// ```
/// use raiz::{check_lines, Strictness};
///
/// let checks = check_lines("529.982.247-25\n\n111.111.111-11\n", Strictness::Strict);
/// assert_eq!(checks.len(), 2);
/// assert!(checks[0].valid);
/// assert!(!checks[1].valid);
/// ```
#[must_use]
pub fn check_lines(text: &str, strictness: Strictness) -> Vec<output::CpfCheck> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| output::CpfCheck::run(line, strictness))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lines_trims_and_skips_blanks() {
        let checks = check_lines("  52998224725  \n\t\n5299822472X", Strictness::Strict);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].input, "52998224725");
        assert!(checks[0].valid);
        assert!(!checks[1].valid);
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cpf>();
        assert_send_sync::<CpfError>();
        assert_send_sync::<ValidationReport>();
        assert_send_sync::<RaizConfig>();
    }

    #[test]
    fn test_validator_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| validate_cpf("529.982.247-25")))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
