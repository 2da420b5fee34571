use crate::domain::{Cpf, CpfError, Strictness, CPF_LEN};
use crate::utils::{ascii_digits, count_ascii_digits, digit_values};

/// Strip everything that is not an ASCII digit.
#[must_use]
pub fn normalize_digits(candidate: &str) -> String {
    ascii_digits(candidate)
}

/// Validate a Brazilian CPF using Módulo 11.
///
/// Malformed input of any kind yields `false`; this never panics.
#[must_use]
pub fn validate_cpf(candidate: &str) -> bool {
    diagnose_cpf(candidate).is_ok()
}

/// True when `candidate` carries exactly 11 digits, whatever their values.
#[must_use]
pub fn has_valid_length(candidate: &str) -> bool {
    count_ascii_digits(candidate) == CPF_LEN
}

#[must_use]
pub fn validate_cpf_with(candidate: &str, strictness: Strictness) -> bool {
    match strictness {
        Strictness::Strict => validate_cpf(candidate),
        Strictness::LengthOnly => has_valid_length(candidate),
    }
}

/// Run the CPF algorithm step by step and report the first failure.
///
/// # Errors
/// [`CpfError::WrongLength`] when normalization does not leave 11 digits,
/// [`CpfError::RepeatedDigits`] for sequences like `111.111.111-11`,
/// [`CpfError::CheckDigit`] when either check digit does not match.
pub fn diagnose_cpf(candidate: &str) -> Result<Cpf, CpfError> {
    let values = digit_values(candidate);
    let found = values.len();
    let digits: [u8; CPF_LEN] = values
        .try_into()
        .map_err(|_| CpfError::WrongLength { found })?;

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CpfError::RepeatedDigits);
    }

    let expected = check_digit(&digits[..9]);
    if expected != digits[9] {
        return Err(CpfError::CheckDigit {
            position: 1,
            expected,
            found: digits[9],
        });
    }

    let expected = check_digit(&digits[..10]);
    if expected != digits[10] {
        return Err(CpfError::CheckDigit {
            position: 2,
            expected,
            found: digits[10],
        });
    }

    Ok(Cpf::from_validated(digits))
}

/// Check digits for nine base digits. `None` if any value is above 9.
#[must_use]
pub fn compute_check_digits(base: &[u8; 9]) -> Option<[u8; 2]> {
    if base.iter().any(|&d| d > 9) {
        return None;
    }

    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;

    Some([first, check_digit(&extended)])
}

// Weights run from len + 1 down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(2u32..)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    let rem = (sum * 10) % 11;
    // 10 and 11 both map to 0
    u8::try_from(rem).ok().filter(|&r| r < 10).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_valid_formatted() {
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf("111.444.777-35"));
    }

    #[test]
    fn test_cpf_valid_unformatted() {
        assert!(validate_cpf("52998224725"));
    }

    #[test]
    fn test_cpf_invalid_check_digit() {
        assert!(!validate_cpf("529.982.247-26"));
        assert!(!validate_cpf("123.456.789-00"));
    }

    #[test]
    fn test_cpf_all_same_digits() {
        for d in '0'..='9' {
            let repeated: String = std::iter::repeat(d).take(11).collect();
            assert!(!validate_cpf(&repeated), "{repeated} must be rejected");
        }
    }

    #[test]
    fn test_cpf_wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("123.456.789"));
        assert!(!validate_cpf("123.456.789-012"));
        assert!(!validate_cpf("5299822472X"));
        assert!(!validate_cpf("abcdefghijk"));
    }

    #[test]
    fn test_cpf_ignores_surrounding_noise() {
        assert!(validate_cpf("  CPF: 529 982 247 / 25 "));
    }

    #[test]
    fn test_remainder_ten_maps_to_zero() {
        // 123456789 gives (210 * 10) % 11 == 10 for the first check digit
        assert_eq!(compute_check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), Some([0, 9]));
        assert!(validate_cpf("123.456.789-09"));
        assert!(validate_cpf("987.654.321-00"));
    }

    #[test]
    fn test_compute_check_digits_rejects_non_digits() {
        assert_eq!(compute_check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 12]), None);
    }

    #[test]
    fn test_diagnose_reports_first_failure() {
        assert_eq!(
            diagnose_cpf("5299822472X"),
            Err(CpfError::WrongLength { found: 10 })
        );
        assert_eq!(diagnose_cpf("000.000.000-00"), Err(CpfError::RepeatedDigits));
        assert_eq!(
            diagnose_cpf("529.982.247-35"),
            Err(CpfError::CheckDigit {
                position: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            diagnose_cpf("123.456.789-00"),
            Err(CpfError::CheckDigit {
                position: 2,
                expected: 9,
                found: 0
            })
        );
    }

    #[test]
    fn test_diagnose_returns_cpf() {
        let cpf = diagnose_cpf("529.982.247-25").unwrap();
        assert_eq!(cpf.to_string(), "529.982.247-25");
    }

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("529.982.247-25"), "52998224725");
        assert_eq!(normalize_digits("52998224725"), "52998224725");
        assert_eq!(normalize_digits("no digits"), "");
    }

    #[test]
    fn test_length_only_skips_arithmetic() {
        assert!(validate_cpf_with("123.456.789-00", Strictness::LengthOnly));
        assert!(validate_cpf_with("111.111.111-11", Strictness::LengthOnly));
        assert!(!validate_cpf_with("123.456.789-0", Strictness::LengthOnly));
        assert!(!validate_cpf_with("123.456.789-00", Strictness::Strict));
    }

    #[test]
    fn test_has_valid_length() {
        assert!(has_valid_length("000.000.000-00"));
        assert!(!has_valid_length(""));
        assert!(!has_valid_length("1234567890123"));
    }
}
