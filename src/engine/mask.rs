//! Input masks applied while a user types into the CPF and phone fields.

use crate::domain::CPF_LEN;
use crate::utils::ascii_digits;

/// Format a CPF as `ddd.ddd.ddd-dd` once it has all 11 digits.
///
/// Shorter input collapses to its bare digits; input with more than
/// 11 digits is returned untouched so the field can report it.
#[must_use]
pub fn mask_cpf(input: &str) -> String {
    let digits = ascii_digits(input);
    match digits.len() {
        CPF_LEN => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        n if n < CPF_LEN => digits,
        _ => input.to_string(),
    }
}

/// Format a Brazilian phone as `(dd) dddd-dddd` or `(dd) ddddd-dddd`.
#[must_use]
pub fn mask_phone(input: &str) -> String {
    let digits = ascii_digits(input);
    match digits.len() {
        10 | 11 => {
            let split = digits.len() - 4;
            format!("({}) {}-{}", &digits[..2], &digits[2..split], &digits[split..])
        }
        n if n < 10 => digits,
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_cpf_complete() {
        assert_eq!(mask_cpf("52998224725"), "529.982.247-25");
        assert_eq!(mask_cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(mask_cpf("529 982 247 25"), "529.982.247-25");
    }

    #[test]
    fn test_mask_cpf_partial_keeps_digits() {
        assert_eq!(mask_cpf("529.98"), "52998");
        assert_eq!(mask_cpf(""), "");
    }

    #[test]
    fn test_mask_cpf_too_long_is_untouched() {
        assert_eq!(mask_cpf("529.982.247-251"), "529.982.247-251");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(mask_phone("11999998888"), "(11) 99999-8888");
        assert_eq!(mask_phone("(11) 99999-8888"), "(11) 99999-8888");
        assert_eq!(mask_phone("11 9999"), "119999");
        assert_eq!(mask_phone("+55 11 99999-8888"), "+55 11 99999-8888");
    }
}
