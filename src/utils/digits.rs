/// Keep only the ASCII decimal digits of `input`, in order.
#[must_use]
pub fn ascii_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII decimal digits of `input`.
#[must_use]
pub fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

#[must_use]
pub fn count_ascii_digits(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits_strips_punctuation() {
        assert_eq!(ascii_digits("529.982.247-25"), "52998224725");
        assert_eq!(ascii_digits(" (11) 9 8888-7777 "), "11988887777");
    }

    #[test]
    fn test_ascii_digits_ignores_non_ascii_numerals() {
        // Arabic-Indic and full-width digits are not ASCII digits
        assert_eq!(ascii_digits("١٢٣１２３456"), "456");
        assert_eq!(count_ascii_digits("١٢٣１２３456"), 3);
    }

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_values("0-9a5"), vec![0, 9, 5]);
        assert!(digit_values("").is_empty());
    }
}
