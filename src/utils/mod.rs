mod digits;

pub use digits::{ascii_digits, count_ascii_digits, digit_values};
