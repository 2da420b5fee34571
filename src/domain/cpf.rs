use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{compute_check_digits, diagnose_cpf};

pub const CPF_LEN: usize = 11;

/// How much of the CPF algorithm a validation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Length, repeated digits and both check digits.
    #[default]
    Strict,
    /// Any 11-digit sequence. Only for development fixtures.
    LengthOnly,
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::LengthOnly => f.write_str("length_only"),
        }
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "strict" => Ok(Self::Strict),
            "length_only" => Ok(Self::LengthOnly),
            _ => Err(format!(
                "Unknown strictness: {s}. Valid options: strict, length_only"
            )),
        }
    }
}

/// Why a candidate is not a valid CPF. Reports the first failing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpfError {
    #[error("CPF must have 11 digits, found {found}")]
    WrongLength { found: usize },

    #[error("CPF digits are all identical")]
    RepeatedDigits,

    #[error("CPF check digit {position} should be {expected}, found {found}")]
    CheckDigit { position: u8, expected: u8, found: u8 },
}

/// A validated CPF, stored as its 11 digits.
///
/// Masked and unmasked spellings of the same number parse to equal values.
/// Serializes as the bare digits; deserializing runs the full validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Cpf {
    digits: [u8; CPF_LEN],
}

impl Cpf {
    /// Parse any spelling of a CPF (`529.982.247-25`, `52998224725`, ...).
    ///
    /// # Errors
    /// Returns the first rule the candidate breaks.
    pub fn parse(candidate: &str) -> Result<Self, CpfError> {
        diagnose_cpf(candidate)
    }

    /// Complete nine base digits with their check digits.
    ///
    /// Returns `None` when a value is not a decimal digit or when the result
    /// would be a repeated-digit sequence, which no one is issued.
    #[must_use]
    pub fn from_base(base: [u8; 9]) -> Option<Self> {
        let [first, second] = compute_check_digits(&base)?;
        let mut digits = [0u8; CPF_LEN];
        digits[..9].copy_from_slice(&base);
        digits[9] = first;
        digits[10] = second;

        if digits.iter().all(|&d| d == digits[0]) {
            return None;
        }
        Some(Self { digits })
    }

    pub(crate) fn from_validated(digits: [u8; CPF_LEN]) -> Self {
        Self { digits }
    }

    /// The 11 digits without punctuation.
    #[must_use]
    pub fn digits(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    #[must_use]
    pub fn as_array(&self) -> [u8; CPF_LEN] {
        self.digits
    }

    #[must_use]
    pub fn check_digits(&self) -> [u8; 2] {
        [self.digits[9], self.digits[10]]
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.digits.iter().enumerate() {
            match i {
                3 | 6 => f.write_char('.')?,
                9 => f.write_char('-')?,
                _ => {}
            }
            f.write_char(char::from(b'0' + d))?;
        }
        Ok(())
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = CpfError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.digits()
    }
}
