//! CPF (Cadastro de Pessoas Físicas) identifiers.
//!
//! A CPF is 11 decimal digits, the last two being mod-11 verification
//! digits computed from the first nine. Input usually arrives formatted
//! (`529.982.247-25`), so everything here normalizes first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a normalized CPF.
pub const CPF_LEN: usize = 11;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpfError {
    #[error("invalid CPF")]
    Invalid,
}

/// Strip every character that is not an ASCII digit, keeping order.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Compute both verification digits for a 9-digit base.
///
/// Digit values must be in `0..=9`.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = verification_digit(base.iter().copied(), 10);
    let second = verification_digit(base.iter().copied().chain([first]), 11);
    [first, second]
}

fn verification_digit(digits: impl Iterator<Item = u8>, top_weight: u32) -> u8 {
    let sum: u32 = digits
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| u32::from(digit) * weight)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Full validity check. Accepts raw or already normalized input.
pub fn is_valid(raw: &str) -> bool {
    let normalized = normalize(raw);
    if normalized.len() != CPF_LEN {
        return false;
    }

    let digits: Vec<u8> = normalized.bytes().map(|b| b - b'0').collect();
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    // The second sum runs over the input's own tenth digit, not
    // the recomputed one.
    let first = verification_digit(digits[..9].iter().copied(), 10);
    let second = verification_digit(digits[..10].iter().copied(), 11);

    digits[9] == first && digits[10] == second
}

/// Render a valid CPF as `XXX.XXX.XXX-XX`.
pub fn format(raw: &str) -> Option<String> {
    Cpf::parse(raw).ok().map(|cpf| cpf.to_string())
}

/// A CPF that passed [`is_valid`], stored as its 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(raw: &str) -> Result<Self, CpfError> {
        if is_valid(raw) {
            Ok(Self(normalize(raw)))
        } else {
            Err(CpfError::Invalid)
        }
    }

    /// The digits-only form, suitable as a lookup key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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
        cpf.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize("529.982.247-25"), "52998224725");
        assert_eq!(normalize(" 529 982 247 25 "), "52998224725");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not CPF digits
        assert_eq!(normalize("١٢٣"), "");
        assert_eq!(normalize("１2３"), "2");
    }

    #[test]
    fn test_known_valid() {
        assert!(is_valid("529.982.247-25"));
        assert!(is_valid("52998224725"));
    }

    #[test]
    fn test_known_invalid() {
        assert!(!is_valid("111.111.111-11"));
        assert!(!is_valid("123.456.789-00"));
        assert!(!is_valid(""));
        assert!(!is_valid("not a cpf"));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        assert!(!is_valid("5299822472"));
        assert!(!is_valid("529982247250"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in '0'..='9' {
            let repeated: String = std::iter::repeat(d).take(CPF_LEN).collect();
            assert!(!is_valid(&repeated), "{} should be rejected", repeated);
        }
    }

    #[test]
    fn test_check_digits_matches_known_cpf() {
        assert_eq!(check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
        assert_eq!(check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), [0, 9]);
    }

    #[test]
    fn test_check_digits_edge_remainders() {
        // 100000000: first sum 10 -> r 10 -> 1; second sum 11 + 2 -> r 2 -> 9
        assert_eq!(check_digits(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), [1, 9]);
        // 000000001: first sum 2 -> r 2 -> 9; second sum 3 + 18 = 21 -> r 10 -> 1
        assert_eq!(check_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), [9, 1]);
        // 000000010: first sum 3 -> 8; second 4 + 16 = 20 -> r 9 -> 2
        assert_eq!(check_digits(&[0, 0, 0, 0, 0, 0, 0, 1, 0]), [8, 2]);
        // remainder 1 maps to 0
        assert_eq!(check_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 6])[0], 0);
    }

    #[test]
    fn test_format_masks_valid_cpf() {
        assert_eq!(format("52998224725").as_deref(), Some("529.982.247-25"));
        assert_eq!(format("12345678900"), None);
    }

    #[test]
    fn test_cpf_parse() {
        let cpf: Cpf = "529.982.247-25".parse().unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
        assert_eq!(cpf.to_string(), "529.982.247-25");
        assert_eq!(Cpf::parse("111.111.111-11"), Err(CpfError::Invalid));
    }

    #[test]
    fn test_cpf_error_message() {
        assert_eq!(CpfError::Invalid.to_string(), "invalid CPF");
    }
}
