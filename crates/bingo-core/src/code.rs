use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Symbols a card code is drawn from.
///
/// Uppercase letters and digits without the look-alikes `0`, `O`, `1`, `I`
/// and `L`, so a code read off a printed card can be typed back in.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Number of symbols in every card code.
pub const CODE_LENGTH: usize = 6;

/// A short, shareable identifier for a saved bingo card.
///
/// Codes are always held in uppercase, so two codes compare equal
/// regardless of the case they were typed in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardCode(String);

impl CardCode {
    /// Parses a user supplied code.
    ///
    /// Surrounding whitespace is ignored and lowercase input is accepted.
    pub fn parse(code: &str) -> std::result::Result<Self, CoreError> {
        let normalized = code.trim().to_ascii_uppercase();
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Creates a `CardCode` without validation.
    ///
    /// Use this only for codes produced by generators that draw from
    /// [`CODE_ALPHABET`].
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() != CODE_LENGTH {
            return Err(CoreError::InvalidCardCode(format!(
                "length must be {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if let Some(c) = code.bytes().find(|b| !CODE_ALPHABET.contains(b)) {
            return Err(CoreError::InvalidCardCode(format!(
                "unexpected character '{}' in '{}'",
                c as char, code
            )));
        }

        Ok(())
    }
}

impl Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CardCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CardCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CardCode> for String {
    fn from(value: CardCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_excludes_ambiguous_symbols() {
        for c in [b'0', b'O', b'1', b'I', b'L'] {
            assert!(!CODE_ALPHABET.contains(&c), "{} must not be used", c as char);
        }
    }

    #[test]
    fn alphabet_symbols_are_unique() {
        let unique: HashSet<_> = CODE_ALPHABET.iter().collect();
        assert_eq!(unique.len(), CODE_ALPHABET.len());
    }

    #[test]
    fn parse_valid_code() {
        let code = CardCode::parse("ABC234").unwrap();
        assert_eq!(code.as_str(), "ABC234");
    }

    #[test]
    fn parse_is_case_insensitive() {
        let lower = CardCode::parse("abc234").unwrap();
        let upper = CardCode::parse("ABC234").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_str(), "ABC234");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(CardCode::parse("  xyz789 ").unwrap().as_str(), "XYZ789");
    }

    #[test]
    fn wrong_length() {
        assert!(CardCode::parse("").is_err());
        assert!(CardCode::parse("ABC23").is_err());
        assert!(CardCode::parse("ABC2345").is_err());
    }

    #[test]
    fn ambiguous_characters_are_rejected() {
        assert!(CardCode::parse("ABC0DE").is_err());
        assert!(CardCode::parse("ABCODE").is_err());
        assert!(CardCode::parse("ABC1DE").is_err());
        assert!(CardCode::parse("ABCIDE").is_err());
        assert!(CardCode::parse("abclde").is_err());
    }

    #[test]
    fn punctuation_is_rejected() {
        assert!(CardCode::parse("AB-CDE").is_err());
        assert!(CardCode::parse("AB CDE").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let code: CardCode = serde_json::from_str("\"hjk234\"").unwrap();
        assert_eq!(code.as_str(), "HJK234");

        let err = serde_json::from_str::<CardCode>("\"nope\"");
        assert!(err.is_err());
    }

    #[test]
    fn serialize_as_plain_string() {
        let code = CardCode::parse("HJK234").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"HJK234\"");
    }
}
