use crate::error::CoreError;
use serde::{Deserialize, Serialize};

const MIN_PHONE_DIGITS: usize = 10;
/// E.164 limit; also the width of `pool_signups.phone_number`.
const MAX_PHONE_DIGITS: usize = 15;

/// A bingo pool registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSignup {
    name: String,
    phone_number: String,
}

impl PoolSignup {
    /// Validates a registration.
    ///
    /// The name is trimmed and must not be empty. The phone number keeps only
    /// its digits and needs between ten and fifteen of them.
    pub fn new(name: &str, phone_number: &str) -> std::result::Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidSignup("name is required".to_string()));
        }

        let digits: String = phone_number.chars().filter(char::is_ascii_digit).collect();
        if digits.len() < MIN_PHONE_DIGITS {
            return Err(CoreError::InvalidSignup(format!(
                "phone number needs at least {} digits, got {}",
                MIN_PHONE_DIGITS,
                digits.len()
            )));
        }
        if digits.len() > MAX_PHONE_DIGITS {
            return Err(CoreError::InvalidSignup(format!(
                "phone number has at most {} digits, got {}",
                MAX_PHONE_DIGITS,
                digits.len()
            )));
        }

        Ok(Self {
            name: name.to_owned(),
            phone_number: digits,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The phone number reduced to digits.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_phone_number() {
        let signup = PoolSignup::new("  Sam  ", "(555) 123-4567").unwrap();
        assert_eq!(signup.name(), "Sam");
        assert_eq!(signup.phone_number(), "5551234567");
    }

    #[test]
    fn rejects_blank_name() {
        assert!(PoolSignup::new("   ", "5551234567").is_err());
    }

    #[test]
    fn rejects_overlong_phone_number() {
        assert!(PoolSignup::new("Sam", "+44 20 7946 0958 123").is_ok());

        let err = PoolSignup::new("Sam", &"5".repeat(16)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSignup(_)));
    }

    #[test]
    fn rejects_short_phone_number() {
        let err = PoolSignup::new("Sam", "555-1234").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSignup(_)));
    }
}
