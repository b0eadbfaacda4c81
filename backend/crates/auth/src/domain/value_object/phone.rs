//! Phone Value Object
//!
//! The unique login identifier for users. Stored in a normalized form
//! (digits with an optional leading `+`) so lookups are insensitive to
//! formatting differences like spaces and dashes.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Minimum digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 7;

/// Maximum digits in a phone number (ITU-T E.164)
pub const MAX_PHONE_DIGITS: usize = 15;

/// Normalized phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parse and normalize a phone number.
    ///
    /// Accepts digits with optional separators (space, dash, dot,
    /// parentheses) and an optional leading `+`. Anything else is rejected.
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(AppError::bad_request("Phone number cannot be empty"));
        }

        let mut normalized = String::with_capacity(raw.len());
        for (i, ch) in raw.chars().enumerate() {
            match ch {
                '+' if i == 0 => normalized.push('+'),
                '0'..='9' => normalized.push(ch),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => {
                    return Err(AppError::bad_request(format!(
                        "Phone number contains invalid character: {:?}",
                        ch
                    )));
                }
            }
        }

        let digit_count = normalized.chars().filter(|c| c.is_ascii_digit()).count();
        if digit_count < MIN_PHONE_DIGITS {
            return Err(AppError::bad_request(format!(
                "Phone number must have at least {} digits",
                MIN_PHONE_DIGITS
            )));
        }
        if digit_count > MAX_PHONE_DIGITS {
            return Err(AppError::bad_request(format!(
                "Phone number must have at most {} digits",
                MAX_PHONE_DIGITS
            )));
        }

        Ok(Self(normalized))
    }

    /// Reconstruct from an already-normalized database value.
    pub fn from_db(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_normalization() {
        let phone = Phone::new("+91 98765-43210").unwrap();
        assert_eq!(phone.as_str(), "+919876543210");

        let phone = Phone::new("(555) 123.4567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_empty() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("   ").is_err());
    }

    #[test]
    fn test_phone_too_short() {
        assert!(Phone::new("12345").is_err());
    }

    #[test]
    fn test_phone_too_long() {
        assert!(Phone::new("1234567890123456").is_err());
    }

    #[test]
    fn test_phone_invalid_characters() {
        assert!(Phone::new("98765abcde").is_err());
        assert!(Phone::new("9876+543210").is_err()); // '+' only allowed first
    }

    #[test]
    fn test_phone_equality_after_normalization() {
        let a = Phone::new("+91 98765 43210").unwrap();
        let b = Phone::new("+919876543210").unwrap();
        assert_eq!(a, b);
    }
}
