//! Field rules shared by the user and address input types.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::PHONE_NUMBER_DIGITS;
use crate::errors::{AppError, AppResult};

/// Return true if the phone number is exactly the required count of ASCII digits.
///
/// ```
/// assert!(user_management::domain::validation::is_valid_phone_number("1234567890"));
/// assert!(!user_management::domain::validation::is_valid_phone_number("12345"));
/// ```
pub fn is_valid_phone_number(phone: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        let pattern = format!("^[0-9]{{{PHONE_NUMBER_DIGITS}}}$");
        Regex::new(&pattern).expect("valid regex")
    });
    RE.is_match(phone)
}

/// Reject empty or whitespace-only values with `message`.
pub fn require_not_blank(value: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(())
}

/// Phone number must be present and match the digit pattern.
pub fn require_phone_number(phone: &str) -> AppResult<()> {
    require_not_blank(phone, "Phone number is required")?;
    if !is_valid_phone_number(phone) {
        return Err(AppError::validation(format!(
            "Phone number must be {} digits",
            PHONE_NUMBER_DIGITS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_pattern() {
        assert!(is_valid_phone_number("0123456789"));
        assert!(!is_valid_phone_number("123456789"));
        assert!(!is_valid_phone_number("12345678901"));
        assert!(!is_valid_phone_number("12345-7890"));
        assert!(!is_valid_phone_number(" 1234567890"));
        // Non-ASCII digits are rejected
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_require_not_blank() {
        assert!(require_not_blank("alice", "Username is required").is_ok());

        let err = require_not_blank("   ", "Username is required").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Username is required"));
    }

    #[test]
    fn test_require_phone_number_messages() {
        let err = require_phone_number("").unwrap_err();
        assert_eq!(err.to_string(), "Phone number is required");

        let err = require_phone_number("abc").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must be 10 digits");
    }
}
