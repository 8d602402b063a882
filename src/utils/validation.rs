use crate::utils::error::{LookupError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Table invariant: a dialing code is 1-4 decimal digits, no `+`, no spaces.
pub fn validate_phone_code(field_name: &str, code: &str) -> Result<()> {
    let re = Regex::new(r"^\d{1,4}$").expect("phone code pattern is valid");
    if re.is_match(code) {
        Ok(())
    } else {
        Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "dialing code must be 1-4 decimal digits".to_string(),
        })
    }
}

/// ISO 3166-1 alpha-2: exactly two uppercase ASCII letters.
pub fn validate_iso2(field_name: &str, code: &str) -> Result<()> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "expected a 2-letter uppercase ISO code".to_string(),
        })
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
