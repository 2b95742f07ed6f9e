//! Attribute name validation.
//!
//! Valid names:
//! - ASCII alphanumeric characters, underscores (`_`), and hyphens (`-`)
//! - Must start with a letter
//! - Cannot have consecutive hyphens (`--`)
//! - Cannot end with a hyphen

use thiserror::Error;

/// Validates an attribute name.
///
/// # Examples
/// ```
/// use skinmatch::attributes::validate_attribute_name;
///
/// assert!(validate_attribute_name("ACNE").is_ok());
/// assert!(validate_attribute_name("BARRIER_REPAIR").is_ok());
/// assert!(validate_attribute_name("vitamin-c").is_ok());
/// assert!(validate_attribute_name("B3").is_ok());
///
/// assert!(validate_attribute_name("").is_err());
/// assert!(validate_attribute_name("-oily").is_err());
/// assert!(validate_attribute_name("oily-").is_err());
/// assert!(validate_attribute_name("anti--aging").is_err());
/// assert!(validate_attribute_name("3D").is_err());
/// ```
pub fn validate_attribute_name(name: &str) -> Result<(), NameValidationError> {
    let Some(first_char) = name.chars().next() else {
        return Err(NameValidationError::Empty);
    };
    if !first_char.is_ascii_alphabetic() {
        return Err(NameValidationError::InvalidStart(first_char));
    }

    if name.ends_with('-') {
        return Err(NameValidationError::EndsWithHyphen);
    }

    let mut prev_was_hyphen = false;
    for ch in name.chars() {
        if !is_valid_name_char(ch) {
            return Err(NameValidationError::InvalidCharacter(ch));
        }

        if ch == '-' {
            if prev_was_hyphen {
                return Err(NameValidationError::ConsecutiveHyphens);
            }
            prev_was_hyphen = true;
        } else {
            prev_was_hyphen = false;
        }
    }

    Ok(())
}

fn is_valid_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Why an attribute name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    #[error("name cannot be empty")]
    Empty,
    #[error("name must start with a letter, found '{0}'")]
    InvalidStart(char),
    #[error("name cannot end with a hyphen")]
    EndsWithHyphen,
    #[error("name cannot contain consecutive hyphens")]
    ConsecutiveHyphens,
    #[error(
        "name contains invalid character '{0}' (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacter(char),
}
