//! Key validation for extended-attribute external ids and group labels.
//!
//! Valid keys:
//! - ASCII letters, digits, underscores (`_`), hyphens (`-`) and dots (`.`)
//! - Not empty, not longer than the configured maximum

/// Validates an external id or group label.
///
/// # Examples
/// ```
/// use querykit::validation::validate_key;
///
/// assert!(validate_key("royalty.rate", 128).is_ok());
/// assert!(validate_key("edition-2024_a", 128).is_ok());
///
/// assert!(validate_key("", 128).is_err());
/// assert!(validate_key("two words", 128).is_err());
/// assert!(validate_key("abcdef", 5).is_err());
/// ```
pub fn validate_key(key: &str, max_length: usize) -> Result<(), KeyValidationError> {
    if key.is_empty() {
        return Err(KeyValidationError::Empty);
    }

    let length = key.chars().count();
    if length > max_length {
        return Err(KeyValidationError::TooLong {
            length,
            max: max_length,
        });
    }

    if let Some(ch) = key.chars().find(|&ch| !is_valid_key_char(ch)) {
        return Err(KeyValidationError::InvalidCharacter(ch));
    }

    Ok(())
}

fn is_valid_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch == '.'
}

/// Error type for key validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationError {
    Empty,
    TooLong { length: usize, max: usize },
    InvalidCharacter(char),
}

impl std::fmt::Display for KeyValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyValidationError::Empty => write!(f, "must not be empty"),
            KeyValidationError::TooLong { length, max } => {
                write!(f, "must be at most {} characters, found {}", max, length)
            }
            KeyValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "contains invalid character '{}' (only letters, digits, underscore, hyphen and dot allowed)",
                    ch
                )
            }
        }
    }
}

impl std::error::Error for KeyValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(validate_key("color", 128).is_ok());
        assert!(validate_key("royalty_rate", 128).is_ok());
        assert!(validate_key("trait.background-color", 128).is_ok());
        assert!(validate_key("2024", 128).is_ok());
    }

    #[test]
    fn test_invalid_empty() {
        assert_eq!(validate_key("", 128), Err(KeyValidationError::Empty));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_key("back ground", 128),
            Err(KeyValidationError::InvalidCharacter(' '))
        );
        assert_eq!(
            validate_key("color/hue", 128),
            Err(KeyValidationError::InvalidCharacter('/'))
        );
        assert_eq!(
            validate_key("farbe-grün", 128),
            Err(KeyValidationError::InvalidCharacter('ü'))
        );
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(validate_key(&"a".repeat(8), 8).is_ok());
        assert_eq!(
            validate_key(&"a".repeat(9), 8),
            Err(KeyValidationError::TooLong { length: 9, max: 8 })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(KeyValidationError::Empty.to_string(), "must not be empty");
        assert_eq!(
            KeyValidationError::TooLong { length: 9, max: 8 }.to_string(),
            "must be at most 8 characters, found 9"
        );
    }
}
