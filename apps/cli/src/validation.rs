//! Caller-side input checks. The client forwards whatever text it is given;
//! enforcement of the character limit and non-emptiness lives here, before a
//! request is ever built.

use crate::errors::InputError;

/// Maximum accepted input length, in characters (not bytes).
pub const CHARACTER_LIMIT: usize = 500;

/// Rejects empty (after trimming) or over-limit input.
pub fn validate_input(text: &str) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let len = text.chars().count();
    if len > CHARACTER_LIMIT {
        return Err(InputError::TooLong { len });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes() {
        assert_eq!(validate_input("How do beta blockers work?"), Ok(()));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(validate_input(""), Err(InputError::Empty));
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert_eq!(validate_input("  \n\t  "), Err(InputError::Empty));
    }

    #[test]
    fn test_exactly_at_limit_passes() {
        let text = "a".repeat(CHARACTER_LIMIT);
        assert_eq!(validate_input(&text), Ok(()));
    }

    #[test]
    fn test_one_over_limit_rejected() {
        let text = "a".repeat(CHARACTER_LIMIT + 1);
        assert_eq!(
            validate_input(&text),
            Err(InputError::TooLong {
                len: CHARACTER_LIMIT + 1
            })
        );
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 500 multibyte characters is within the limit even though the byte
        // length is far larger.
        let text = "й".repeat(CHARACTER_LIMIT);
        assert!(text.len() > CHARACTER_LIMIT);
        assert_eq!(validate_input(&text), Ok(()));
    }
}
