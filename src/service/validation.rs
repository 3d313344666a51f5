//! Message text validation and palindrome derivation.

use thiserror::Error;

/// Upper bound on message length, in characters. Matches the `varchar(100)` column.
pub const MAX_MESSAGE_LEN: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("message cannot be longer than {} characters", MAX_MESSAGE_LEN)]
    TooLong,
    #[error("message cannot be an empty string")]
    Empty,
}

/// Accepts 1..=100 characters. Whitespace, control characters and anything else are allowed.
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong);
    }
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Exact match against the reversed text: case and whitespace sensitive, no normalization.
/// Walks inward from both ends one character at a time.
pub fn is_palindrome(text: &str) -> bool {
    let mut chars = text.chars();
    loop {
        match (chars.next(), chars.next_back()) {
            (Some(front), Some(back)) if front != back => return false,
            (Some(_), Some(_)) => {}
            _ => return true,
        }
    }
}
