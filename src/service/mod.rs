//! Business rules: validation, palindrome derivation, and the message service.

mod messages;
mod validation;
pub use messages::{MessageService, ServiceError};
pub use validation::{is_palindrome, validate_text, ValidationError, MAX_MESSAGE_LEN};
