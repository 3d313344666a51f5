//! Response body helpers.

use serde::Serialize;

/// Body returned for every failed request: `{"error": "..."}`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_as_single_field_object() {
        let body = serde_json::to_value(error_body("an error has occurred")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "an error has occurred" }));
    }
}
