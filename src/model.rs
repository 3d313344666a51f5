//! The Message entity and its request body.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Storage-assigned identifier (`serial4` column).
pub type MessageId = i32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    #[serde(rename = "message")]
    pub text: String,
    /// Derived from `text` on every write; never taken from the client.
    #[serde(rename = "ispalindrome")]
    pub is_palindrome: bool,
}

/// Create/update payload. A missing `message` decodes as empty and fails validation later.
#[derive(Clone, Debug, Default)]
pub struct MessageBody {
    pub message: String,
}

/// The key is matched case-insensitively (`Message`, `MESSAGE`), an exact `message` winning.
/// Other keys are ignored whatever their type.
impl<'de> Deserialize<'de> for MessageBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let value = match fields.remove("message") {
            Some(v) => Some(v),
            None => fields
                .into_iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("message"))
                .map(|(_, v)| v),
        };
        let message = match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(<D::Error as de::Error>::invalid_type(unexpected(&other), &"a string"));
            }
        };
        Ok(MessageBody { message })
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
        Value::String(s) => de::Unexpected::Str(s),
        Value::Null => de::Unexpected::Unit,
    }
}
