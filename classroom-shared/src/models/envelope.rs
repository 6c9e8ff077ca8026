use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{ success, message, data }` wrapper most backend endpoints return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wraps a payload the way a successful backend response does.
    pub fn ok(data: T) -> Self {
        Self {
            success: Some(true),
            message: None,
            data,
        }
    }
}

/// Returns the `data` member of an enveloped body, or the body itself when it
/// is not wrapped.
///
/// Endpoints are inconsistent about wrapping, so every resource response goes
/// through here before being decoded.
pub fn unwrap_data(mut body: Value) -> Value {
    if let Value::Object(ref mut map) = body {
        if let Some(data) = map.remove("data") {
            return data;
        }
    }
    body
}
