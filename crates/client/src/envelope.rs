//! Uniform result envelope for API calls.

use serde::Serialize;
use serde_json::Value;

/// Outcome of one API call, as the console renders it.
///
/// Exactly one of three shapes: `{success: true, status, data}` for 2xx,
/// `{success: false, status, data}` for a server rejection with a parsed
/// body, `{success: false, error}` when the request never produced a JSON
/// response (connection refused, DNS, unparsable body).
#[derive(Debug, Clone, Serialize)]
pub struct ApiOutcome {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiOutcome {
    pub fn ok(status: u16, data: Value) -> Self {
        Self {
            success: true,
            status: Some(status),
            data: Some(data),
            error: None,
        }
    }

    pub fn rejected(status: u16, data: Value) -> Self {
        Self {
            success: false,
            status: Some(status),
            data: Some(data),
            error: None,
        }
    }

    pub fn network_failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Server-provided message, reading `message` with an `msg` fallback.
    pub fn message(&self) -> Option<&str> {
        let data = self.data.as_ref()?;
        data.get("message")
            .or_else(|| data.get("msg"))
            .and_then(Value::as_str)
    }

    /// Value at a JSON pointer inside `data`, e.g. `/data/access_token`.
    pub fn data_pointer(&self, pointer: &str) -> Option<&Value> {
        self.data.as_ref()?.pointer(pointer)
    }
}
