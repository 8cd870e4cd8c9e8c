//! Shape of a retrieval response as seen by clients.
//!
//! The server answers `GET /view` with plain text, but clients also accept a
//! JSON body (a bare string, or an object carrying the message under one of a
//! few field names) so they keep working against servers that wrap it.

use serde_json::Value;

use crate::constants::NO_MESSAGE_FOUND;

/// Object fields consulted for the message, in precedence order.
pub const MESSAGE_FIELDS: [&str; 3] = ["currentMessage", "message", "text"];

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Text(String),
    Json(Value),
}

impl ResponseBody {
    /// Classify a raw body by its `Content-Type`. A body that claims to be
    /// JSON but does not parse is kept as text.
    pub fn from_raw(content_type: Option<&str>, body: String) -> Self {
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);
        if !is_json {
            return Self::Text(body);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }
}

/// The text to display for a retrieval response.
pub fn normalize_response(body: &ResponseBody) -> String {
    match body {
        ResponseBody::Text(text) => text.clone(),
        ResponseBody::Json(Value::String(text)) => text.clone(),
        ResponseBody::Json(Value::Object(map)) => MESSAGE_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| NO_MESSAGE_FOUND.to_string()),
        ResponseBody::Json(_) => NO_MESSAGE_FOUND.to_string(),
    }
}
