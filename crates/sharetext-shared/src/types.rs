use serde::{Deserialize, Serialize};

/// Body of `POST /`.
///
/// Both fields are optional on the wire: a missing `message` is a validation
/// failure decided by the server, not a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SubmitRequest {
    pub fn new(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            message: Some(message.into()),
            id,
        }
    }

    /// The trimmed message, or `None` when it is absent or blank.
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Word and character counts shown next to a retrieved message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub words: usize,
    pub characters: usize,
}

impl MessageStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split(' ').filter(|w| !w.is_empty()).count(),
            characters: text.chars().count(),
        }
    }
}

impl std::fmt::Display for MessageStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} words, {} characters", self.words, self.characters)
    }
}
