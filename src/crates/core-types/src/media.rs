use serde::{Deserialize, Serialize};

/// Inline file content attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    /// Base64 encoded bytes, without any `data:` URL prefix.
    pub payload: String,
    pub mime_type: String,
}

impl MediaAttachment {
    pub fn new(payload: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            mime_type: mime_type.into(),
        }
    }
}
