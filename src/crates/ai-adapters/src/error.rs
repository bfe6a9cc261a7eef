use thiserror::Error;

/// Failure of one Gemini round trip.
///
/// The adapter hands these back to callers untouched; no variant is retried.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API key not found in environment (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Gemini response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type GeminiResult<T> = Result<T, GeminiError>;
