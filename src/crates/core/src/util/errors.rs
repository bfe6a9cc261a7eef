use patentpro_ai_adapters::GeminiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatentProError {
    #[error("AI error: {0}")]
    Ai(#[from] GeminiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A request is already in flight for this task")]
    TaskBusy,
}

impl PatentProError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type PatentProResult<T> = Result<T, PatentProError>;
