use async_trait::async_trait;
use thiserror::Error;

/// Why a completion request produced no usable text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("No API key configured")]
    MissingCredential,
    #[error("Authentication failed (status {0})")]
    Authentication(u16),
    #[error("Endpoint not found")]
    NotFound,
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("API request failed: status {status}, body: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response format: {0}")]
    Malformed(String),
}

impl CompletionError {
    /// Short label for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::MissingCredential => "missing_credential",
            CompletionError::Authentication(_) => "authentication",
            CompletionError::NotFound => "not_found",
            CompletionError::Timeout => "timeout",
            CompletionError::Network(_) => "network",
            CompletionError::Status { .. } => "status",
            CompletionError::Malformed(_) => "malformed",
        }
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => CompletionError::Authentication(status),
            404 => CompletionError::NotFound,
            _ => CompletionError::Status {
                status,
                body: body.chars().take(200).collect(),
            },
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else if e.is_decode() {
            CompletionError::Malformed(e.to_string())
        } else {
            CompletionError::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    fn get_model_info(&self) -> String;
}
