use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Client-supplied fields are missing or invalid. The message is shown to the caller as-is.
    #[error("{0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Upstream error: {0}")]
    UpstreamError(String),
    #[error("Generation error: {0}")]
    GenerationError(String),
}

impl ImageGenError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ImageGenError::InvalidInput(_))
    }
}

impl From<reqwest::Error> for ImageGenError {
    fn from(err: reqwest::Error) -> Self {
        ImageGenError::UpstreamError(format!("request to generation service failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ImageGenError>;
