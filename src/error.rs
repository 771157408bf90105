use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Screenshot error: {0}")]
    Screenshot(String),
}

impl ScrapeError {
    pub fn browser(message: impl Into<String>) -> Self {
        ScrapeError::Browser(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
