use thiserror::Error;

/// The first image returned for a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Please provide a prompt!")]
    EmptyPrompt,
    #[error("image request failed: {0}")]
    Request(String),
    #[error("malformed image response: {0}")]
    Malformed(String),
}
