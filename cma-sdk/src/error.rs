// ABOUTME: Custom error types for the CMA SDK with user-friendly messages
// ABOUTME: Covers API, image decoding, parameter, and unsupported-endpoint failures

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmaError {
    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Could not decode image data: {0}")]
    ImageDecode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("The {0} endpoint is not supported yet")]
    Unsupported(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Invalid API response format")]
    InvalidResponse,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CmaError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            CmaError::Http { status: 404, .. } => {
                Some("Check the artwork id, or look it up with: cma artwork --search <terms>")
            }
            CmaError::Unsupported(_) => {
                Some("Only the artwork endpoint is available in the open access API wrapper")
            }
            CmaError::Network(_) => Some("Check your internet connection and try again"),
            CmaError::Timeout => Some("Try again or check your network connection"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CmaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CmaError::Timeout
        } else {
            CmaError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CmaError {
    fn from(_err: serde_json::Error) -> Self {
        CmaError::InvalidResponse
    }
}

impl From<image::ImageError> for CmaError {
    fn from(err: image::ImageError) -> Self {
        CmaError::ImageDecode(err.to_string())
    }
}
