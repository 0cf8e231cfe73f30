use std::fmt;

/// Errors that can occur while talking to the comparison backend.
///
/// The UI collapses all of these into one message; the variants exist so the
/// log says what actually went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The interpolated URL could not be built into a request.
    InvalidUrl(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The body was not valid JSON (or not the expected shape).
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, body } => {
                write!(f, "API error (HTTP {status}): {body}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ApiError::InvalidUrl(e.to_string())
        } else if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
