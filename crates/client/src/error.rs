use std::fmt;

/// Normalized failure raised by every API client operation.
///
/// Errors are never retried or swallowed; recovery and display decisions
/// belong to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Network(String),
    /// The backend answered with a non-success status.
    Server { status: u16, message: String },
}

impl ApiError {
    /// Human-readable message, whatever the variant.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(message) => message,
            ApiError::Server { message, .. } => message,
        }
    }

    /// HTTP status code, for server-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => None,
            ApiError::Server { status, .. } => Some(*status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network failure: {message}"),
            ApiError::Server { status, message } => {
                write!(f, "server error ({status}): {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
