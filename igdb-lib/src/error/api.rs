//! API error types

use super::RemoteErrorDetail;

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP status from the API.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Structured error reported by IGDB, if the body carried one.
        detail: Option<Box<RemoteErrorDetail>>,
    },

    /// A success response whose body is an IGDB error payload.
    #[error("Remote error: {detail}")]
    Remote {
        /// HTTP status code of the response that carried the payload.
        status: u16,
        /// The reported error.
        detail: Box<RemoteErrorDetail>,
    },

    /// A single-result query matched more than one record.
    #[error("Expected single result, found {found}")]
    UnexpectedCount {
        /// Number of records returned.
        found: usize,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a new HTTP error with the error reported by IGDB.
    pub fn http_with_detail(status: u16, detail: RemoteErrorDetail) -> Self {
        Self::Http {
            status,
            message: detail.to_string(),
            detail: Some(Box::new(detail)),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if the remote side answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Remote { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the IGDB error detail if available.
    pub fn remote_detail(&self) -> Option<&RemoteErrorDetail> {
        match self {
            Self::Http { detail, .. } => detail.as_deref(),
            Self::Remote { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
