//! Error types

mod api;
mod field;
mod remote;

pub use api::*;
pub use field::*;
pub use remote::*;

/// Top-level error returned by every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client could not be constructed (missing API key, bad endpoint).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A query was issued with a missing or invalid argument.
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// The remote API reported a failure, or the response broke the query's contract.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A typed record accessor failed.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl Error {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a new parameter error.
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter(message.into())
    }

    /// Returns the API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Api(ApiError::Network(e))
    }
}
