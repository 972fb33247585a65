use thiserror::Error;

/// Errors surfaced by the UR Chintai client
#[derive(Debug, Error)]
pub enum UrError {
    /// A required URL argument was missing
    #[error("UR Chintai URL cannot be empty")]
    EmptyInput,

    /// Neither alternative input was supplied, or a required one was empty
    #[error("{0}")]
    InvalidArgument(String),

    /// The URL does not follow the listing page grammar
    #[error("UR Chintai URL is invalid: {url}")]
    InvalidFormat { url: String },

    /// The listing page lacks the property name markup
    #[error("Cannot parse property name from html doc")]
    ParseError,

    /// The remote service answered with a non-200 status
    #[error("An error occurred while sending request to {url}: {body}")]
    Connection { url: String, body: String },

    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, UrError>;

impl UrError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
