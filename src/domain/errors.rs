use thiserror::Error;

/// Failure of a source fetch. The display message is shown to the user verbatim.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(String),
    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::MalformedPayload(message.into())
    }

    pub fn request(message: impl Into<String>) -> Self {
        FetchError::Request(message.into())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedPayload(err.to_string())
    }
}
