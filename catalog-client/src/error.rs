use thiserror::Error;

/// Fallback for a non-2xx search response without a usable `error` field.
pub const SEARCH_FAILED: &str = "Search request failed";

/// Shown when an error carries no message at all.
pub const GENERIC_SEARCH_ERROR: &str = "An error occurred during search. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),

    /// Connection or I/O failure before a response arrived.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("{0}")]
    Decode(String),

    /// Non-2xx response; `message` is what the user sees.
    #[error("{message}")]
    Http { status: u16, message: String },
}

impl ClientError {
    /// Text for the error banner.
    pub fn banner_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_SEARCH_ERROR.to_string()
        } else {
            msg
        }
    }
}
