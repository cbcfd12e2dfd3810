use thiserror::Error;

/// Cap on a whole request: head plus declared body.
pub const MAX_MESSAGE_BYTES: usize = 1024 * 1024;
/// Cap on the request line and headers.
pub const MAX_HEADER_BYTES: usize = 16 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    #[error("request of {actual} bytes exceeds the {max} byte limit")]
    TooLarge { max: usize, actual: usize },
    #[error("request head of {actual} bytes exceeds the {max} byte limit")]
    HeaderTooLarge { max: usize, actual: usize },
}

pub fn enforce_max_message_size(len: usize) -> Result<(), LimitError> {
    match len {
        actual if actual > MAX_MESSAGE_BYTES => {
            Err(LimitError::TooLarge { max: MAX_MESSAGE_BYTES, actual })
        }
        _ => Ok(()),
    }
}

pub fn enforce_max_header_size(len: usize) -> Result<(), LimitError> {
    match len {
        actual if actual > MAX_HEADER_BYTES => {
            Err(LimitError::HeaderTooLarge { max: MAX_HEADER_BYTES, actual })
        }
        _ => Ok(()),
    }
}
