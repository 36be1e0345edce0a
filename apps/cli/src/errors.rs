use thiserror::Error;

use crate::validation::CHARACTER_LIMIT;

/// Failure taxonomy for one optimisation call.
///
/// Every call resolves to exactly one `Result`; none of these are panicked
/// across the async boundary. Callers can pick user-facing behaviour from the
/// variant alone without parsing messages.
#[derive(Debug, Error)]
pub enum OptimiseError {
    /// The request body could not be serialized. Reported before any network
    /// attempt is made.
    #[error("failed to encode request body: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The transport gave up: connection, DNS or TLS failure, or the request
    /// was cancelled mid-flight. Carries the underlying cause.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not with a usable result: a non-200 status,
    /// or a 200 whose body is missing a string `optimisedText` field.
    #[error("invalid response from endpoint (status {status})")]
    InvalidResponse { status: u16 },
}

/// Input rejection reasons, raised by the caller layer before a request is
/// ever built. The client itself does not re-validate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input text is empty")]
    Empty,

    #[error("input text is {len} characters, limit is {CHARACTER_LIMIT}")]
    TooLong { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_display_includes_status() {
        let err = OptimiseError::InvalidResponse { status: 500 };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_too_long_display_includes_limit() {
        let err = InputError::TooLong { len: 612 };
        let msg = err.to_string();
        assert!(msg.contains("612"));
        assert!(msg.contains("500"));
    }
}
