//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use queue_lens_broker::BrokerError;

pub use crate::codec::DecodeError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error (e.g. non-positive sample count)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payload decode failure, scoped to a single message
    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Broker error (converted from the client crate)
    #[error("{0}")]
    Broker(#[from] BrokerError),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource not found...)
    /// used for log level selection.
    ///
    /// Use `warn` when this returns `true`, `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Decode(_) => true,
            Self::Broker(e) => e.is_expected(),
            Self::Serialization(_) => false,
        }
    }
}

/// Convenience type alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation() {
        let e = CoreError::Validation("message count must be positive, got 0".to_string());
        assert_eq!(
            e.to_string(),
            "Validation error: message count must be positive, got 0"
        );
    }

    #[test]
    fn broker_error_display_passthrough() {
        let e = CoreError::from(BrokerError::NetworkError {
            detail: "connection refused".to_string(),
        });
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn expected_classification() {
        assert!(CoreError::Validation("x".into()).is_expected());
        assert!(CoreError::from(DecodeError::InvalidBase64("x".into())).is_expected());
        assert!(!CoreError::Serialization("x".into()).is_expected());
        assert!(!CoreError::from(BrokerError::Timeout { detail: "x".into() }).is_expected());
        assert!(CoreError::from(BrokerError::Unauthorized { raw_message: None }).is_expected());
    }

    #[test]
    fn serialize_tagged() {
        let e = CoreError::Validation("bad count".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Validation\""));
        assert!(json.contains("bad count"));
    }
}
