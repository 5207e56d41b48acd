//! Error Types

use std::time::Duration;

use thiserror::Error;

/// Result type alias for compression operations
pub type Result<T> = std::result::Result<T, CompressError>;

/// Compression error types
#[derive(Error, Debug)]
pub enum CompressError {
    /// Could not reach the compression service
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Service answered with a non-success status
    #[error("API responded with status: {0}")]
    Status(u16),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Aggressiveness outside the slider range
    #[error("Invalid aggressiveness: {0}")]
    InvalidAggressiveness(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CompressError {
    /// Whether the failure came from talking to the service
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Status(_) | Self::Timeout(_)
        )
    }

    /// Convert to the message shown in the demo's error banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection(_) => {
                "Failed to connect to compression API. Make sure the server is running.".into()
            }
            Self::Status(code) => format!("Compression API responded with status: {code}"),
            Self::Timeout(after) => format!(
                "Compression API did not answer within {}s. Try again shortly.",
                after.as_secs()
            ),
            Self::InvalidAggressiveness(msg) => format!("Invalid aggressiveness: {msg}"),
            Self::Config(_) => "An unexpected error occurred while compressing.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(CompressError::Status(500).is_transport());
        assert!(CompressError::Connection("refused".into()).is_transport());
        assert!(!CompressError::Config("bad url".into()).is_transport());
    }

    #[test]
    fn test_user_message_never_empty() {
        let errors = [
            CompressError::Connection("refused".into()),
            CompressError::Status(500),
            CompressError::Timeout(Duration::from_secs(10)),
            CompressError::Config("missing".into()),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
        assert!(CompressError::Status(503).user_message().contains("503"));
    }

    #[test]
    fn test_config_error_keeps_detail_out_of_banner() {
        let err = CompressError::Config("bad url".into());
        assert_eq!(err.to_string(), "Configuration error: bad url");
        assert!(!err.user_message().contains("bad url"));
    }
}
