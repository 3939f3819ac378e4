//! Client error handling
//!
//! Transport failures are classified once, at the point the response is
//! read, so the retry policy only has to ask `is_retryable`.

use nutrition_tracker_shared::OnboardingError;
use thiserror::Error;

/// Error type for every call the client makes
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: &'static str },

    #[error("Could not connect to {endpoint}: {message}")]
    Connect {
        endpoint: &'static str,
        message: String,
    },

    #[error("{endpoint} returned status {status}: {message}")]
    Status {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Onboarding(#[from] OnboardingError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Classify a transport error for `endpoint`
    pub fn from_transport(endpoint: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout { endpoint }
        } else if err.is_connect() {
            ClientError::Connect {
                endpoint,
                message: err.to_string(),
            }
        } else {
            ClientError::Http(err)
        }
    }

    /// Only timeouts and connection failures are worth a second attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Timeout { .. } | ClientError::Connect { .. })
    }

    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client calls
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(ClientError::Timeout { endpoint: "progress" }.is_retryable());
        assert!(ClientError::Connect {
            endpoint: "streaks",
            message: "refused".to_string()
        }
        .is_retryable());

        let status = ClientError::Status {
            endpoint: "goal",
            status: 503,
            message: String::new(),
        };
        assert!(!status.is_retryable());
        assert_eq!(status.status(), Some(503));
        assert!(!ClientError::Config("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_onboarding_error_message_passes_through() {
        let err: ClientError = OnboardingError::GenderRequired.into();
        assert_eq!(
            err.to_string(),
            "Please select your gender before choosing a goal"
        );
    }
}
