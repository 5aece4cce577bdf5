//! Domain errors for credential propagation.

use thiserror::Error;

use super::models::AwsConfigKey;

/// Failures talking to the analytics platform API.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Platform request failed: {0}")]
    Request(String),

    #[error("Platform returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode platform response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for PlatformError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PlatformError::Decode(err.to_string())
        } else {
            PlatformError::Request(err.to_string())
        }
    }
}

/// Failures writing a single AWS CLI setting.
#[derive(Debug, Error)]
pub enum ConfigWriteError {
    #[error("Failed to run '{program}': {reason}")]
    Spawn { program: String, reason: String },

    #[error("'{program} configure set {key}' exited with {code}")]
    Exited {
        program: String,
        key: AwsConfigKey,
        code: String,
    },
}

/// Errors that escape a propagation run.
#[derive(Debug, Error)]
pub enum PropagationError {
    #[error("Failed to list platform credentials")]
    CredentialListing(#[from] PlatformError),

    #[error("Failed to write AWS CLI configuration")]
    ConfigWrite(#[from] ConfigWriteError),
}

pub type PropagationResult<T> = Result<T, PropagationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PlatformError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Platform returned 401: unauthorized");
    }

    #[test]
    fn test_listing_error_wraps_platform_error() {
        let err: PropagationError = PlatformError::Request("connection refused".into()).into();
        assert!(matches!(err, PropagationError::CredentialListing(_)));
        assert_eq!(err.to_string(), "Failed to list platform credentials");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Platform request failed: connection refused"));
    }

    #[test]
    fn test_exited_error_names_key() {
        let err = ConfigWriteError::Exited {
            program: "aws".into(),
            key: AwsConfigKey::SecretAccessKey,
            code: "exit status: 255".into(),
        };
        assert!(err.to_string().contains("aws configure set aws_secret_access_key"));
    }
}
