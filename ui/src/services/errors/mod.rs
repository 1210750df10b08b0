use thiserror::Error;

use crate::features::contact::SubmissionError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Content error: {source}")]
    Content {
        #[from]
        source: ContentError,
    },

    #[error("Configuration error: {source}")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    #[error("Submission error: {source}")]
    Submission {
        #[from]
        source: SubmissionError,
    },
}

/// Failures loading or checking the portfolio content document
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content field is empty: {field}")]
    MissingField { field: String },

    #[error("Navigation has no entry for the home path")]
    MissingHomeNavigation,

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: String, id: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    #[error("{field} must be an absolute path, got {value}")]
    NotAbsolutePath { field: String, value: String },
}

pub type SiteResult<T> = Result<T, SiteError>;

impl SiteError {
    /// Whether repeating the failed action can succeed without other changes
    pub fn is_retryable(&self) -> bool {
        match self {
            SiteError::Submission { source } => source.is_retryable(),
            _ => false,
        }
    }

    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::Content { .. } => ErrorSeverity::Critical,
            SiteError::Configuration { .. } => ErrorSeverity::High,
            SiteError::Submission { source } => {
                if source.is_retryable() {
                    ErrorSeverity::Low
                } else {
                    ErrorSeverity::Medium
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failures_are_retryable_and_low_severity() {
        let error: SiteError = SubmissionError::Transport {
            message: "connection reset".to_string(),
        }
        .into();

        assert!(error.is_retryable());
        assert_eq!(error.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_content_errors_are_critical() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SiteError = ContentError::from(parse).into();

        assert!(!error.is_retryable());
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert!(error.to_string().starts_with("Content error: Content document is not valid JSON"));
    }

    #[test]
    fn test_config_error_messages() {
        let error = ConfigError::MustBePositive {
            field: "min_message_chars".to_string(),
        };
        assert_eq!(error.to_string(), "min_message_chars must be greater than 0");

        let wrapped: SiteError = error.into();
        assert_eq!(wrapped.severity(), ErrorSeverity::High);
    }
}
