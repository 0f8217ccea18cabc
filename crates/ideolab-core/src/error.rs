//! Error types for the Ideolab analysis engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified outcome of a failed generation request.
///
/// Variants are ordered by classification precedence: authentication
/// conditions win over rate limiting, which wins over everything else.
/// Only `RateLimited` may trigger the one-shot model fallback.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PipelineError {
    /// The remote rejected, revoked or refused the credential.
    ///
    /// Terminal for the request. The message tells the operator to mint a
    /// new key and install it; a retry with the same key cannot succeed.
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// The remote signalled quota exhaustion (HTTP 429 / RESOURCE_EXHAUSTED).
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// The request was rejected before any network call was made,
    /// typically because the credential is absent or a placeholder.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The fallback path itself failed, or the remote is unreachable.
    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// Anything else; carries the remote's own message verbatim.
    #[error("Generation failed: {message}")]
    Unknown { message: String },
}

impl PipelineError {
    /// Creates an Authentication error with the standard operator
    /// instruction appended.
    pub fn authentication(detail: impl Into<String>) -> Self {
        Self::Authentication {
            message: format!(
                "{} Generate a new API key in Google AI Studio and install it \
                 as the GEMINI_API_KEY environment variable.",
                detail.into()
            ),
        }
    }

    /// Creates a RateLimited error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a ServiceUnavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates an Unknown error carrying the remote message verbatim.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Check if this is an authentication-class error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Check if this failure may trigger the fallback model
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message }
            | Self::RateLimited { message }
            | Self::Validation { message }
            | Self::ServiceUnavailable { message }
            | Self::Unknown { message } => message,
        }
    }
}

/// Outcome of a failed persona suggestion.
///
/// The classifier is an optional enhancement: every failure except an
/// authentication condition collapses into `Unavailable`, which callers are
/// free to ignore. Authentication failures surface because they indicate a
/// systemic problem the operator must fix.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassifierError {
    /// Same condition as [`PipelineError::Authentication`]; must be shown
    /// to the user.
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// The suggestion could not be produced. Details are logged, not
    /// surfaced; manual persona selection remains available.
    #[error("Persona suggestion unavailable")]
    Unavailable,
}

/// A type alias for `Result<T, PipelineError>`.
pub type Result<T> = std::result::Result<T, PipelineError>;
