//! Errors returned by the HTTP client.
//!
//! Every failure surfaces as one [`Error`]. Failures the API or the client
//! classified carry a [`ClassifiedError`], reachable with [`Error::classified`].

use http::StatusCode;
use limepay::ClassifiedError;
use limepay_evm::{AuthorizationError, SignError};

/// Boxed error source for transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while talking to the LimePay API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be built, sent, or its body read.
    #[error("transport error: {context}: {source}")]
    Transport {
        /// Human-readable context.
        context: &'static str,
        /// The underlying error.
        #[source]
        source: BoxError,
    },

    /// The API answered with a status code of 400 or above.
    #[error("API error {status}: {error}")]
    Api {
        /// Status code of the response.
        status: StatusCode,
        /// Error decoded from the response body; zero-valued if the body
        /// was not a JSON error object.
        error: ClassifiedError,
    },

    /// A successful response did not match the expected shape.
    #[error("failed to decode response: {context}: {source}")]
    Decode {
        /// Human-readable context.
        context: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request was rejected locally before anything was sent.
    #[error("{0}")]
    Validation(ClassifiedError),

    /// The authorization signature could not be computed.
    #[error("{error}")]
    Signing {
        /// Always `SIGNING_ERROR` (1011).
        error: ClassifiedError,
        /// The underlying signing failure.
        #[source]
        source: SignError,
    },
}

impl Error {
    pub(crate) fn transport(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            context,
            source: source.into(),
        }
    }

    /// Returns the classified error, if this failure carries one.
    ///
    /// `Transport` and `Decode` failures are not classified.
    #[must_use]
    pub const fn classified(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Api { error, .. } | Self::Validation(error) | Self::Signing { error, .. } => {
                Some(error)
            }
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Returns the status code of an [`Error::Api`] failure.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<AuthorizationError> for Error {
    fn from(err: AuthorizationError) -> Self {
        match err {
            AuthorizationError::Validation(error) => Self::Validation(error),
            AuthorizationError::Signing(source) => Self::Signing {
                error: ClassifiedError::signing_error(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_classified() {
        let err = Error::Api {
            status: StatusCode::UNAUTHORIZED,
            error: ClassifiedError::new("UNAUTHORIZED", 401, "Unauthorized request"),
        };
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(err.classified().map(|e| e.code), Some(401));
        assert_eq!(err.to_string(), "API error 401 Unauthorized: Unauthorized request");
    }

    #[test]
    fn test_transport_error_is_not_classified() {
        let err = Error::transport("failed to send request", "connection refused");
        assert!(err.classified().is_none());
        assert!(err.status().is_none());
        assert_eq!(
            err.to_string(),
            "transport error: failed to send request: connection refused"
        );
    }

    #[test]
    fn test_validation_from_authorization() {
        let err = Error::from(AuthorizationError::Validation(
            ClassifiedError::invalid_wei_amount(),
        ));
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.classified().map(|e| e.code), Some(1018));
    }

    #[test]
    fn test_signing_from_authorization() {
        let source = limepay_evm::sign("0x123", &["uint256"], &["1"]).unwrap_err();
        let err = Error::from(AuthorizationError::Signing(source));
        assert!(matches!(err, Error::Signing { .. }));
        assert_eq!(err.classified(), Some(&ClassifiedError::signing_error()));
        assert!(std::error::Error::source(&err).is_some());
    }
}
