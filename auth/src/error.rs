//! Error types for the `auth` crate.
//!
//! Follows the same pattern as domain::error with a root Error struct and an error kind enum.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the auth crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Reasons a bearer credential can fail verification.
///
/// Every kind collapses to a deny decision at the authorizer boundary; the
/// kind itself only shows up in logs and in [`crate::AuthorizationDecision::reason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No authorization header, or an empty one.
    MissingCredential,
    /// Header present but not of the form `Bearer <token>`.
    MalformedCredential,
    /// The token's header section could not be decoded.
    MalformedToken,
    /// The key set could not be fetched, parsed, or contained no keys.
    KeySetUnavailable,
    /// No key in the key set matches the token's `kid`.
    UnknownSigningKey,
    /// Signature, algorithm or time-based claims did not verify.
    SignatureInvalid,
    /// The outbound HTTP client could not be constructed.
    Http(HttpErrorKind),
}

/// Errors from HTTP client operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    BuilderFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::MissingCredential => write!(f, "MissingCredential"),
            ErrorKind::MalformedCredential => write!(f, "MalformedCredential"),
            ErrorKind::MalformedToken => write!(f, "MalformedToken"),
            ErrorKind::KeySetUnavailable => write!(f, "KeySetUnavailable"),
            ErrorKind::UnknownSigningKey => write!(f, "UnknownSigningKey"),
            ErrorKind::SignatureInvalid => write!(f, "SignatureInvalid"),
            ErrorKind::Http(kind) => write!(f, "Http({:?})", kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Auth error {}: {}", self.error_kind, source),
            None => write!(f, "Auth error {}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else {
            ErrorKind::KeySetUnavailable
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create verification errors carrying a message.
pub fn auth_error(kind: ErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = auth_error(ErrorKind::UnknownSigningKey, "no key matches kid abc");
        assert_eq!(
            err.to_string(),
            "Auth error UnknownSigningKey: no key matches kid abc"
        );
    }

    #[test]
    fn test_source_is_exposed() {
        let err = auth_error(ErrorKind::MalformedCredential, "bad prefix");
        assert!(StdError::source(&err).is_some());

        let bare = Error {
            source: None,
            error_kind: ErrorKind::MissingCredential,
        };
        assert!(StdError::source(&bare).is_none());
        assert_eq!(bare.to_string(), "Auth error MissingCredential");
    }
}
