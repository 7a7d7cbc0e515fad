use std::fmt;
use thiserror::Error;

/// The error type for urlsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input URL cannot be parsed
    UrlInvalid,

    /// The URL carries no signature parameter
    SignatureMissing,

    /// The signature is malformed or does not match the URL
    SignatureInvalid,

    /// The URL carried an expiry instant that has passed
    UrlExpired,

    /// Key material is malformed (bad encoding, empty input)
    KeyInvalid,

    /// The algorithm name does not select a supported primitive
    AlgorithmInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this is a verification outcome (an expected result of
    /// untrusted input) rather than a caller or configuration bug
    pub fn is_verification_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::SignatureMissing | ErrorKind::SignatureInvalid | ErrorKind::UrlExpired
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid url error
    pub fn url_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UrlInvalid, message)
    }

    /// Create a missing signature error
    pub fn signature_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureMissing, message)
    }

    /// Create an invalid signature error
    pub fn signature_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureInvalid, message)
    }

    /// Create an expired url error
    pub fn url_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UrlExpired, message)
    }

    /// Create an invalid key error
    pub fn key_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyInvalid, message)
    }

    /// Create an invalid algorithm error
    pub fn algorithm_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlgorithmInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UrlInvalid => write!(f, "invalid url"),
            ErrorKind::SignatureMissing => write!(f, "missing signature"),
            ErrorKind::SignatureInvalid => write!(f, "invalid signature"),
            ErrorKind::UrlExpired => write!(f, "url expired"),
            ErrorKind::KeyInvalid => write!(f, "invalid key"),
            ErrorKind::AlgorithmInvalid => write!(f, "invalid algorithm"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::url_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::url_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
