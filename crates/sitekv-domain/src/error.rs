//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as an optional source
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for sitekv
///
/// The proxy endpoint maps [`Error::Validation`] to 400 and everything else
/// to 500. On the client side [`Error::Network`] and [`Error::LocalStore`]
/// are logged and swallowed.
#[derive(Error, Debug)]
pub enum Error {
    /// Request failed validation (missing key segment, missing value field)
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation failure
        message: String,
    },

    /// Hosted backing store failed, or holds a value that is not valid JSON
    #[error("Backing store error: {message}")]
    BackingStore {
        /// Description of the backing store failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Proxy endpoint unreachable or answered with a non-success status
    #[error("Network error: {message}")]
    Network {
        /// Description of the network failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Local durable store could not be read or written
    #[error("Local store error: {message}")]
    LocalStore {
        /// Description of the local store failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Failure in process wiring (logging, file system, client construction)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

impl Error {
    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a backing store error
    pub fn backing_store<S: Into<String>>(message: S) -> Self {
        Self::BackingStore {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backing store error with source
    pub fn backing_store_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::BackingStore {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a local store error
    pub fn local_store<S: Into<String>>(message: S) -> Self {
        Self::LocalStore {
            message: message.into(),
            source: None,
        }
    }

    /// Create a local store error with source
    pub fn local_store_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::LocalStore {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Whether the error is a caller mistake rather than an operational failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
