//! Error types for ontology-to-GraphML conversion.
//!
//! All fallible operations return [`Result<T>`]. Recoverable conditions such as
//! an unmapped namespace or an unknown color name are not errors and never
//! surface here.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Which member of a statement was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripleMember {
    /// The statement subject
    Subject,
    /// The statement predicate
    Predicate,
}

impl std::fmt::Display for TripleMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripleMember::Subject => write!(f, "subject"),
            TripleMember::Predicate => write!(f, "predicate"),
        }
    }
}

/// Error type for every stage of the conversion pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The ontology model produced a statement without a subject or predicate.
    ///
    /// This aborts the whole transformation.
    #[error("Statement #{position} has a null {member}")]
    NullTripleMember {
        /// Zero-based position of the statement in enumeration order
        position: usize,
        /// Which member was missing
        member: TripleMember,
    },

    /// A required style key is absent from the configuration
    #[error("Missing style configuration key '{key}'")]
    MissingStyleKey {
        /// Name of the missing key (e.g. `classColor`)
        key: String,
    },

    /// Configuration could not be interpreted
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading configuration or writing output failed
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConvertError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
