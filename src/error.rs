//! Error types for graph access and domain queries

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
///
/// Absence of a value is never an error: lookups that can miss return
/// `Ok(None)`.
#[derive(Error, Debug)]
pub enum Error {
    /// A query descriptor could not be evaluated or compiled
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// The query endpoint could not be reached or its response could not be parsed
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Stored triples do not satisfy the requested model type
    #[error("Type mismatch for {identifier}: {message}")]
    TypeMismatch { identifier: String, message: String },

    /// A result contradicts a contract the caller relies on
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// An identifier string could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A time zone name is not a known IANA zone
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// Invalid calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Parse error when reading RDF data
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn type_mismatch(identifier: impl ToString, message: impl Into<String>) -> Self {
        Error::TypeMismatch { identifier: identifier.to_string(), message: message.into() }
    }
}

impl From<oxigraph::store::StorageError> for Error {
    fn from(err: oxigraph::store::StorageError) -> Self {
        Error::TransportFailure(err.to_string())
    }
}

impl From<oxigraph::sparql::QueryEvaluationError> for Error {
    fn from(err: oxigraph::sparql::QueryEvaluationError) -> Self {
        Error::TransportFailure(err.to_string())
    }
}

impl From<oxigraph::io::RdfParseError> for Error {
    fn from(err: oxigraph::io::RdfParseError) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::TransportFailure(err.to_string())
    }
}
