//! Error types for neows-core.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building queries, ingesting rows, or exporting results.
///
/// Query-shaped errors (`InvalidQuery`, `InvalidFilterValue`, `NoSuchField`)
/// are always raised by [`QuerySpec::build`](crate::query::QuerySpec::build),
/// before the search engine touches the store.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid filter value {value:?} for field `{field}`: {reason}")]
    InvalidFilterValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No such filter field: {0}")]
    NoSuchField(String),

    #[error("Query attempted against an empty store")]
    EmptyStore,

    #[error("Invalid record for `{name}`: {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_query(msg: impl Into<String>) -> Self {
        Error::InvalidQuery(msg.into())
    }

    pub(crate) fn invalid_record(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
