//! neows-feeds: dataset feed adapters for neows.
//!
//! Each feed decodes CSV rows into [`neows_core::NeoRow`] values and puts
//! them, in file order, into a [`neows_core::NeoDatabase`]. Loading stops at
//! the first row that cannot be decoded or converted.

pub mod file;
pub mod stdin;

use thiserror::Error;

pub use file::FileFeed;
pub use stdin::ReaderFeed;

/// Errors raised while loading a feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: {source}")]
    Decode {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: neows_core::Error,
    },
}

/// A source of dataset rows.
pub trait Feed {
    /// Put every row into `db`; returns the number of rows ingested.
    fn load_into(self, db: &mut neows_core::NeoDatabase) -> Result<usize, FeedError>;
}

/// Decode rows from `reader` into `db`. Row numbers are 1-based and count
/// data rows only.
pub(crate) fn load_csv<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    db: &mut neows_core::NeoDatabase,
) -> Result<usize, FeedError> {
    let mut count = 0;
    for (idx, result) in reader.deserialize::<neows_core::NeoRow>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|source| FeedError::Decode { row, source })?;
        db.put(&record).map_err(|source| FeedError::Record { row, source })?;
        count += 1;
    }
    tracing::debug!(rows = count, objects = db.len(), "feed loaded");
    Ok(count)
}
