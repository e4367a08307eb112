//! File feed: reads a CSV export from disk.

use std::path::{Path, PathBuf};

use neows_core::NeoDatabase;

use crate::{load_csv, Feed, FeedError};

/// A CSV file with a header row naming the dataset columns.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Feed for FileFeed {
    fn load_into(self, db: &mut NeoDatabase) -> Result<usize, FeedError> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|source| FeedError::Open {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "loading file feed");
        load_csv(&mut reader, db)
    }
}
