//! Reader feed: CSV from stdin or any other [`std::io::Read`].

use std::io::Read;

use neows_core::NeoDatabase;

use crate::{load_csv, Feed, FeedError};

/// CSV rows from an arbitrary reader.
pub struct ReaderFeed<R> {
    reader: R,
}

impl<R: Read> ReaderFeed<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderFeed<std::io::Stdin> {
    /// Read the dataset from standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin())
    }
}

impl<R: Read> Feed for ReaderFeed<R> {
    fn load_into(self, db: &mut NeoDatabase) -> Result<usize, FeedError> {
        let mut reader = csv::Reader::from_reader(self.reader);
        load_csv(&mut reader, db)
    }
}
