//! Search layer: scan, filter, truncate.
//!
//! [`NeoSearcher::get_objects`] runs the three stages once per query:
//!
//! ```text
//! NeoDatabase ──scan(date_search)──► matches ──FilterChain──► survivors ──take(number)──► results
//! ```
//!
//! Result order is always store (first-seen) order; nothing is sorted.

use crate::error::{Error, Result};
use crate::query::{DateSearch, QuerySpec, ReturnObject};
use crate::store::NeoDatabase;
use crate::types::{Candidate, Match, NearEarthObject};

/// Runs validated queries against a loaded [`NeoDatabase`].
///
/// Results borrow from the database, so it cannot change while they live.
#[derive(Debug, Clone, Copy)]
pub struct NeoSearcher<'db> {
    db: &'db NeoDatabase,
}

impl<'db> NeoSearcher<'db> {
    pub fn new(db: &'db NeoDatabase) -> Self {
        Self { db }
    }

    pub fn get_objects(&self, query: &QuerySpec) -> Result<Vec<Candidate<'db>>> {
        if self.db.is_empty() {
            return Err(Error::EmptyStore);
        }

        let matches = self.scan(query);
        let scanned = matches.len();

        let filtered = query.filters.apply(matches);
        let survivors = filtered.len();

        let results = truncate(filtered, query.number);

        tracing::debug!(
            objects = self.db.len(),
            matched = scanned,
            filters = query.filters.len(),
            survivors,
            returned = results.len(),
            "search complete"
        );
        Ok(results)
    }

    /// One candidate per object with a matching approach, in store order.
    fn scan(&self, query: &QuerySpec) -> Vec<Candidate<'db>> {
        self.db
            .all()
            .filter_map(|neo| date_match(neo, query.date_search))
            .map(|m| match query.return_object {
                ReturnObject::Neo => Candidate::Neo(m),
                ReturnObject::Path => Candidate::Path(m.path),
            })
            .collect()
    }
}

fn date_match(neo: &NearEarthObject, search: DateSearch) -> Option<Match<'_>> {
    match search {
        DateSearch::Equals(date) => neo.match_exact(date),
        DateSearch::Between(start, end) => neo.match_between(start, end),
    }
}

/// Keep at most `number` items from the front, preserving order.
pub fn truncate<T>(mut items: Vec<T>, number: usize) -> Vec<T> {
    items.truncate(number);
    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
