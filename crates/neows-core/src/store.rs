//! Store: in-memory collection of [`NearEarthObject`] values keyed by name.
//!
//! The store is filled once by a feed and only read afterwards. Iteration
//! order is first-seen order, which is also the order of search results.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{NearEarthObject, NeoRow, OrbitPath};

/// Every ingested object, in first-seen order, with a name index.
#[derive(Debug, Default, Clone)]
pub struct NeoDatabase {
    objects: Vec<NearEarthObject>,
    by_name: HashMap<String, usize>,
}

impl NeoDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one row.
    ///
    /// An unseen name creates a new object with a single approach; a known
    /// name appends one approach to the existing object. A row that fails
    /// conversion leaves the store unchanged.
    pub fn put(&mut self, row: &NeoRow) -> Result<()> {
        let name = row.name.trim();
        match self.by_name.get(name) {
            Some(&idx) => {
                let orbit = OrbitPath::from_row(row)?;
                let neo = &mut self.objects[idx];
                if !same_id(&row.id, neo.id) {
                    tracing::warn!(
                        name,
                        known_id = neo.id,
                        row_id = %row.id.trim(),
                        "row id differs from first sighting; keeping first id"
                    );
                }
                neo.add_occurrence(orbit);
            }
            None => {
                let neo = NearEarthObject::from_row(row)?;
                self.by_name.insert(neo.name.clone(), self.objects.len());
                self.objects.push(neo);
            }
        }
        Ok(())
    }

    /// All objects in first-seen order. Each call starts a fresh iteration.
    pub fn all(&self) -> impl Iterator<Item = &NearEarthObject> + '_ {
        self.objects.iter()
    }

    pub fn get(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&idx| &self.objects[idx])
    }

    /// Number of distinct objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Build a store from rows, stopping at the first row that fails.
    pub fn from_rows<'r>(rows: impl IntoIterator<Item = &'r NeoRow>) -> Result<Self> {
        let mut db = Self::new();
        for row in rows {
            db.put(row)?;
        }
        Ok(db)
    }

    /// Total number of approaches across all objects (i.e. rows ingested).
    pub fn occurrence_count(&self) -> usize {
        self.objects.iter().map(|neo| neo.orbits().len()).sum()
    }
}

/// Numeric id comparison, so `0433` and `433` name the same object.
fn same_id(raw: &str, id: u64) -> bool {
    raw.trim().parse::<u64>() == Ok(id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(name: &str, id: &str, date: &str) -> NeoRow {
        NeoRow {
            name: name.to_string(),
            id: id.to_string(),
            diameter_min_km: "0.1".to_string(),
            diameter_max_km: "0.3".to_string(),
            hazardous: "False".to_string(),
            close_approach_date: date.to_string(),
            kilometers_per_hour: "1000".to_string(),
            miss_distance_kilometers: "42".to_string(),
        }
    }

    #[test]
    fn repeated_name_appends_occurrence() {
        let mut db = NeoDatabase::new();
        db.put(&row("Eros", "433", "2020-01-01")).unwrap();
        db.put(&row("Bennu", "101955", "2020-01-02")).unwrap();
        db.put(&row("Eros", "433", "2020-01-05")).unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.occurrence_count(), 3);
        let eros = db.get("Eros").unwrap();
        assert_eq!(eros.orbits().len(), 2);
        assert_eq!(eros.dates().len(), 2);
        for (date, orbit) in eros.dates().iter().zip(eros.orbits()) {
            assert_eq!(*date, orbit.close_approach_date);
        }
    }

    #[test]
    fn all_yields_first_seen_order_and_restarts() {
        let mut db = NeoDatabase::new();
        for (name, date) in [
            ("C", "2020-01-01"),
            ("A", "2020-01-02"),
            ("C", "2020-01-03"),
            ("B", "2020-01-04"),
        ] {
            db.put(&row(name, "1", date)).unwrap();
        }
        let names = |db: &NeoDatabase| db.all().map(|n| n.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&db), vec!["C", "A", "B"]);
        assert_eq!(names(&db), vec!["C", "A", "B"]);
    }

    #[test]
    fn failed_row_leaves_store_unchanged() {
        let mut db = NeoDatabase::new();
        db.put(&row("Eros", "433", "2020-01-01")).unwrap();
        assert!(db.put(&row("Eros", "433", "not-a-date")).is_err());
        assert!(db.put(&row("Bennu", "x", "2020-01-01")).is_err());
        assert_eq!(db.len(), 1);
        assert_eq!(db.occurrence_count(), 1);
    }

    #[test]
    fn collect_from_rows() {
        let rows = [row("Eros", "433", "2020-01-01"), row("Eros", "433", "2020-02-01")];
        let db = NeoDatabase::from_rows(&rows).unwrap();
        assert_eq!(db.occurrence_count(), 2);
    }

    #[test]
    fn ids_compare_numerically() {
        assert!(same_id("433", 433));
        assert!(same_id("0433", 433));
        assert!(same_id(" 433 ", 433));
        assert!(!same_id("434", 433));
        assert!(!same_id("Eros", 433));
    }

    #[test]
    fn zero_padded_id_joins_existing_object() {
        let mut db = NeoDatabase::new();
        db.put(&row("Eros", "433", "2020-01-01")).unwrap();
        db.put(&row("Eros", "0433", "2020-01-05")).unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.get("Eros").unwrap().id, 433);
        assert_eq!(db.occurrence_count(), 2);
    }
}
