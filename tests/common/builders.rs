//! Test builders: ergonomic constructors for `NeoRow`, `NeoDatabase`, and queries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use neows_core::{NeoDatabase, NeoRow, QueryParams, QuerySpec};

// ---------------------------------------------------------------------------
// NeoRowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`NeoRow`] test fixtures.
///
/// # Example
///
/// ```rust
/// let row = NeoRowBuilder::new("Bennu", "2020-01-01")
///     .miss_distance(500_000.0)
///     .hazardous(true)
///     .build();
/// ```
pub struct NeoRowBuilder {
    name: String,
    id: String,
    diameter_min_km: f64,
    diameter_max_km: f64,
    hazardous: bool,
    date: String,
    speed: String,
    miss_distance: f64,
}

impl NeoRowBuilder {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: "1000".to_string(),
            diameter_min_km: 0.1,
            diameter_max_km: 0.3,
            hazardous: false,
            date: date.into(),
            speed: "25000.0".to_string(),
            miss_distance: 1_000_000.0,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn diameters(mut self, min: f64, max: f64) -> Self {
        self.diameter_min_km = min;
        self.diameter_max_km = max;
        self
    }

    pub fn hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    pub fn speed(mut self, speed: impl Into<String>) -> Self {
        self.speed = speed.into();
        self
    }

    pub fn miss_distance(mut self, km: f64) -> Self {
        self.miss_distance = km;
        self
    }

    pub fn build(self) -> NeoRow {
        NeoRow {
            name: self.name,
            id: self.id,
            diameter_min_km: self.diameter_min_km.to_string(),
            diameter_max_km: self.diameter_max_km.to_string(),
            hazardous: if self.hazardous { "True" } else { "False" }.to_string(),
            close_approach_date: self.date,
            kilometers_per_hour: self.speed,
            miss_distance_kilometers: self.miss_distance.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A default row for `name` on `date`.
pub fn row(name: &str, date: &str) -> NeoRow {
    NeoRowBuilder::new(name, date).build()
}

/// Put every row into a fresh store, in order.
pub fn build_store(rows: &[NeoRow]) -> NeoDatabase {
    NeoDatabase::from_rows(rows).expect("fixture rows must be valid")
}

/// Build an exact-date query spec.
pub fn exact_query(date: &str, number: i64, return_object: &str, filters: &[&str]) -> QuerySpec {
    QuerySpec::build(&QueryParams {
        date: Some(date.to_string()),
        number,
        filters: filters.iter().map(|f| f.to_string()).collect(),
        return_object: return_object.to_string(),
        ..Default::default()
    })
    .expect("fixture query must be valid")
}

/// Build a date-range query spec.
pub fn range_query(
    start: &str,
    end: &str,
    number: i64,
    return_object: &str,
    filters: &[&str],
) -> QuerySpec {
    QuerySpec::build(&QueryParams {
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        number,
        filters: filters.iter().map(|f| f.to_string()).collect(),
        return_object: return_object.to_string(),
        ..Default::default()
    })
    .expect("fixture query must be valid")
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// Build `objects` objects with `approaches` approaches each, spread over
/// January 2020. Every third object is hazardous; miss distance grows with
/// the object index.
pub fn build_corpus(objects: usize, approaches: usize) -> Vec<NeoRow> {
    (0..approaches)
        .flat_map(|a| {
            (0..objects).map(move |o| {
                NeoRowBuilder::new(format!("neo-{o}"), format!("2020-01-{:02}", (o + a) % 28 + 1))
                    .id(o as u64 + 1)
                    .hazardous(o % 3 == 0)
                    .miss_distance(10_000.0 * (o as f64 + 1.0))
                    .build()
            })
        })
        .collect()
}
