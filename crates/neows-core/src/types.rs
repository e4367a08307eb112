//! Core types for neows-core.
//!
//! This module defines the entity model shared across all layers: the
//! aggregate [`NearEarthObject`], the per-row [`OrbitPath`] it owns, the raw
//! [`NeoRow`] handed over by feeds, and the borrowed [`Match`] produced by the
//! date-matching operations.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::filter::OccurrenceBasis;

/// Calendar format used for every date accepted from rows or query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

// ---------------------------------------------------------------------------
// NeoRow: one tokenised input row
// ---------------------------------------------------------------------------

/// One already-tokenised dataset row, as produced by a feed.
///
/// All values are kept as raw strings; conversion and validation happen when
/// the row is put into the [`NeoDatabase`](crate::store::NeoDatabase). Serde
/// names match the column headers of the NASA close-approach CSV export, so
/// any additional columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeoRow {
    pub name: String,
    pub id: String,
    #[serde(rename = "estimated_diameter_min_kilometers")]
    pub diameter_min_km: String,
    #[serde(rename = "estimated_diameter_max_kilometers")]
    pub diameter_max_km: String,
    #[serde(rename = "is_potentially_hazardous_asteroid")]
    pub hazardous: String,
    pub close_approach_date: String,
    pub kilometers_per_hour: String,
    pub miss_distance_kilometers: String,
}

fn parse_f64(name: &str, column: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::invalid_record(name, format!("{column}: {raw:?} is not a number")))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim() {
        s if s.eq_ignore_ascii_case("true") => Ok(true),
        s if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(Error::invalid_record(
            name,
            format!("hazard flag {other:?} is not True/False"),
        )),
    }
}

fn midpoint(min: f64, max: f64) -> f64 {
    (min + max) / 2.0
}

// ---------------------------------------------------------------------------
// OrbitPath: one close approach
// ---------------------------------------------------------------------------

/// A single close approach of an object, built from exactly one row.
///
/// Immutable once created and owned by its [`NearEarthObject`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    /// Name of the owning object (back-reference only).
    pub neo_name: String,
    pub close_approach_date: NaiveDate,
    pub diameter_min_km: f64,
    pub diameter_max_km: f64,
    /// Midpoint of the min/max diameter.
    pub size: f64,
    /// Relative velocity exactly as it appeared in the row (km/h).
    pub speed: String,
    pub miss_distance_km: f64,
    pub is_potentially_hazardous: bool,
}

impl OrbitPath {
    /// Convert a raw row into an approach record.
    pub fn from_row(row: &NeoRow) -> Result<Self> {
        let name = row.name.trim();
        let close_approach_date = parse_date(&row.close_approach_date).ok_or_else(|| {
            Error::invalid_record(
                name,
                format!(
                    "close_approach_date {:?} is not YYYY-MM-DD",
                    row.close_approach_date
                ),
            )
        })?;
        let diameter_min_km = parse_f64(name, "diameter_min_km", &row.diameter_min_km)?;
        let diameter_max_km = parse_f64(name, "diameter_max_km", &row.diameter_max_km)?;

        Ok(Self {
            neo_name: name.to_string(),
            close_approach_date,
            diameter_min_km,
            diameter_max_km,
            size: midpoint(diameter_min_km, diameter_max_km),
            speed: row.kilometers_per_hour.trim().to_string(),
            miss_distance_km: parse_f64(name, "miss_distance_km", &row.miss_distance_kilometers)?,
            is_potentially_hazardous: parse_flag(name, &row.hazardous)?,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.close_approach_date
    }
}

impl std::fmt::Display for OrbitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} || Date: {} || Size (km): {:.3} || Miss Distance (km): {:.3} || Hazardous: {}",
            self.neo_name,
            self.close_approach_date,
            self.size,
            self.miss_distance_km,
            self.is_potentially_hazardous
        )
    }
}

// ---------------------------------------------------------------------------
// NearEarthObject: aggregate over all approaches of one name
// ---------------------------------------------------------------------------

/// An object and every close approach ingested for it.
///
/// `close_approach_dates` and `orbits` are index-aligned and never empty:
/// the first orbit is created together with the object, later ones are
/// appended through [`NearEarthObject::add_occurrence`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    pub id: u64,
    pub name: String,
    pub diameter_min_km: f64,
    pub diameter_max_km: f64,
    pub size: f64,
    pub is_potentially_hazardous: bool,
    close_approach_dates: Vec<NaiveDate>,
    orbits: Vec<OrbitPath>,
}

impl NearEarthObject {
    /// Create an object from its first sighting.
    pub fn from_row(row: &NeoRow) -> Result<Self> {
        let orbit = OrbitPath::from_row(row)?;
        let id = row.id.trim().parse::<u64>().map_err(|_| {
            Error::invalid_record(&orbit.neo_name, format!("id {:?} is not numeric", row.id))
        })?;

        Ok(Self {
            id,
            name: orbit.neo_name.clone(),
            diameter_min_km: orbit.diameter_min_km,
            diameter_max_km: orbit.diameter_max_km,
            size: orbit.size,
            is_potentially_hazardous: orbit.is_potentially_hazardous,
            close_approach_dates: vec![orbit.close_approach_date],
            orbits: vec![orbit],
        })
    }

    /// Append one more approach, keeping dates and orbits aligned.
    pub(crate) fn add_occurrence(&mut self, orbit: OrbitPath) {
        debug_assert_eq!(orbit.neo_name, self.name);
        self.close_approach_dates.push(orbit.close_approach_date);
        self.orbits.push(orbit);
    }

    /// Approach dates in ingestion order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.close_approach_dates
    }

    /// Approach records in ingestion order.
    pub fn orbits(&self) -> &[OrbitPath] {
        &self.orbits
    }

    /// The approach recorded first at ingestion.
    pub fn first_orbit(&self) -> &OrbitPath {
        &self.orbits[0]
    }

    /// First approach on exactly `date`.
    pub fn match_exact(&self, date: NaiveDate) -> Option<Match<'_>> {
        self.first_orbit_where(|d| d == date)
    }

    /// First approach strictly after `start` and strictly before `end`.
    ///
    /// Later approaches inside the same window are not reported.
    pub fn match_between(&self, start: NaiveDate, end: NaiveDate) -> Option<Match<'_>> {
        self.first_orbit_where(|d| d > start && d < end)
    }

    fn first_orbit_where(&self, pred: impl Fn(NaiveDate) -> bool) -> Option<Match<'_>> {
        self.orbits
            .iter()
            .find(|orbit| pred(orbit.close_approach_date))
            .map(|orbit| Match {
                neo: self,
                date: orbit.close_approach_date,
                path: orbit,
            })
    }
}

impl std::fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} || ID: {} || Approaches: {}",
            self.name,
            self.id,
            self.orbits.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Match: result of a date match
// ---------------------------------------------------------------------------

/// A successful date match: the object, the matched date and the approach
/// that matched. Borrowed from the store; the object itself is untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub neo: &'a NearEarthObject,
    pub date: NaiveDate,
    pub path: &'a OrbitPath,
}

// ---------------------------------------------------------------------------
// Candidate: one search result
// ---------------------------------------------------------------------------

/// An item flowing through the filter stage and out of the search engine.
///
/// `Neo` carries the whole date match so filters can reach the approach that
/// matched; `Path` is a bare approach record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate<'a> {
    Neo(Match<'a>),
    Path(&'a OrbitPath),
}

impl<'a> Candidate<'a> {
    /// The approach a filter compares against.
    pub fn compared_orbit(&self, basis: OccurrenceBasis) -> &'a OrbitPath {
        match *self {
            Candidate::Path(path) => path,
            Candidate::Neo(m) => match basis {
                OccurrenceBasis::Matched => m.path,
                OccurrenceBasis::FirstRecorded => m.neo.first_orbit(),
            },
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Candidate::Neo(m) => &m.neo.name,
            Candidate::Path(path) => &path.neo_name,
        }
    }

    /// The matched date for objects, the approach date for records.
    pub fn date(&self) -> NaiveDate {
        match *self {
            Candidate::Neo(m) => m.date,
            Candidate::Path(path) => path.close_approach_date,
        }
    }
}

impl std::fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::Neo(m) => write!(
                f,
                "{} || Date: {} || Size (km): {:.3} || Miss Distance (km): {:.3} || Hazardous: {}",
                m.neo,
                m.date,
                m.path.size,
                m.path.miss_distance_km,
                m.path.is_potentially_hazardous
            ),
            Candidate::Path(path) => write!(f, "{path}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
