//! Export layer: render search results as display lines, CSV, or JSON lines.
//!
//! Every result, whatever its shape, is first projected to a [`FlatRecord`]
//! via [`Candidate::flatten`]; the formats only differ in how they print it.
//! An empty result set produces empty output in every format.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Candidate;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable line per result on stdout.
    #[default]
    Display,
    /// Header plus one comma-separated row per result, written to a file.
    CsvFile,
    /// One JSON object per line.
    Jsonl,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["display", "csv_file", "jsonl"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "display" => Ok(OutputFormat::Display),
            "csv_file" | "csv" => Ok(OutputFormat::CsvFile),
            "jsonl" | "json" => Ok(OutputFormat::Jsonl),
            other => Err(format!(
                "unknown output format {other:?} (expected one of {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputFormat::Display => "display",
            OutputFormat::CsvFile => "csv_file",
            OutputFormat::Jsonl => "jsonl",
        })
    }
}

// ---------------------------------------------------------------------------
// FlatRecord
// ---------------------------------------------------------------------------

/// Column order of CSV output.
pub const CSV_HEADERS: [&str; 10] = [
    "name",
    "id",
    "diameter_min_km",
    "diameter_max_km",
    "size",
    "hazard",
    "date",
    "dates",
    "speed",
    "distance",
];

/// Uniform flattened view of one result.
///
/// For an object the extents, size and hazard flag are the object's own
/// values while `date`, `speed` and `distance` come from the matched
/// approach. A bare approach has no numeric id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    pub name: String,
    pub id: Option<u64>,
    pub diameter_min_km: f64,
    pub diameter_max_km: f64,
    pub size: f64,
    pub hazard: bool,
    pub date: NaiveDate,
    pub dates: Vec<NaiveDate>,
    pub speed: String,
    pub distance: f64,
}

impl FlatRecord {
    fn csv_fields(&self) -> [String; 10] {
        [
            self.name.clone(),
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.diameter_min_km.to_string(),
            self.diameter_max_km.to_string(),
            self.size.to_string(),
            if self.hazard { "True" } else { "False" }.to_string(),
            self.date.to_string(),
            self.dates
                .iter()
                .map(NaiveDate::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            self.speed.clone(),
            self.distance.to_string(),
        ]
    }
}

impl Candidate<'_> {
    /// Project any result to its [`FlatRecord`].
    pub fn flatten(&self) -> FlatRecord {
        match *self {
            Candidate::Neo(m) => FlatRecord {
                name: m.neo.name.clone(),
                id: Some(m.neo.id),
                diameter_min_km: m.neo.diameter_min_km,
                diameter_max_km: m.neo.diameter_max_km,
                size: m.neo.size,
                hazard: m.neo.is_potentially_hazardous,
                date: m.date,
                dates: m.neo.dates().to_vec(),
                speed: m.path.speed.clone(),
                distance: m.path.miss_distance_km,
            },
            Candidate::Path(path) => FlatRecord {
                name: path.neo_name.clone(),
                id: None,
                diameter_min_km: path.diameter_min_km,
                diameter_max_km: path.diameter_max_km,
                size: path.size,
                hazard: path.is_potentially_hazardous,
                date: path.close_approach_date,
                dates: vec![path.close_approach_date],
                speed: path.speed.clone(),
                distance: path.miss_distance_km,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Write `results` to `sink` in the given format.
pub fn write<W: Write>(format: OutputFormat, results: &[Candidate<'_>], mut sink: W) -> Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Display => {
            for result in results {
                writeln!(sink, "{result}")?;
            }
            sink.flush()?;
        }
        OutputFormat::Jsonl => {
            for result in results {
                serde_json::to_writer(&mut sink, &result.flatten())?;
                writeln!(sink)?;
            }
            sink.flush()?;
        }
        OutputFormat::CsvFile => {
            let mut writer = csv::Writer::from_writer(sink);
            writer.write_record(CSV_HEADERS)?;
            for result in results {
                writer.write_record(result.flatten().csv_fields())?;
            }
            writer.flush()?;
        }
    }

    tracing::debug!(%format, rows = results.len(), "results written");
    Ok(())
}

/// Write `results` to a newly created (or truncated) file at `path`.
pub fn write_to_path(format: OutputFormat, results: &[Candidate<'_>], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write(format, results, std::io::BufWriter::new(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
