//! Static CSV datasets used across harnesses.
//!
//! Headers follow the NASA close-approach export; the extra columns
//! (`neo_reference_id`, `absolute_magnitude_h`, ...) are present on purpose so
//! feeds are exercised against the real layout.

use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "id,neo_reference_id,name,absolute_magnitude_h,estimated_diameter_min_kilometers,estimated_diameter_max_kilometers,is_potentially_hazardous_asteroid,close_approach_date,kilometers_per_hour,miss_distance_kilometers,orbiting_body";

/// A small dataset: Eros twice, Bennu, Apophis twice, Didymos.
pub const CORPUS_SMALL: &[&str] = &[
    "2000433,2000433,433 Eros,10.4,22.0,49.1,False,2020-01-01,20851.7,26729617.5,Earth",
    "2101955,2101955,101955 Bennu,20.2,0.49,0.51,True,2020-01-03,45012.3,500000.0,Earth",
    "2000433,2000433,433 Eros,10.4,22.0,49.1,False,2020-01-05,21004.9,25120000.0,Earth",
    "2099942,2099942,99942 Apophis,19.7,0.31,0.34,True,2020-01-05,30123.0,31000.0,Earth",
    "2065803,2065803,65803 Didymos,18.1,0.78,0.8,True,2020-01-07,22000.0,7100000.0,Earth",
    "2099942,2099942,99942 Apophis,19.7,0.31,0.34,True,2020-01-09,30500.0,4000000.0,Earth",
];

/// Full CSV text for a corpus, header included.
pub fn csv_text(lines: &[&str]) -> String {
    let mut text = String::from(CSV_HEADER);
    text.push('\n');
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Write `lines` as a CSV dataset into `dir` and return its path.
pub fn write_dataset(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("neo_data.csv");
    std::fs::write(&path, csv_text(lines)).expect("write fixture dataset");
    path
}
