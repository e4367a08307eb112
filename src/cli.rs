//! Command-line arguments.
//!
//! Every query flag is optional at the clap level; omitted values fall back
//! to the `[query]` section of the config, and consistency checks (date mode,
//! filter syntax, negative counts) are left to the query builder so they are
//! reported the same way for every caller.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use neows_core::config::Config;
use neows_core::{OutputFormat, QueryParams};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "neows",
    about = "Search near-Earth object close approaches by date",
    after_help = "Filters take the form field:operator:value, e.g. distance:<=:600000 or is_hazardous:=:True.\n\
                  Fields: is_hazardous, diameter, distance. Operators: =, >=, <=, >, <."
)]
pub struct Cli {
    /// Output format: display, csv_file or jsonl.
    pub output: Option<OutputFormat>,

    /// Find approaches on exactly this date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start of a date range (exclusive, YYYY-MM-DD).
    #[arg(short, long)]
    pub start_date: Option<String>,

    /// End of a date range (exclusive, YYYY-MM-DD).
    #[arg(short, long)]
    pub end_date: Option<String>,

    /// Maximum number of results.
    #[arg(short, long, allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Filter token, applied in order; repeat for several.
    #[arg(long = "filter", action = ArgAction::Append)]
    pub filters: Vec<String>,

    /// Return whole objects (NEO) or matched approaches (Path).
    #[arg(short, long)]
    pub return_object: Option<String>,

    /// Approach compared by filters on object results: matched or first.
    #[arg(long)]
    pub basis: Option<String>,

    /// Dataset CSV; `-` reads stdin.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Destination for csv_file output.
    #[arg(long)]
    pub csv_path: Option<PathBuf>,

    /// Config file to use instead of ~/.config/neows/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write debug logs to the configured debug file (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Query parameters from flags, falling back to config defaults.
    pub fn query_params(&self, config: &Config) -> QueryParams {
        QueryParams {
            date: self.date.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            number: self.number.unwrap_or(config.query.number),
            filters: self.filters.clone(),
            return_object: self
                .return_object
                .clone()
                .unwrap_or_else(|| config.query.return_object.clone()),
            entity_filter_basis: self
                .basis
                .clone()
                .unwrap_or_else(|| config.query.entity_filter_basis.clone()),
        }
    }

    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.output.unwrap_or(config.output.format)
    }

    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.file.clone().unwrap_or_else(|| config.data.path.clone())
    }

    pub fn csv_path(&self, config: &Config) -> PathBuf {
        self.csv_path
            .clone()
            .unwrap_or_else(|| config.output.csv_path.clone())
    }
}
