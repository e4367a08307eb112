//! neows: near-Earth object close-approach search.
//!
//! The binary wires the layers together: a feed fills the store, the query
//! builder validates the flags, the searcher runs the query, and the export
//! layer renders the results.
//!
//! # Architecture
//!
//! ```text
//! FileFeed / ReaderFeed ──► NeoDatabase ──► NeoSearcher ──► export
//!                                              ▲
//!                          Cli ──► QuerySpec ──┘
//! ```

pub mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use neows_core::config::Config;
use neows_core::{export, NeoDatabase, NeoSearcher, OutputFormat, QuerySpec};
use neows_feeds::{Feed, FileFeed, ReaderFeed};

pub use cli::Cli;

/// Load the dataset named by `path`; `-` reads stdin.
pub fn load_database(path: &Path) -> anyhow::Result<NeoDatabase> {
    let mut db = NeoDatabase::new();
    let rows = if path == Path::new("-") {
        ReaderFeed::stdin().load_into(&mut db)
    } else {
        FileFeed::new(path).load_into(&mut db)
    }
    .with_context(|| format!("loading dataset from {}", path.display()))?;

    tracing::info!(rows, objects = db.len(), "dataset loaded");
    Ok(db)
}

/// Run one query end to end. Display and JSONL output go to `out`; CSV
/// output goes to the configured CSV path. Returns the number of results.
pub fn run(cli: &Cli, config: &Config, out: &mut dyn Write) -> anyhow::Result<usize> {
    // Validate before touching the dataset.
    let query = QuerySpec::build(&cli.query_params(config)).context("building query")?;
    let db = load_database(&cli.data_path(config))?;

    let results = NeoSearcher::new(&db)
        .get_objects(&query)
        .context("searching dataset")?;

    match cli.output_format(config) {
        OutputFormat::CsvFile => {
            let path = cli.csv_path(config);
            export::write_to_path(OutputFormat::CsvFile, &results, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "results written");
        }
        format => export::write(format, &results, out).context("writing results")?,
    }

    Ok(results.len())
}
