//! neows-core: close-approach search core library.
//!
//! This crate holds the entity model and the four pipeline layers that act
//! on it, plus the shared configuration and export collaborators.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Store ──► Query ──► Search ──► Export
//!                     │          ▲
//!                     └─ Filter ─┘
//! ```
//!
//! Everything runs synchronously on the caller's thread. The store is built
//! once and then only borrowed; search results borrow from it.

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod query;
pub mod search;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use export::{FlatRecord, OutputFormat};
pub use filter::{Field, Filter, FilterChain, OccurrenceBasis, Operator};
pub use query::{DateSearch, QueryParams, QuerySpec, ReturnObject};
pub use search::NeoSearcher;
pub use store::NeoDatabase;
pub use types::{parse_date, Candidate, Match, NearEarthObject, NeoRow, OrbitPath};
