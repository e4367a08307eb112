//! Query builder: raw parameters in, validated [`QuerySpec`] out.
//!
//! Every parse and consistency check happens in [`QuerySpec::build`]; the
//! search engine only ever sees a complete specification.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::filter::{FilterChain, OccurrenceBasis};
use crate::types::parse_date;

/// Date predicate of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSearch {
    /// Approaches on exactly this date.
    Equals(NaiveDate),
    /// Approaches strictly after the first date and strictly before the second.
    Between(NaiveDate, NaiveDate),
}

/// What each result item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnObject {
    /// The whole object, with the matched approach attached.
    #[default]
    Neo,
    /// Only the matched approach.
    Path,
}

impl ReturnObject {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "neo" | "entity" | "object" => Some(ReturnObject::Neo),
            "path" | "record" | "orbit" => Some(ReturnObject::Path),
            _ => None,
        }
    }
}

/// Unvalidated query parameters, as they arrive from the command line or a
/// caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub number: i64,
    pub filters: Vec<String>,
    pub return_object: String,
    /// Empty means [`OccurrenceBasis::Matched`].
    pub entity_filter_basis: String,
}

/// A fully validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub date_search: DateSearch,
    pub number: usize,
    pub filters: FilterChain,
    pub return_object: ReturnObject,
}

impl QuerySpec {
    pub fn build(params: &QueryParams) -> Result<Self> {
        let date_search = date_search(params)?;

        let number = usize::try_from(params.number).map_err(|_| {
            Error::invalid_query(format!("number must not be negative, got {}", params.number))
        })?;

        let return_object = ReturnObject::from_name(&params.return_object).ok_or_else(|| {
            Error::invalid_query(format!(
                "unknown return object {:?} (expected NEO or Path)",
                params.return_object
            ))
        })?;

        let basis = if params.entity_filter_basis.trim().is_empty() {
            OccurrenceBasis::default()
        } else {
            OccurrenceBasis::from_name(&params.entity_filter_basis).ok_or_else(|| {
                Error::invalid_query(format!(
                    "unknown filter basis {:?} (expected matched or first)",
                    params.entity_filter_basis
                ))
            })?
        };

        let filters = FilterChain::parse(&params.filters, basis)?;

        Ok(Self {
            date_search,
            number,
            filters,
            return_object,
        })
    }
}

fn date_search(params: &QueryParams) -> Result<DateSearch> {
    let date = |label: &str, raw: &str| {
        parse_date(raw).ok_or_else(|| {
            Error::invalid_query(format!("{label} {raw:?} is not a YYYY-MM-DD date"))
        })
    };

    match (
        params.date.as_deref(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    ) {
        (Some(on), None, None) => Ok(DateSearch::Equals(date("date", on)?)),
        (None, Some(start), Some(end)) => {
            let start = date("start date", start)?;
            let end = date("end date", end)?;
            if start >= end {
                return Err(Error::invalid_query(format!(
                    "start date {start} must be before end date {end}"
                )));
            }
            Ok(DateSearch::Between(start, end))
        }
        (None, None, None) => Err(Error::invalid_query(
            "either a date or a start and end date is required",
        )),
        (Some(_), _, _) => Err(Error::invalid_query(
            "an exact date cannot be combined with a date range",
        )),
        (None, Some(_), None) => Err(Error::invalid_query("start date given without end date")),
        (None, None, Some(_)) => Err(Error::invalid_query("end date given without start date")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
