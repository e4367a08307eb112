//! Filter chain: `field:operator:value` predicates over search candidates.
//!
//! Field names resolve through a single compile-time table ([`FIELDS`]) that
//! both the query builder and the evaluator use. Every field reads from an
//! [`OrbitPath`]; filters never look at an object's aggregate values.
//!
//! | Name(s)                  | Reads                         |
//! |--------------------------|-------------------------------|
//! | `is_hazardous`, `hazard` | `OrbitPath::is_potentially_hazardous` |
//! | `diameter`, `size`       | `OrbitPath::diameter_min_km`  |
//! | `distance`, `miss_distance` | `OrbitPath::miss_distance_km` |
//!
//! The size filter deliberately reads the minimum diameter rather than the
//! midpoint `size`.

use phf::phf_map;

use crate::error::{Error, Result};
use crate::types::{Candidate, OrbitPath};

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

/// A filterable approach attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hazard,
    Size,
    Distance,
}

/// Accepted filter field names.
pub static FIELDS: phf::Map<&'static str, Field> = phf_map! {
    "is_hazardous" => Field::Hazard,
    "hazard" => Field::Hazard,
    "diameter" => Field::Size,
    "size" => Field::Size,
    "distance" => Field::Distance,
    "miss_distance" => Field::Distance,
};

impl Field {
    pub fn from_name(name: &str) -> Result<Self> {
        FIELDS
            .get(name.trim())
            .copied()
            .ok_or_else(|| Error::NoSuchField(name.trim().to_string()))
    }

    /// Canonical name, as used in filter tokens.
    pub fn name(self) -> &'static str {
        match self {
            Field::Hazard => "is_hazardous",
            Field::Size => "diameter",
            Field::Distance => "distance",
        }
    }

    fn read(self, orbit: &OrbitPath) -> FilterValue {
        match self {
            Field::Hazard => FilterValue::Bool(orbit.is_potentially_hazardous),
            Field::Size => FilterValue::Number(orbit.diameter_min_km),
            Field::Distance => FilterValue::Number(orbit.miss_distance_km),
        }
    }

    fn is_flag(self) -> bool {
        matches!(self, Field::Hazard)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
}

static OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
    "=" => Operator::Eq,
    "==" => Operator::Eq,
    ">=" => Operator::Ge,
    "<=" => Operator::Le,
    ">" => Operator::Gt,
    "<" => Operator::Lt,
};

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        OPERATORS.get(token.trim()).copied()
    }

    pub fn compare<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Le => lhs <= rhs,
            Operator::Gt => lhs > rhs,
            Operator::Lt => lhs < rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A coerced filter literal: `True`/`False` become booleans, anything else
/// must parse as a finite float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Number(f64),
}

impl FilterValue {
    fn coerce(field: Field, raw: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidFilterValue {
            field: field.name().to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        let token = raw.trim();
        let value = match token {
            "True" => FilterValue::Bool(true),
            "False" => FilterValue::Bool(false),
            _ => match token.parse::<f64>() {
                Ok(n) if n.is_finite() => FilterValue::Number(n),
                _ => return Err(invalid("expected True, False or a number")),
            },
        };

        match (field.is_flag(), value) {
            (true, FilterValue::Number(_)) => Err(invalid("field takes True or False")),
            (false, FilterValue::Bool(_)) => Err(invalid("field takes a number")),
            _ => Ok(value),
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Bool(true) => f.write_str("True"),
            FilterValue::Bool(false) => f.write_str("False"),
            FilterValue::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// OccurrenceBasis
// ---------------------------------------------------------------------------

/// Which approach of an object-level candidate the filters compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccurrenceBasis {
    /// The approach that satisfied the date search.
    #[default]
    Matched,
    /// The approach ingested first for the object, whatever its date.
    FirstRecorded,
}

impl OccurrenceBasis {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "matched" => Some(OccurrenceBasis::Matched),
            "first" | "first_recorded" => Some(OccurrenceBasis::FirstRecorded),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// One validated predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    pub field: Field,
    pub op: Operator,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(field: &str, op: &str, value: &str) -> Result<Self> {
        let field = Field::from_name(field)?;
        let op = Operator::from_token(op)
            .ok_or_else(|| Error::invalid_query(format!("unknown filter operator {op:?}")))?;
        let value = FilterValue::coerce(field, value)?;
        Ok(Self { field, op, value })
    }

    /// Parse a raw `field:operator:value` token.
    pub fn parse(token: &str) -> Result<Self> {
        match token.split(':').collect::<Vec<_>>().as_slice() {
            [field, op, value] => Self::new(field, op, value),
            parts => Err(Error::invalid_query(format!(
                "filter {token:?} must have 3 colon-separated parts, found {}",
                parts.len()
            ))),
        }
    }

    pub fn matches(&self, orbit: &OrbitPath) -> bool {
        match (self.field.read(orbit), self.value) {
            (FilterValue::Bool(lhs), FilterValue::Bool(rhs)) => self.op.compare(lhs, rhs),
            (FilterValue::Number(lhs), FilterValue::Number(rhs)) => self.op.compare(lhs, rhs),
            // Ruled out by `FilterValue::coerce`.
            _ => false,
        }
    }

    /// Keep the candidates whose compared approach satisfies this filter.
    pub fn apply<'a>(
        &self,
        candidates: Vec<Candidate<'a>>,
        basis: OccurrenceBasis,
    ) -> Vec<Candidate<'a>> {
        if candidates.is_empty() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate.compared_orbit(basis)))
            .collect()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.field, self.op, self.value)
    }
}

// ---------------------------------------------------------------------------
// FilterChain
// ---------------------------------------------------------------------------

/// Filters applied in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChain {
    pub filters: Vec<Filter>,
    pub basis: OccurrenceBasis,
}

impl FilterChain {
    pub fn new(filters: Vec<Filter>, basis: OccurrenceBasis) -> Self {
        Self { filters, basis }
    }

    /// Parse every raw token, failing on the first bad one.
    pub fn parse<S: AsRef<str>>(tokens: &[S], basis: OccurrenceBasis) -> Result<Self> {
        let filters = tokens
            .iter()
            .map(|t| Filter::parse(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(filters, basis))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        self.filters
            .iter()
            .fold(candidates, |acc, filter| filter.apply(acc, self.basis))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
