//! Domain-specific assertion macros for neows harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* result set was wrong and *how*.

use neows_core::Candidate;

/// Names of a result set, in order.
pub fn result_names(results: &[Candidate<'_>]) -> Vec<String> {
    results.iter().map(|c| c.name().to_string()).collect()
}

/// Assert that a result set contains exactly these names, in this order.
///
/// ```rust
/// assert_names!(results, ["A", "B"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let actual = $crate::common::assertions::result_names(&$results);
        let expected: Vec<String> = vec![$($name.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "result names differ");
    }};
}

/// Assert that every result is an object (`Candidate::Neo`).
#[macro_export]
macro_rules! assert_all_neos {
    ($results:expr) => {{
        let results: &[neows_core::Candidate<'_>] = &$results;
        if let Some(bad) = results
            .iter()
            .find(|c| !matches!(c, neows_core::Candidate::Neo(_)))
        {
            panic!("assert_all_neos! failed: found {bad:?}");
        }
    }};
}

/// Assert that every result is a bare approach (`Candidate::Path`).
#[macro_export]
macro_rules! assert_all_paths {
    ($results:expr) => {{
        let results: &[neows_core::Candidate<'_>] = &$results;
        if let Some(bad) = results
            .iter()
            .find(|c| !matches!(c, neows_core::Candidate::Path(_)))
        {
            panic!("assert_all_paths! failed: found {bad:?}");
        }
    }};
}
