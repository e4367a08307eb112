//! Shared test utilities for neows integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.
#![allow(dead_code, unused_imports, unused_macros)]

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
