//! Mapping from source records to canonical test cases.

pub mod map;

pub use map::{TransformOutcome, concepts_to_cases, map_to_test_case, rows_to_cases};
