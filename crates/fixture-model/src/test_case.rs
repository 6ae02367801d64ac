//! The canonical test-case record consumed by the validator test suite.

use serde::{Deserialize, Serialize};

/// One unit-code example together with its expected validation outcome.
///
/// Field names on the wire match the fixture files the test suite loads
/// (`inputExpression` and friends, camelCase). Records are built once and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Unique, stable identifier: `<dataset tag>-<number>`.
    pub id: String,
    /// The UCUM expression under test, trimmed but otherwise verbatim.
    pub input_expression: String,
    /// Expected outcome. Every record produced here comes from a curated
    /// list of known-valid examples.
    pub valid: bool,
    /// Human-readable description of the unit.
    pub reason: String,
}

impl TestCase {
    /// Compose an id from a dataset tag and a sequence or row number.
    #[must_use]
    pub fn format_id(prefix: &str, number: u64) -> String {
        format!("{prefix}-{number}")
    }
}
