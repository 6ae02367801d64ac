//! The single mapping function plus one thin driver per source variant.

use tracing::debug;

use fixture_ingest::{Concept, ExampleRow};
use fixture_model::TestCase;

/// Result of one transform pass: emitted cases plus bookkeeping counts.
#[derive(Debug, Default, Clone)]
pub struct TransformOutcome {
    /// Emitted test cases, in source iteration order.
    pub cases: Vec<TestCase>,
    /// Source records seen.
    pub read: usize,
    /// Records dropped for a blank code.
    pub skipped: usize,
}

/// Build one test case, or nothing when the trimmed code is empty.
///
/// Both strings are trimmed of surrounding whitespace. No other
/// normalization is applied; the UCUM expression passes through exactly as
/// authored.
#[must_use]
pub fn map_to_test_case(
    prefix: &str,
    number: u64,
    code: &str,
    description: &str,
) -> Option<TestCase> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    Some(TestCase {
        id: TestCase::format_id(prefix, number),
        input_expression: code.to_string(),
        valid: true,
        reason: description.trim().to_string(),
    })
}

/// Transform ValueSet concepts in document order.
///
/// The id suffix is the 1-based position in the concept list. The counter
/// follows the source index, so a dropped concept leaves a gap rather than
/// renumbering later entries.
pub fn concepts_to_cases(prefix: &str, concepts: &[Concept]) -> TransformOutcome {
    let mut outcome = TransformOutcome::default();
    for (index, concept) in concepts.iter().enumerate() {
        outcome.read += 1;
        let number = (index + 1) as u64;
        let display = concept.display.as_deref().unwrap_or("");
        match map_to_test_case(prefix, number, &concept.code, display) {
            Some(case) => outcome.cases.push(case),
            None => {
                debug!(prefix, number, "dropping concept with blank code");
                outcome.skipped += 1;
            }
        }
    }
    outcome
}

/// Transform table rows, keeping each row's own number as the id suffix.
pub fn rows_to_cases(prefix: &str, rows: &[ExampleRow]) -> TransformOutcome {
    let mut outcome = TransformOutcome::default();
    for row in rows {
        outcome.read += 1;
        match map_to_test_case(prefix, row.row, &row.code, &row.description) {
            Some(case) => outcome.cases.push(case),
            None => {
                debug!(prefix, row = row.row, "dropping row with blank code");
                outcome.skipped += 1;
            }
        }
    }
    outcome
}
