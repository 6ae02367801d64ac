//! Source loading for the UCUM fixture generator.
//!
//! Each source gets a typed record shape validated at the parse boundary:
//! a missing file, a malformed document, and a present-but-wrong shape are
//! distinct errors, and a well-formed source with zero examples is not an
//! error at all.

pub mod fhir;
pub mod table;

pub use fhir::{Concept, ValueSet, common_unit_concepts, load_value_set};
pub use table::{DEFAULT_SKIP_ROWS, ExampleRow, read_example_rows};

use std::path::Path;

use fixture_model::{FixtureError, Result};

/// Read a source file, mapping a missing file to its own error variant.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => FixtureError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => FixtureError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
