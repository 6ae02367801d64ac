//! FHIR ValueSet source: the bundled "common UCUM units" document.
//!
//! Only the composition path carrying the example concepts is modeled;
//! everything else in the resource is ignored on deserialization.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use fixture_model::{FixtureError, Result};

/// Subset of a FHIR ValueSet resource read by the fixture generator.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueSet {
    pub compose: Option<Compose>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Compose {
    #[serde(default)]
    pub include: Vec<Include>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Include {
    #[serde(default)]
    pub concept: Vec<Concept>,
}

/// One coded unit example: the UCUM expression plus its display text.
#[derive(Debug, Clone, Deserialize)]
pub struct Concept {
    pub code: String,
    #[serde(default)]
    pub display: Option<String>,
}

/// Load and deserialize a ValueSet document.
///
/// # Errors
///
/// `SourceNotFound` when the file is missing, `Parse` when the document is
/// not the expected JSON shape.
pub fn load_value_set(path: &Path) -> Result<ValueSet> {
    let contents = crate::read_source(path)?;
    let value_set: ValueSet = serde_json::from_str(&contents)
        .map_err(|error| FixtureError::parse(path, error.to_string()))?;
    debug!(path = %path.display(), "loaded value set");
    Ok(value_set)
}

/// Navigate to the concept list at `compose.include[0].concept`.
///
/// # Errors
///
/// `Schema` when the composition path is absent. An empty concept list is
/// not an error; it simply yields zero fixtures downstream.
pub fn common_unit_concepts<'a>(value_set: &'a ValueSet, path: &Path) -> Result<&'a [Concept]> {
    let compose = value_set
        .compose
        .as_ref()
        .ok_or_else(|| FixtureError::schema(path, "missing compose section"))?;
    let include = compose
        .include
        .first()
        .ok_or_else(|| FixtureError::schema(path, "compose.include has no entries"))?;
    Ok(&include.concept)
}
