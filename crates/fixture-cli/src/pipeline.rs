//! End-to-end fixture-generation runs: load, extract, map, write.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, info_span, warn};

use fixture_ingest::{fhir, table};
use fixture_model::Result;
use fixture_output::{OutputMode, write_fixtures};
use fixture_transform::{TransformOutcome, concepts_to_cases, rows_to_cases};

/// Configuration for one fixture-generation run. All paths are explicit;
/// nothing is hardcoded.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Source document to read.
    pub input: PathBuf,
    /// Fixture file to write (overwritten if present).
    pub output: PathBuf,
    /// Dataset tag used as the id prefix, e.g. `fhir-common`.
    pub id_prefix: String,
    /// Serialization convention for the output file.
    pub mode: OutputMode,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub read: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// Generate fixtures from a FHIR "common UCUM units" ValueSet document.
pub fn run_fhir(config: &JobConfig) -> Result<RunSummary> {
    let span = info_span!("fhir", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let value_set = fhir::load_value_set(&config.input)?;
    let concepts = fhir::common_unit_concepts(&value_set, &config.input)?;
    info!(concepts = concepts.len(), "extracted concept list");

    let outcome = concepts_to_cases(&config.id_prefix, concepts);
    finish(config, outcome, start)
}

/// Generate fixtures from the example-code table (CSV export).
pub fn run_table(config: &JobConfig, skip_rows: usize) -> Result<RunSummary> {
    let span = info_span!("table", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = table::read_example_rows(&config.input, skip_rows)?;
    info!(rows = rows.len(), skip_rows, "read example table");

    let outcome = rows_to_cases(&config.id_prefix, &rows);
    finish(config, outcome, start)
}

fn finish(config: &JobConfig, outcome: TransformOutcome, start: Instant) -> Result<RunSummary> {
    if outcome.cases.is_empty() {
        warn!(input = %config.input.display(), "source yielded no test cases");
    }
    write_fixtures(&outcome.cases, &config.output, config.mode)?;
    info!(
        read = outcome.read,
        emitted = outcome.cases.len(),
        skipped = outcome.skipped,
        duration_ms = start.elapsed().as_millis(),
        "fixture generation complete"
    );
    Ok(RunSummary {
        source: config.input.clone(),
        output: config.output.clone(),
        read: outcome.read,
        emitted: outcome.cases.len(),
        skipped: outcome.skipped,
    })
}
