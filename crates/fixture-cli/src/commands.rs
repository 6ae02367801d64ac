//! Subcommand entry points bridging CLI arguments to pipeline jobs.

use anyhow::{Context, Result};

use fixture_cli::pipeline::{JobConfig, RunSummary, run_fhir, run_table};
use fixture_output::OutputMode;

use crate::cli::{FhirArgs, OutputModeArg, TableArgs};

pub fn run_fhir_command(args: &FhirArgs) -> Result<RunSummary> {
    let config = JobConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        id_prefix: args.id_prefix.clone(),
        mode: output_mode(args.mode),
    };
    run_fhir(&config).with_context(|| format!("generate fixtures from {}", args.input.display()))
}

pub fn run_table_command(args: &TableArgs) -> Result<RunSummary> {
    let config = JobConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        id_prefix: args.id_prefix.clone(),
        mode: output_mode(args.mode),
    };
    run_table(&config, args.skip_rows)
        .with_context(|| format!("generate fixtures from {}", args.input.display()))
}

fn output_mode(arg: OutputModeArg) -> OutputMode {
    match arg {
        OutputModeArg::Lines => OutputMode::LineDelimited,
        OutputModeArg::Jsonl => OutputMode::JsonLines,
        OutputModeArg::Codes => OutputMode::CodeArray,
    }
}
