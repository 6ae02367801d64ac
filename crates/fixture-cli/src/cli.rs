//! CLI argument definitions for the fixture generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fixture_ingest::DEFAULT_SKIP_ROWS;

#[derive(Parser)]
#[command(
    name = "ucum-fixture-gen",
    version,
    about = "Generate UCUM validator test fixtures from reference datasets",
    long_about = "Convert external UCUM reference data into test-case fixtures.\n\n\
                  Supported sources: the FHIR \"common UCUM units\" ValueSet JSON\n\
                  document, and the ucum.org table of example codes (CSV export)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate fixtures from a FHIR "common UCUM units" ValueSet document.
    Fhir(FhirArgs),

    /// Generate fixtures from the table of example codes (CSV export).
    Table(TableArgs),
}

#[derive(Parser)]
pub struct FhirArgs {
    /// Path to the ValueSet JSON document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Fixture file to write.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Serialization convention for the output file.
    #[arg(long = "mode", value_enum, default_value = "lines")]
    pub mode: OutputModeArg,

    /// Dataset tag used as the id prefix.
    #[arg(long = "id-prefix", value_name = "TAG", default_value = "fhir-common")]
    pub id_prefix: String,
}

#[derive(Parser)]
pub struct TableArgs {
    /// Path to the CSV export of the example-code table.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Fixture file to write.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Serialization convention for the output file.
    #[arg(long = "mode", value_enum, default_value = "lines")]
    pub mode: OutputModeArg,

    /// Dataset tag used as the id prefix.
    #[arg(long = "id-prefix", value_name = "TAG", default_value = "ucum-org")]
    pub id_prefix: String,

    /// Leading rows to drop before data starts (title and header rows).
    #[arg(long = "skip-rows", value_name = "N", default_value_t = DEFAULT_SKIP_ROWS)]
    pub skip_rows: usize,
}

/// CLI output mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputModeArg {
    /// One JSON object per line with a trailing comma (historical format).
    Lines,
    /// Strict JSON Lines.
    Jsonl,
    /// Pretty-printed JSON array of the unit codes only.
    Codes,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
