//! Fixture rendering and file writing.
//!
//! Line-oriented modes print one object per line with a space after each
//! colon and comma, matching the historical fixture files the validator
//! suite was seeded from, so regenerated files diff cleanly against
//! hand-edited ones.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use tracing::info;

use fixture_model::{FixtureError, Result, TestCase};

/// Serialization conventions for the generated fixture file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One JSON object per line, each line terminated by a literal comma.
    /// Not standalone JSON: the consuming suite pastes these lines into a
    /// JSON array literal.
    #[default]
    LineDelimited,
    /// Strict JSON Lines, one object per line, no trailing comma.
    JsonLines,
    /// A single pretty-printed JSON array of the unit-code strings only.
    CodeArray,
}

/// Render the fixture text for the given mode.
///
/// # Errors
///
/// `Render` if a record fails to serialize.
pub fn render(cases: &[TestCase], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::LineDelimited => render_lines(cases, ","),
        OutputMode::JsonLines => render_lines(cases, ""),
        OutputMode::CodeArray => {
            let codes: Vec<&str> = cases
                .iter()
                .map(|case| case.input_expression.as_str())
                .collect();
            let mut text = serde_json::to_string_pretty(&codes)
                .map_err(|source| FixtureError::Render { source })?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Render and write the fixtures, overwriting any existing file.
///
/// # Errors
///
/// `Render` on serialization failure, `Io` when the file cannot be written.
pub fn write_fixtures(cases: &[TestCase], path: &Path, mode: OutputMode) -> Result<()> {
    let rendered = render(cases, mode)?;
    fs::write(path, rendered).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), cases = cases.len(), "wrote fixtures");
    Ok(())
}

fn render_lines(cases: &[TestCase], terminator: &str) -> Result<String> {
    let mut out = String::new();
    for case in cases {
        out.push_str(&spaced_json(case)?);
        out.push_str(terminator);
        out.push('\n');
    }
    Ok(out)
}

/// Serialize one record on a single line with a space after `:` and `,`.
fn spaced_json(case: &TestCase) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    case.serialize(&mut serializer)
        .map_err(|source| FixtureError::Render { source })?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Compact single-line formatter with `", "` and `": "` separators.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
