//! Output formatting for solver results.
//!
//! This module provides the formats a [`Solution`] can be rendered in.

use std::io::{self, Write};

use clap::ValueEnum;
use heartpath_lib::Solution;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Hearts lost as a bare integer, or `unreachable`.
    #[default]
    Text,
    /// The full solution as a JSON object.
    Json,
}

/// Render `solution` to `writer` in the requested format.
pub fn render_solution<W: Write>(
    writer: &mut W,
    solution: &Solution,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", solution.hearts_lost),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, solution).map_err(io::Error::from)?;
            writeln!(writer)
        }
    }
}
