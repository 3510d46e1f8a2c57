//! Text output for the CLI frontend.
//!
//! Renders several tabulated functions sharing one abscissa column as an
//! aligned text table or as CSV.

use std::io::{self, Write};

use crate::error::{NumlabError, Result};
use crate::table::TabulatedFunction;

/// Output format for result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Aligned, pipe-separated columns
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
}

/// Column width for the text table.
const COLUMN_WIDTH: usize = 13;

/// A set of columns sampled on a common grid.
pub struct Report<'a> {
    x_label: String,
    columns: Vec<(String, &'a TabulatedFunction)>,
}

impl<'a> Report<'a> {
    /// Start a report with the label of the shared abscissa.
    pub fn new(x_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column. The abscissae are taken from the first column.
    pub fn column(mut self, label: impl Into<String>, values: &'a TabulatedFunction) -> Self {
        self.columns.push((label.into(), values));
        self
    }

    /// Write the report to `out`.
    pub fn write<W: Write>(&self, out: &mut W, format: Format) -> Result<()> {
        let rows = self.row_count()?;
        let labels: Vec<&str> = std::iter::once(self.x_label.as_str())
            .chain(self.columns.iter().map(|(label, _)| label.as_str()))
            .collect();

        let result = match format {
            Format::Table => self.write_table(out, &labels, rows),
            Format::Csv => self.write_csv(out, &labels, rows),
        };
        result.map_err(|e| NumlabError::Output {
            message: e.to_string(),
        })
    }

    /// Write the report to stdout.
    pub fn print(&self, format: Format) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write(&mut lock, format)?;
        lock.flush().map_err(|e| NumlabError::Output {
            message: e.to_string(),
        })
    }

    fn row_count(&self) -> Result<usize> {
        let Some((_, first)) = self.columns.first() else {
            return Ok(0);
        };
        for (_, column) in &self.columns[1..] {
            if column.len() != first.len() {
                return Err(NumlabError::LengthMismatch {
                    left: first.len(),
                    right: column.len(),
                });
            }
        }
        Ok(first.len())
    }

    fn row(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        let x = self.columns[0].1.xs()[index];
        std::iter::once(x).chain(self.columns.iter().map(move |(_, c)| c.ys()[index]))
    }

    fn write_table<W: Write>(&self, out: &mut W, labels: &[&str], rows: usize) -> io::Result<()> {
        let rule = "-".repeat(labels.len() * (COLUMN_WIDTH + 1) + 1);

        writeln!(out, "{}", rule)?;
        write!(out, "|")?;
        for label in labels {
            write!(out, "{:^width$}|", label, width = COLUMN_WIDTH)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", rule)?;

        for index in 0..rows {
            write!(out, "|")?;
            for value in self.row(index) {
                write!(out, "{:>width$}|", format_value(value), width = COLUMN_WIDTH)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "{}", rule)
    }

    fn write_csv<W: Write>(&self, out: &mut W, labels: &[&str], rows: usize) -> io::Result<()> {
        writeln!(out, "{}", labels.join(","))?;
        for index in 0..rows {
            let line: Vec<String> = self.row(index).map(|v| v.to_string()).collect();
            writeln!(out, "{}", line.join(","))?;
        }
        Ok(())
    }
}

/// Fixed notation for moderate magnitudes, scientific otherwise.
fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e6).contains(&magnitude) {
        format!("{:.6}", value)
    } else {
        format!("{:.5e}", value)
    }
}
