//! Reader for two-column lookup tables.

use std::path::Path;

use super::TabulatedFunction;
use crate::error::{NumlabError, Result};

/// Parse a two-column table.
///
/// Each non-empty line holds two whitespace-separated decimal numbers.
/// Lines starting with `#` are comments. Any other line is a hard error;
/// `source_name` identifies the table in the message.
pub fn parse(input: &str, source_name: &str) -> Result<TabulatedFunction> {
    let mut table = TabulatedFunction::new();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (x, y) = match (fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(NumlabError::table_parse(
                    source_name,
                    line_no,
                    format!("expected two fields, got {:?}", trimmed),
                ));
            }
        };

        let x = parse_field(x, source_name, line_no)?;
        let y = parse_field(y, source_name, line_no)?;
        table.add_value_pair(x, y);
    }

    log::debug!("parsed table '{}' with {} samples", source_name, table.len());
    Ok(table)
}

/// Parse a two-column table file.
pub fn parse_file(path: &Path) -> Result<TabulatedFunction> {
    let content = std::fs::read_to_string(path).map_err(|e| NumlabError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content, &path.display().to_string())
}

fn parse_field(text: &str, source_name: &str, line: usize) -> Result<f64> {
    let value: f64 = text.parse().map_err(|_| {
        NumlabError::table_parse(source_name, line, format!("'{}' is not a number", text))
    })?;

    if !value.is_finite() {
        return Err(NumlabError::table_parse(
            source_name,
            line,
            format!("'{}' is not finite", text),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let table = parse("1 2\n3\t4.5\n\n# comment\n  5   -6e-1  \n", "basic").unwrap();
        assert_eq!(table.xs(), &[1.0, 3.0, 5.0]);
        assert_eq!(table.ys(), &[2.0, 4.5, -0.6]);
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = parse("1 2\n3 abc\n", "bad").unwrap_err();
        match err {
            NumlabError::TableParse { source_name, line, .. } => {
                assert_eq!(source_name, "bad");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert!(parse("1\n", "one").is_err());
        assert!(parse("1 2 3\n", "three").is_err());
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/nonexistent/table.txt")).unwrap_err();
        assert!(matches!(err, NumlabError::FileRead { .. }));
    }
}
