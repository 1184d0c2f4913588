//! Puzzle input parsing into rows, tables and grids

use std::fmt;

use crate::io::configuration::DEFAULT_COLUMN_SEPARATOR;
use crate::io::error::{GridError, Result};
use crate::spatial::grid::{RowAxis, SparseGrid};

/// How a row is split into cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSplit {
    /// One cell per character
    Chars,
    /// Cells separated by a literal string
    Separator(String),
}

impl Default for ColumnSplit {
    fn default() -> Self {
        Self::Separator(DEFAULT_COLUMN_SEPARATOR.to_string())
    }
}

/// Layout of tabular puzzle input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFormat {
    /// Row separator; line breaks when `None`
    pub rows: Option<String>,
    /// Column splitting rule
    pub columns: ColumnSplit,
}

impl TableFormat {
    /// One cell per character, one row per line
    pub const fn chars() -> Self {
        Self {
            rows: None,
            columns: ColumnSplit::Chars,
        }
    }
}

/// Layout of grid puzzle input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridFormat {
    /// Table layout of the input
    pub table: TableFormat,
    /// Mapping of input rows onto the y axis
    pub axis: RowAxis,
}

/// Trim `input` and split it into rows
///
/// Without a separator rows are split on `\r\n`, `\n` and `\r`.
pub fn split_rows<'a>(input: &'a str, separator: Option<&str>) -> Vec<&'a str> {
    let trimmed = input.trim();
    match separator {
        Some(separator) => trimmed.split(separator).collect(),
        None => trimmed
            .split("\r\n")
            .flat_map(|chunk| chunk.split(['\n', '\r']))
            .collect(),
    }
}

fn split_columns<'a>(row: &'a str, columns: &ColumnSplit) -> Vec<&'a str> {
    match columns {
        ColumnSplit::Chars => row.split_inclusive(|_: char| true).collect(),
        ColumnSplit::Separator(separator) => row.split(separator.as_str()).collect(),
    }
}

/// Split `input` into a table of parsed cells
///
/// # Errors
///
/// Returns [`GridError::CellParse`] for the first cell `parse_cell` rejects
pub fn parse_table<T, E, F>(
    input: &str,
    format: &TableFormat,
    mut parse_cell: F,
) -> Result<Vec<Vec<T>>>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    split_rows(input, format.rows.as_deref())
        .into_iter()
        .enumerate()
        .map(|(row, line)| {
            split_columns(line, &format.columns)
                .into_iter()
                .enumerate()
                .map(|(column, value)| {
                    parse_cell(value).map_err(|err| GridError::CellParse {
                        row,
                        column,
                        value: value.to_string(),
                        reason: err.to_string(),
                    })
                })
                .collect::<Result<Vec<T>>>()
        })
        .collect()
}

/// Parse `input` straight into a grid
///
/// # Errors
///
/// Returns [`GridError::CellParse`] for the first cell `parse_cell` rejects
pub fn parse_grid<T, E, F>(
    input: &str,
    format: &GridFormat,
    parse_cell: F,
) -> Result<SparseGrid<T>>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    let table = parse_table(input, &format.table, parse_cell)?;
    Ok(SparseGrid::from_table(table, format.axis))
}

/// One `char` per cell, first line on top
pub fn char_grid(input: &str) -> SparseGrid<char> {
    SparseGrid::from_table(
        split_rows(input, None).into_iter().map(str::chars),
        RowAxis::Descending,
    )
}
