//! # Importing matrix files
//!
//! A matrix file describes a transportation problem as lines of whitespace separated numbers. All
//! lines but the last hold the costs of one supply point followed by its supply; the last line
//! holds the demand of each demand point:
//!
//! ```text
//! 4 5 6 100
//! 7 2 3 150
//! 80 90 80
//! ```
//!
//! Parsing happens in two stages: the text is first read into a `ParsedGrid` of numbers, which is
//! then split into the pieces of a `ProblemInstance`.
use log::debug;

use crate::data::problem::ProblemInstance;
use crate::io::error::{ParseError, ParseResult};

pub mod number;

/// Parse the contents of a matrix file into a problem instance.
///
/// # Arguments
///
/// * `program`: The complete file contents.
///
/// # Errors
///
/// `ParseError::MalformedNumber` for the first token that is not a number, and
/// `ParseError::EmptyInput` if there are fewer than two lines holding numbers.
///
/// Rows of differing length are not an error here, they are passed through as-is.
pub fn parse(program: &str) -> ParseResult<ProblemInstance> {
    let grid = ParsedGrid::try_from(program)?;
    debug!("Read {} lines holding numbers", grid.rows().len());

    grid.into_problem()
}

/// Every non-empty line of a matrix file, read as numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedGrid {
    rows: Vec<GridRow>,
}

/// A single line of a matrix file.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
    /// Line number in the file as read from disk, 1-based.
    pub line: usize,
    /// The numbers on the line, in order.
    pub values: Vec<f64>,
}

impl TryFrom<&str> for ParsedGrid {
    type Error = ParseError;

    /// Read all lines containing at least one token.
    ///
    /// Lines consisting of only whitespace carry no data and are skipped, but still count for the
    /// line numbers used in errors.
    fn try_from(program: &str) -> Result<Self, Self::Error> {
        let rows = program.lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_number, line)| into_row(line_number, line))
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(Self { rows })
    }
}

/// Convert a line into numbers.
fn into_row(line_number: usize, line: &str) -> ParseResult<GridRow> {
    let values = line.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            number::parse(token).ok_or_else(|| ParseError::MalformedNumber {
                line: line_number,
                column: index + 1,
                token: token.to_string(),
            })
        })
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(GridRow { line: line_number, values })
}

impl ParsedGrid {
    /// Rows read, in file order.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Split the grid into costs, supply and demand.
    ///
    /// The last row is the demand vector. Of every other row, the last value is the supply and the
    /// values before it are the costs.
    ///
    /// # Errors
    ///
    /// `ParseError::EmptyInput` if there is no cost row next to the demand row.
    pub fn into_problem(self) -> ParseResult<ProblemInstance> {
        let nr_rows = self.rows.len();
        let mut rows = self.rows;

        let demand = match rows.pop() {
            Some(demand) if !rows.is_empty() => demand,
            _ => return Err(ParseError::EmptyInput { lines: nr_rows }),
        };
        debug!("Demand row is on line {}", demand.line);

        let (costs, supply): (Vec<_>, Vec<_>) = rows.into_iter()
            .map(|GridRow { mut values, .. }| {
                // Rows are never empty: lines without tokens were skipped while reading
                let supply = values.pop().unwrap_or_default();
                (values, supply)
            })
            .unzip();

        Ok(ProblemInstance::new(costs, supply, demand.values))
    }
}
