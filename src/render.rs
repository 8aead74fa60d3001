//! # Displaying results
//!
//! Results, costs, timings and errors each go to their own region of the display. This module
//! holds no decisions, it only writes what it is given.
use enum_map::{Enum, EnumMap};

use crate::data::solution::Solved;

/// A named area of the display.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Region {
    /// Path of the problem file.
    Load,
    /// Number of decimals.
    Precision,
    /// Summary of the last solve.
    Process,
    /// Tables before and after optimizing.
    Output,
    /// Cost before and after optimizing.
    Cost,
    /// Time the last solve took.
    Elapsed,
    /// Message of the last failure.
    Error,
}

impl Region {
    /// Title shown above the region.
    pub fn title(self) -> &'static str {
        match self {
            Region::Load => "load",
            Region::Precision => "precision",
            Region::Process => "process",
            Region::Output => "output",
            Region::Cost => "cost",
            Region::Elapsed => "elapsed time",
            Region::Error => "error",
        }
    }
}

/// Something regions of text can be written to.
pub trait OutputSink {
    /// Remove all content from a region.
    fn clear(&mut self, region: Region);

    /// Append text to a region.
    fn write(&mut self, region: Region, text: &str);
}

/// Text content of every region, plus the scroll position of the output region.
#[derive(Debug, Default)]
pub struct Regions {
    texts: EnumMap<Region, String>,
    /// Lines and columns scrolled in the output region.
    scroll: (u16, u16),
}

impl Regions {
    /// Current content of a region.
    pub fn text(&self, region: Region) -> &str {
        &self.texts[region]
    }

    /// Replace the content of a region.
    pub fn set(&mut self, region: Region, text: impl Into<String>) {
        self.texts[region] = text.into();
        if region == Region::Output {
            self.scroll = (0, 0);
        }
    }

    /// Type a character into a region.
    pub fn push_char(&mut self, region: Region, character: char) {
        self.texts[region].push(character);
    }

    /// Remove the last character of a region.
    pub fn pop_char(&mut self, region: Region) {
        self.texts[region].pop();
    }

    /// Current `(line, column)` offset of the output region.
    pub fn scroll(&self) -> (u16, u16) {
        self.scroll
    }

    /// Move the view on the output region, staying within its content.
    pub fn scroll_by(&mut self, lines: i32, columns: i32) {
        let output = &self.texts[Region::Output];
        let max_line = output.lines().count().saturating_sub(1);
        let max_column = output.lines().map(|line| line.chars().count()).max().unwrap_or(0).saturating_sub(1);

        let shift = |current: u16, delta: i32, maximum: usize| -> u16 {
            let target = (i64::from(current) + i64::from(delta)).clamp(0, maximum as i64);
            u16::try_from(target).unwrap_or(u16::MAX)
        };
        self.scroll = (
            shift(self.scroll.0, lines, max_line),
            shift(self.scroll.1, columns, max_column),
        );
    }

    /// Return to the top-left corner of the output region.
    pub fn scroll_home(&mut self) {
        self.scroll = (0, 0);
    }
}

impl OutputSink for Regions {
    fn clear(&mut self, region: Region) {
        self.set(region, String::new());
    }

    fn write(&mut self, region: Region, text: &str) {
        self.texts[region].push_str(text);
    }
}

/// Write the results of a solve and the last error to their regions.
///
/// Regions are cleared first, so nothing of an earlier solve or error survives. Without a result,
/// the result regions are left alone.
pub fn render(sink: &mut impl OutputSink, solved: Option<&Solved>, error: Option<&str>) {
    if let Some(solved) = solved {
        show_solution(sink, solved);
    }
    show_error(sink, error);
}

/// Write tables, cost and elapsed time of a solve.
pub fn show_solution(sink: &mut impl OutputSink, solved: &Solved) {
    sink.clear(Region::Output);
    sink.write(Region::Output, "Minimal taxes method\n");
    sink.write(Region::Output, &solved.presolve.table);
    sink.write(Region::Output, &format!(
        "\nCost function: {}\n\nOptimizing...\n",
        solved.format_value(solved.presolve.cost),
    ));
    sink.write(Region::Output, &solved.optimized.table);
    sink.write(Region::Output, &format!(
        "\nCost function: {}\n",
        solved.format_value(solved.optimized.cost),
    ));

    sink.clear(Region::Cost);
    sink.write(Region::Cost, &format!(
        "{} -> {}",
        solved.format_value(solved.presolve.cost),
        solved.format_value(solved.optimized.cost),
    ));

    sink.clear(Region::Elapsed);
    sink.write(Region::Elapsed, &format!("{:?}", solved.elapsed()));
}

/// Write an error, or clear the error region if there is none.
pub fn show_error(sink: &mut impl OutputSink, error: Option<&str>) {
    sink.clear(Region::Error);
    if let Some(error) = error {
        sink.write(Region::Error, error);
    }
}
