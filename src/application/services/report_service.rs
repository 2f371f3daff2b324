//! Match table and run summary.

use std::fmt;
use std::time::Duration;

use crate::domain::entities::{MatchRecord, ScanProgress};

/// Column headers of the match table, in display order.
pub const TABLE_HEADERS: [&str; 5] = ["ID", "Title", "Date", "Author", "URL"];

/// Final output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Nothing matched: a single informational line, no table.
    NoMatches { summary: String },
    /// At least one match: summary plus the match table.
    Matches { summary: String, table: MatchTable },
}

impl Report {
    pub fn summary(&self) -> &str {
        match self {
            Report::NoMatches { summary } | Report::Matches { summary, .. } => summary,
        }
    }

    pub fn table(&self) -> Option<&MatchTable> {
        match self {
            Report::NoMatches { .. } => None,
            Report::Matches { table, .. } => Some(table),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoMatches { summary } => writeln!(f, "{summary}"),
            Report::Matches { summary, table } => {
                writeln!(f, "{summary}")?;
                write!(f, "{table}")
            }
        }
    }
}

/// Matches laid out as rows of [`TABLE_HEADERS`] columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTable {
    rows: Vec<[String; 5]>,
}

impl MatchTable {
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|r| [r.id.to_string(), r.title, r.date, r.author_name, r.url])
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[[String; 5]] {
        &self.rows
    }

    fn column_widths(&self) -> [usize; 5] {
        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for MatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        let separator = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");

        writeln!(f, "+{separator}+")?;
        write_row(f, &TABLE_HEADERS, &widths)?;
        writeln!(f, "+{separator}+")?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        writeln!(f, "+{separator}+")
    }
}

fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S; 5], widths: &[usize; 5]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, " {:<width$} |", cell.as_ref())?;
    }
    writeln!(f)
}

/// Builds the [`Report`] of a finished run.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Turns accumulated matches and the final counters into a report.
    ///
    /// With zero matches the report is one line stating the processed count
    /// and elapsed time. Otherwise the summary adds the match count and its
    /// share of processed items, and the matches are rendered as a table.
    pub fn build(matches: Vec<MatchRecord>, progress: &ScanProgress, elapsed: Duration) -> Report {
        let elapsed = format_elapsed(elapsed);

        if progress.total_matched == 0 {
            return Report::NoMatches {
                summary: format!(
                    "No matching items found. Processed {} items in {}.",
                    progress.total_processed, elapsed
                ),
            };
        }

        let summary = format!(
            "Search complete in {}.\nTotal items processed: {}\nMatching items found: {} ({}% of processed items)",
            elapsed,
            progress.total_processed,
            progress.total_matched,
            match_percentage(progress.total_matched, progress.total_processed)
        );

        Report::Matches {
            summary,
            table: MatchTable::from_records(matches),
        }
    }
}

/// Share of matched items, two decimal places.
///
/// Callers guarantee `processed > 0` whenever `matched > 0`; a zero
/// denominator renders as `0.00`.
pub fn match_percentage(matched: u64, processed: u64) -> String {
    if processed == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", round_cents(matched as f64 / processed as f64 * 100.0))
}

/// Formats a duration for humans.
///
/// - under 1 second: milliseconds, two decimals
/// - under 1 minute: seconds, two decimals
/// - otherwise: whole minutes plus remaining seconds, two decimals
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();

    if seconds < 1.0 {
        format!("{:.2} milliseconds", round_cents(seconds * 1000.0))
    } else if seconds < 60.0 {
        format!("{:.2} seconds", round_cents(seconds))
    } else {
        let minutes = (seconds / 60.0).floor();
        format!(
            "{} minutes, {:.2} seconds",
            minutes as u64,
            round_cents(seconds - minutes * 60.0)
        )
    }
}

/// Rounds to two decimals, ties away from zero.
///
/// `{:.2}` alone rounds exact ties to even (`3.125` -> `3.12`).
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
