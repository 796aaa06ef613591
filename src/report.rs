//! End-to-end report: render, sort, render again, summarize.
//!
//! [`report`] is the entry point most callers need. It sorts the caller's
//! slice in place as a side effect and writes a text report such as:
//!
//! ```text
//! Array:
//! Sorted array:
//!  _____________________
//! |                     |
//! |  Median:   87       |
//! |  Mean:     93       |
//! |  Maximum: 250       |
//! |  Minimum:   2       |
//! |_____________________|
//! ```
//!
//! With [`ReportConfig::verbose`] set, each label is followed by the boxed
//! rendering of the sample (see [`crate::render`]).

use std::io::Write;

use crate::error::StatsResult;
use crate::render::{render, BOX_BLANK, BOX_BOTTOM, BOX_INNER_WIDTH, BOX_TOP};
use crate::sorted::SortedDesc;
use crate::stats::Summary;

/// Options for [`report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Print the sample before and after sorting.
    pub verbose: bool,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Sorts `data` in place and writes the report to `out`.
///
/// # Errors
/// - [`StatsError::InvalidInput`](crate::StatsError::InvalidInput) if
///   `data` is empty. The statistics box is still written, with a labeled
///   "no statistics" line in place of values.
/// - [`StatsError::Io`](crate::StatsError::Io) if writing to `out` fails.
///
/// # Examples
/// ```
/// use u_bytestats::report::{report, ReportConfig};
/// let mut data = [34, 201, 190, 154, 8];
/// let mut out = Vec::new();
/// let summary = report(&mut data, &ReportConfig::default(), &mut out).unwrap();
/// assert_eq!(data, [201, 190, 154, 34, 8]);
/// assert_eq!(summary.median, 154);
/// assert!(String::from_utf8(out).unwrap().contains("|  Maximum: 201       |"));
/// ```
pub fn report<W: Write>(
    data: &mut [u8],
    config: &ReportConfig,
    out: &mut W,
) -> StatsResult<Summary> {
    tracing::debug!(len = data.len(), verbose = config.verbose, "writing report");

    writeln!(out, "Array:")?;
    if config.verbose {
        write!(out, "{}", render(data))?;
    }

    let sorted = SortedDesc::sort(data);
    writeln!(out, "Sorted array:")?;
    if config.verbose {
        write!(out, "{}", render(sorted.as_slice()))?;
    }

    let summary = match Summary::from_sorted(&sorted) {
        Ok(summary) => summary,
        Err(err) => {
            tracing::warn!(error = %err, "no statistics for sample");
            write_empty_box(out)?;
            return Err(err);
        }
    };
    write_summary_box(out, &summary)?;
    Ok(summary)
}

/// Runs [`report`] against standard output.
pub fn print_report(data: &mut [u8], config: &ReportConfig) -> StatsResult<Summary> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    report(data, config, &mut lock)
}

fn write_summary_box<W: Write>(out: &mut W, summary: &Summary) -> std::io::Result<()> {
    writeln!(out, "{BOX_TOP}")?;
    writeln!(out, "{BOX_BLANK}")?;
    writeln!(out, "|  Median:  {:3}       |", summary.median)?;
    writeln!(out, "|  Mean:    {:3}       |", summary.mean)?;
    writeln!(out, "|  Maximum: {:3}       |", summary.maximum)?;
    writeln!(out, "|  Minimum: {:3}       |", summary.minimum)?;
    writeln!(out, "{BOX_BOTTOM}")?;
    writeln!(out)
}

fn write_empty_box<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{BOX_TOP}")?;
    writeln!(out, "{BOX_BLANK}")?;
    writeln!(out, "|{:<width$}|", "  No statistics:", width = BOX_INNER_WIDTH)?;
    writeln!(out, "|{:<width$}|", "  sample is empty", width = BOX_INNER_WIDTH)?;
    writeln!(out, "{BOX_BOTTOM}")?;
    writeln!(out)
}
