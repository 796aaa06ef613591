//! Error type shared by the sorter, the statistics and the report.

/// Errors produced when a caller violates an input precondition.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    /// The statistic is undefined for the given input (empty sample).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A heap repair was requested outside `root < heap_size <= len`.
    #[error("heap index out of range: root {root}, heap size {heap_size}, length {len}")]
    IndexOutOfRange {
        root: usize,
        heap_size: usize,
        len: usize,
    },

    /// The slice is not in descending order at `index`.
    #[error("sequence is not sorted descending at index {index}")]
    NotSorted { index: usize },

    /// Writing a report to its output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    /// The error returned for an empty sample.
    pub fn empty() -> Self {
        StatsError::InvalidInput("empty sample")
    }
}

/// Result type alias for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;
