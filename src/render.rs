//! Boxed text rendering of a byte sample, four values per line.
//!
//! ```text
//!  _____________________
//! |                     |
//! |   34, 201, 190, 154 |
//! |    7,  87           |
//! |_____________________|
//! ```
//!
//! Rendering is lazy: [`Grid::rows`] walks the borrowed slice on demand and
//! can be called any number of times.

use std::fmt;
use std::slice::Chunks;

/// Values per rendered line.
pub const VALUES_PER_ROW: usize = 4;

pub(crate) const BOX_TOP: &str = " _____________________";
pub(crate) const BOX_BLANK: &str = "|                     |";
pub(crate) const BOX_BOTTOM: &str = "|_____________________|";
pub(crate) const BOX_INNER_WIDTH: usize = 21;

/// Width taken by one `", nnn"` cell, used to pad a short last row.
const CELL_WIDTH: usize = 5;

/// Returns a lazy, restartable rendering of `data`.
///
/// # Examples
/// ```
/// use u_bytestats::render::render;
/// let grid = render(&[1, 2, 3, 4, 5]);
/// let rows: Vec<String> = grid.rows().map(|r| r.to_string()).collect();
/// assert_eq!(rows, ["|    1,   2,   3,   4 |", "|    5                |"]);
/// // A second pass starts over.
/// assert_eq!(grid.rows().count(), 2);
/// ```
pub fn render(data: &[u8]) -> Grid<'_> {
    Grid { data }
}

/// A borrowed sample ready to be printed as a box.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    data: &'a [u8],
}

impl<'a> Grid<'a> {
    /// Iterates over the rows, each holding up to [`VALUES_PER_ROW`] values.
    pub fn rows(&self) -> Rows<'a> {
        Rows {
            chunks: self.data.chunks(VALUES_PER_ROW),
        }
    }
}

impl<'a> IntoIterator for Grid<'a> {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Rows<'a> {
        self.rows()
    }
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BOX_TOP}")?;
        writeln!(f, "{BOX_BLANK}")?;
        if self.data.is_empty() {
            writeln!(f, "|{:<width$}|", "  (empty)", width = BOX_INNER_WIDTH)?;
        }
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        writeln!(f, "{BOX_BOTTOM}")?;
        writeln!(f)
    }
}

/// Iterator returned by [`Grid::rows`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    chunks: Chunks<'a, u8>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        self.chunks.next().map(|values| Row { values })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// One line of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    values: &'a [u8],
}

impl<'a> Row<'a> {
    pub fn values(&self) -> &'a [u8] {
        self.values
    }
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|  ")?;
        for (i, value) in self.values.iter().enumerate() {
            if i == 0 {
                write!(f, "{value:3}")?;
            } else {
                write!(f, ", {value:3}")?;
            }
        }
        let missing = VALUES_PER_ROW.saturating_sub(self.values.len());
        write!(f, "{:width$}", "", width = missing * CELL_WIDTH)?;
        f.write_str(" |")
    }
}
