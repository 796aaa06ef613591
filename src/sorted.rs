//! A borrowed byte slice known to be sorted from largest to smallest.
//!
//! The statistics in [`crate::stats`] read the median and extrema straight
//! from fixed positions, which is only correct on descending data. A
//! [`SortedDesc`] can only be obtained by sorting or by a validating
//! constructor, so that ordering is checked once at construction and
//! carried by the type afterwards.

use crate::error::{StatsError, StatsResult};
use crate::heap;

/// Read-only view over a slice sorted in non-increasing order.
///
/// # Examples
/// ```
/// use u_bytestats::sorted::SortedDesc;
/// let mut data = [3, 9, 1];
/// let sorted = SortedDesc::sort(&mut data);
/// assert_eq!(sorted.as_slice(), &[9, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedDesc<'a> {
    data: &'a [u8],
}

impl<'a> SortedDesc<'a> {
    /// Heap-sorts `data` in place and borrows the result.
    pub fn sort(data: &'a mut [u8]) -> Self {
        heap::sort(data);
        Self { data }
    }

    /// Wraps a slice that is already sorted descending.
    ///
    /// # Errors
    /// [`StatsError::NotSorted`] with the first index whose value exceeds
    /// its predecessor.
    ///
    /// # Examples
    /// ```
    /// use u_bytestats::sorted::SortedDesc;
    /// assert!(SortedDesc::try_new(&[5, 5, 2]).is_ok());
    /// assert!(SortedDesc::try_new(&[2, 5]).is_err());
    /// ```
    pub fn try_new(data: &'a [u8]) -> StatsResult<Self> {
        if let Some(pos) = data.windows(2).position(|w| w[0] < w[1]) {
            return Err(StatsError::NotSorted { index: pos + 1 });
        }
        Ok(Self { data })
    }

    /// The underlying slice, largest value first.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sample holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The largest value.
    pub fn first(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// The smallest value.
    pub fn last(&self) -> Option<u8> {
        self.data.last().copied()
    }
}

impl AsRef<[u8]> for SortedDesc<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> TryFrom<&'a [u8]> for SortedDesc<'a> {
    type Error = StatsError;

    fn try_from(data: &'a [u8]) -> StatsResult<Self> {
        Self::try_new(data)
    }
}
