//! Summary statistics over descending byte samples.
//!
//! Every function takes a [`SortedDesc`], so the ordering they rely on is
//! established before any of them runs. Median and extrema are then read
//! from fixed positions instead of scanning.
//!
//! # Arithmetic
//!
//! All results are `u8`. Intermediate sums are widened so they cannot
//! overflow, and every division truncates toward zero.

use crate::error::{StatsError, StatsResult};
use crate::sorted::SortedDesc;

/// Returns the median of a descending sample.
///
/// For odd `n` this is the middle element `a[n/2]`. For even `n` it is the
/// truncated average of the two central elements `a[n/2]` and `a[(n-1)/2]`.
///
/// # Complexity
/// Time: O(1), Space: O(1)
///
/// # Returns
/// - `None` if the sample is empty.
///
/// # Examples
/// ```
/// use u_bytestats::sorted::SortedDesc;
/// use u_bytestats::stats::median;
/// let odd = SortedDesc::try_new(&[201, 190, 154, 34, 8]).unwrap();
/// assert_eq!(median(&odd), Some(154));
/// let even = SortedDesc::try_new(&[9, 4, 3, 0]).unwrap();
/// assert_eq!(median(&even), Some(3)); // (4 + 3) / 2
/// ```
pub fn median(sorted: &SortedDesc<'_>) -> Option<u8> {
    let a = sorted.as_slice();
    let n = a.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(a[n / 2])
    } else {
        let sum = u16::from(a[n / 2]) + u16::from(a[(n - 1) / 2]);
        Some((sum / 2) as u8)
    }
}

/// Returns the truncated arithmetic mean.
///
/// The sum is accumulated in a `u64`, which holds `255 * n` for any slice
/// that fits in memory.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`StatsError::InvalidInput`] if the sample is empty.
///
/// # Examples
/// ```
/// use u_bytestats::sorted::SortedDesc;
/// use u_bytestats::stats::mean;
/// let s = SortedDesc::try_new(&[255, 255, 255, 255]).unwrap();
/// assert_eq!(mean(&s).unwrap(), 255);
/// let s = SortedDesc::try_new(&[3, 2, 2]).unwrap();
/// assert_eq!(mean(&s).unwrap(), 2); // 7 / 3
/// ```
pub fn mean(sorted: &SortedDesc<'_>) -> StatsResult<u8> {
    let a = sorted.as_slice();
    if a.is_empty() {
        return Err(StatsError::empty());
    }
    let sum: u64 = a.iter().map(|&x| u64::from(x)).sum();
    Ok((sum / a.len() as u64) as u8)
}

/// Returns the largest value, `a[0]`.
///
/// # Returns
/// - `None` if the sample is empty.
pub fn maximum(sorted: &SortedDesc<'_>) -> Option<u8> {
    sorted.first()
}

/// Returns the smallest value, `a[n-1]`.
///
/// # Returns
/// - `None` if the sample is empty.
pub fn minimum(sorted: &SortedDesc<'_>) -> Option<u8> {
    sorted.last()
}

/// The four statistics of one sample, computed together.
///
/// # Examples
/// ```
/// use u_bytestats::sorted::SortedDesc;
/// use u_bytestats::stats::Summary;
/// let mut data = [42];
/// let summary = Summary::from_sorted(&SortedDesc::sort(&mut data)).unwrap();
/// assert_eq!(summary.median, 42);
/// assert_eq!(summary.mean, 42);
/// assert_eq!(summary.maximum, 42);
/// assert_eq!(summary.minimum, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub median: u8,
    pub mean: u8,
    pub maximum: u8,
    pub minimum: u8,
}

impl Summary {
    /// # Errors
    /// [`StatsError::InvalidInput`] if the sample is empty.
    pub fn from_sorted(sorted: &SortedDesc<'_>) -> StatsResult<Self> {
        Ok(Self {
            median: median(sorted).ok_or_else(StatsError::empty)?,
            mean: mean(sorted)?,
            maximum: maximum(sorted).ok_or_else(StatsError::empty)?,
            minimum: minimum(sorted).ok_or_else(StatsError::empty)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
