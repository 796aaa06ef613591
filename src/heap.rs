//! In-place heap-sort producing descending order.
//!
//! # Algorithm
//!
//! The slice is viewed as an implicit binary tree (children of `i` at
//! `2i + 1` and `2i + 2`) and arranged into a **min-heap**. Each extraction
//! step swaps the root, the smallest value of the active region, to the
//! tail and shrinks the region by one, so the tail fills from the smallest
//! value upwards and the finished slice is sorted from largest to smallest.
//!
//! Reference: Williams (1964), "Algorithm 232: Heapsort",
//! *Communications of the ACM* 7(6); Floyd (1964), "Algorithm 245: Treesort 3".
//!
//! # Complexity
//! Time: O(n log n), Space: O(1). Heap repair is an explicit loop, so the
//! call stack does not grow with the tree height.

use crate::error::{StatsError, StatsResult};

/// Restores the min-heap property at `root` within `data[..heap_size]`.
///
/// The left child is checked first, then the right child, each against the
/// smallest value seen so far with a strict `<`. On a tie between the two
/// children the left one is kept. When a child is smaller than the root the
/// two are swapped and the repair continues one level down.
///
/// # Errors
/// [`StatsError::IndexOutOfRange`] unless `root < heap_size <= data.len()`.
///
/// # Examples
/// ```
/// use u_bytestats::heap::heapify;
/// let mut v = [9, 3, 5];
/// heapify(&mut v, 3, 0).unwrap();
/// assert_eq!(v, [3, 9, 5]);
/// assert!(heapify(&mut v, 4, 0).is_err());
/// ```
pub fn heapify(data: &mut [u8], heap_size: usize, root: usize) -> StatsResult<()> {
    if heap_size > data.len() || root >= heap_size {
        tracing::warn!(root, heap_size, len = data.len(), "rejected heap repair");
        return Err(StatsError::IndexOutOfRange {
            root,
            heap_size,
            len: data.len(),
        });
    }
    let mut comparisons = 0;
    sift_down(data, heap_size, root, &mut comparisons);
    Ok(())
}

/// Sorts `data` in place from largest to smallest.
///
/// Empty and single-element slices are left untouched.
///
/// # Examples
/// ```
/// use u_bytestats::heap::sort;
/// let mut v = [34, 201, 190, 154, 8];
/// sort(&mut v);
/// assert_eq!(v, [201, 190, 154, 34, 8]);
/// ```
pub fn sort(data: &mut [u8]) {
    tracing::debug!(len = data.len(), "heap sort");
    let mut comparisons = 0;
    heap_sort(data, &mut comparisons);
}

/// Same as [`sort`], returning the number of element comparisons made.
///
/// The count is bounded by roughly `2n log2 n`, which makes it useful for
/// checking that the sort stays within its complexity class.
///
/// # Examples
/// ```
/// use u_bytestats::heap::sort_counted;
/// let mut v = [1, 2, 3, 4];
/// let comparisons = sort_counted(&mut v);
/// assert_eq!(v, [4, 3, 2, 1]);
/// assert!(comparisons > 0);
/// ```
pub fn sort_counted(data: &mut [u8]) -> u64 {
    let mut comparisons = 0;
    heap_sort(data, &mut comparisons);
    tracing::trace!(len = data.len(), comparisons, "heap sort finished");
    comparisons
}

fn heap_sort(data: &mut [u8], comparisons: &mut u64) {
    let n = data.len();
    if n < 2 {
        return;
    }

    // Build phase: every internal node from the last one up to the root.
    for root in (0..n / 2).rev() {
        sift_down(data, n, root, comparisons);
    }

    // Extraction phase: data[end..] holds the smallest values, descending.
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, end, 0, comparisons);
    }
}

fn sift_down(data: &mut [u8], heap_size: usize, mut root: usize, comparisons: &mut u64) {
    loop {
        let mut smallest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < heap_size {
            *comparisons += 1;
            if data[left] < data[smallest] {
                smallest = left;
            }
        }
        if right < heap_size {
            *comparisons += 1;
            if data[right] < data[smallest] {
                smallest = right;
            }
        }

        if smallest == root {
            return;
        }
        data.swap(root, smallest);
        root = smallest;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn is_min_heap(data: &[u8], heap_size: usize) -> bool {
        (1..heap_size).all(|i| data[(i - 1) / 2] <= data[i])
    }

    fn is_descending(data: &[u8]) -> bool {
        data.windows(2).all(|w| w[0] >= w[1])
    }

    // --- heapify ---

    #[test]
    fn test_heapify_sinks_root() {
        let mut v = [9, 1, 2, 3, 4, 5, 6];
        heapify(&mut v, 7, 0).unwrap();
        assert!(is_min_heap(&v, 7), "not a heap: {v:?}");
        assert_eq!(v[0], 1);
    }

    #[test]
    fn test_heapify_prefers_left_on_tie() {
        let mut v = [5, 2, 2];
        heapify(&mut v, 3, 0).unwrap();
        assert_eq!(v, [2, 5, 2]);
    }

    #[test]
    fn test_heapify_picks_smaller_child() {
        let mut v = [5, 3, 1];
        heapify(&mut v, 3, 0).unwrap();
        assert_eq!(v, [1, 3, 5]);
    }

    #[test]
    fn test_heapify_respects_heap_size() {
        // Index 2 lies outside the active region and must not be touched.
        let mut v = [5, 7, 0];
        heapify(&mut v, 2, 0).unwrap();
        assert_eq!(v, [5, 7, 0]);
    }

    #[test]
    fn test_heapify_leaf_is_noop() {
        let mut v = [1, 2, 3, 4];
        heapify(&mut v, 4, 3).unwrap();
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_heapify_rejects_root_past_heap_size() {
        let mut v = [1, 2, 3];
        let err = heapify(&mut v, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            StatsError::IndexOutOfRange { root: 2, heap_size: 2, len: 3 }
        ));
    }

    #[test]
    fn test_heapify_rejects_heap_size_past_len() {
        let mut v = [1, 2, 3];
        assert!(heapify(&mut v, 4, 0).is_err());
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_heapify_rejects_empty() {
        let mut v: [u8; 0] = [];
        assert!(heapify(&mut v, 0, 0).is_err());
    }

    // --- sort ---

    #[test]
    fn test_sort_basic() {
        let mut v = [34, 201, 190, 154, 8];
        sort(&mut v);
        assert_eq!(v, [201, 190, 154, 34, 8]);
    }

    #[test]
    fn test_sort_empty() {
        let mut v: [u8; 0] = [];
        sort(&mut v);
        assert!(v.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut v = [42];
        sort(&mut v);
        assert_eq!(v, [42]);
    }

    #[test]
    fn test_sort_two() {
        let mut v = [1, 2];
        sort(&mut v);
        assert_eq!(v, [2, 1]);
    }

    #[test]
    fn test_sort_ascending_input() {
        let mut v: Vec<u8> = (0..=255).collect();
        sort(&mut v);
        let expected: Vec<u8> = (0..=255).rev().collect();
        assert_eq!(v, expected);
    }

    #[test]
    fn test_sort_duplicates_and_extremes() {
        let mut v = [0, 255, 7, 0, 255, 7, 7];
        sort(&mut v);
        assert_eq!(v, [255, 255, 7, 7, 7, 0, 0]);
    }

    #[test]
    fn test_sort_emits_debug_event() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut v = [3, 1, 2, 5, 4];
        tracing::subscriber::with_default(subscriber, || sort(&mut v));
        assert_eq!(v, [5, 4, 3, 2, 1]);

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("heap sort"), "no sort event in {logged:?}");
        assert!(logged.contains("len=5"), "no length field in {logged:?}");
    }

    #[test]
    fn test_sort_counted_zero_for_trivial() {
        assert_eq!(sort_counted(&mut []), 0);
        assert_eq!(sort_counted(&mut [9]), 0);
    }

    #[test]
    fn test_sort_large_random_within_bound() {
        use crate::sample::{create_rng, random_sample};

        let mut rng = create_rng(7);
        let mut data = random_sample(1000, &mut rng);
        let mut expected = data.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        let comparisons = sort_counted(&mut data);
        assert!(is_descending(&data));
        assert_eq!(data, expected);

        let n = data.len() as u64;
        let log2 = 64 - (n - 1).leading_zeros() as u64;
        let bound = 2 * n * log2 + 2 * n;
        assert!(
            comparisons <= bound,
            "comparisons={comparisons} exceeded bound={bound}"
        );
    }
}
