//! # u-bytestats
//!
//! Summary statistics over byte samples, computed after an in-place
//! descending heap-sort.
//!
//! ## Modules
//!
//! - [`heap`] - In-place heap-sort to descending order, O(1) extra space
//! - [`sorted`] - Borrowed view whose type guarantees descending order
//! - [`stats`] - Median, mean, maximum and minimum with truncating arithmetic
//! - [`render`] - Lazy boxed rendering, four values per line
//! - [`report`] - The sort-then-summarize pipeline with a verbose switch
//! - [`sample`] - Reference data set and seeded random samples
//!
//! ## Design Philosophy
//!
//! - **Order is a type**: statistics accept only [`sorted::SortedDesc`], so
//!   reading extrema from the ends of the slice is always valid
//! - **Integer results**: every statistic is a `u8`, divisions truncate
//! - **Property-based testing**: sortedness and permutation invariants
//!   verified via proptest

pub mod error;
pub mod heap;
pub mod render;
pub mod report;
pub mod sample;
pub mod sorted;
pub mod stats;

pub use error::{StatsError, StatsResult};
pub use report::{report, ReportConfig};
pub use sorted::SortedDesc;
pub use stats::Summary;
