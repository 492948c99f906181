//! Rank-based comparisons between two independent samples of numeric data

mod errors;
mod mann_whitney;
mod rank;

// External Crate Imports
use derive_more::Display;

pub use errors::{RankSumError, Result};
pub use rank::average_ranks;

// Public API ==========================================================================================================

/// The pair of U statistics from a Mann–Whitney rank-sum comparison of two samples
///
/// `u1` belongs to the first sample and `u2` to the second; the test statistic is the smaller of the two. Since
/// `u1 + u2` always equals the product of the sample sizes, only the minimum carries any information on its own.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MannWhitneyU {
    u1: f64,
    u2: f64,
}

/// Identifies one of the two samples being compared, mostly for error reporting
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum Sample {
    #[display("first")]
    First,
    #[display("second")]
    Second,
}
