use miette::Diagnostic;
use thiserror::Error;

use crate::Sample;

pub type Result<T, E = RankSumError> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Copy, Clone, Eq, PartialEq, Error)]
pub enum RankSumError {
    #[diagnostic(help("both samples need at least one observation before they can be ranked"))]
    #[error("the {0} sample is empty")]
    EmptySample(Sample),

    #[diagnostic(help("NaN values have no place in an ordering, so remove them before comparing samples"))]
    #[error("the {sample} sample contains NaN at index {index}")]
    NotANumber { sample: Sample, index: usize },
}

impl RankSumError {
    pub(crate) const fn not_a_number(sample: Sample, index: usize) -> Self {
        Self::NotANumber { sample, index }
    }
}
