use crate::{MannWhitneyU, RankSumError, Result, Sample, average_ranks};

// Public API ==========================================================================================================

impl MannWhitneyU {
    /// Pools `first` and `second`, ranks every observation, then derives a U statistic for each sample from its
    /// rank sum as `U = n1 * n2 + n * (n + 1) / 2 - R`, where `n` and `R` are that sample's size and rank sum
    ///
    /// # Errors
    ///
    /// Fails if either sample is empty or contains a NaN.
    pub fn new(first: &[f64], second: &[f64]) -> Result<Self> {
        check_sample(first, Sample::First)?;
        check_sample(second, Sample::Second)?;

        let pooled: Vec<_> = first.iter().chain(second).copied().collect();
        let ranks = average_ranks(&pooled);
        let (first_ranks, second_ranks) = ranks.split_at(first.len());

        let (n1, n2) = (sample_size(first), sample_size(second));
        let r1: f64 = first_ranks.iter().sum();
        let r2: f64 = second_ranks.iter().sum();

        let u1 = n1.mul_add(n2, n1 * (n1 + 1.0) / 2.0) - r1;
        let u2 = n1.mul_add(n2, n2 * (n2 + 1.0) / 2.0) - r2;

        Ok(Self { u1, u2 })
    }

    #[must_use]
    pub const fn u1(&self) -> f64 {
        self.u1
    }

    #[must_use]
    pub const fn u2(&self) -> f64 {
        self.u2
    }

    /// The test statistic: the smaller of the two U values
    #[must_use]
    pub fn statistic(&self) -> f64 {
        self.u1.min(self.u2)
    }
}

// Private Helper Functions ============================================================================================

fn check_sample(sample: &[f64], which: Sample) -> Result<()> {
    if sample.is_empty() {
        return Err(RankSumError::EmptySample(which));
    }

    if let Some(index) = sample.iter().position(|x| x.is_nan()) {
        return Err(RankSumError::not_a_number(which, index));
    }

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn sample_size(sample: &[f64]) -> f64 {
    sample.len() as f64
}

// Module Tests ========================================================================================================
