use aminochem::{AminoAcidChain, ResidueDatabase};
use ranksum::MannWhitneyU;
use tracing::trace;

use crate::Result;

/// Largest U statistic at which a composition is judged inconsistent with the reference profile
///
/// This is the two-sided critical value for two samples of 20 at a 0.05 significance level.
pub const CRITICAL_U: f64 = 127.0;

/// Compares the composition of `chain` with the reference profile of `db` using a Mann–Whitney U test
///
/// The test is skipped for chains that don't use every residue in the database: these are always consistent.
///
/// # Errors
///
/// Fails only if `db` has no residues to compare with.
pub fn consistent_with_reference(db: &ResidueDatabase, chain: &AminoAcidChain) -> Result<bool> {
    if chain.distinct_residues() < db.len() {
        return Ok(true);
    }

    let composition = chain.composition().percentages();
    let reference = db.reference_profile().percentages();
    let test = MannWhitneyU::new(&composition, &reference)?;
    trace!(u1 = test.u1(), u2 = test.u2(), %chain, "compared composition with reference");

    Ok(test.statistic() > CRITICAL_U)
}
