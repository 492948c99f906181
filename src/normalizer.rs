use aminochem::{AminoAcidChain, Residue, ResidueDatabase};
use itertools::Itertools;

use crate::{ProtkitError, Result};

/// Splits `sequence` into consecutive groups of three characters, capitalising each one like `"Ala"`
///
/// If the length of `sequence` isn't a multiple of three, the final group is left short.
#[must_use]
pub fn triplets(sequence: &str) -> Vec<String> {
    sequence
        .chars()
        .chunks(3)
        .into_iter()
        .map(capitalize)
        .collect()
}

/// Joins the one-letter codes of every triplet into a single chain
///
/// # Errors
///
/// Returns `ProtkitError::TripletLookup` for the first triplet that isn't a residue abbreviation in `db`.
pub fn translate<'d>(db: &'d ResidueDatabase, triplets: &[String]) -> Result<AminoAcidChain<'d>> {
    let codes: String = triplets
        .iter()
        .map(|triplet| {
            db.residue_by_abbr(triplet)
                .map(Residue::code)
                .ok_or_else(|| ProtkitError::triplet_lookup(triplet))
        })
        .collect::<Result<_>>()?;

    Ok(AminoAcidChain::new(db, codes))
}

fn capitalize(letters: impl Iterator<Item = char>) -> String {
    let mut letters = letters.flat_map(char::to_lowercase);
    letters
        .next()
        .map(|first| first.to_uppercase().chain(letters).collect())
        .unwrap_or_default()
}
