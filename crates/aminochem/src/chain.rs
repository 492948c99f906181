// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use crate::{
    AminoAcidChain, AminochemError, AverageMass, Charge, CompositionProfile, Massive,
    MolecularFormula, Residue, ResidueDatabase, Result,
};

impl<'d> AminoAcidChain<'d> {
    pub fn new(db: &'d ResidueDatabase, sequence: impl AsRef<str>) -> Self {
        let codes = sequence.as_ref().chars().flat_map(char::to_uppercase).collect();
        Self { db, codes }
    }

    #[must_use]
    pub fn codes(&self) -> &[char] {
        &self.codes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The number of different residue codes appearing in the chain
    #[must_use]
    pub fn distinct_residues(&self) -> usize {
        self.codes.iter().unique().count()
    }

    /// Percentage occurrence of every residue in the database, so absent residues still appear with 0%
    ///
    /// An empty chain has a composition of all zeros. Codes missing from the database aren't tracked, but still count
    /// towards the length of the chain.
    #[must_use]
    pub fn composition(&self) -> CompositionProfile {
        let counts = self.codes.iter().counts();
        self.db
            .residues()
            .iter()
            .map(|residue| {
                let count = counts.get(&residue.code()).copied().unwrap_or_default();
                (residue.code(), percentage(count, self.len()))
            })
            .collect()
    }

    /// Unrecognised codes contribute the formula of the database's fallback entry
    #[must_use]
    pub fn formula(&self) -> MolecularFormula {
        let fallback = self.db.fallback().formula();
        self.residues()
            .map(|residue| residue.map_or(fallback, Residue::formula))
            .sum()
    }

    /// # Errors
    ///
    /// Unlike masses and formulas, charges have no fallback: every code in the chain must be present in the database,
    /// otherwise an `AminochemError::ResidueLookup` is returned for the first one that isn't.
    pub fn charge(&self) -> Result<Charge> {
        self.codes
            .iter()
            .map(|&code| {
                self.db
                    .residue(code)
                    .map(Residue::charge)
                    .ok_or_else(|| Box::new(AminochemError::residue_lookup(code)))
            })
            .sum()
    }

    fn residues(&self) -> impl Iterator<Item = Option<&'d Residue>> {
        self.codes.iter().map(|&code| self.db.residue(code))
    }
}

impl Massive for AminoAcidChain<'_> {
    /// Unrecognised codes contribute the mass of the database's fallback entry
    fn average_mass(&self) -> AverageMass {
        let fallback = self.db.fallback().mass();
        self.residues()
            .map(|residue| residue.map_or(fallback, Residue::mass))
            .sum()
    }
}

impl Display for AminoAcidChain<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.codes.iter().try_for_each(|code| write!(f, "{code}"))
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (100 * count) as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use insta::assert_snapshot;
    use rust_decimal_macros::dec;

    use super::*;

    static DB: LazyLock<ResidueDatabase> = LazyLock::new(ResidueDatabase::default);

    const ALPHABET: &str = "ARNDCQEGHILKMFPSTWYV";

    fn chain(sequence: &str) -> AminoAcidChain<'static> {
        AminoAcidChain::new(&DB, sequence)
    }

    #[test]
    fn upper_cases_on_construction() {
        let chain = chain("aGv");
        assert_eq!(chain.codes(), ['A', 'G', 'V']);
        assert_snapshot!(chain, @"AGV");
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }

    #[test]
    fn distinct_residues() {
        assert_eq!(chain("").distinct_residues(), 0);
        assert_eq!(chain("AAaA").distinct_residues(), 1);
        assert_eq!(chain("AGAG").distinct_residues(), 2);
        assert_eq!(chain(ALPHABET).distinct_residues(), 20);
    }

    #[test]
    fn single_residue_composition() {
        let composition = chain("AAAAA").composition();
        assert_eq!(composition.len(), 20);
        assert_eq!(composition.get('A'), Some(100.0));
        assert!(composition.iter().filter(|&(c, _)| c != 'A').all(|(_, p)| p == 0.0));
    }

    #[test]
    fn composition_is_case_insensitive() {
        assert_eq!(chain("agvv").composition(), chain("AGVV").composition());
        assert_eq!(chain("agvv").composition().get('V'), Some(50.0));
    }

    #[test]
    fn composition_sums_to_one_hundred() {
        for sequence in ["A", "AG", "MKTAYIAKQR", "WWWYYC", ALPHABET] {
            let total = chain(sequence).composition().total();
            assert!((total - 100.0).abs() < 1e-9, "{sequence} summed to {total}");
        }
    }

    #[test]
    fn empty_composition() {
        let composition = chain("").composition();
        assert_eq!(composition.len(), 20);
        assert_eq!(composition.total(), 0.0);
    }

    #[test]
    fn composition_in_database_order() {
        let codes: String = chain("VA").composition().iter().map(|(c, _)| c).collect();
        assert_eq!(codes, ALPHABET);
    }

    #[test]
    fn formulas() {
        assert_snapshot!(chain("A").formula(), @"С: 3, H: 7, N: 1, O:2");
        assert_snapshot!(chain("AG").formula(), @"С: 5, H: 12, N: 2, O:4");
        assert_snapshot!(chain("MC").formula(), @"С: 8, H: 18, N: 2, O:4, S: 2");
        assert_eq!(chain("a").formula(), chain("A").formula());
        assert_eq!(chain("").formula(), MolecularFormula::default());
    }

    #[test]
    fn residue_formulas() {
        assert_eq!(chain("Q").formula().hill_notation(), "C5H10N2O3");
        assert_eq!(chain("E").formula().hill_notation(), "C5H9NO4");
        assert_eq!(chain("D").formula().hill_notation(), "C4H7NO4");
        assert_eq!(chain("C").formula().hill_notation(), "C3H7NO2S");
    }

    #[test]
    fn masses() {
        assert_eq!(chain("A").average_mass(), AverageMass::from(dec!(89)));
        assert_eq!(chain("AG").average_mass(), AverageMass::from(dec!(164)));
        assert_eq!(chain("ag").average_mass(), AverageMass::from(dec!(164)));
        assert_eq!(chain(ALPHABET).average_mass(), AverageMass::from(dec!(2735)));
        assert_eq!(chain("").average_mass(), AverageMass::default());
    }

    #[test]
    fn unrecognised_codes_use_fallback() {
        assert_eq!(chain("X").average_mass(), AverageMass::from(dec!(133)));
        assert_eq!(chain("AX").average_mass(), AverageMass::from(dec!(222)));
        assert_eq!(chain("X").formula().hill_notation(), "C4H7NO4");
        assert_eq!(chain("B").formula(), chain("D").formula());
    }

    #[test]
    fn charges() {
        assert_eq!(chain("DK").charge().unwrap(), 0);
        assert_eq!(chain("RHK").charge().unwrap(), 3);
        assert_eq!(chain("dee").charge().unwrap(), -3);
        assert_eq!(chain("").charge().unwrap(), 0);
    }

    #[test]
    fn charge_of_unrecognised_code() {
        let error = chain("AXZ").charge().unwrap_err();
        assert_eq!(*error, AminochemError::ResidueLookup { code: 'X' });
        assert_snapshot!(error, @"the residue 'X' could not be found in the supplied residue database");
    }

    #[test]
    fn calculators_are_idempotent() {
        let chain = chain("MKTAYIAKQRQISFVKSHFSRQ");
        assert_eq!(chain.composition(), chain.composition());
        assert_eq!(chain.formula(), chain.formula());
        assert_eq!(chain.average_mass(), chain.average_mass());
        assert_eq!(chain.charge().unwrap(), chain.charge().unwrap());
    }
}
