//! Amino-acid residue tables, and the chemical properties of residue chains built from them

pub mod errors;
pub mod residue_database;

mod chain;
mod charge;
mod composition;
mod formula;
mod mass;
mod residue;

// External Crate Imports
use derive_more::{Add, Display, From, Into};
use rust_decimal::Decimal;
use serde::Serialize;

pub use errors::{AminochemError, Result};
pub use residue_database::ResidueDatabase;

// NOTE: Every type referencing the `ResidueDatabase` carries a 'd lifetime

// Public API ==========================================================================================================

/// An ordered chain of one-letter residue codes, read against a `ResidueDatabase`
///
/// Codes are upper-cased on construction, but are otherwise unchecked: codes missing from the database fall back to
/// its catch-all entry when computing formulas and masses.
#[derive(Clone, PartialEq, Debug)]
pub struct AminoAcidChain<'d> {
    db: &'d ResidueDatabase,
    codes: Vec<char>,
}

/// The percentage occurrence of every residue in a `ResidueDatabase`, kept in database order
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct CompositionProfile(Vec<(char, f64)>);

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Residue {
    code: char,
    abbr: String,
    name: String,
    formula: MolecularFormula,
    mass: AverageMass,
    charge: Charge,
    frequency: f64,
}

/// What an unrecognised residue code contributes to a chain's formula and mass
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize)]
pub struct Fallback {
    formula: MolecularFormula,
    mass: AverageMass,
}

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Add)]
pub struct MolecularFormula {
    carbon: u32,
    hydrogen: u32,
    nitrogen: u32,
    oxygen: u32,
    sulfur: u32,
}

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Add, Display, From, Into,
)]
pub struct AverageMass(Decimal);

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Add, Display, From, Into,
)]
pub struct Charge(i64);

// =====================================================================================================================

pub trait Massive {
    fn average_mass(&self) -> AverageMass;
}

pub trait Charged {
    fn charge(&self) -> Charge;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive> Massive for $ref_type {
                fn average_mass(&self) -> AverageMass {
                    (**self).average_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, &mut T, Box<T>);

macro_rules! charged_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Charged> Charged for $ref_type {
                fn charge(&self) -> Charge {
                    (**self).charge()
                }
            }
        )+
    };
}

charged_ref_impls!(&T, &mut T, Box<T>);

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use rust_decimal_macros::dec;

    use super::*;

    static DB: LazyLock<ResidueDatabase> = LazyLock::new(ResidueDatabase::default);

    fn total_mass<T: Massive>(items: &[T]) -> AverageMass {
        items.iter().map(Massive::average_mass).sum()
    }

    fn total_charge<T: Charged>(items: &[T]) -> Charge {
        items.iter().map(Charged::charge).sum()
    }

    #[test]
    fn massive_through_references() {
        let residues: Vec<_> = "AG".chars().filter_map(|c| DB.residue(c)).collect();
        assert_eq!(total_mass(&residues), AverageMass::from(dec!(164)));

        let boxed: Vec<_> = residues.into_iter().map(Box::new).collect();
        assert_eq!(total_mass(&boxed), AverageMass::from(dec!(164)));
    }

    #[test]
    fn charged_through_references() {
        let residues: Vec<_> = "RHKDE".chars().filter_map(|c| DB.residue(c)).collect();
        assert_eq!(total_charge(&residues), 1);

        let mut lysine = DB.residue('K').unwrap().clone();
        let borrowed = [&mut lysine];
        assert_eq!(total_charge(&borrowed), 1);
    }
}
