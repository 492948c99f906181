use std::str::FromStr;

use aminochem::{AminoAcidChain, Massive};

use crate::{Operation, Property, ProtkitError, Result};

impl Operation {
    pub const ALL: [Self; 5] = [
        Self::ContentCheck,
        Self::SeqLength,
        Self::ProteinFormula,
        Self::ProteinMass,
        Self::Charge,
    ];

    /// # Errors
    ///
    /// Only `Operation::Charge` can fail, when `chain` contains a code missing from its residue database.
    pub fn apply(self, chain: &AminoAcidChain) -> Result<Property> {
        Ok(match self {
            Self::ContentCheck => Property::Composition(chain.composition()),
            Self::SeqLength => Property::Length(chain.len()),
            Self::ProteinFormula => Property::Formula(chain.formula()),
            Self::ProteinMass => Property::Mass(chain.average_mass()),
            Self::Charge => Property::Charge(chain.charge()?),
        })
    }
}

impl FromStr for Operation {
    type Err = ProtkitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.to_string() == s)
            .ok_or_else(|| ProtkitError::unknown_operation(s))
    }
}

#[cfg(test)]
mod tests {
    use aminochem::{AverageMass, Charge, ResidueDatabase};
    use indoc::indoc;
    use insta::assert_snapshot;
    use rust_decimal_macros::dec;

    use crate::RESIDUE_DB;

    use super::*;

    fn apply(operation: Operation, sequence: &str) -> Property {
        operation.apply(&AminoAcidChain::new(&RESIDUE_DB, sequence)).unwrap()
    }

    #[test]
    fn parse_operations() {
        for operation in Operation::ALL {
            assert_eq!(operation.to_string().parse::<Operation>(), Ok(operation));
        }
        assert_eq!("protein_mass".parse::<Operation>(), Ok(Operation::ProteinMass));
    }

    #[test]
    fn parse_unknown_operations() {
        for name in ["bogus_op", "", "Charge", "protein mass", "content_check "] {
            let error = name.parse::<Operation>().unwrap_err();
            assert!(matches!(error, ProtkitError::UnknownOperation { .. }), "{name}");
        }
    }

    #[test]
    fn apply_operations() {
        assert_eq!(apply(Operation::SeqLength, "MKTAY"), Property::Length(5));
        assert_eq!(
            apply(Operation::ProteinMass, "AG"),
            Property::Mass(AverageMass::from(dec!(164)))
        );
        assert_eq!(apply(Operation::Charge, "DK"), Property::Charge(Charge::from(0)));
        assert_snapshot!(apply(Operation::ProteinFormula, "A"), @"С: 3, H: 7, N: 1, O:2");

        let composition = apply(Operation::ContentCheck, "AAAAA").unwrap_composition();
        assert_eq!(composition.get('A'), Some(100.0));
    }

    #[test]
    fn charge_of_unknown_code() {
        let chain = AminoAcidChain::new(&RESIDUE_DB, "AXA");
        let error = Operation::Charge.apply(&chain).unwrap_err();
        assert_snapshot!(error, @"the residue 'X' could not be found in the supplied residue database");
        assert!(Operation::ProteinMass.apply(&chain).is_ok());
    }

    #[test]
    fn operations_follow_the_database() {
        let kdl = indoc! {r#"
            residues {
                G "Gly" "Glycine" {
                    formula C=2 H=5 N=1 O=2
                    mass 75.07
                    charge 0
                    frequency 100
                }
            }
            fallback {
                mass 0
                formula
            }
        "#};
        let db = ResidueDatabase::new("glycine.kdl", kdl).unwrap();
        let chain = AminoAcidChain::new(&db, "GGA");
        assert_snapshot!(Operation::ProteinMass.apply(&chain).unwrap(), @"150.14");
        assert_snapshot!(Operation::ProteinFormula.apply(&chain).unwrap(), @"С: 4, H: 10, N: 2, O:4");
    }
}
