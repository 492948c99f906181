use aminochem::ResidueDatabase;

use crate::{Encoding, ProtkitError, normalizer::triplets};

impl TryFrom<u8> for Encoding {
    type Error = ProtkitError;

    fn try_from(letters: u8) -> Result<Self, Self::Error> {
        match letters {
            1 => Ok(Self::OneLetter),
            3 => Ok(Self::ThreeLetter),
            n => Err(ProtkitError::UnknownEncoding(n)),
        }
    }
}

/// Checks that every residue of `sequence` belongs to the alphabet of `db`, without any statistical testing
///
/// One-letter codes are compared case-insensitively. Three-letter sequences are first split into triplets, each
/// capitalised like `"Ala"`, so a trailing group of fewer than three letters never matches.
#[must_use]
pub fn within_alphabet(db: &ResidueDatabase, sequence: &str, encoding: Encoding) -> bool {
    match encoding {
        Encoding::OneLetter => codes_within_alphabet(db, sequence),
        Encoding::ThreeLetter => triplets_within_alphabet(db, &triplets(sequence)),
    }
}

pub(crate) fn codes_within_alphabet(db: &ResidueDatabase, sequence: &str) -> bool {
    sequence
        .chars()
        .flat_map(char::to_uppercase)
        .all(|code| db.residue(code).is_some())
}

pub(crate) fn triplets_within_alphabet(db: &ResidueDatabase, triplets: &[String]) -> bool {
    triplets
        .iter()
        .all(|triplet| db.residue_by_abbr(triplet).is_some())
}

#[cfg(test)]
mod tests {
    use crate::RESIDUE_DB;

    use super::*;

    #[test]
    fn parse_encodings() {
        assert_eq!(Encoding::try_from(1_u8), Ok(Encoding::OneLetter));
        assert_eq!(Encoding::try_from(3_u8), Ok(Encoding::ThreeLetter));
        assert_eq!(Encoding::try_from(2_u8), Err(ProtkitError::UnknownEncoding(2)));
        assert_eq!(Encoding::default(), Encoding::OneLetter);
    }

    #[test]
    fn one_letter_alphabet() {
        for sequence in ["", "A", "ARNDCQEGHILKMFPSTWYV", "mktayiakqr", "MkTaY"] {
            assert!(within_alphabet(&RESIDUE_DB, sequence, Encoding::OneLetter), "{sequence}");
        }
        for sequence in ["X", "AAAAB", "MKT AYI", "MKT*", "AGU", "123"] {
            assert!(!within_alphabet(&RESIDUE_DB, sequence, Encoding::OneLetter), "{sequence}");
        }
    }

    #[test]
    fn three_letter_alphabet() {
        for sequence in ["", "Ala", "AlaGlyVal", "ALAGLY", "alagly", "GlnGlu", "aSpCYS"] {
            assert!(within_alphabet(&RESIDUE_DB, sequence, Encoding::ThreeLetter), "{sequence}");
        }
        for sequence in ["Xaa", "AlaXaa", "AlaGl", "AlaG", "Ala Gly", "A"] {
            assert!(!within_alphabet(&RESIDUE_DB, sequence, Encoding::ThreeLetter), "{sequence}");
        }
    }
}
