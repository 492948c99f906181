use aminochem::AminochemError;
use itertools::Itertools;
use miette::Diagnostic;
use ranksum::RankSumError;
use thiserror::Error;

use crate::Operation;

pub type Result<T, E = ProtkitError> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ProtkitError {
    #[diagnostic(help("operations are named in snake_case, so double-check for typos"))]
    #[error("unknown operation {operation:?}, please select from: {choices}")]
    UnknownOperation { operation: String, choices: String },

    #[diagnostic(help("use 1 for one-letter codes (like \"MKT\") or 3 for three-letter codes (like \"MetLysThr\")"))]
    #[error("unknown encoding {0}, residues can only be written with 1 or 3 letters")]
    UnknownEncoding(u8),

    #[diagnostic(help("the final argument must name the operation to apply to the preceding sequences"))]
    #[error("no operation was given")]
    MissingOperation,

    #[error("the triplet {triplet:?} could not be found in the supplied residue database")]
    TripletLookup { triplet: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Aminochem(#[from] AminochemError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    RankSum(#[from] RankSumError),
}

impl ProtkitError {
    pub(crate) fn unknown_operation(operation: &str) -> Self {
        let operation = operation.to_owned();
        let choices = Operation::ALL
            .iter()
            .map(|op| format!("{:?}", op.to_string()))
            .join(", ");

        Self::UnknownOperation { operation, choices }
    }

    pub(crate) fn triplet_lookup(triplet: &str) -> Self {
        let triplet = triplet.to_owned();

        Self::TripletLookup { triplet }
    }
}

impl From<Box<AminochemError>> for ProtkitError {
    fn from(error: Box<AminochemError>) -> Self {
        Self::Aminochem(*error)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn unknown_operation_lists_choices() {
        let error = ProtkitError::unknown_operation("bogus_op");
        assert_snapshot!(
            error,
            @r#"unknown operation "bogus_op", please select from: "content_check", "seq_length", "protein_formula", "protein_mass", "charge""#
        );
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let error = ProtkitError::from(Box::new(AminochemError::ResidueLookup { code: 'X' }));
        assert_snapshot!(error, @"the residue 'X' could not be found in the supplied residue database");
    }
}
