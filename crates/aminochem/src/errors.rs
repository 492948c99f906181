use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = Box<AminochemError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AminochemError {
    #[diagnostic(help("only residues defined in the residue database carry a known charge"))]
    #[error("the residue {code:?} could not be found in the supplied residue database")]
    ResidueLookup { code: char },
}

impl AminochemError {
    pub(crate) const fn residue_lookup(code: char) -> Self {
        Self::ResidueLookup { code }
    }
}
