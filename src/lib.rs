//! Classifies batches of candidate sequences as proteins or not, then calculates the chemical properties of every
//! sequence recognised as a protein

mod alphabet;
mod consistency;
mod dispatch;
pub mod errors;
mod normalizer;
mod operation;
mod report;

// Standard Library Imports
use std::sync::LazyLock;

// External Crate Imports
use aminochem::{AverageMass, Charge, CompositionProfile, MolecularFormula, ResidueDatabase};
use derive_more::{Constructor, Display, IsVariant, Unwrap};
use serde::Serialize;

pub use alphabet::within_alphabet;
pub use consistency::{CRITICAL_U, consistent_with_reference};
pub use dispatch::protein_processing;
pub use errors::{ProtkitError, Result};
pub use normalizer::{translate, triplets};

/// The default residue database, parsed on first use and shared for the rest of the process
pub static RESIDUE_DB: LazyLock<ResidueDatabase> = LazyLock::new(ResidueDatabase::default);

// Public API ==========================================================================================================

/// How the residues of an input sequence are written
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Display, IsVariant, Serialize)]
pub enum Encoding {
    /// Single-letter codes, like `"MKT"`
    #[default]
    #[display("one-letter")]
    OneLetter,
    /// Three-letter abbreviations, like `"MetLysThr"`
    #[display("three-letter")]
    ThreeLetter,
}

/// A property calculation that can be applied to every protein in a batch
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize)]
pub enum Operation {
    #[display("content_check")]
    ContentCheck,
    #[display("seq_length")]
    SeqLength,
    #[display("protein_formula")]
    ProteinFormula,
    #[display("protein_mass")]
    ProteinMass,
    #[display("charge")]
    Charge,
}

/// The output of a single `Operation`
#[derive(Clone, PartialEq, Debug, Display, IsVariant, Unwrap, Serialize)]
pub enum Property {
    Composition(CompositionProfile),
    Length(usize),
    Formula(MolecularFormula),
    Mass(AverageMass),
    Charge(Charge),
}

// ---------------------------------------------------------------------------------------------------------------------

/// An input that failed validation, alongside its position in the batch
#[derive(Clone, Eq, PartialEq, Hash, Debug, Constructor, Serialize)]
pub struct CorruptSequence {
    index: usize,
    sequence: String,
}

/// Everything a batch produced: properties for valid sequences in input order, and the sequences that were rejected
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct BatchResult {
    results: Vec<Property>,
    corrupt: Vec<CorruptSequence>,
}

/// A collection that has been simplified to its only element, if it has exactly one
#[derive(Clone, Eq, PartialEq, Debug, IsVariant, Unwrap, Serialize)]
pub enum Collapsed<T> {
    One(T),
    Many(Vec<T>),
}

// ---------------------------------------------------------------------------------------------------------------------

/// Validates sequences of a single `Encoding` against a `ResidueDatabase`, then applies an `Operation` to each protein
#[derive(Copy, Clone, Debug)]
pub struct BatchProcessor<'d> {
    db: &'d ResidueDatabase,
    encoding: Encoding,
}

/// A human-readable summary of which sequences in a batch were processed successfully
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BatchReport {
    total: usize,
    corrupt: Vec<usize>,
}
