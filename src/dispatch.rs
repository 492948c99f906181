// External Crate Imports
use aminochem::{AminoAcidChain, ResidueDatabase};
use tracing::{debug, warn};

// Local Crate Imports
use crate::{
    BatchProcessor, BatchReport, BatchResult, Collapsed, CorruptSequence, Encoding, Operation,
    Property, ProtkitError, RESIDUE_DB, Result,
    alphabet::{codes_within_alphabet, triplets_within_alphabet},
    consistency::consistent_with_reference,
    normalizer::{translate, triplets},
};

// Public API ==========================================================================================================

/// Processes a batch using the default residue database, where the last of `args` names the `Operation` to apply to
/// all of the sequences before it
///
/// Each half of the returned pair is collapsed to its only element when it has exactly one.
///
/// # Errors
///
/// Fails if `args` is empty, or if `BatchProcessor::process` does.
pub fn protein_processing<S: AsRef<str>>(
    args: &[S],
    encoding: Encoding,
) -> Result<(Collapsed<Property>, Collapsed<CorruptSequence>)> {
    let (operation, sequences) = args.split_last().ok_or(ProtkitError::MissingOperation)?;
    let batch = BatchProcessor::new(&RESIDUE_DB, encoding).process(sequences, operation.as_ref())?;
    Ok(batch.collapse())
}

impl<'d> BatchProcessor<'d> {
    #[must_use]
    pub const fn new(db: &'d ResidueDatabase, encoding: Encoding) -> Self {
        Self { db, encoding }
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Looks up the `Operation` called `operation`, then `run`s it over `sequences`
    ///
    /// # Errors
    ///
    /// An unknown `operation` is rejected before any sequence is looked at. Otherwise, see `BatchProcessor::run`.
    pub fn process<S: AsRef<str>>(&self, sequences: &[S], operation: &str) -> Result<BatchResult> {
        let operation = operation.parse()?;
        self.run(sequences, operation)
    }

    /// Applies `operation` to every sequence recognised as a protein, setting aside those that aren't, then emits a
    /// `BatchReport` of the outcome
    ///
    /// # Errors
    ///
    /// Sequences that fail validation are not errors, but are returned as `CorruptSequence`s. Errors are reserved
    /// for lookups that fail after validation, like the charge of a residue missing from the database.
    pub fn run<S: AsRef<str>>(&self, sequences: &[S], operation: Operation) -> Result<BatchResult> {
        let mut batch = BatchResult::default();

        for (index, sequence) in sequences.iter().map(AsRef::as_ref).enumerate() {
            if let Some(chain) = self.normalize(sequence)? {
                debug!(index, sequence, %operation, "processing protein");
                batch.results.push(operation.apply(&chain)?);
            } else {
                warn!(index, sequence, "sequence is not a protein");
                batch
                    .corrupt
                    .push(CorruptSequence::new(index, sequence.to_owned()));
            }
        }

        batch.report().emit();
        Ok(batch)
    }

    /// Validates `sequence`, returning it as a one-letter chain if it's a protein
    ///
    /// # Errors
    ///
    /// Fails if a validated triplet can't be translated, or if the composition test can't be run.
    pub fn normalize(&self, sequence: &str) -> Result<Option<AminoAcidChain<'d>>> {
        match self.encoding {
            Encoding::OneLetter => {
                if !codes_within_alphabet(self.db, sequence) {
                    return Ok(None);
                }
                let chain = AminoAcidChain::new(self.db, sequence);
                Ok(consistent_with_reference(self.db, &chain)?.then_some(chain))
            }
            Encoding::ThreeLetter => {
                let triplets = triplets(sequence);
                if triplets_within_alphabet(self.db, &triplets) {
                    translate(self.db, &triplets).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Whether `sequence` is recognised as a protein
    ///
    /// # Errors
    ///
    /// See `BatchProcessor::normalize`.
    pub fn is_protein(&self, sequence: &str) -> Result<bool> {
        self.normalize(sequence).map(|chain| chain.is_some())
    }
}

// ---------------------------------------------------------------------------------------------------------------------

impl BatchResult {
    #[must_use]
    pub fn results(&self) -> &[Property] {
        &self.results
    }

    #[must_use]
    pub fn corrupt(&self) -> &[CorruptSequence] {
        &self.corrupt
    }

    /// The number of sequences in the batch, valid or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len() + self.corrupt.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn report(&self) -> BatchReport {
        BatchReport::new(self.len(), self.corrupt.iter().map(CorruptSequence::index))
    }

    #[must_use]
    pub fn collapse(self) -> (Collapsed<Property>, Collapsed<CorruptSequence>) {
        (self.results.into(), self.corrupt.into())
    }
}

impl CorruptSequence {
    /// Position of this sequence in its batch
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The sequence exactly as it was given
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

impl<T> From<Vec<T>> for Collapsed<T> {
    fn from(items: Vec<T>) -> Self {
        match <[T; 1]>::try_from(items) {
            Ok([item]) => Self::One(item),
            Err(items) => Self::Many(items),
        }
    }
}

// Module Tests ========================================================================================================
