// Standard Library Imports
use std::{collections::hash_map::Entry, error::Error as StdError, ops::Deref, str::FromStr};

// External Crate Imports
use ahash::{HashMap, HashMapExt};
use knuffel::{
    Decode, DecodeScalar,
    ast::{Literal, TypeName},
    decode::{Context, Kind},
    errors::{DecodeError, ExpectedType},
    span::{Span, Spanned},
    traits::ErrorSpan,
};
use miette::{Diagnostic, LabeledSpan, NamedSource, Result};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;
use tracing::debug;

// Local Crate Imports
use crate::{AverageMass, Charge, CompositionProfile, Fallback, MolecularFormula, Residue};

/// The 20 canonical amino acids, their UniProt frequencies, and a catch-all for anything else
pub const DEFAULT_KDL: &str = include_str!("../data/residue_database.kdl");

// Public API ==========================================================================================================

#[derive(Clone, PartialEq, Debug)]
pub struct ResidueDatabase {
    residues: Vec<Residue>,
    codes: HashMap<char, usize>,
    abbrs: HashMap<String, usize>,
    fallback: Fallback,
}

impl ResidueDatabase {
    /// Parses and validates a residue database from the KDL in `kdl_text`
    ///
    /// # Errors
    ///
    /// Fails with a span-labelled report (naming `file_name`) if the KDL is malformed, a residue code or abbreviation
    /// is invalid or repeated, a frequency is negative, or no residues are defined at all.
    pub fn new(file_name: impl AsRef<str>, kdl_text: impl AsRef<str>) -> Result<Self> {
        let (file_name, kdl_text) = (file_name.as_ref(), kdl_text.as_ref());
        let parsed_db: ResidueDatabaseKdl = knuffel::parse(file_name, kdl_text)?;
        let db = Self::try_from(parsed_db).map_err(|e| e.finalize(file_name, kdl_text))?;

        debug!(file_name, residues = db.len(), "loaded residue database");
        Ok(db)
    }

    #[must_use]
    pub fn residue(&self, code: char) -> Option<&Residue> {
        self.codes.get(&code).map(|&i| &self.residues[i])
    }

    #[must_use]
    pub fn residue_by_abbr(&self, abbr: &str) -> Option<&Residue> {
        self.abbrs.get(abbr).map(|&i| &self.residues[i])
    }

    #[must_use]
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    // NOTE: Validation rejects empty databases, so this only exists to keep `clippy` happy
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    #[must_use]
    pub const fn fallback(&self) -> &Fallback {
        &self.fallback
    }

    /// The background frequency of every residue, as a profile comparable with `AminoAcidChain::composition()`
    #[must_use]
    pub fn reference_profile(&self) -> CompositionProfile {
        self.residues
            .iter()
            .map(|residue| (residue.code(), residue.frequency()))
            .collect()
    }
}

impl Default for ResidueDatabase {
    fn default() -> Self {
        // SAFETY: `DEFAULT_KDL` is baked in at compile time and checked by `build_default_residue_database`, so
        // parsing it can never fail
        Self::new("residue_database.kdl", DEFAULT_KDL).unwrap()
    }
}

// KDL File Schema =====================================================================================================

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct ResidueDatabaseKdl {
    #[knuffel(child)]
    residues: ResiduesKdl,
    #[knuffel(child)]
    fallback: FallbackKdl,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct ResiduesKdl {
    #[knuffel(span)]
    span: Span,
    #[knuffel(children)]
    residues: Vec<ResidueKdl>,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct ResidueKdl {
    #[knuffel(span)]
    span: Span,
    #[knuffel(node_name)]
    code: ResidueCode,
    #[knuffel(argument, str)]
    abbr: ResidueAbbr,
    #[knuffel(argument)]
    name: String,
    #[knuffel(child)]
    formula: FormulaKdl,
    #[knuffel(child, unwrap(argument))]
    mass: DecimalKdl,
    #[knuffel(child, unwrap(argument))]
    charge: i64,
    #[knuffel(child, unwrap(argument))]
    frequency: Spanned<DecimalKdl, Span>,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct FallbackKdl {
    #[knuffel(child)]
    formula: FormulaKdl,
    #[knuffel(child, unwrap(argument))]
    mass: DecimalKdl,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct FormulaKdl {
    #[knuffel(property(name = "C"), default)]
    carbon: u32,
    #[knuffel(property(name = "H"), default)]
    hydrogen: u32,
    #[knuffel(property(name = "N"), default)]
    nitrogen: u32,
    #[knuffel(property(name = "O"), default)]
    oxygen: u32,
    #[knuffel(property(name = "S"), default)]
    sulfur: u32,
}

// Parsing of KDL Numbers to Decimal ===================================================================================

#[derive(Debug, Default)]
struct DecimalKdl(Decimal);

impl<S: ErrorSpan> DecodeScalar<S> for DecimalKdl {
    fn type_check(type_name: &Option<Spanned<TypeName, S>>, ctx: &mut Context<S>) {
        if let Some(t) = type_name {
            ctx.emit_error(DecodeError::TypeName {
                span: t.span().clone(),
                found: Some(t.deref().clone()),
                expected: ExpectedType::no_type(),
                rust_type: "Decimal",
            });
        }
    }

    fn raw_decode(
        value: &Spanned<Literal, S>,
        ctx: &mut Context<S>,
    ) -> Result<Self, DecodeError<S>> {
        // NOTE: Integers convert exactly, but decimals pass through an `f64` on their way to `Decimal`. Excess bits
        // are dropped in that conversion, so `89.0932` still comes out as `89.0932`
        let parsed: Result<Decimal, Box<dyn StdError + Send + Sync>> = match &**value {
            Literal::Int(int) => i64::try_from(int).map(Decimal::from).map_err(Into::into),
            Literal::Decimal(dec) => f64::try_from(dec)
                .map_err(Into::into)
                .and_then(|f| Decimal::try_from(f).map_err(Into::into)),
            unsupported => {
                ctx.emit_error(DecodeError::unsupported(
                    value,
                    format!(
                        "expected a decimal number, found {}",
                        Kind::from(unsupported)
                    ),
                ));
                return Ok(Self::default());
            }
        };

        match parsed {
            Ok(d) => Ok(Self(d)),
            Err(e) => {
                ctx.emit_error(DecodeError::conversion(value, e));
                Ok(Self::default())
            }
        }
    }
}

// Residue Code and Abbreviation Validation ============================================================================

#[derive(Debug)]
struct ResidueCode(char);

impl FromStr for ResidueCode {
    type Err = InvalidResidueSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chrs: Vec<_> = s.chars().collect();
        match chrs[..] {
            [c] if c.is_ascii_uppercase() => Ok(Self(c)),
            _ => Err(InvalidResidueSymbolError::Code(s.to_owned())),
        }
    }
}

#[derive(Debug)]
struct ResidueAbbr(String);

impl FromStr for ResidueAbbr {
    type Err = InvalidResidueSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chrs: Vec<_> = s.chars().collect();
        match chrs[..] {
            [f, a, b]
                if f.is_ascii_uppercase() && a.is_ascii_lowercase() && b.is_ascii_lowercase() =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(InvalidResidueSymbolError::Abbreviation(s.to_owned())),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Diagnostic, Error)]
enum InvalidResidueSymbolError {
    #[error("expected a single uppercase ASCII letter as a residue code, got {0:?}")]
    Code(String),
    #[error(
        "expected an uppercase ASCII letter followed by two lowercase ASCII letters as a residue abbreviation, got {0:?}"
    )]
    Abbreviation(String),
}

// Residue Database Validation =========================================================================================

type DatabaseResult<T> = Result<T, ResidueDatabaseErrorKind>;

impl TryFrom<ResidueDatabaseKdl> for ResidueDatabase {
    type Error = ResidueDatabaseErrorKind;

    fn try_from(
        ResidueDatabaseKdl { residues, fallback }: ResidueDatabaseKdl,
    ) -> DatabaseResult<Self> {
        if residues.residues.is_empty() {
            return Err(ResidueDatabaseErrorKind::NoResidues(residues.span));
        }

        let mut seen_codes = HashMap::new();
        let mut seen_abbrs = HashMap::new();
        let mut validated = Vec::with_capacity(residues.residues.len());

        for (index, residue_kdl) in residues.residues.into_iter().enumerate() {
            let span = residue_kdl.span.clone();
            let residue = Residue::try_from(residue_kdl)?;

            match seen_codes.entry(residue.code()) {
                Entry::Occupied(e) => {
                    let (code, (_, first_defined_at)) = e.remove_entry();
                    return Err(ResidueDatabaseErrorKind::DuplicateCode(
                        first_defined_at,
                        span,
                        code,
                    ));
                }
                Entry::Vacant(e) => e.insert((index, span.clone())),
            };

            match seen_abbrs.entry(residue.abbr().to_owned()) {
                Entry::Occupied(e) => {
                    let (abbr, (_, first_defined_at)) = e.remove_entry();
                    return Err(ResidueDatabaseErrorKind::DuplicateAbbreviation(
                        first_defined_at,
                        span,
                        abbr,
                    ));
                }
                Entry::Vacant(e) => e.insert((index, span)),
            };

            validated.push(residue);
        }

        Ok(Self {
            residues: validated,
            codes: strip_spans(seen_codes),
            abbrs: strip_spans(seen_abbrs),
            fallback: fallback.into(),
        })
    }
}

fn strip_spans<K: Eq + std::hash::Hash>(seen: HashMap<K, (usize, Span)>) -> HashMap<K, usize> {
    seen.into_iter().map(|(k, (i, _))| (k, i)).collect()
}

// ---------------------------------------------------------------------------------------------------------------------

impl TryFrom<ResidueKdl> for Residue {
    type Error = ResidueDatabaseErrorKind;

    fn try_from(
        ResidueKdl {
            code,
            abbr,
            name,
            formula,
            mass,
            charge,
            frequency,
            ..
        }: ResidueKdl,
    ) -> DatabaseResult<Self> {
        let code = code.0;
        let invalid_frequency =
            || ResidueDatabaseErrorKind::InvalidFrequency(frequency.span().clone(), code, frequency.0);

        if frequency.0.is_sign_negative() && !frequency.0.is_zero() {
            return Err(invalid_frequency());
        }
        let frequency_value = frequency.0.to_f64().ok_or_else(invalid_frequency)?;

        Ok(Self {
            code,
            abbr: abbr.0,
            name,
            formula: formula.into(),
            mass: AverageMass::from(mass.0),
            charge: Charge::from(charge),
            frequency: frequency_value,
        })
    }
}

// Infallible Conversions ==============================================================================================

impl From<FallbackKdl> for Fallback {
    fn from(FallbackKdl { formula, mass }: FallbackKdl) -> Self {
        Self {
            formula: formula.into(),
            mass: AverageMass::from(mass.0),
        }
    }
}

impl From<FormulaKdl> for MolecularFormula {
    fn from(
        FormulaKdl {
            carbon,
            hydrogen,
            nitrogen,
            oxygen,
            sulfur,
        }: FormulaKdl,
    ) -> Self {
        Self {
            carbon,
            hydrogen,
            nitrogen,
            oxygen,
            sulfur,
        }
    }
}

// Validation Error Types and Trait Implementations ====================================================================

#[derive(Debug, Error)]
#[error("failed to validate residue database file")]
struct ResidueDatabaseError {
    kdl: NamedSource,
    #[source]
    kind: ResidueDatabaseErrorKind,
}

// NOTE: This is manually implemented because the list of labels is dynamic and needs to be extracted from `self.kind`
impl Diagnostic for ResidueDatabaseError {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.kdl)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(self.kind.labels().into_iter().map(|(s, l)| {
            LabeledSpan::new_with_span(Some(l.to_owned()), s.clone())
        })))
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        Some(&self.kind)
    }
}

#[derive(Clone, Debug, Diagnostic, Error)]
enum ResidueDatabaseErrorKind {
    #[error("the residue code {2:?} has already been defined")]
    #[diagnostic(help("every residue needs its own one-letter code, so remove or rename the duplicate"))]
    DuplicateCode(Span, Span, char),

    #[error("the residue abbreviation {2:?} has already been defined")]
    #[diagnostic(help(
        "every residue needs its own three-letter abbreviation, so remove or rename the duplicate"
    ))]
    DuplicateAbbreviation(Span, Span, String),

    #[error("the frequency of residue {1:?} must be a non-negative percentage, but got {2}")]
    #[diagnostic(help("frequencies are percentages of all residues, so they cannot be less than zero"))]
    InvalidFrequency(Span, char, Decimal),

    #[error("the residue database doesn't define any residues")]
    #[diagnostic(help("add at least one residue to the residues section"))]
    NoResidues(Span),
}

impl ResidueDatabaseErrorKind {
    fn labels(&self) -> Vec<(&Span, &'static str)> {
        match self {
            Self::DuplicateCode(s1, s2, _) | Self::DuplicateAbbreviation(s1, s2, _) => {
                vec![(s1, "first defined here"), (s2, "then again here")]
            }
            Self::InvalidFrequency(s, _, _) => vec![(s, "invalid frequency")],
            Self::NoResidues(s) => vec![(s, "empty residues section")],
        }
    }

    fn finalize(self, file_name: impl AsRef<str>, kdl: impl AsRef<str>) -> ResidueDatabaseError {
        let kdl = NamedSource::new(file_name, kdl.as_ref().to_owned());
        ResidueDatabaseError { kdl, kind: self }
    }
}

// Module Tests ========================================================================================================
