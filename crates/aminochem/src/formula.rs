// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    iter::Sum,
    ops::Add,
};

// Local Crate Imports
use crate::MolecularFormula;

impl MolecularFormula {
    #[must_use]
    pub const fn new(carbon: u32, hydrogen: u32, nitrogen: u32, oxygen: u32, sulfur: u32) -> Self {
        Self {
            carbon,
            hydrogen,
            nitrogen,
            oxygen,
            sulfur,
        }
    }

    #[must_use]
    pub const fn carbon(&self) -> u32 {
        self.carbon
    }

    #[must_use]
    pub const fn hydrogen(&self) -> u32 {
        self.hydrogen
    }

    #[must_use]
    pub const fn nitrogen(&self) -> u32 {
        self.nitrogen
    }

    #[must_use]
    pub const fn oxygen(&self) -> u32 {
        self.oxygen
    }

    #[must_use]
    pub const fn sulfur(&self) -> u32 {
        self.sulfur
    }

    /// Renders the formula in Hill order (C, H, then the rest alphabetically), like `C5H11NO2S`
    #[must_use]
    pub fn hill_notation(&self) -> String {
        [
            ("C", self.carbon),
            ("H", self.hydrogen),
            ("N", self.nitrogen),
            ("O", self.oxygen),
            ("S", self.sulfur),
        ]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(symbol, count)| match count {
            1 => symbol.to_owned(),
            n => format!("{symbol}{n}"),
        })
        .collect()
    }
}

impl Sum for MolecularFormula {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

// NOTE: The leading "С" here is CYRILLIC CAPITAL LETTER ES (U+0421), not an ASCII "C". Existing reports were built
// with it, and the missing space after "O:" is likewise part of that format
impl Display for MolecularFormula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "\u{421}: {}, H: {}, N: {}, O:{}",
            self.carbon, self.hydrogen, self.nitrogen, self.oxygen
        )?;
        if self.sulfur > 0 {
            write!(f, ", S: {}", self.sulfur)?;
        }
        Ok(())
    }
}
