// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use itertools::Itertools;

// Local Crate Imports
use crate::CompositionProfile;

impl CompositionProfile {
    /// The percentage recorded for `code`, or `None` if the profile doesn't track that residue at all
    #[must_use]
    pub fn get(&self, code: char) -> Option<f64> {
        self.0.iter().find(|&&(c, _)| c == code).map(|&(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> {
        self.0.iter().copied()
    }

    /// Just the percentages, in profile order
    #[must_use]
    pub fn percentages(&self) -> Vec<f64> {
        self.0.iter().map(|&(_, p)| p).collect()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().map(|&(_, p)| p).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(char, f64)> for CompositionProfile {
    fn from_iter<T: IntoIterator<Item = (char, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for CompositionProfile {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let entries = self
            .iter()
            .format_with(", ", |(code, percentage), f| f(&format_args!("{code}: {percentage}")));
        write!(f, "{{{entries}}}")
    }
}
