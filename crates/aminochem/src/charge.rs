use std::{iter::Sum, ops::Add};

use crate::Charge;

impl Charge {
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for Charge {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl PartialEq<i64> for Charge {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}
