use std::{iter::Sum, ops::Add};

use rust_decimal::Decimal;

use crate::AverageMass;

impl From<u32> for AverageMass {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl Sum for AverageMass {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
