use crate::error::{DrawerError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub, SubAssign};

/// A currency amount held as an integer number of cents.
///
/// Every calculation inside the crate happens on cents, so there is no rounding
/// step between subtractions. Conversion to and from `Decimal` major units
/// happens at the boundary only (CSV, JSON and CLI arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a major-unit decimal (e.g. `4.25`) into cents.
    ///
    /// Values finer than one cent are rejected rather than rounded.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| DrawerError::Validation(format!("{value} is out of range")))?;
        if !cents.fract().is_zero() {
            return Err(DrawerError::Validation(format!(
                "{value} has more than 2 decimal places"
            )));
        }
        cents
            .to_i64()
            .map(Self)
            .ok_or_else(|| DrawerError::Validation(format!("{value} is out of range")))
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtracts `rhs`, flooring the result at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).max(0))
    }

    /// Number of whole `unit`s contained in this amount.
    pub fn whole_units_of(self, unit: Money) -> i64 {
        if unit.0 <= 0 || self.0 <= 0 {
            0
        } else {
            self.0 / unit.0
        }
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DrawerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}${}", Money(self.0.abs()).to_decimal())
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
