use crate::domain::money::Money;
use crate::error::DrawerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of currency units a drawer can hold.
///
/// Variants are declared in ascending unit value, so the derived `Ord` is the
/// value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Denomination {
    Penny,
    Nickel,
    Dime,
    Quarter,
    One,
    Five,
    Ten,
    Twenty,
    OneHundred,
}

impl Denomination {
    /// All denominations, lowest unit value first.
    pub const ALL: [Denomination; 9] = [
        Denomination::Penny,
        Denomination::Nickel,
        Denomination::Dime,
        Denomination::Quarter,
        Denomination::One,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::OneHundred,
    ];

    pub const fn unit_value(self) -> Money {
        Money::from_cents(match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::One => 100,
            Denomination::Five => 500,
            Denomination::Ten => 1_000,
            Denomination::Twenty => 2_000,
            Denomination::OneHundred => 10_000,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Denomination::Penny => "PENNY",
            Denomination::Nickel => "NICKEL",
            Denomination::Dime => "DIME",
            Denomination::Quarter => "QUARTER",
            Denomination::One => "ONE",
            Denomination::Five => "FIVE",
            Denomination::Ten => "TEN",
            Denomination::Twenty => "TWENTY",
            Denomination::OneHundred => "ONE HUNDRED",
        }
    }

    /// Highest unit value first, the order the change engine walks in.
    pub fn descending() -> impl Iterator<Item = Denomination> {
        Self::ALL.into_iter().rev()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Denomination {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| DrawerError::Validation(format!("Unknown denomination: {s}")))
    }
}

impl TryFrom<String> for Denomination {
    type Error = DrawerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Denomination> for &'static str {
    fn from(denomination: Denomination) -> Self {
        denomination.name()
    }
}
