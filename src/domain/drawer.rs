use crate::domain::denomination::Denomination;
use crate::domain::money::Money;
use crate::error::{DrawerError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// The cash held in the till, as the total value available per denomination.
///
/// All nine denominations are always present; a denomination the drawer does
/// not hold maps to zero. Amounts never drop below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drawer {
    amounts: BTreeMap<Denomination, Money>,
}

impl Drawer {
    /// Builds a drawer from `(denomination, amount)` pairs.
    ///
    /// Amounts must be non-negative whole multiples of the denomination's unit
    /// value, each denomination may be listed at most once, and the drawer total
    /// must fit in a `Money`.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Denomination, Money)>,
    {
        let mut drawer = Self::empty();
        let mut seen = Vec::with_capacity(Denomination::ALL.len());
        let mut total = Money::ZERO;
        for (denomination, amount) in entries {
            if seen.contains(&denomination) {
                return Err(DrawerError::Validation(format!(
                    "{denomination} listed more than once"
                )));
            }
            seen.push(denomination);
            validate_entry(denomination, amount)?;
            // apply() only lowers amounts, so total() stays in range from here on
            total = total.checked_add(amount).ok_or_else(|| {
                DrawerError::Validation("Drawer total is out of range".to_string())
            })?;
            drawer.amounts.insert(denomination, amount);
        }
        Ok(drawer)
    }

    pub fn empty() -> Self {
        Self {
            amounts: Denomination::ALL
                .into_iter()
                .map(|d| (d, Money::ZERO))
                .collect(),
        }
    }

    /// Sum of every denomination's amount.
    pub fn total(&self) -> Money {
        self.amounts.values().sum()
    }

    pub fn available_amount(&self, denomination: Denomination) -> Money {
        self.amounts
            .get(&denomination)
            .copied()
            .unwrap_or(Money::ZERO)
    }

    /// Removes `delta` from a denomination, flooring at zero.
    pub fn apply(&mut self, denomination: Denomination, delta: Money) {
        let amount = self.amounts.entry(denomination).or_insert(Money::ZERO);
        *amount = amount.saturating_sub(delta);
    }

    /// `(denomination, amount)` pairs, lowest unit value first.
    pub fn entries(&self) -> impl Iterator<Item = (Denomination, Money)> + '_ {
        self.amounts.iter().map(|(d, m)| (*d, *m))
    }
}

impl Default for Drawer {
    fn default() -> Self {
        let amounts = [
            (Denomination::Penny, 101),
            (Denomination::Nickel, 205),
            (Denomination::Dime, 310),
            (Denomination::Quarter, 425),
            (Denomination::One, 9_000),
            (Denomination::Five, 5_500),
            (Denomination::Ten, 2_000),
            (Denomination::Twenty, 6_000),
            (Denomination::OneHundred, 10_000),
        ];
        Self {
            amounts: amounts
                .into_iter()
                .map(|(d, cents)| (d, Money::from_cents(cents)))
                .collect(),
        }
    }
}

fn validate_entry(denomination: Denomination, amount: Money) -> Result<()> {
    if amount.cents() < 0 {
        return Err(DrawerError::Validation(format!(
            "{denomination} amount {amount} is negative"
        )));
    }
    if amount.cents() % denomination.unit_value().cents() != 0 {
        return Err(DrawerError::Validation(format!(
            "{denomination} amount {amount} is not a multiple of {}",
            denomination.unit_value()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drawer_total() {
        let drawer = Drawer::default();
        assert_eq!(drawer.total(), Money::from_cents(33_541));
        assert_eq!(drawer.total(), drawer.total());
    }

    #[test]
    fn test_new_fills_missing_denominations() {
        let drawer = Drawer::new([(Denomination::Quarter, Money::from_cents(50))]).unwrap();
        assert_eq!(drawer.entries().count(), 9);
        assert_eq!(drawer.available_amount(Denomination::Quarter), Money::from_cents(50));
        assert_eq!(drawer.available_amount(Denomination::Penny), Money::ZERO);
        assert_eq!(drawer.total(), Money::from_cents(50));
    }

    #[test]
    fn test_new_rejects_non_multiple() {
        let result = Drawer::new([(Denomination::Quarter, Money::from_cents(30))]);
        assert!(matches!(result, Err(DrawerError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_negative() {
        let result = Drawer::new([(Denomination::Dime, Money::from_cents(-10))]);
        assert!(matches!(result, Err(DrawerError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = Drawer::new([
            (Denomination::Dime, Money::from_cents(10)),
            (Denomination::Dime, Money::from_cents(20)),
        ]);
        assert!(matches!(result, Err(DrawerError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_total_overflow() {
        let result = Drawer::new([
            (Denomination::OneHundred, Money::from_cents(9_000_000_000_000_000_000)),
            (Denomination::Twenty, Money::from_cents(9_000_000_000_000_000_000)),
        ]);
        assert!(matches!(result, Err(DrawerError::Validation(_))));
    }

    #[test]
    fn test_apply_saturates_at_zero() {
        let mut drawer = Drawer::default();
        drawer.apply(Denomination::Dime, Money::from_cents(100));
        assert_eq!(drawer.available_amount(Denomination::Dime), Money::from_cents(210));

        drawer.apply(Denomination::Dime, Money::from_cents(1_000));
        assert_eq!(drawer.available_amount(Denomination::Dime), Money::ZERO);
    }

    #[test]
    fn test_entries_ascending() {
        let drawer = Drawer::default();
        let order: Vec<_> = drawer.entries().map(|(d, _)| d).collect();
        assert_eq!(order, Denomination::ALL.to_vec());
    }
}
