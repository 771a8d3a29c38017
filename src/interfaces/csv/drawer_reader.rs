use crate::domain::denomination::Denomination;
use crate::domain::drawer::Drawer;
use crate::domain::money::Money;
use crate::error::{DrawerError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct DrawerRow {
    denomination: Denomination,
    amount: Money,
}

/// Loads the opening drawer from a `denomination,amount` CSV source.
///
/// Amounts are in major units (`4.25`). Denominations left out of the file
/// start empty.
pub struct DrawerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DrawerReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn into_drawer(self) -> Result<Drawer> {
        let entries = self
            .reader
            .into_deserialize::<DrawerRow>()
            .map(|row| {
                row.map(|r| (r.denomination, r.amount))
                    .map_err(DrawerError::from)
            })
            .collect::<Result<Vec<_>>>()?;
        Drawer::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_drawer() {
        let data = "denomination, amount\nPENNY, 0.50\nONE HUNDRED, 200\nquarter, 1.00";
        let drawer = DrawerReader::new(data.as_bytes()).into_drawer().unwrap();

        assert_eq!(drawer.available_amount(Denomination::Penny), Money::from_cents(50));
        assert_eq!(
            drawer.available_amount(Denomination::OneHundred),
            Money::from_cents(20_000)
        );
        assert_eq!(drawer.available_amount(Denomination::Quarter), Money::from_cents(100));
        assert_eq!(drawer.available_amount(Denomination::Dime), Money::ZERO);
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let data = "denomination, amount\n\
                    ONE HUNDRED, 90000000000000000\n\
                    TWENTY, 90000000000000000";
        let result = DrawerReader::new(data.as_bytes()).into_drawer();
        assert!(matches!(result, Err(DrawerError::Validation(_))));
    }

    #[test]
    fn test_amount_beyond_cents_range() {
        let data = "denomination, amount\nONE HUNDRED, 100000000000000000000";
        let result = DrawerReader::new(data.as_bytes()).into_drawer();
        assert!(result.is_err());
    }

    #[test]
    fn test_largest_single_amount_loads() {
        let data = "denomination, amount\nONE HUNDRED, 90000000000000000";
        let drawer = DrawerReader::new(data.as_bytes()).into_drawer().unwrap();
        assert_eq!(drawer.total(), Money::from_cents(9_000_000_000_000_000_000));
    }

    #[test]
    fn test_unknown_denomination() {
        let data = "denomination, amount\nFIFTY, 50";
        let result = DrawerReader::new(data.as_bytes()).into_drawer();
        assert!(matches!(result, Err(DrawerError::Csv(_))));
    }

    #[test]
    fn test_amount_not_multiple_of_unit() {
        let data = "denomination, amount\nQUARTER, 0.30";
        let result = DrawerReader::new(data.as_bytes()).into_drawer();
        assert!(matches!(result, Err(DrawerError::Validation(_))));
    }
}
