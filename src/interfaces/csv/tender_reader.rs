use crate::error::{DrawerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One sale from the tender file.
///
/// `cash` stays raw text so a bad entry surfaces as invalid input from the
/// register instead of aborting the read. `price` overrides the configured
/// price for this sale only.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Tender {
    pub cash: String,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Reads tenders from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating ragged rows.
pub struct TenderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TenderReader<R> {
    /// Creates a new `TenderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes tenders.
    pub fn tenders(self) -> impl Iterator<Item = Result<Tender>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DrawerError::from))
    }
}
