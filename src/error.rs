use crate::domain::money::Money;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawerError {
    #[error("Please enter a valid amount of cash. ({0})")]
    InvalidInput(String),
    #[error("Customer does not have enough money to purchase the item. ({tendered} < {price})")]
    Underpayment { price: Money, tendered: Money },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrawerError>;
