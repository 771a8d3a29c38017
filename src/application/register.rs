use crate::application::engine::ChangeEngine;
use crate::domain::change::ChangeResult;
use crate::domain::drawer::Drawer;
use crate::domain::money::Money;
use crate::error::{DrawerError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::{info, warn};

/// What a completed sale hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The customer paid the exact price; the drawer was not consulted.
    NoChangeDue,
    /// The change engine ran; see the result's status.
    Change(ChangeResult),
}

/// Evaluates sales at a fixed price against a drawer.
///
/// The drawer is borrowed mutably for the duration of one evaluation, so sales
/// are processed one at a time.
#[derive(Debug, Clone)]
pub struct Register {
    price: Money,
    engine: ChangeEngine,
}

impl Register {
    /// Creates a register selling at `price`, which must be positive.
    pub fn new(price: Money) -> Result<Self> {
        if !price.is_positive() {
            return Err(DrawerError::Validation(format!(
                "Price must be positive, got {price}"
            )));
        }
        Ok(Self {
            price,
            engine: ChangeEngine::new(),
        })
    }

    /// Parses a raw cash entry and evaluates it.
    pub fn evaluate_input(&self, drawer: &mut Drawer, raw: &str) -> Result<Outcome> {
        let tendered = Decimal::from_str(raw.trim())
            .map_err(|_| DrawerError::InvalidInput(format!("'{}' is not a number", raw.trim())))?;
        self.evaluate(drawer, tendered)
    }

    /// Evaluates a tendered amount given in major units.
    pub fn evaluate(&self, drawer: &mut Drawer, tendered: Decimal) -> Result<Outcome> {
        if tendered <= Decimal::ZERO {
            warn!(%tendered, "Rejected non-positive tender");
            return Err(DrawerError::InvalidInput(format!(
                "{tendered} is not a positive amount"
            )));
        }
        let tendered = Money::from_decimal(tendered)
            .map_err(|e| DrawerError::InvalidInput(e.to_string()))?;
        self.evaluate_money(drawer, tendered)
    }

    /// Evaluates a tendered amount already converted to `Money`.
    pub fn evaluate_money(&self, drawer: &mut Drawer, tendered: Money) -> Result<Outcome> {
        if !tendered.is_positive() {
            return Err(DrawerError::InvalidInput(format!(
                "{tendered} is not a positive amount"
            )));
        }
        if tendered < self.price {
            warn!(price = %self.price, %tendered, "Underpayment");
            return Err(DrawerError::Underpayment {
                price: self.price,
                tendered,
            });
        }
        if tendered == self.price {
            info!(price = %self.price, "Exact cash, no change due");
            return Ok(Outcome::NoChangeDue);
        }

        let change_owed = tendered - self.price;
        let result = self.engine.calculate_change(change_owed, drawer);
        info!(
            price = %self.price,
            %tendered,
            %change_owed,
            status = %result.status,
            "Transaction evaluated"
        );
        Ok(Outcome::Change(result))
    }
}
