use crate::domain::denomination::Denomination;
use crate::domain::money::Money;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// The drawer cannot cover the change owed.
    InsufficientFunds,
    /// The change owed is exactly the drawer total.
    Closed,
    /// The change was paid out and money remains in the drawer.
    Open,
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeStatus::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ChangeStatus::Closed => "CLOSED",
            ChangeStatus::Open => "OPEN",
        })
    }
}

/// How much of a single denomination is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub denomination: Denomination,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeResult {
    pub status: ChangeStatus,
    pub change: Vec<LineItem>,
}

impl ChangeResult {
    pub fn insufficient_funds() -> Self {
        Self {
            status: ChangeStatus::InsufficientFunds,
            change: Vec::new(),
        }
    }

    /// Builds a result whose line items are sorted highest denomination first,
    /// with zero amounts dropped.
    pub fn with_change(status: ChangeStatus, mut change: Vec<LineItem>) -> Self {
        change.retain(|item| item.amount.is_positive());
        change.sort_by(|a, b| b.denomination.cmp(&a.denomination));
        Self { status, change }
    }

    /// Sum of all line items.
    pub fn total(&self) -> Money {
        self.change.iter().map(|item| item.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_change_sorts_descending_and_drops_zero() {
        let result = ChangeResult::with_change(
            ChangeStatus::Closed,
            vec![
                LineItem {
                    denomination: Denomination::Penny,
                    amount: Money::from_cents(3),
                },
                LineItem {
                    denomination: Denomination::Nickel,
                    amount: Money::ZERO,
                },
                LineItem {
                    denomination: Denomination::Twenty,
                    amount: Money::from_cents(2_000),
                },
            ],
        );

        let order: Vec<_> = result.change.iter().map(|i| i.denomination).collect();
        assert_eq!(order, vec![Denomination::Twenty, Denomination::Penny]);
        assert_eq!(result.total(), Money::from_cents(2_003));
    }

    #[test]
    fn test_result_serialization() {
        let result = ChangeResult::with_change(
            ChangeStatus::Open,
            vec![LineItem {
                denomination: Denomination::Quarter,
                amount: Money::from_cents(25),
            }],
        );
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"status":"OPEN","change":[{"denomination":"QUARTER","amount":"0.25"}]}"#
        );

        let json = serde_json::to_string(&ChangeResult::insufficient_funds()).unwrap();
        assert_eq!(json, r#"{"status":"INSUFFICIENT_FUNDS","change":[]}"#);
    }
}
