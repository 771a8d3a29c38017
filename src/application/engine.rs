use crate::domain::change::{ChangeResult, ChangeStatus, LineItem};
use crate::domain::denomination::Denomination;
use crate::domain::drawer::Drawer;
use crate::domain::money::Money;
use tracing::{debug, warn};

/// Computes the change for a transaction against a drawer.
///
/// Denominations are taken greedily, highest unit value first, and only in
/// whole units. A denomination the drawer has run out of is skipped.
///
/// | Outcome | Condition | Drawer |
/// |---|---|---|
/// | `InsufficientFunds` | owed > total, or the greedy walk leaves a remainder | untouched |
/// | `Closed` | owed == total | untouched |
/// | `Open` | owed < total and fully covered | line items removed |
#[derive(Debug, Default, Clone, Copy)]
pub struct ChangeEngine;

impl ChangeEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_change(&self, change_owed: Money, drawer: &mut Drawer) -> ChangeResult {
        if change_owed.cents() < 0 {
            warn!(%change_owed, "Negative change owed");
            return ChangeResult::insufficient_funds();
        }

        let total_in_drawer = drawer.total();
        if change_owed > total_in_drawer {
            debug!(%change_owed, %total_in_drawer, "Change owed exceeds drawer total");
            return ChangeResult::insufficient_funds();
        }

        if change_owed == total_in_drawer {
            // Closing out the till is reported only; the caller empties the drawer.
            let (items, remaining) = plan(change_owed, drawer);
            debug!(%change_owed, %remaining, "Change owed equals drawer total");
            return ChangeResult::with_change(ChangeStatus::Closed, items);
        }

        let (items, remaining) = plan(change_owed, drawer);
        if remaining.is_positive() {
            debug!(
                %change_owed,
                %remaining,
                "Denominations on hand cannot make exact change"
            );
            return ChangeResult::insufficient_funds();
        }

        for item in &items {
            drawer.apply(item.denomination, item.amount);
        }
        debug!(%change_owed, items = items.len(), "Change paid out");
        ChangeResult::with_change(ChangeStatus::Open, items)
    }
}

/// Walks the drawer highest denomination first without touching it, returning
/// the line items taken and whatever could not be covered.
fn plan(change_owed: Money, drawer: &Drawer) -> (Vec<LineItem>, Money) {
    let mut remaining = change_owed;
    let mut items = Vec::new();

    for denomination in Denomination::descending() {
        let unit = denomination.unit_value();
        let available = drawer.available_amount(denomination);
        let units = remaining
            .whole_units_of(unit)
            .min(available.whole_units_of(unit));
        if units == 0 {
            continue;
        }

        let amount = unit * units;
        remaining -= amount;
        items.push(LineItem {
            denomination,
            amount,
        });
    }

    (items, remaining)
}
