//! Lot selection.
//!
//! The newest lots go first: lots are ordered by acquisition date, latest
//! first, and consumed whole until the last one needed, which is split at
//! exactly the number of units still missing.

use rust_decimal::Decimal;
use std::cmp::Ordering;

use lotxfer_core::Position;

use super::snapshot::Holdings;

/// Lots chosen for a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Units taken from each lot, in consumption order.
    pub taken: Vec<Position>,
    /// What is left of the lots, in consumption order.
    pub left: Vec<Position>,
}

/// Holdings fell short of the requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    /// Units available across all lots.
    pub available: Decimal,
    /// Units still missing.
    pub missing: Decimal,
}

/// Consumption order of two lots.
///
/// Latest acquisition date first. Lots acquired the same day are ordered by
/// cost currency, then by cost number, both ascending.
pub fn consumption_order(a: &Position, b: &Position) -> Ordering {
    b.acquisition_date()
        .cmp(&a.acquisition_date())
        .then_with(|| a.cost_currency().cmp(&b.cost_currency()))
        .then_with(|| {
            let number = |p: &Position| p.cost.as_ref().map(|c| c.number);
            number(a).cmp(&number(b))
        })
}

/// Select `quantity` units from `holdings`.
///
/// Nothing is selected unless the available units cover the whole quantity.
pub fn select_lots(holdings: Holdings, quantity: Decimal) -> Result<Selection, Shortfall> {
    let available = holdings.available();
    if available < quantity {
        return Err(Shortfall {
            available,
            missing: quantity - available,
        });
    }

    let mut lots = holdings.into_lots();
    lots.sort_by(consumption_order);

    let mut selection = Selection::default();
    let mut needed = quantity;
    for lot in lots {
        if needed.is_zero() {
            selection.left.push(lot);
        } else if lot.units.number <= needed {
            needed -= lot.units.number;
            selection.taken.push(lot);
        } else {
            let (taken, left) = lot.split(needed);
            needed = Decimal::ZERO;
            selection.taken.push(taken);
            selection.left.push(left);
        }
    }

    tracing::debug!(
        %quantity,
        %available,
        lots = selection.taken.len(),
        "selected lots"
    );
    Ok(selection)
}
