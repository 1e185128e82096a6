//! Lot-keyed inventory of an account.
//!
//! An [`Inventory`] holds the positions of one account. Positions of the same
//! commodity with the same cost (number, currency and acquisition date) are
//! one lot: adding to it aggregates, and a reduction booked against it shrinks
//! it. A lot whose units reach zero disappears.
//!
//! Replaying booked postings through [`Inventory::add`] in ledger order
//! reconstructs an account's holdings at any point in time. Replays over
//! untrusted input should use [`Inventory::try_add`], which reports a
//! quantity outside the range of [`Decimal`] instead of panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::Position;

/// A lot or total quantity left the range of [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("quantity of {currency} is out of range")]
pub struct OverflowError {
    /// Commodity whose quantity overflowed
    pub currency: String,
}

impl OverflowError {
    /// Create an overflow error for a commodity.
    #[must_use]
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

/// A collection of positions, aggregated per lot.
///
/// # Examples
///
/// ```
/// use lotxfer_core::{Amount, Cost, Inventory, Position};
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let cost = Cost::new(dec!(5.00), "USD")
///     .with_date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
///
/// let mut inv = Inventory::new();
/// inv.add(Position::with_cost(Amount::new(dec!(5), "VTI"), cost.clone()));
/// inv.add(Position::with_cost(Amount::new(dec!(-2), "VTI"), cost));
///
/// assert_eq!(inv.units("VTI"), dec!(3));
/// assert_eq!(inv.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    positions: Vec<Position>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all positions, in order of first appearance.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Check if inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of distinct lots (and uncosted balances) held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Total units of a commodity, across all lots.
    ///
    /// # Panics
    ///
    /// Panics if the total is out of range; see [`Inventory::checked_units`].
    #[must_use]
    pub fn units(&self, currency: &str) -> Decimal {
        self.positions
            .iter()
            .filter(|p| p.units.currency == currency)
            .map(|p| p.units.number)
            .sum()
    }

    /// Total units of a commodity, or `None` if the total is out of range.
    ///
    /// Short lots count against long ones, so this is the net quantity held.
    #[must_use]
    pub fn checked_units(&self, currency: &str) -> Option<Decimal> {
        self.positions
            .iter()
            .filter(|p| p.units.currency == currency)
            .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.units.number))
    }

    /// Cost lots of a commodity with positive units, in order of first appearance.
    pub fn lots<'a>(&'a self, currency: &'a str) -> impl Iterator<Item = &'a Position> + 'a {
        self.positions
            .iter()
            .filter(move |p| p.units.currency == currency && p.cost.is_some())
            .filter(|p| p.units.is_positive())
    }

    /// Total book value of a commodity, per cost currency.
    #[must_use]
    pub fn book_value(&self, currency: &str) -> BTreeMap<String, Decimal> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for pos in self.positions.iter().filter(|p| p.units.currency == currency) {
            if let Some(book) = pos.book_value() {
                *totals.entry(book.currency).or_default() += book.number;
            }
        }
        totals
    }

    /// Add a position to the inventory.
    ///
    /// The units are merged into the matching lot if one exists; a negative
    /// position therefore reduces the lot it was booked against. A lot left
    /// with zero units is removed.
    ///
    /// # Panics
    ///
    /// Panics if the merged lot is out of range; see [`Inventory::try_add`].
    pub fn add(&mut self, position: Position) {
        if position.is_empty() {
            return;
        }

        if let Some(idx) = self.positions.iter().position(|p| p.same_lot(&position)) {
            self.positions[idx].units += &position.units;
            if self.positions[idx].is_empty() {
                self.positions.remove(idx);
            }
            return;
        }

        self.positions.push(position);
    }

    /// Add a position, failing instead of panicking when the merged lot
    /// would be out of range. The inventory is unchanged on error.
    pub fn try_add(&mut self, position: Position) -> Result<(), OverflowError> {
        if position.is_empty() {
            return Ok(());
        }

        if let Some(idx) = self.positions.iter().position(|p| p.same_lot(&position)) {
            let lot = &mut self.positions[idx];
            lot.units.number = lot
                .units
                .number
                .checked_add(position.units.number)
                .ok_or_else(|| OverflowError::new(position.currency()))?;
            if lot.is_empty() {
                self.positions.remove(idx);
            }
            return Ok(());
        }

        self.positions.push(position);
        Ok(())
    }
}

impl Extend<Position> for Inventory {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        for position in iter {
            self.add(position);
        }
    }
}

impl FromIterator<Position> for Inventory {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut inv = Self::new();
        inv.extend(iter);
        inv
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, pos) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pos}")?;
        }
        write!(f, ")")
    }
}
