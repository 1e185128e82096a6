//! Position type representing units held at a cost.
//!
//! A [`Position`] is some units of a commodity, optionally with the cost
//! basis of the lot they belong to. Positions with a cost are the lots a
//! transfer moves between accounts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Amount, Cost};

/// A position is units of a commodity held at an optional cost.
///
/// # Examples
///
/// ```
/// use lotxfer_core::{Amount, Cost, Position};
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let cost = Cost::new(dec!(6.00), "USD")
///     .with_date(NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
/// let lot = Position::with_cost(Amount::new(dec!(2), "VTI"), cost);
///
/// let (taken, left) = lot.split(dec!(1));
/// assert_eq!(taken.units.number, dec!(1));
/// assert_eq!(left.units.number, dec!(1));
/// assert_eq!(taken.cost, left.cost);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// The units held (number + commodity)
    pub units: Amount,
    /// The cost basis (if tracked)
    pub cost: Option<Cost>,
}

impl Position {
    /// Create a new position without cost tracking.
    #[must_use]
    pub const fn simple(units: Amount) -> Self {
        Self { units, cost: None }
    }

    /// Create a new position held at a cost.
    #[must_use]
    pub const fn with_cost(units: Amount, cost: Cost) -> Self {
        Self {
            units,
            cost: Some(cost),
        }
    }

    /// Check if this position is empty (zero units).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_zero()
    }

    /// Get the commodity of this position's units.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.units.currency
    }

    /// Get the cost currency, if this position has a cost.
    #[must_use]
    pub fn cost_currency(&self) -> Option<&str> {
        self.cost.as_ref().map(|c| c.currency.as_str())
    }

    /// Acquisition date of the lot, if known.
    #[must_use]
    pub fn acquisition_date(&self) -> Option<NaiveDate> {
        self.cost.as_ref().and_then(|c| c.date)
    }

    /// Calculate the book value (total cost) of this position.
    ///
    /// Returns `None` if there is no cost.
    #[must_use]
    pub fn book_value(&self) -> Option<Amount> {
        self.cost.as_ref().map(|c| c.total_cost(self.units.number))
    }

    /// Whether `other` belongs to the same lot: same commodity, same cost.
    #[must_use]
    pub fn same_lot(&self, other: &Self) -> bool {
        self.units.currency == other.units.currency && self.cost == other.cost
    }

    /// Split this position, taking some units and leaving the rest.
    ///
    /// Returns `(taken, remaining)`. Both keep the original cost, and their
    /// units always sum to the units of `self`.
    #[must_use]
    pub fn split(&self, take_units: Decimal) -> (Self, Self) {
        let taken = Self {
            units: self.units.with_number(take_units),
            cost: self.cost.clone(),
        };
        let remaining = Self {
            units: self.units.with_number(self.units.number - take_units),
            cost: self.cost.clone(),
        };
        (taken, remaining)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units)?;
        if let Some(cost) = &self.cost {
            write!(f, " {cost}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn lot(units: Decimal, cost: Decimal, day: u32) -> Position {
        Position::with_cost(
            Amount::new(units, "VTI"),
            Cost::new(cost, "USD").with_date(date(2021, 1, day)),
        )
    }

    #[test]
    fn test_simple_position() {
        let pos = Position::simple(Amount::new(dec!(100.00), "USD"));
        assert_eq!(pos.currency(), "USD");
        assert!(pos.cost.is_none());
        assert!(pos.book_value().is_none());
        assert!(pos.acquisition_date().is_none());
    }

    #[test]
    fn test_position_with_cost() {
        let pos = lot(dec!(3), dec!(7.00), 3);
        assert_eq!(pos.currency(), "VTI");
        assert_eq!(pos.cost_currency(), Some("USD"));
        assert_eq!(pos.acquisition_date(), Some(date(2021, 1, 3)));
        assert_eq!(pos.book_value(), Some(Amount::new(dec!(21.00), "USD")));
    }

    #[test]
    fn test_same_lot() {
        assert!(lot(dec!(3), dec!(7.00), 3).same_lot(&lot(dec!(1), dec!(7.00), 3)));
        assert!(!lot(dec!(3), dec!(7.00), 3).same_lot(&lot(dec!(3), dec!(7.00), 4)));
        assert!(!lot(dec!(3), dec!(7.00), 3).same_lot(&lot(dec!(3), dec!(7.01), 3)));
    }

    #[test]
    fn test_split_preserves_total_and_cost() {
        let pos = lot(dec!(2), dec!(6.00), 2);
        let (taken, remaining) = pos.split(dec!(0.5));
        assert_eq!(taken.units.number, dec!(0.5));
        assert_eq!(remaining.units.number, dec!(1.5));
        assert_eq!(taken.units.number + remaining.units.number, pos.units.number);
        assert_eq!(taken.cost, pos.cost);
        assert_eq!(remaining.cost, pos.cost);
    }

    #[test]
    fn test_split_whole_lot_leaves_empty_remainder() {
        let pos = lot(dec!(3), dec!(7.00), 3);
        let (taken, remaining) = pos.split(dec!(3));
        assert_eq!(taken, pos);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_display() {
        let s = lot(dec!(3), dec!(7.00), 3).to_string();
        assert_eq!(s, "3 VTI {7.00 USD, 2021-01-03}");
    }
}
