//! Cost basis of a lot.
//!
//! A [`Cost`] is the per-unit acquisition price of a lot together with the
//! acquisition date. Two positions of the same commodity whose costs are
//! equal belong to the same lot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Amount;

/// The acquisition cost of a lot.
///
/// When you buy 3 VTI at 7.00 USD on 2021-01-03, the cost is:
/// - number: 7.00
/// - currency: "USD"
/// - date: Some(2021-01-03)
///
/// # Examples
///
/// ```
/// use lotxfer_core::Cost;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let cost = Cost::new(dec!(7.00), "USD")
///     .with_date(NaiveDate::from_ymd_opt(2021, 1, 3).unwrap());
///
/// assert_eq!(cost.total_cost(dec!(3)).number, dec!(21.00));
/// assert_eq!(cost.to_string(), "{7.00 USD, 2021-01-03}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Cost per unit
    pub number: Decimal,
    /// Currency of the cost
    pub currency: String,
    /// Acquisition date, if the booking engine recorded one
    pub date: Option<NaiveDate>,
}

impl Cost {
    /// Create a new cost with the given number and currency.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
            date: None,
        }
    }

    /// Add a date to this cost.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Fill in the acquisition date if the cost does not carry one.
    ///
    /// Booked postings created by an acquisition normally carry the
    /// transaction date already; this covers hand-built entries that don't.
    #[must_use]
    pub fn or_date(mut self, date: NaiveDate) -> Self {
        self.date.get_or_insert(date);
        self
    }

    /// Calculate the total cost for a given number of units.
    #[must_use]
    pub fn total_cost(&self, units: Decimal) -> Amount {
        Amount::new(units * self.number, self.currency.clone())
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}", self.number, self.currency)?;
        if let Some(date) = self.date {
            write!(f, ", {date}")?;
        }
        write!(f, "}}")
    }
}
