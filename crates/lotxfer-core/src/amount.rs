//! Amount type representing a decimal number with a commodity.
//!
//! An [`Amount`] pairs an exact decimal quantity with a commodity symbol
//! (`3 VTI`, `5.00 USD`). All arithmetic is done on [`Decimal`], never on
//! binary floats, so splitting a lot never loses a fraction of a unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An amount is a quantity paired with a commodity.
///
/// # Examples
///
/// ```
/// use lotxfer_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let held = Amount::new(dec!(5), "VTI");
/// let moved = Amount::new(dec!(2), "VTI");
/// let left = &held - &moved;
/// assert_eq!(left.number, dec!(3));
/// assert_eq!(left.to_string(), "3 VTI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// The decimal quantity
    pub number: Decimal,
    /// The commodity symbol (e.g., "USD", "VTI")
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }

    /// Check if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Check if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.number.is_sign_positive() && !self.number.is_zero()
    }

    /// Check if the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.number.is_sign_negative() && !self.number.is_zero()
    }

    /// Same commodity, different quantity.
    #[must_use]
    pub fn with_number(&self, number: Decimal) -> Self {
        Self::new(number, self.currency.clone())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}

impl Add for &Amount {
    type Output = Amount;

    fn add(self, other: &Amount) -> Amount {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot add amounts of different commodities"
        );
        self.with_number(self.number + other.number)
    }
}

impl Sub for &Amount {
    type Output = Amount;

    fn sub(self, other: &Amount) -> Amount {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot subtract amounts of different commodities"
        );
        self.with_number(self.number - other.number)
    }
}

impl Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        self.with_number(-self.number)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl AddAssign<&Self> for Amount {
    fn add_assign(&mut self, other: &Self) {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot add amounts of different commodities"
        );
        self.number += other.number;
    }
}

impl SubAssign<&Self> for Amount {
    fn sub_assign(&mut self, other: &Self) {
        debug_assert_eq!(
            self.currency, other.currency,
            "Cannot subtract amounts of different commodities"
        );
        self.number -= other.number;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new() {
        let amount = Amount::new(dec!(1), "VTI");
        assert_eq!(amount.number, dec!(1));
        assert_eq!(amount.currency, "VTI");
    }

    #[test]
    fn test_sign_checks() {
        let pos = Amount::new(dec!(3), "VTI");
        let neg = Amount::new(dec!(-3), "VTI");
        let zero = Amount::new(Decimal::ZERO, "VTI");

        assert!(pos.is_positive());
        assert!(!pos.is_negative());
        assert!(neg.is_negative());
        assert!(!neg.is_positive());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(zero.is_zero());
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let zero = Amount::new(-Decimal::ZERO, "VTI");
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let a = Amount::new(dec!(0.1), "BTC");
        let b = Amount::new(dec!(0.2), "BTC");
        assert_eq!((&a + &b).number, dec!(0.3));
        assert_eq!((&b - &a).number, dec!(0.1));

        let mut c = a.clone();
        c += &b;
        c -= &a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_neg() {
        let a = Amount::new(dec!(2.50), "VTI");
        assert_eq!((-&a).number, dec!(-2.50));
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(dec!(5.00), "USD").to_string(), "5.00 USD");
    }
}
