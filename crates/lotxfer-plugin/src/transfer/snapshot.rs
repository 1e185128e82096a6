//! Account holdings at a point in time.
//!
//! Holdings are never stored: they are folded from the booked postings of
//! every transaction up to and including the requested date, so a snapshot
//! taken after a transfer sees the lots that transfer moved.

use chrono::NaiveDate;
use lotxfer_core::{Directive, Inventory, OverflowError, Position};
use rust_decimal::Decimal;

/// Transferable lots of one commodity in one account.
///
/// `available` is the sum of the lots, capped at the account's net units of
/// the commodity: a short lot left open in the account counts against the
/// long ones, so it can never be transferred out from under them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holdings {
    lots: Vec<Position>,
    available: Decimal,
}

impl Holdings {
    /// Lots of an account whose net units of the commodity are `net`.
    ///
    /// Returns `None` if the lots add up to more than [`Decimal`] can hold.
    pub fn new(lots: Vec<Position>, net: Decimal) -> Option<Self> {
        let total = lots
            .iter()
            .try_fold(Decimal::ZERO, |total, lot| total.checked_add(lot.units.number))?;
        Some(Self {
            available: total.min(net).max(Decimal::ZERO),
            lots,
        })
    }

    /// Lots with nothing counting against them.
    pub fn from_lots(lots: Vec<Position>) -> Option<Self> {
        Self::new(lots, Decimal::MAX)
    }

    /// The lots, in order of first appearance.
    pub fn lots(&self) -> &[Position] {
        &self.lots
    }

    /// Units that may be transferred.
    pub const fn available(&self) -> Decimal {
        self.available
    }

    /// Take the lots.
    pub fn into_lots(self) -> Vec<Position> {
        self.lots
    }
}

/// Fold the postings of `account` dated on or before `as_of` into an inventory.
///
/// A cost without an acquisition date takes the date of its transaction.
pub fn account_inventory(
    entries: &[Directive],
    account: &str,
    as_of: NaiveDate,
) -> Result<Inventory, OverflowError> {
    let mut inventory = Inventory::new();
    for txn in entries
        .iter()
        .filter_map(Directive::as_transaction)
        .filter(|txn| txn.date <= as_of)
    {
        for posting in txn.postings.iter().filter(|p| p.account == account) {
            inventory.try_add(Position {
                units: posting.units.clone(),
                cost: posting.cost.clone().map(|c| c.or_date(txn.date)),
            })?;
        }
    }
    Ok(inventory)
}

/// Transferable cost lots of `currency` held in `account` as of `as_of`.
///
/// Lots with distinct cost number, cost currency or acquisition date stay
/// distinct; uncosted balances and non-positive lots are left out.
pub fn holdings(
    entries: &[Directive],
    account: &str,
    currency: &str,
    as_of: NaiveDate,
) -> Result<Holdings, OverflowError> {
    let inventory = account_inventory(entries, account, as_of)?;
    let net = inventory
        .checked_units(currency)
        .ok_or_else(|| OverflowError::new(currency))?;
    let lots = inventory.lots(currency).cloned().collect();
    let holdings = Holdings::new(lots, net).ok_or_else(|| OverflowError::new(currency))?;
    tracing::trace!(
        account,
        currency,
        %as_of,
        lots = holdings.lots().len(),
        available = %holdings.available(),
        inventory = %inventory,
        "built lot snapshot"
    );
    Ok(holdings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotxfer_core::{Amount, Cost, Posting, Transaction};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn buy(day: u32, units: Decimal, price: Decimal) -> Directive {
        Directive::Transaction(
            Transaction::new(date(day), "Buy")
                .with_posting(
                    Posting::new("Assets:Brokerage", Amount::new(units, "VTI"))
                        .with_cost(Cost::new(price, "USD").with_date(date(day))),
                )
                .with_posting(Posting::new(
                    "Assets:Bank",
                    Amount::new(-units * price, "USD"),
                )),
        )
    }

    fn lots(entries: &[Directive], account: &str, currency: &str) -> Vec<Position> {
        holdings(entries, account, currency, date(5))
            .unwrap()
            .into_lots()
    }

    fn cost_posting(units: Decimal, price: Decimal, day: u32) -> Posting {
        Posting::new("Assets:Brokerage", Amount::new(units, "VTI"))
            .with_cost(Cost::new(price, "USD").with_date(date(day)))
    }

    #[test]
    fn test_lots_per_purchase() {
        let entries = vec![
            buy(1, dec!(5), dec!(5.00)),
            buy(2, dec!(2), dec!(6.00)),
            buy(3, dec!(3), dec!(7.00)),
        ];
        let held = holdings(&entries, "Assets:Brokerage", "VTI", date(5)).unwrap();
        assert_eq!(held.lots().len(), 3);
        assert_eq!(held.available(), dec!(10));
    }

    #[test]
    fn test_ignores_later_entries() {
        let entries = vec![buy(1, dec!(5), dec!(5.00)), buy(7, dec!(2), dec!(6.00))];
        let lots = lots(&entries, "Assets:Brokerage", "VTI");
        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].acquisition_date(), Some(date(1)));
    }

    #[test]
    fn test_same_day_entries_included() {
        let entries = vec![buy(5, dec!(1), dec!(5.00))];
        assert_eq!(lots(&entries, "Assets:Brokerage", "VTI").len(), 1);
    }

    #[test]
    fn test_identical_lots_aggregate() {
        let entries = vec![buy(1, dec!(2), dec!(5.00)), buy(1, dec!(3), dec!(5.00))];
        let lots = lots(&entries, "Assets:Brokerage", "VTI");
        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].units.number, dec!(5));
    }

    #[test]
    fn test_reduction_shrinks_lot() {
        let sell = Directive::Transaction(
            Transaction::new(date(4), "Sell")
                .with_posting(
                    Posting::new("Assets:Brokerage", Amount::new(dec!(-2), "VTI"))
                        .with_cost(Cost::new(dec!(5.00), "USD").with_date(date(1))),
                )
                .with_posting(Posting::new("Assets:Bank", Amount::new(dec!(12.00), "USD"))),
        );
        let entries = vec![buy(1, dec!(5), dec!(5.00)), sell];
        let lots = lots(&entries, "Assets:Brokerage", "VTI");
        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].units.number, dec!(3));
    }

    #[test]
    fn test_missing_cost_date_uses_entry_date() {
        let entries = vec![Directive::Transaction(
            Transaction::new(date(2), "Buy").with_posting(
                Posting::new("Assets:Brokerage", Amount::new(dec!(1), "VTI"))
                    .with_cost(Cost::new(dec!(5.00), "USD")),
            ),
        )];
        let lots = lots(&entries, "Assets:Brokerage", "VTI");
        assert_eq!(lots[0].acquisition_date(), Some(date(2)));
    }

    #[test]
    fn test_uncosted_and_other_accounts_excluded() {
        let entries = vec![
            buy(1, dec!(1), dec!(5.00)),
            Directive::Transaction(
                Transaction::new(date(2), "Gift")
                    .with_posting(Posting::new("Assets:Brokerage", Amount::new(dec!(4), "VTI")))
                    .with_posting(Posting::new("Income:Gifts", Amount::new(dec!(-4), "VTI"))),
            ),
        ];
        assert_eq!(lots(&entries, "Assets:Brokerage", "VTI").len(), 1);
        assert!(lots(&entries, "Assets:Bank", "VTI").is_empty());
        assert!(lots(&entries, "Assets:Brokerage", "VWO").is_empty());
        assert_eq!(
            account_inventory(&entries, "Assets:Brokerage", date(5))
                .unwrap()
                .units("VTI"),
            dec!(5)
        );
    }

    #[test]
    fn test_short_lot_caps_available() {
        let short = Directive::Transaction(
            Transaction::new(date(2), "Short")
                .with_posting(cost_posting(dec!(-3), dec!(2.00), 2))
                .with_posting(Posting::new("Assets:Bank", Amount::new(dec!(6.00), "USD"))),
        );
        let entries = vec![buy(1, dec!(5), dec!(1.00)), short];
        let held = holdings(&entries, "Assets:Brokerage", "VTI", date(5)).unwrap();
        assert_eq!(held.lots().len(), 1);
        assert_eq!(held.lots()[0].units.number, dec!(5));
        assert_eq!(held.available(), dec!(2));
    }

    #[test]
    fn test_net_short_account_has_nothing_available() {
        let entries = vec![Directive::Transaction(
            Transaction::new(date(1), "Short")
                .with_posting(cost_posting(dec!(-3), dec!(2.00), 1))
                .with_posting(cost_posting(dec!(1), dec!(1.00), 1)),
        )];
        let held = holdings(&entries, "Assets:Brokerage", "VTI", date(5)).unwrap();
        assert_eq!(held.available(), Decimal::ZERO);
    }

    #[test]
    fn test_lot_out_of_range() {
        let entries = vec![
            Directive::Transaction(
                Transaction::new(date(1), "Buy")
                    .with_posting(cost_posting(Decimal::MAX, dec!(1.00), 1)),
            ),
            Directive::Transaction(
                Transaction::new(date(2), "Buy").with_posting(cost_posting(dec!(1), dec!(1.00), 1)),
            ),
        ];
        let err = holdings(&entries, "Assets:Brokerage", "VTI", date(5)).unwrap_err();
        assert_eq!(err, OverflowError::new("VTI"));
    }

    #[test]
    fn test_lot_total_out_of_range() {
        let entries = vec![Directive::Transaction(
            Transaction::new(date(1), "Buy")
                .with_posting(cost_posting(Decimal::MAX, dec!(1.00), 1))
                .with_posting(cost_posting(Decimal::MAX, dec!(2.00), 1)),
        )];
        assert!(holdings(&entries, "Assets:Brokerage", "VTI", date(5)).is_err());
        assert!(account_inventory(&entries, "Assets:Brokerage", date(5)).is_ok());
    }

    #[test]
    fn test_from_lots_makes_every_unit_available() {
        let lot = Position::with_cost(
            Amount::new(dec!(2), "VTI"),
            Cost::new(dec!(1.00), "USD").with_date(date(1)),
        );
        let held = Holdings::from_lots(vec![lot.clone(), lot]).unwrap();
        assert_eq!(held.available(), dec!(4));
    }
}
