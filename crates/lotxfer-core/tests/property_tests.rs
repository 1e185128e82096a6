//! Property-based tests for lotxfer-core.
//!
//! These tests verify invariants hold for arbitrary inputs using proptest.
//!
//! Run with: cargo test -p lotxfer-core --test `property_tests`

use chrono::NaiveDate;
use lotxfer_core::{Amount, Cost, Inventory, Position};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_positive_decimal() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_currency() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VTI".to_string()),
        Just("VWO".to_string()),
        Just("BTC".to_string()),
    ]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2025i32, 1u32..13u32, 1u32..29u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_cost() -> impl Strategy<Value = Cost> {
    (
        arb_positive_decimal(),
        prop_oneof![Just("USD"), Just("EUR")],
        arb_date(),
    )
        .prop_map(|(n, c, d)| Cost::new(n, c).with_date(d))
}

fn arb_lot() -> impl Strategy<Value = Position> {
    (arb_positive_decimal(), arb_currency(), arb_cost())
        .prop_map(|(n, c, cost)| Position::with_cost(Amount::new(n, c), cost))
}

fn arb_inventory() -> impl Strategy<Value = Inventory> {
    prop::collection::vec(arb_lot(), 0..12).prop_map(|lots| lots.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_add_conserves_units(lots in prop::collection::vec(arb_lot(), 0..12)) {
        let inv: Inventory = lots.iter().cloned().collect();

        for currency in ["VTI", "VWO", "BTC"] {
            let expected: Decimal = lots
                .iter()
                .filter(|p| p.units.currency == currency)
                .map(|p| p.units.number)
                .sum();
            prop_assert_eq!(inv.units(currency), expected);
        }
    }

    #[test]
    fn prop_lot_keys_are_unique(inv in arb_inventory()) {
        let positions = inv.positions();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                prop_assert!(!a.same_lot(b));
            }
        }
    }

    #[test]
    fn prop_reversing_every_lot_empties_inventory(lots in prop::collection::vec(arb_lot(), 0..12)) {
        let mut inv: Inventory = lots.iter().cloned().collect();
        for lot in &lots {
            inv.add(Position { units: -&lot.units, cost: lot.cost.clone() });
        }
        prop_assert!(inv.is_empty());
    }

    #[test]
    fn prop_split_conserves_units(lot in arb_lot(), pct in 0u32..=100u32) {
        let take = lot.units.number * Decimal::from(pct) / Decimal::from(100);
        let (taken, remaining) = lot.split(take);

        prop_assert_eq!(taken.units.number + remaining.units.number, lot.units.number);
        prop_assert_eq!(&taken.cost, &lot.cost);
        prop_assert_eq!(&remaining.cost, &lot.cost);
    }

    #[test]
    fn prop_book_value_matches_lots(inv in arb_inventory()) {
        for currency in ["VTI", "VWO", "BTC"] {
            let mut expected = std::collections::BTreeMap::<String, Decimal>::new();
            for lot in inv.lots(currency) {
                let cost = lot.cost.as_ref().unwrap();
                *expected.entry(cost.currency.clone()).or_default() += lot.units.number * cost.number;
            }
            prop_assert_eq!(inv.book_value(currency), expected);
        }
    }
}
