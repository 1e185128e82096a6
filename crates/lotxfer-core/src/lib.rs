//! Core ledger types for lotxfer
//!
//! This crate provides the value types the transfer plugin works on:
//!
//! - [`Amount`] - A decimal number with a commodity
//! - [`Cost`] - Acquisition cost and date of a lot
//! - [`Position`] - Units held at a cost
//! - [`Inventory`] - Positions of one account, aggregated per lot
//! - [`Directive`] - Booked directives (Transaction, Custom, Open, etc.)
//!
//! # Example
//!
//! ```
//! use lotxfer_core::{Amount, Cost, Inventory, Position};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let mut inv = Inventory::new();
//!
//! // Three purchases of VTI on consecutive days
//! for (day, units, price) in [(1, dec!(5), dec!(5.00)), (2, dec!(2), dec!(6.00)), (3, dec!(3), dec!(7.00))] {
//!     let cost = Cost::new(price, "USD")
//!         .with_date(NaiveDate::from_ymd_opt(2021, 1, day).unwrap());
//!     inv.add(Position::with_cost(Amount::new(units, "VTI"), cost));
//! }
//!
//! assert_eq!(inv.units("VTI"), dec!(10));
//! assert_eq!(inv.lots("VTI").count(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod account;
pub mod amount;
pub mod cost;
pub mod directive;
pub mod inventory;
pub mod position;

pub use amount::Amount;
pub use cost::Cost;
pub use directive::{
    compare_directives, sort_directives, Balance, Close, Commodity, Custom, Directive,
    DirectivePriority, MetaValue, Metadata, Open, Posting, Price, Transaction, META_FILENAME,
    META_LINENO,
};
pub use inventory::{Inventory, OverflowError};
pub use position::Position;

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
