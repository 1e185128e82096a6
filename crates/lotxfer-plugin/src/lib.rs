//! Beancount native plugin for lot-preserving transfers.
//!
//! Moving a holding between accounts (say, from one broker to another) is
//! not a sale: the units keep the cost basis and acquisition date they were
//! bought with. This crate provides a plugin that reads
//!
//! ```text
//! 2021-01-05 custom "transfer" 4 VTI Assets:Brokerage Assets:New-Brokerage
//! ```
//!
//! and answers it with a transaction moving the latest-acquired cost lots of
//! `VTI` out of `Assets:Brokerage` and into `Assets:New-Brokerage`, splitting
//! the oldest lot it touches if only part of it is needed.
//!
//! # Example
//!
//! ```
//! use lotxfer_core::{Amount, Cost, Custom, Directive, MetaValue, Posting, Transaction};
//! use lotxfer_plugin::{NativePluginRegistry, PluginInput};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2021, 1, d).unwrap();
//!
//! let buy = Transaction::new(day(1), "Buy 1 VTI")
//!     .with_posting(
//!         Posting::new("Assets:Brokerage", Amount::new(dec!(1), "VTI"))
//!             .with_cost(Cost::new(dec!(5.00), "USD").with_date(day(1))),
//!     )
//!     .with_posting(Posting::new("Assets:Bank", Amount::new(dec!(-5.00), "USD")));
//!
//! let transfer = Custom::new(day(5), "transfer")
//!     .with_value(MetaValue::Amount(Amount::new(dec!(1), "VTI")))
//!     .with_value(MetaValue::Account("Assets:Brokerage".into()))
//!     .with_value(MetaValue::Account("Assets:New-Brokerage".into()));
//!
//! let registry = NativePluginRegistry::new();
//! let plugin = registry.find("transfer").unwrap();
//! let output = plugin.process(PluginInput {
//!     directives: vec![Directive::Transaction(buy), Directive::Custom(transfer)],
//!     ..PluginInput::default()
//! });
//!
//! assert!(output.errors.is_empty());
//! assert_eq!(output.directives.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod native;
pub mod transfer;
pub mod types;

pub use native::{NativePlugin, NativePluginRegistry};
pub use transfer::{TransferConfig, TransferError, TransferErrorKind, TransferPlugin};
pub use types::{PluginError, PluginErrorSeverity, PluginInput, PluginOptions, PluginOutput};
