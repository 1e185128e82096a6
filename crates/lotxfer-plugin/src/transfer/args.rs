//! Operands of a transfer directive.
//!
//! ```text
//! 2021-01-05 custom "transfer" 1 VTI Assets:Brokerage Assets:New-Brokerage
//! ```
//!
//! Each operand is first classified on its own, then the triple is matched
//! against the one accepted shape. Checks run in order (count, amount,
//! source, destination) and the first failure is the one reported.

use chrono::NaiveDate;
use lotxfer_core::account::is_valid_account;
use lotxfer_core::{Amount, Custom, MetaValue};

use super::error::TransferErrorKind;

/// A classified custom directive operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    /// A positive `<number> <commodity>` amount.
    Amount(&'a Amount),
    /// An account-shaped name.
    Account(&'a str),
    /// Anything else.
    Malformed(&'a MetaValue),
}

impl<'a> Operand<'a> {
    /// Classify a custom directive value.
    pub fn classify(value: &'a MetaValue) -> Self {
        match value {
            MetaValue::Amount(amount) if amount.is_positive() => Self::Amount(amount),
            MetaValue::Account(name) | MetaValue::String(name) if is_valid_account(name) => {
                Self::Account(name)
            }
            other => Self::Malformed(other),
        }
    }
}

/// A validated transfer directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Units to move.
    pub amount: Amount,
    /// Account the lots are taken from.
    pub source: String,
    /// Account the lots are moved to.
    pub destination: String,
    /// Date of the transfer.
    pub date: NaiveDate,
}

/// Validate the operands of a transfer directive.
pub fn parse_request(custom: &Custom) -> Result<TransferRequest, TransferErrorKind> {
    let [amount, source, destination] = custom.values.as_slice() else {
        return Err(TransferErrorKind::WrongParameterCount {
            given: custom.values.len(),
        });
    };

    let operands = (
        Operand::classify(amount),
        Operand::classify(source),
        Operand::classify(destination),
    );

    match operands {
        (Operand::Amount(amount), Operand::Account(source), Operand::Account(destination)) => {
            Ok(TransferRequest {
                amount: amount.clone(),
                source: source.to_string(),
                destination: destination.to_string(),
                date: custom.date,
            })
        }
        (Operand::Account(_) | Operand::Malformed(_), _, _) => {
            Err(TransferErrorKind::MalformedAmount {
                got: amount.to_string(),
            })
        }
        (_, Operand::Amount(_) | Operand::Malformed(_), _) => {
            Err(TransferErrorKind::MalformedSource {
                got: source.to_string(),
            })
        }
        _ => Err(TransferErrorKind::MalformedDestination {
            got: destination.to_string(),
        }),
    }
}
