//! Transfer errors.

use chrono::NaiveDate;
use lotxfer_core::{Metadata, MetaValue, META_FILENAME, META_LINENO};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use crate::types::PluginError;

/// Where in the ledger a directive was written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file, if recorded.
    pub filename: Option<String>,
    /// 1-based line, if recorded.
    pub lineno: Option<u32>,
}

impl SourceLocation {
    /// Read the location from a directive's `filename` / `lineno` metadata.
    pub fn from_meta(meta: &Metadata) -> Self {
        let filename = match meta.get(META_FILENAME) {
            Some(MetaValue::String(s)) => Some(s.clone()),
            _ => None,
        };
        let lineno = match meta.get(META_LINENO) {
            Some(MetaValue::Number(n)) => n.to_u32(),
            _ => None,
        };
        Self { filename, lineno }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filename.as_deref().unwrap_or("<unknown>"))?;
        if let Some(line) = self.lineno {
            write!(f, ":{line}")?;
        }
        Ok(())
    }
}

/// What went wrong with a transfer directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferErrorKind {
    /// The directive did not carry exactly three operands.
    #[error("Asset transfer requires 3 parameters, but {given} were given")]
    WrongParameterCount {
        /// Number of operands present.
        given: usize,
    },

    /// The first operand is not a positive `<number> <commodity>` amount.
    #[error(
        "Asset transfer expects a valid amount of the form <number> <commodity> \
         (a valid beancount Amount), got {got}"
    )]
    MalformedAmount {
        /// The operand as written.
        got: String,
    },

    /// The second operand is not an account name.
    #[error("Source account for transfer does not appear to be an account: {got}")]
    MalformedSource {
        /// The operand as written.
        got: String,
    },

    /// The third operand is not an account name.
    #[error("Destination account for transfer does not appear to be an account: {got}")]
    MalformedDestination {
        /// The operand as written.
        got: String,
    },

    /// The source account holds fewer cost-basis units than requested.
    #[error(
        "Not enough {currency} held at cost in {account} to transfer {requested} {currency}. \
         Expected {shortfall} more."
    )]
    InsufficientHoldings {
        /// Source account.
        account: String,
        /// Commodity requested.
        currency: String,
        /// Units requested.
        requested: Decimal,
        /// Units the account could give up.
        available: Decimal,
        /// Units missing.
        shortfall: Decimal,
    },

    /// Replaying the source account's postings left the range of a decimal.
    #[error("Holdings of {currency} in {account} are too large to transfer from")]
    Overflow {
        /// Source account.
        account: String,
        /// Commodity requested.
        currency: String,
    },
}

/// A rejected transfer directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct TransferError {
    /// What went wrong.
    pub kind: TransferErrorKind,
    /// Date of the directive.
    pub date: NaiveDate,
    /// Location of the directive.
    pub location: SourceLocation,
}

impl TransferError {
    /// Create an error for the directive with the given date and metadata.
    pub fn new(kind: TransferErrorKind, date: NaiveDate, meta: &Metadata) -> Self {
        Self {
            kind,
            date,
            location: SourceLocation::from_meta(meta),
        }
    }
}

impl From<TransferError> for PluginError {
    fn from(err: TransferError) -> Self {
        let location = err.location.clone();
        Self::error(err.to_string()).at(location.filename, location.lineno)
    }
}
