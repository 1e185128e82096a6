//! Lot-preserving asset transfers.
//!
//! Moves units of a commodity held at cost from one account to another
//! without realizing anything: every unit keeps its cost number, cost
//! currency and acquisition date.
//!
//! ```text
//! plugin "transfer"
//!
//! 2021-01-01 * "Buy 1 VTI"
//!   Assets:Brokerage      1 VTI {5.00 USD}
//!   Assets:Bank
//!
//! 2021-01-05 custom "transfer" 1 VTI Assets:Brokerage Assets:New-Brokerage
//! ```
//!
//! Each `transfer` directive is answered either by a transaction inserted
//! right after it, or by exactly one error. Directives are handled in ledger
//! order (by date, with custom directives after the rest of their day), and
//! each one sees the lots moved by the transfers handled before it.
//!
//! Processing order does not leak into the output: directives come back in
//! the order they were given, with each synthesized transaction right after
//! its directive. A ledger sorted by [`lotxfer_core::sort_directives`]
//! therefore stays in ledger order but not in sort order, since a
//! transaction normally sorts before a custom directive of the same day.

pub mod args;
pub mod config;
pub mod error;
pub mod select;
pub mod snapshot;
pub mod synth;

use lotxfer_core::{compare_directives, Custom, Directive, Transaction};

use crate::native::NativePlugin;
use crate::types::{PluginError, PluginInput, PluginOutput};

pub use args::{parse_request, Operand, TransferRequest};
pub use config::{ConfigError, TransferConfig};
pub use error::{SourceLocation, TransferError, TransferErrorKind};
pub use select::{consumption_order, select_lots, Selection, Shortfall};
pub use snapshot::{account_inventory, holdings, Holdings};
pub use synth::synthesize;

/// Plugin answering `custom "transfer"` directives with lot-preserving
/// transfer transactions.
pub struct TransferPlugin;

impl NativePlugin for TransferPlugin {
    fn name(&self) -> &'static str {
        "transfer"
    }

    fn process(&self, input: PluginInput) -> PluginOutput {
        let config = match TransferConfig::parse(input.config.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "rejected plugin configuration");
                return PluginOutput {
                    directives: input.directives,
                    errors: vec![PluginError::error(err.to_string())],
                };
            }
        };

        let (directives, errors) = apply_transfers(input.directives, &config);
        PluginOutput {
            directives,
            errors: errors.into_iter().map(PluginError::from).collect(),
        }
    }
}

/// Answer every transfer directive in `directives`.
///
/// Directives are visited in ledger order. Each synthesized transaction
/// follows its directive in the output, which otherwise keeps the input
/// order; each rejected directive yields one error and leaves the ledger as
/// it was.
pub fn apply_transfers(
    directives: Vec<Directive>,
    config: &TransferConfig,
) -> (Vec<Directive>, Vec<TransferError>) {
    let mut order: Vec<usize> = (0..directives.len()).collect();
    order.sort_by(|&a, &b| compare_directives(&directives[a], &directives[b]));

    // Transactions in ledger order, synthesized ones included.
    let mut history: Vec<Directive> = Vec::new();
    let mut answers: Vec<Option<Transaction>> = vec![None; directives.len()];
    let mut errors = Vec::new();
    let mut seq = 0;

    for idx in order {
        match &directives[idx] {
            Directive::Transaction(_) => history.push(directives[idx].clone()),
            Directive::Custom(custom) if custom.custom_type == config.custom_type => {
                match transfer(&history, custom, config, seq + 1) {
                    Ok(txn) => {
                        seq += 1;
                        history.push(Directive::Transaction(txn.clone()));
                        answers[idx] = Some(txn);
                    }
                    Err(err) => {
                        tracing::warn!(
                            date = %err.date,
                            location = %err.location,
                            error = %err,
                            "rejected transfer"
                        );
                        errors.push(err);
                    }
                }
            }
            _ => {}
        }
    }

    let mut output = Vec::with_capacity(directives.len() + seq);
    for (directive, answer) in directives.into_iter().zip(answers) {
        output.push(directive);
        if let Some(txn) = answer {
            output.push(Directive::Transaction(txn));
        }
    }

    (output, errors)
}

/// Answer one transfer directive against the entries preceding it.
pub fn transfer(
    entries: &[Directive],
    directive: &Custom,
    config: &TransferConfig,
    seq: usize,
) -> Result<Transaction, TransferError> {
    let fail =
        |kind: TransferErrorKind| TransferError::new(kind, directive.date, &directive.meta);

    let request = parse_request(directive).map_err(fail)?;
    let held = holdings(
        entries,
        &request.source,
        &request.amount.currency,
        request.date,
    )
    .map_err(|overflow| {
        fail(TransferErrorKind::Overflow {
            account: request.source.clone(),
            currency: overflow.currency,
        })
    })?;
    let selection = select_lots(held, request.amount.number).map_err(|shortfall| {
        fail(TransferErrorKind::InsufficientHoldings {
            account: request.source.clone(),
            currency: request.amount.currency.clone(),
            requested: request.amount.number,
            available: shortfall.available,
            shortfall: shortfall.missing,
        })
    })?;

    tracing::debug!(
        date = %request.date,
        amount = %request.amount,
        source = %request.source,
        destination = %request.destination,
        lots = selection.taken.len(),
        "transferring lots"
    );

    Ok(synthesize(
        directive,
        &request,
        &selection.taken,
        config,
        seq,
    ))
}
