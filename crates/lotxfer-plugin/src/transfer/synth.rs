//! Transfer transaction synthesis.

use lotxfer_core::{Custom, MetaValue, Position, Posting, Transaction, META_FILENAME, META_LINENO};

use super::args::TransferRequest;
use super::config::TransferConfig;

/// Metadata key naming the account lots were taken from.
pub const META_SOURCE: &str = "transfer_source";
/// Metadata key naming the account lots were moved to.
pub const META_DESTINATION: &str = "transfer_destination";

/// Build the transaction moving `taken` lots from source to destination.
///
/// Each lot yields a pair of postings at its original cost: units out of the
/// source, then the same units into the destination. `seq` numbers the
/// transfer within the ledger and only appears in the optional link.
pub fn synthesize(
    directive: &Custom,
    request: &TransferRequest,
    taken: &[Position],
    config: &TransferConfig,
    seq: usize,
) -> Transaction {
    let mut txn = Transaction::new(request.date, config.narration.clone()).with_flag(config.flag);
    txn.tags.clone_from(&config.tags);
    if config.link {
        txn.links.push(format!("transfer-{}-{seq}", request.date));
    }

    for key in [META_FILENAME, META_LINENO] {
        if let Some(value) = directive.meta.get(key) {
            txn.meta.insert(key.to_string(), value.clone());
        }
    }
    txn.meta.insert(
        META_SOURCE.to_string(),
        MetaValue::Account(request.source.clone()),
    );
    txn.meta.insert(
        META_DESTINATION.to_string(),
        MetaValue::Account(request.destination.clone()),
    );

    for lot in taken {
        let out = Posting {
            cost: lot.cost.clone(),
            ..Posting::new(request.source.clone(), -&lot.units)
        };
        let into = Posting {
            cost: lot.cost.clone(),
            ..Posting::new(request.destination.clone(), lot.units.clone())
        };
        txn.postings.push(out);
        txn.postings.push(into);
    }

    txn
}
