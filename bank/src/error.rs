//! Asset-transfer errors.

use guildhall_types::{Address, AssetId};
use thiserror::Error;

/// Failures reported by an asset ledger or the treasury layer.
///
/// Every variant is a hard failure for the operation in progress; callers
/// must not assume any partial effect survived.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("asset {asset}: transfer rejected")]
    TransferRejected { asset: AssetId },

    #[error("asset {asset}: account {account} is blacklisted")]
    Blacklisted { asset: AssetId, account: Address },

    #[error("asset {asset}: account {account} has {available}, needs {needed}")]
    InsufficientFunds {
        asset: AssetId,
        account: Address,
        needed: u128,
        available: u128,
    },

    #[error("arithmetic overflow in balance bookkeeping")]
    Overflow,
}
