//! The asset-ledger seam — external fungible-asset contracts.

use crate::error::BankError;
use guildhall_types::{Address, AssetId};

/// The interface contract of external fungible assets.
///
/// Implementations may be well-behaved or adversarial (reverting,
/// blacklisting). The governance core treats any non-`Ok` result as a hard
/// failure for the operation in progress and assumes nothing beyond this
/// contract — in particular it never assumes a failed transfer moved funds,
/// and never assumes a successful one did anything more than move `amount`
/// from `from` to `to`.
pub trait AssetLedger {
    /// Move `amount` of `asset` out of an owner's balance into `to`.
    ///
    /// This is the pull-side primitive (tribute and deposit escrow): the
    /// owner has agreed out-of-band that the treasury may pull these funds.
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        owner: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError>;

    /// Move `amount` of `asset` from one treasury-controlled account to a
    /// destination (payouts, refunds, internal escrow→guild moves).
    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError>;

    /// Balance of `asset` currently held by `holder`.
    fn balance_of(&self, asset: &AssetId, holder: &Address) -> u128;
}
