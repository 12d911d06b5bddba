//! Treasury custody — the guild bank and escrow accounts.

use crate::error::BankError;
use crate::ledger::AssetLedger;
use guildhall_types::{Address, AssetId};
use serde::{Deserialize, Serialize};

/// Custody layer over an [`AssetLedger`].
///
/// Two accounts:
/// - **escrow** holds tribute and deposits while their proposal is in
///   flight — funds that may still be returned;
/// - **guild** holds the treasury proper — funds members have a
///   proportional claim on via ragequit.
///
/// The treasury tracks no balances of its own; every query goes to the
/// asset ledger, so the external invariant (treasury balance equals what
/// the ledger reports) holds by construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Treasury {
    guild: Address,
    escrow: Address,
}

impl Treasury {
    /// Reserved account identities. Nothing prevents a ledger from holding
    /// balances for other accounts with these names, but within one guild
    /// instance they are only ever moved by treasury methods.
    pub const GUILD_ACCOUNT: &'static str = "guildhall/bank";
    pub const ESCROW_ACCOUNT: &'static str = "guildhall/escrow";

    pub fn new() -> Self {
        Self {
            guild: Address::new(Self::GUILD_ACCOUNT),
            escrow: Address::new(Self::ESCROW_ACCOUNT),
        }
    }

    pub fn guild_account(&self) -> &Address {
        &self.guild
    }

    pub fn escrow_account(&self) -> &Address {
        &self.escrow
    }

    /// Guild-bank balance of `asset`, as reported by the ledger.
    pub fn balance<L: AssetLedger>(&self, ledger: &L, asset: &AssetId) -> u128 {
        ledger.balance_of(asset, &self.guild)
    }

    /// Escrow balance of `asset`, as reported by the ledger.
    pub fn escrow_balance<L: AssetLedger>(&self, ledger: &L, asset: &AssetId) -> u128 {
        ledger.balance_of(asset, &self.escrow)
    }

    /// Pull funds from an owner into escrow (tribute at submit, deposit at
    /// sponsorship).
    pub fn collect<L: AssetLedger>(
        &self,
        ledger: &mut L,
        asset: &AssetId,
        owner: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        ledger.transfer_from(asset, owner, &self.escrow, amount)?;
        tracing::debug!(asset = %asset, owner = %owner, amount, "collected into escrow");
        Ok(())
    }

    /// Return escrowed funds to a recipient (failed/cancelled tribute,
    /// deposit refund, processing reward).
    pub fn release<L: AssetLedger>(
        &self,
        ledger: &mut L,
        asset: &AssetId,
        recipient: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        ledger.transfer(asset, &self.escrow, recipient, amount)?;
        tracing::debug!(asset = %asset, recipient = %recipient, amount, "released from escrow");
        Ok(())
    }

    /// Move escrowed funds into the guild bank (tribute on a passed
    /// proposal).
    pub fn commit<L: AssetLedger>(
        &self,
        ledger: &mut L,
        asset: &AssetId,
        amount: u128,
    ) -> Result<(), BankError> {
        ledger.transfer(asset, &self.escrow, &self.guild, amount)?;
        tracing::debug!(asset = %asset, amount, "committed escrow to guild bank");
        Ok(())
    }

    /// Pay out of the guild bank (proposal payments, ragequit payouts).
    pub fn pay_out<L: AssetLedger>(
        &self,
        ledger: &mut L,
        asset: &AssetId,
        recipient: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        ledger.transfer(asset, &self.guild, recipient, amount)?;
        tracing::debug!(asset = %asset, recipient = %recipient, amount, "paid out of guild bank");
        Ok(())
    }
}

impl Default for Treasury {
    fn default() -> Self {
        Self::new()
    }
}
