//! In-memory asset ledger with per-asset behavior injection.
//!
//! The reference implementation of [`AssetLedger`]: deterministic, never
//! touches the outside world, and can be made adversarial per asset — which
//! is exactly what the safe-ragequit and emergency-bypass paths are defended
//! against.

use crate::error::BankError;
use crate::ledger::AssetLedger;
use guildhall_types::{Address, AssetId};
use std::collections::HashMap;

/// How an asset behaves on transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetBehavior {
    /// Transfers succeed whenever the balance suffices.
    Normal,
    /// Every transfer fails — a broken or malicious asset contract.
    RejectAll,
    /// Transfers touching the given account fail — a blacklisting asset.
    Blacklist(Address),
}

/// Deterministic in-memory implementation of [`AssetLedger`].
#[derive(Clone, Debug, Default)]
pub struct InMemoryAssets {
    balances: HashMap<AssetId, HashMap<Address, u128>>,
    behaviors: HashMap<AssetId, AssetBehavior>,
}

impl InMemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `holder` with freshly minted units of `asset`.
    pub fn mint(&mut self, asset: &AssetId, holder: &Address, amount: u128) {
        let entry = self
            .balances
            .entry(asset.clone())
            .or_default()
            .entry(holder.clone())
            .or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Override the transfer behavior of one asset. Assets default to
    /// `Normal`; flipping behavior mid-test models an asset that breaks
    /// after it was whitelisted.
    pub fn set_behavior(&mut self, asset: &AssetId, behavior: AssetBehavior) {
        self.behaviors.insert(asset.clone(), behavior);
    }

    fn check_behavior(
        &self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
    ) -> Result<(), BankError> {
        match self.behaviors.get(asset) {
            None | Some(AssetBehavior::Normal) => Ok(()),
            Some(AssetBehavior::RejectAll) => Err(BankError::TransferRejected {
                asset: asset.clone(),
            }),
            Some(AssetBehavior::Blacklist(banned)) => {
                if from == banned || to == banned {
                    Err(BankError::Blacklisted {
                        asset: asset.clone(),
                        account: banned.clone(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    fn do_transfer(
        &mut self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        self.check_behavior(asset, from, to)?;
        if amount == 0 {
            return Ok(());
        }
        let book = self.balances.entry(asset.clone()).or_default();
        let available = book.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(BankError::InsufficientFunds {
                asset: asset.clone(),
                account: from.clone(),
                needed: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let new_dest = book
            .get(to)
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(BankError::Overflow)?;
        book.insert(from.clone(), available - amount);
        book.insert(to.clone(), new_dest);
        Ok(())
    }
}

impl AssetLedger for InMemoryAssets {
    fn transfer_from(
        &mut self,
        asset: &AssetId,
        owner: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        self.do_transfer(asset, owner, to, amount)
    }

    fn transfer(
        &mut self,
        asset: &AssetId,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), BankError> {
        self.do_transfer(asset, from, to, amount)
    }

    fn balance_of(&self, asset: &AssetId, holder: &Address) -> u128 {
        self.balances
            .get(asset)
            .and_then(|book| book.get(holder))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha() -> AssetId {
        AssetId::new("alpha")
    }

    #[test]
    fn mint_and_transfer_moves_balance() {
        let mut assets = InMemoryAssets::new();
        let (a, b) = (Address::new("a"), Address::new("b"));
        assets.mint(&alpha(), &a, 100);
        assets.transfer(&alpha(), &a, &b, 40).unwrap();
        assert_eq!(assets.balance_of(&alpha(), &a), 60);
        assert_eq!(assets.balance_of(&alpha(), &b), 40);
    }

    #[test]
    fn transfer_beyond_balance_fails_without_effect() {
        let mut assets = InMemoryAssets::new();
        let (a, b) = (Address::new("a"), Address::new("b"));
        assets.mint(&alpha(), &a, 10);
        let err = assets.transfer(&alpha(), &a, &b, 11).unwrap_err();
        assert_eq!(
            err,
            BankError::InsufficientFunds {
                asset: alpha(),
                account: a.clone(),
                needed: 11,
                available: 10,
            }
        );
        assert_eq!(assets.balance_of(&alpha(), &a), 10);
        assert_eq!(assets.balance_of(&alpha(), &b), 0);
    }

    #[test]
    fn zero_amount_transfer_is_a_successful_noop() {
        let mut assets = InMemoryAssets::new();
        let (a, b) = (Address::new("a"), Address::new("b"));
        assets.transfer(&alpha(), &a, &b, 0).unwrap();
        assert_eq!(assets.balance_of(&alpha(), &b), 0);
    }

    #[test]
    fn reject_all_fails_every_transfer() {
        let mut assets = InMemoryAssets::new();
        let (a, b) = (Address::new("a"), Address::new("b"));
        assets.mint(&alpha(), &a, 100);
        assets.set_behavior(&alpha(), AssetBehavior::RejectAll);
        assert!(assets.transfer(&alpha(), &a, &b, 1).is_err());
        // Even zero-amount transfers are rejected by the contract itself.
        assert!(assets.transfer(&alpha(), &a, &b, 0).is_err());
    }

    #[test]
    fn blacklist_blocks_only_the_banned_account() {
        let mut assets = InMemoryAssets::new();
        let (a, b, c) = (Address::new("a"), Address::new("b"), Address::new("c"));
        assets.mint(&alpha(), &a, 100);
        assets.mint(&alpha(), &b, 100);
        assets.set_behavior(&alpha(), AssetBehavior::Blacklist(b.clone()));
        assert!(assets.transfer(&alpha(), &a, &b, 1).is_err());
        assert!(assets.transfer(&alpha(), &b, &c, 1).is_err());
        assets.transfer(&alpha(), &a, &c, 1).unwrap();
    }
}
