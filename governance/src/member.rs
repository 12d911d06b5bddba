//! Membership ledger — shares, loot, delegate keys, jail state.

use crate::error::GovernanceError;
use guildhall_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A guild member.
///
/// Members are never physically deleted: `exists` stays true after a full
/// ragequit so delegate-key lookups remain unambiguous forever.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    /// Address authorized to sponsor and vote on this member's behalf.
    /// Starts equal to the member address.
    pub delegate: Address,
    /// Voting + economic weight.
    pub shares: u128,
    /// Economic-only weight; loot never votes.
    pub loot: u128,
    /// Set once at creation, never cleared.
    pub exists: bool,
    /// Highest queue index this member voted yes on, if any. Gates ragequit.
    pub highest_index_yes_vote: Option<u64>,
    /// True once a guild-kick proposal against this member passed. A jailed
    /// member's shares were converted to loot; they can still ragequit.
    pub jailed: bool,
}

impl Member {
    /// Combined economic weight. Cannot overflow: the ledger bounds the
    /// global share+loot sum at mint time.
    pub fn total_weight(&self) -> u128 {
        self.shares + self.loot
    }
}

/// Source of truth for voting power and payout fractions.
///
/// Running `total_shares`/`total_loot` aggregates are updated atomically
/// with every grant/burn so dilution and payout-fraction computations are
/// O(1).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MembershipLedger {
    members: HashMap<Address, Member>,
    member_by_delegate: HashMap<Address, Address>,
    total_shares: u128,
    total_loot: u128,
}

impl MembershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, identity: &Address) -> Option<&Member> {
        self.members.get(identity)
    }

    /// Resolve a delegate key to the member address it speaks for.
    pub fn address_of_delegate(&self, key: &Address) -> Option<&Address> {
        self.member_by_delegate.get(key)
    }

    pub fn total_shares(&self) -> u128 {
        self.total_shares
    }

    pub fn total_loot(&self) -> u128 {
        self.total_loot
    }

    /// totalShares + totalLoot — the "size of the pie".
    pub fn total_weight(&self) -> u128 {
        self.total_shares + self.total_loot
    }

    /// Mint shares/loot to `identity`, creating the member on first grant.
    ///
    /// If the new member's address was in use as another member's delegate
    /// key, that delegation is reset to the owning member's own address so
    /// the delegate index stays one-to-one.
    pub fn grant(
        &mut self,
        identity: &Address,
        shares: u128,
        loot: u128,
    ) -> Result<(), GovernanceError> {
        let new_total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        let new_total_loot = self
            .total_loot
            .checked_add(loot)
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        // Guard the combined weight too, so total_weight() stays total.
        new_total_shares
            .checked_add(new_total_loot)
            .ok_or(GovernanceError::ArithmeticOverflow)?;

        if let Some(member) = self.members.get_mut(identity) {
            member.shares += shares;
            member.loot += loot;
        } else {
            if let Some(owner) = self.member_by_delegate.get(identity).cloned() {
                if owner != *identity {
                    if let Some(existing) = self.members.get_mut(&owner) {
                        existing.delegate = owner.clone();
                    }
                    self.member_by_delegate.insert(owner.clone(), owner);
                }
            }
            self.members.insert(
                identity.clone(),
                Member {
                    delegate: identity.clone(),
                    shares,
                    loot,
                    exists: true,
                    highest_index_yes_vote: None,
                    jailed: false,
                },
            );
            self.member_by_delegate
                .insert(identity.clone(), identity.clone());
        }
        self.total_shares = new_total_shares;
        self.total_loot = new_total_loot;
        Ok(())
    }

    /// Burn shares/loot held by `identity`. Rejected if the member holds
    /// less than requested; nothing is mutated on rejection.
    pub fn burn(
        &mut self,
        identity: &Address,
        shares: u128,
        loot: u128,
    ) -> Result<(), GovernanceError> {
        let member = self
            .members
            .get_mut(identity)
            .ok_or_else(|| GovernanceError::NotAMember(identity.clone()))?;
        if member.shares < shares {
            return Err(GovernanceError::InsufficientShares {
                needed: shares,
                available: member.shares,
            });
        }
        if member.loot < loot {
            return Err(GovernanceError::InsufficientLoot {
                needed: loot,
                available: member.loot,
            });
        }
        member.shares -= shares;
        member.loot -= loot;
        self.total_shares -= shares;
        self.total_loot -= loot;
        Ok(())
    }

    /// Jail a member: all shares convert to loot 1:1 and voting/sponsoring
    /// rights end. The economic claim (now all loot) survives.
    pub fn jail(&mut self, identity: &Address) -> Result<(), GovernanceError> {
        let member = self
            .members
            .get_mut(identity)
            .ok_or_else(|| GovernanceError::NotAMember(identity.clone()))?;
        if member.jailed {
            return Err(GovernanceError::AlreadyJailed(identity.clone()));
        }
        let converted = member.shares;
        member.shares = 0;
        member.loot += converted;
        member.jailed = true;
        self.total_shares -= converted;
        self.total_loot += converted;
        Ok(())
    }

    /// Raise the member's highest yes-vote index. Monotone: never lowered.
    pub fn record_yes_vote(&mut self, identity: &Address, index: u64) {
        if let Some(member) = self.members.get_mut(identity) {
            member.highest_index_yes_vote = Some(match member.highest_index_yes_vote {
                Some(current) => current.max(index),
                None => index,
            });
        }
    }

    /// Re-key a member's delegate. The new key must not collide with any
    /// member address or delegate key other than the member's own.
    pub fn update_delegate(
        &mut self,
        member_addr: &Address,
        new_key: &Address,
    ) -> Result<(), GovernanceError> {
        if !self.members.contains_key(member_addr) {
            return Err(GovernanceError::NotAMember(member_addr.clone()));
        }
        if new_key != member_addr {
            if self.members.contains_key(new_key) {
                return Err(GovernanceError::DelegateKeyInUse(new_key.clone()));
            }
            if let Some(owner) = self.member_by_delegate.get(new_key) {
                if owner != member_addr {
                    return Err(GovernanceError::DelegateKeyInUse(new_key.clone()));
                }
            }
        }
        let member = self.members.get_mut(member_addr).expect("checked above");
        let old_key = std::mem::replace(&mut member.delegate, new_key.clone());
        self.member_by_delegate.remove(&old_key);
        self.member_by_delegate
            .insert(new_key.clone(), member_addr.clone());
        Ok(())
    }
}
