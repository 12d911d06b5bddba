//! Proposals — kinds, flags, vote records, window math.

use guildhall_types::{Address, AssetId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier assigned at submission, in submission order.
pub type ProposalId = u64;

/// A cast ballot. Abstentions are simply not voting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    Yes,
    No,
}

/// What a proposal does if it passes. Exactly one kind per proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalKind {
    /// Mint shares/loot to an applicant in exchange for tribute, optionally
    /// paying them out of the treasury.
    Funding {
        applicant: Address,
        shares_requested: u128,
        loot_requested: u128,
        tribute: u128,
        tribute_asset: AssetId,
        payment: u128,
        payment_asset: AssetId,
    },
    /// Approve a new asset for the treasury.
    Whitelist { asset: AssetId },
    /// Expel a member's voting rights, converting their shares to loot.
    GuildKick { member: Address },
}

/// Lifecycle flags. `processed` and `cancelled` are terminal; `did_pass`
/// is meaningful only once `processed` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalFlags {
    pub sponsored: bool,
    pub processed: bool,
    pub did_pass: bool,
    pub cancelled: bool,
}

/// A proposal record.
///
/// Tallies and window fields are only meaningful once `flags.sponsored` is
/// set (sponsorship fixes the voting window); they never mutate after
/// `flags.processed`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub proposer: Address,
    pub sponsor: Option<Address>,
    pub kind: ProposalKind,
    /// First period of the voting window. Serialized: strictly greater than
    /// every previously sponsored proposal's starting period.
    pub starting_period: u64,
    /// Sum of voting shares cast yes/no. Write-once per member via `votes`.
    pub yes_votes: u128,
    pub no_votes: u128,
    /// Running maximum of totalShares+totalLoot observed at sponsorship and
    /// at every yes vote — the dilution-bound snapshot.
    pub max_total_weight_at_yes_vote: u128,
    /// Deposit bonded by the sponsor, split at processing time.
    pub deposit: u128,
    pub flags: ProposalFlags,
    pub details: String,
    /// Write-once ballots, keyed by member address.
    votes: HashMap<Address, Vote>,
}

impl Proposal {
    pub fn new(id: ProposalId, proposer: Address, kind: ProposalKind, details: String) -> Self {
        Self {
            id,
            proposer,
            sponsor: None,
            kind,
            starting_period: 0,
            yes_votes: 0,
            no_votes: 0,
            max_total_weight_at_yes_vote: 0,
            deposit: 0,
            flags: ProposalFlags::default(),
            details,
            votes: HashMap::new(),
        }
    }

    pub fn vote_of(&self, member: &Address) -> Option<Vote> {
        self.votes.get(member).copied()
    }

    /// Record a ballot. Returns false if the member already voted.
    pub(crate) fn record_vote(&mut self, member: Address, vote: Vote) -> bool {
        if self.votes.contains_key(&member) {
            return false;
        }
        self.votes.insert(member, vote);
        true
    }

    /// First period at which voting is closed.
    pub fn voting_closes_at(&self, voting_period_length: u64) -> u64 {
        self.starting_period.saturating_add(voting_period_length)
    }

    /// First period at which the proposal may be processed.
    pub fn processable_at(&self, voting_period_length: u64, grace_period_length: u64) -> u64 {
        self.voting_closes_at(voting_period_length)
            .saturating_add(grace_period_length)
    }

    /// First period at which processing takes the emergency path.
    pub fn emergency_at(
        &self,
        voting_period_length: u64,
        grace_period_length: u64,
        emergency_exit_wait: u64,
    ) -> u64 {
        self.processable_at(voting_period_length, grace_period_length)
            .saturating_add(emergency_exit_wait)
    }
}
