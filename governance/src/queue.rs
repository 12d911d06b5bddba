//! Proposal storage and the sponsored-proposal queue.
//!
//! Proposals are stored once, keyed by submission id; the queue holds
//! sponsored proposal ids in sponsorship order. Queue order — not
//! submission order — drives voting-window serialization and strict FIFO
//! processing. The duplicate-target sets reject concurrent whitelist/kick
//! proposals for the same target.

use crate::proposal::{Proposal, ProposalId};
use guildhall_types::{Address, AssetId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalQueue {
    proposals: Vec<Proposal>,
    queue: Vec<ProposalId>,
    pending_whitelist: HashSet<AssetId>,
    pending_kick: HashSet<Address>,
}

impl ProposalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly submitted proposal, assigning its submission id.
    pub fn submit(&mut self, mut proposal: Proposal) -> ProposalId {
        let id = self.proposals.len() as ProposalId;
        proposal.id = id;
        self.proposals.push(proposal);
        id
    }

    pub fn proposal_count(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(id as usize)
    }

    pub(crate) fn get_mut(&mut self, id: ProposalId) -> Option<&mut Proposal> {
        self.proposals.get_mut(id as usize)
    }

    /// Append a sponsored proposal to the queue, returning its queue index.
    pub(crate) fn enqueue(&mut self, id: ProposalId) -> u64 {
        self.queue.push(id);
        (self.queue.len() - 1) as u64
    }

    pub fn queue_len(&self) -> u64 {
        self.queue.len() as u64
    }

    pub fn queued(&self, index: u64) -> Option<&Proposal> {
        let id = *self.queue.get(index as usize)?;
        self.proposals.get(id as usize)
    }

    pub(crate) fn queued_mut(&mut self, index: u64) -> Option<&mut Proposal> {
        let id = *self.queue.get(index as usize)?;
        self.proposals.get_mut(id as usize)
    }

    /// Starting period of the most recently sponsored proposal, if any.
    /// The next sponsorship must start strictly after this.
    pub fn last_queued_starting_period(&self) -> Option<u64> {
        let id = *self.queue.last()?;
        Some(self.proposals[id as usize].starting_period)
    }

    // ── duplicate-target tracking ────────────────────────────────────

    pub fn is_whitelist_pending(&self, asset: &AssetId) -> bool {
        self.pending_whitelist.contains(asset)
    }

    pub(crate) fn note_whitelist_pending(&mut self, asset: &AssetId) {
        self.pending_whitelist.insert(asset.clone());
    }

    pub(crate) fn clear_whitelist_pending(&mut self, asset: &AssetId) {
        self.pending_whitelist.remove(asset);
    }

    pub fn is_kick_pending(&self, member: &Address) -> bool {
        self.pending_kick.contains(member)
    }

    pub(crate) fn note_kick_pending(&mut self, member: &Address) {
        self.pending_kick.insert(member.clone());
    }

    pub(crate) fn clear_kick_pending(&mut self, member: &Address) {
        self.pending_kick.remove(member);
    }
}
