//! The governance engine — every public operation of the guild.
//!
//! One engine instance is the single ordering authority over the membership
//! ledger, the proposal queue, and the treasury: all mutation flows through
//! its methods, one operation at a time. Each operation either completes or
//! leaves state byte-for-byte untouched; asset transfers already executed
//! when a later step fails are unwound in reverse.

use std::collections::HashSet;

use guildhall_bank::{AssetLedger, Treasury};
use guildhall_types::{Address, AssetId, GuildParams, Timestamp};

use crate::error::GovernanceError;
use crate::member::{Member, MembershipLedger};
use crate::proposal::{Proposal, ProposalId, ProposalKind, Vote};
use crate::queue::ProposalQueue;

/// Asset moves executed so far within one operation, unwound in reverse
/// order if a later step fails. Unwinding re-runs each move backwards;
/// assets whose forward transfer succeeded are assumed to accept the
/// reverse (a blacklisting or reverting asset fails on the forward leg,
/// before it is ever logged).
struct MoveLog {
    moves: Vec<(AssetId, Address, Address, u128)>,
}

impl MoveLog {
    fn new() -> Self {
        Self { moves: Vec::new() }
    }

    fn record(&mut self, asset: &AssetId, from: &Address, to: &Address, amount: u128) {
        self.moves
            .push((asset.clone(), from.clone(), to.clone(), amount));
    }

    fn unwind<L: AssetLedger>(self, ledger: &mut L) {
        for (asset, from, to, amount) in self.moves.into_iter().rev() {
            if let Err(err) = ledger.transfer(&asset, &to, &from, amount) {
                tracing::error!(asset = %asset, error = %err, "failed to unwind transfer during abort");
            }
        }
    }
}

/// The guild: membership, proposal queue, treasury, and the asset-ledger
/// collaborator, driven by the time-boxed proposal lifecycle.
#[derive(Debug)]
pub struct GovernanceEngine<L> {
    params: GuildParams,
    summoned_at: Timestamp,
    membership: MembershipLedger,
    queue: ProposalQueue,
    treasury: Treasury,
    /// Approved assets in approval order — the iteration order of ragequit.
    approved_assets: Vec<AssetId>,
    /// Same assets, for O(1) membership tests.
    whitelist: HashSet<AssetId>,
    assets: L,
}

impl<L: AssetLedger> GovernanceEngine<L> {
    /// Summon a guild: validate parameters, whitelist the initial assets,
    /// and mint one share to the summoner.
    pub fn summon(
        params: GuildParams,
        assets: L,
        now: Timestamp,
    ) -> Result<Self, GovernanceError> {
        params.validate()?;
        let whitelist: HashSet<AssetId> = params.approved_assets.iter().cloned().collect();
        let approved_assets = params.approved_assets.clone();
        let mut membership = MembershipLedger::new();
        membership.grant(&params.summoner, 1, 0)?;
        tracing::info!(summoner = %params.summoner, "guild summoned");
        Ok(Self {
            params,
            summoned_at: now,
            membership,
            queue: ProposalQueue::new(),
            treasury: Treasury::new(),
            approved_assets,
            whitelist,
            assets,
        })
    }

    // ── submissions ──────────────────────────────────────────────────

    /// Submit a funding proposal. The tribute is escrowed immediately,
    /// pulled from the proposer; it is returned on failure or cancellation
    /// and committed to the guild bank only on pass.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_proposal(
        &mut self,
        proposer: &Address,
        applicant: &Address,
        shares_requested: u128,
        loot_requested: u128,
        tribute: u128,
        tribute_asset: &AssetId,
        payment: u128,
        payment_asset: &AssetId,
        details: impl Into<String>,
    ) -> Result<ProposalId, GovernanceError> {
        if applicant.is_zero() {
            return Err(GovernanceError::ZeroApplicant);
        }
        if !self.whitelist.contains(tribute_asset) {
            return Err(GovernanceError::AssetNotWhitelisted(tribute_asset.clone()));
        }
        if !self.whitelist.contains(payment_asset) {
            return Err(GovernanceError::AssetNotWhitelisted(payment_asset.clone()));
        }
        if self.membership.lookup(applicant).is_some_and(|m| m.jailed) {
            return Err(GovernanceError::JailedApplicant(applicant.clone()));
        }
        if tribute > 0 {
            self.treasury
                .collect(&mut self.assets, tribute_asset, proposer, tribute)?;
        }
        let id = self.queue.submit(Proposal::new(
            0,
            proposer.clone(),
            ProposalKind::Funding {
                applicant: applicant.clone(),
                shares_requested,
                loot_requested,
                tribute,
                tribute_asset: tribute_asset.clone(),
                payment,
                payment_asset: payment_asset.clone(),
            },
            details.into(),
        ));
        tracing::debug!(proposal = id, proposer = %proposer, applicant = %applicant, "funding proposal submitted");
        Ok(id)
    }

    /// Submit a proposal to whitelist a new asset. At most one unresolved
    /// whitelist proposal may exist per asset.
    pub fn submit_whitelist_proposal(
        &mut self,
        proposer: &Address,
        asset: &AssetId,
        details: impl Into<String>,
    ) -> Result<ProposalId, GovernanceError> {
        if asset.is_zero() {
            return Err(GovernanceError::ZeroAsset);
        }
        if self.whitelist.contains(asset) {
            return Err(GovernanceError::AlreadyWhitelisted(asset.clone()));
        }
        if self.queue.is_whitelist_pending(asset) {
            return Err(GovernanceError::WhitelistProposalPending(asset.clone()));
        }
        self.queue.note_whitelist_pending(asset);
        let id = self.queue.submit(Proposal::new(
            0,
            proposer.clone(),
            ProposalKind::Whitelist {
                asset: asset.clone(),
            },
            details.into(),
        ));
        tracing::debug!(proposal = id, asset = %asset, "whitelist proposal submitted");
        Ok(id)
    }

    /// Submit a proposal to expel a member. At most one unresolved kick
    /// proposal may exist per target.
    pub fn submit_guild_kick_proposal(
        &mut self,
        proposer: &Address,
        target: &Address,
        details: impl Into<String>,
    ) -> Result<ProposalId, GovernanceError> {
        let member = self
            .membership
            .lookup(target)
            .ok_or_else(|| GovernanceError::NotAMember(target.clone()))?;
        if member.jailed {
            return Err(GovernanceError::AlreadyJailed(target.clone()));
        }
        if member.total_weight() == 0 {
            return Err(GovernanceError::NoStakeToKick(target.clone()));
        }
        if self.queue.is_kick_pending(target) {
            return Err(GovernanceError::KickProposalPending(target.clone()));
        }
        self.queue.note_kick_pending(target);
        let id = self.queue.submit(Proposal::new(
            0,
            proposer.clone(),
            ProposalKind::GuildKick {
                member: target.clone(),
            },
            details.into(),
        ));
        tracing::debug!(proposal = id, target = %target, "guild-kick proposal submitted");
        Ok(id)
    }

    // ── sponsorship ──────────────────────────────────────────────────

    /// Sponsor a submitted proposal, bonding the deposit and fixing its
    /// voting window. Starting periods are strictly serialized: each newly
    /// sponsored proposal starts after both the current period and every
    /// previously sponsored proposal.
    pub fn sponsor_proposal(
        &mut self,
        caller: &Address,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<u64, GovernanceError> {
        let (member_addr, _) = self.resolve_active_delegate(caller)?;
        let proposal = self
            .queue
            .get(id)
            .ok_or(GovernanceError::UnknownProposal(id))?;
        if proposal.flags.cancelled {
            return Err(GovernanceError::ProposalCancelled(id));
        }
        if proposal.flags.sponsored {
            return Err(GovernanceError::AlreadySponsored(id));
        }
        // Re-check target state: the world may have moved since submission.
        match &proposal.kind {
            ProposalKind::Funding { applicant, .. } => {
                if self.membership.lookup(applicant).is_some_and(|m| m.jailed) {
                    return Err(GovernanceError::JailedApplicant(applicant.clone()));
                }
            }
            ProposalKind::Whitelist { asset } => {
                if self.whitelist.contains(asset) {
                    return Err(GovernanceError::AlreadyWhitelisted(asset.clone()));
                }
            }
            ProposalKind::GuildKick { member } => {
                if self.membership.lookup(member).is_some_and(|m| m.jailed) {
                    return Err(GovernanceError::AlreadyJailed(member.clone()));
                }
            }
        }

        let deposit_asset = self.params.deposit_asset().clone();
        let deposit = self.params.proposal_deposit;
        self.treasury
            .collect(&mut self.assets, &deposit_asset, &member_addr, deposit)?;

        let current = self.current_period(now);
        let starting_period = current
            .max(self.queue.last_queued_starting_period().unwrap_or(0))
            .saturating_add(1);
        let total_weight = self.membership.total_weight();

        let proposal = self.queue.get_mut(id).expect("proposal checked above");
        proposal.sponsor = Some(member_addr.clone());
        proposal.starting_period = starting_period;
        proposal.deposit = deposit;
        proposal.max_total_weight_at_yes_vote = total_weight;
        proposal.flags.sponsored = true;
        let index = self.queue.enqueue(id);
        tracing::info!(
            proposal = id,
            index,
            starting_period,
            sponsor = %member_addr,
            "proposal sponsored"
        );
        Ok(index)
    }

    // ── voting ───────────────────────────────────────────────────────

    /// Cast a vote on a queued proposal. One write-once ballot per member;
    /// a yes vote raises the member's ragequit gate and the proposal's
    /// dilution-bound snapshot.
    pub fn submit_vote(
        &mut self,
        caller: &Address,
        index: u64,
        vote: Vote,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let (member_addr, shares) = self.resolve_active_delegate(caller)?;
        let current = self.current_period(now);
        let total_weight = self.membership.total_weight();
        let voting_len = self.params.voting_period_length;

        let proposal = self
            .queue
            .queued_mut(index)
            .ok_or(GovernanceError::UnknownQueueIndex(index))?;
        if current < proposal.starting_period {
            return Err(GovernanceError::VotingNotStarted {
                index,
                starts_at: proposal.starting_period,
            });
        }
        if current >= proposal.voting_closes_at(voting_len) {
            return Err(GovernanceError::VotingExpired(index));
        }
        if !proposal.record_vote(member_addr.clone(), vote) {
            return Err(GovernanceError::AlreadyVoted {
                index,
                member: member_addr,
            });
        }
        match vote {
            Vote::Yes => {
                // Cannot overflow: each member votes once, so the tally is
                // bounded by total_shares.
                proposal.yes_votes += shares;
                proposal.max_total_weight_at_yes_vote =
                    proposal.max_total_weight_at_yes_vote.max(total_weight);
                self.membership.record_yes_vote(&member_addr, index);
            }
            Vote::No => {
                proposal.no_votes += shares;
            }
        }
        tracing::debug!(index, member = %member_addr, ?vote, weight = shares, "vote cast");
        Ok(())
    }

    // ── processing ───────────────────────────────────────────────────

    /// Process the proposal at a queue index once its grace window has
    /// elapsed. Strict FIFO: the predecessor must already be processed.
    ///
    /// The outcome (`yes > no`) is forced to failure when the dilution
    /// bound is exceeded, when a requested payment cannot be covered, or on
    /// the emergency path (the proposal sat unprocessed for
    /// `emergency_exit_wait` periods past its grace window — the escrowed
    /// tribute is then withheld rather than returned, since the tribute
    /// asset is presumed to be what is wedging the queue).
    ///
    /// Returns whether the proposal passed.
    pub fn process_proposal(
        &mut self,
        processor: &Address,
        index: u64,
        now: Timestamp,
    ) -> Result<bool, GovernanceError> {
        let current = self.current_period(now);
        let voting = self.params.voting_period_length;
        let grace = self.params.grace_period_length;
        let wait = self.params.emergency_exit_wait;

        let proposal = self
            .queue
            .queued(index)
            .ok_or(GovernanceError::UnknownQueueIndex(index))?
            .clone();
        if proposal.flags.processed {
            return Err(GovernanceError::AlreadyProcessed(index));
        }
        let ready_at = proposal.processable_at(voting, grace);
        if current < ready_at {
            return Err(GovernanceError::ProcessingNotReady { index, ready_at });
        }
        if index > 0 {
            let prev = self
                .queue
                .queued(index - 1)
                .expect("queue indices are dense");
            if !prev.flags.processed {
                return Err(GovernanceError::PreviousUnprocessed { index });
            }
        }

        let emergency = current >= proposal.emergency_at(voting, grace, wait);
        let mut did_pass = proposal.yes_votes > proposal.no_votes;

        if did_pass {
            let total = self.membership.total_weight();
            // A product overflowing u128 cannot be exceeded by any total.
            if let Some(bound) = self
                .params
                .dilution_bound
                .checked_mul(proposal.max_total_weight_at_yes_vote)
            {
                if total > bound {
                    tracing::warn!(index, total, bound, "dilution bound exceeded, forcing failure");
                    did_pass = false;
                }
            }
        }
        if did_pass {
            if let ProposalKind::Funding {
                payment,
                payment_asset,
                ..
            } = &proposal.kind
            {
                if *payment > 0 && self.treasury.balance(&self.assets, payment_asset) < *payment {
                    tracing::warn!(index, "treasury cannot cover requested payment, forcing failure");
                    did_pass = false;
                }
            }
        }
        if emergency {
            tracing::warn!(index, "emergency processing: forcing failure, tribute withheld");
            did_pass = false;
        }

        let mut log = MoveLog::new();
        if let Err(err) =
            self.apply_processing_transfers(&mut log, &proposal, processor, did_pass, emergency)
        {
            log.unwind(&mut self.assets);
            return Err(err);
        }

        if did_pass {
            let applied = match &proposal.kind {
                ProposalKind::Funding {
                    applicant,
                    shares_requested,
                    loot_requested,
                    ..
                } => self
                    .membership
                    .grant(applicant, *shares_requested, *loot_requested),
                ProposalKind::Whitelist { asset } => {
                    if self.whitelist.insert(asset.clone()) {
                        self.approved_assets.push(asset.clone());
                    }
                    Ok(())
                }
                ProposalKind::GuildKick { member } => self.membership.jail(member),
            };
            if let Err(err) = applied {
                log.unwind(&mut self.assets);
                return Err(err);
            }
        }

        match &proposal.kind {
            ProposalKind::Whitelist { asset } => self.queue.clear_whitelist_pending(asset),
            ProposalKind::GuildKick { member } => self.queue.clear_kick_pending(member),
            ProposalKind::Funding { .. } => {}
        }
        let stored = self.queue.queued_mut(index).expect("checked above");
        stored.flags.processed = true;
        stored.flags.did_pass = did_pass;
        tracing::info!(index, did_pass, emergency, "proposal processed");
        Ok(did_pass)
    }

    /// All asset movement for one processing call: proposal effects first,
    /// then the deposit split (reward to the processor, remainder back to
    /// the sponsor).
    fn apply_processing_transfers(
        &mut self,
        log: &mut MoveLog,
        proposal: &Proposal,
        processor: &Address,
        did_pass: bool,
        emergency: bool,
    ) -> Result<(), GovernanceError> {
        if let ProposalKind::Funding {
            applicant,
            tribute,
            tribute_asset,
            payment,
            payment_asset,
            ..
        } = &proposal.kind
        {
            if did_pass {
                if *tribute > 0 {
                    self.log_commit(log, tribute_asset, *tribute)?;
                }
                if *payment > 0 {
                    self.log_pay_out(log, payment_asset, applicant, *payment)?;
                }
            } else if !emergency && *tribute > 0 {
                self.log_release(log, tribute_asset, &proposal.proposer, *tribute)?;
            }
        }

        let deposit_asset = self.params.deposit_asset().clone();
        let reward = self.params.processing_reward;
        let refund = proposal.deposit.saturating_sub(reward);
        let sponsor = proposal
            .sponsor
            .clone()
            .expect("queued proposal has a sponsor");
        if reward > 0 {
            self.log_release(log, &deposit_asset, processor, reward)?;
        }
        if refund > 0 {
            self.log_release(log, &deposit_asset, &sponsor, refund)?;
        }
        Ok(())
    }

    // ── cancellation ─────────────────────────────────────────────────

    /// Cancel an unsponsored proposal. Proposer-only; returns the escrowed
    /// tribute and releases the duplicate-target reservation.
    pub fn cancel_proposal(
        &mut self,
        caller: &Address,
        id: ProposalId,
    ) -> Result<(), GovernanceError> {
        let proposal = self
            .queue
            .get(id)
            .ok_or(GovernanceError::UnknownProposal(id))?;
        if proposal.flags.sponsored {
            return Err(GovernanceError::AlreadySponsored(id));
        }
        if proposal.flags.cancelled {
            return Err(GovernanceError::ProposalCancelled(id));
        }
        if proposal.proposer != *caller {
            return Err(GovernanceError::NotProposer(id));
        }
        let kind = proposal.kind.clone();
        let proposer = proposal.proposer.clone();
        if let ProposalKind::Funding {
            tribute,
            tribute_asset,
            ..
        } = &kind
        {
            if *tribute > 0 {
                self.treasury
                    .release(&mut self.assets, tribute_asset, &proposer, *tribute)?;
            }
        }
        match &kind {
            ProposalKind::Whitelist { asset } => self.queue.clear_whitelist_pending(asset),
            ProposalKind::GuildKick { member } => self.queue.clear_kick_pending(member),
            ProposalKind::Funding { .. } => {}
        }
        self.queue.get_mut(id).expect("checked above").flags.cancelled = true;
        tracing::info!(proposal = id, "proposal cancelled");
        Ok(())
    }

    // ── exit ─────────────────────────────────────────────────────────

    /// Burn shares/loot for a proportional payout of **every** whitelisted
    /// asset. Cost grows with the whitelist, and a single failing asset
    /// aborts the whole exit — use [`Self::safe_ragequit`] to route around
    /// a poisoned asset.
    pub fn ragequit(
        &mut self,
        caller: &Address,
        shares_to_burn: u128,
        loot_to_burn: u128,
    ) -> Result<(), GovernanceError> {
        let assets = self.approved_assets.clone();
        self.ragequit_internal(caller, shares_to_burn, loot_to_burn, &assets)
    }

    /// Ragequit over an explicit, duplicate-free subset of whitelisted
    /// assets. Claims on excluded assets are forfeited.
    pub fn safe_ragequit(
        &mut self,
        caller: &Address,
        shares_to_burn: u128,
        loot_to_burn: u128,
        subset: &[AssetId],
    ) -> Result<(), GovernanceError> {
        let mut seen = HashSet::new();
        for asset in subset {
            if !self.whitelist.contains(asset) {
                return Err(GovernanceError::AssetNotWhitelisted(asset.clone()));
            }
            if !seen.insert(asset) {
                return Err(GovernanceError::DuplicateAssetInSubset(asset.clone()));
            }
        }
        self.ragequit_internal(caller, shares_to_burn, loot_to_burn, subset)
    }

    fn ragequit_internal(
        &mut self,
        member_addr: &Address,
        shares_to_burn: u128,
        loot_to_burn: u128,
        payout_assets: &[AssetId],
    ) -> Result<(), GovernanceError> {
        let member = self
            .membership
            .lookup(member_addr)
            .ok_or_else(|| GovernanceError::NotAMember(member_addr.clone()))?;
        if member.shares < shares_to_burn {
            return Err(GovernanceError::InsufficientShares {
                needed: shares_to_burn,
                available: member.shares,
            });
        }
        if member.loot < loot_to_burn {
            return Err(GovernanceError::InsufficientLoot {
                needed: loot_to_burn,
                available: member.loot,
            });
        }
        // Exit is locked while the member's highest yes vote is unresolved:
        // quitting would dodge the consequences of a vote still in flight.
        if let Some(pending) = member.highest_index_yes_vote {
            let voted_on = self
                .queue
                .queued(pending)
                .expect("yes votes reference queued proposals");
            if !voted_on.flags.processed {
                return Err(GovernanceError::PendingYesVote {
                    member: member_addr.clone(),
                    index: pending,
                });
            }
        }

        let burn_total = shares_to_burn
            .checked_add(loot_to_burn)
            .ok_or(GovernanceError::ArithmeticOverflow)?;
        // Fractions are taken against the pre-burn total.
        let initial_total = self.membership.total_weight();

        let mut payouts = Vec::with_capacity(payout_assets.len());
        if burn_total > 0 {
            for asset in payout_assets {
                let balance = self.treasury.balance(&self.assets, asset);
                let amount = balance
                    .checked_mul(burn_total)
                    .ok_or(GovernanceError::ArithmeticOverflow)?
                    / initial_total;
                if amount > 0 {
                    payouts.push((asset.clone(), amount));
                }
            }
        }

        let mut log = MoveLog::new();
        for (asset, amount) in &payouts {
            if let Err(err) = self.log_pay_out(&mut log, asset, member_addr, *amount) {
                log.unwind(&mut self.assets);
                return Err(err);
            }
        }
        if let Err(err) = self
            .membership
            .burn(member_addr, shares_to_burn, loot_to_burn)
        {
            log.unwind(&mut self.assets);
            return Err(err);
        }
        tracing::info!(
            member = %member_addr,
            shares = shares_to_burn,
            loot = loot_to_burn,
            assets = payouts.len(),
            "ragequit complete"
        );
        Ok(())
    }

    // ── delegate keys ────────────────────────────────────────────────

    /// Re-key the caller's delegate. The new key must not be in use.
    pub fn update_delegate_key(
        &mut self,
        caller: &Address,
        new_key: &Address,
    ) -> Result<(), GovernanceError> {
        if new_key.is_zero() {
            return Err(GovernanceError::ZeroDelegateKey);
        }
        self.membership.update_delegate(caller, new_key)?;
        tracing::info!(member = %caller, delegate = %new_key, "delegate key updated");
        Ok(())
    }

    // ── queries ──────────────────────────────────────────────────────

    /// Number of whole periods elapsed since summoning.
    pub fn current_period(&self, now: Timestamp) -> u64 {
        now.periods_since(self.summoned_at, self.params.period_duration_secs)
    }

    pub fn params(&self) -> &GuildParams {
        &self.params
    }

    pub fn member(&self, identity: &Address) -> Option<&Member> {
        self.membership.lookup(identity)
    }

    pub fn member_by_delegate(&self, key: &Address) -> Option<&Address> {
        self.membership.address_of_delegate(key)
    }

    pub fn total_shares(&self) -> u128 {
        self.membership.total_shares()
    }

    pub fn total_loot(&self) -> u128 {
        self.membership.total_loot()
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.queue.get(id)
    }

    pub fn proposal_count(&self) -> u64 {
        self.queue.proposal_count()
    }

    pub fn queued_proposal(&self, index: u64) -> Option<&Proposal> {
        self.queue.queued(index)
    }

    pub fn queue_len(&self) -> u64 {
        self.queue.queue_len()
    }

    pub fn vote_of(&self, index: u64, member: &Address) -> Option<Vote> {
        self.queue.queued(index)?.vote_of(member)
    }

    pub fn is_whitelisted(&self, asset: &AssetId) -> bool {
        self.whitelist.contains(asset)
    }

    pub fn whitelisted_assets(&self) -> &[AssetId] {
        &self.approved_assets
    }

    pub fn treasury_balance(&self, asset: &AssetId) -> u128 {
        self.treasury.balance(&self.assets, asset)
    }

    pub fn escrow_balance(&self, asset: &AssetId) -> u128 {
        self.treasury.escrow_balance(&self.assets, asset)
    }

    /// The external asset ledger (the outside world, for tests and hosts).
    pub fn assets(&self) -> &L {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut L {
        &mut self.assets
    }

    // ── internals ────────────────────────────────────────────────────

    /// Resolve a delegate key to an active member (exists, not jailed,
    /// holds voting shares). Returns the member address and share count.
    fn resolve_active_delegate(
        &self,
        caller: &Address,
    ) -> Result<(Address, u128), GovernanceError> {
        let member_addr = self
            .membership
            .address_of_delegate(caller)
            .ok_or_else(|| GovernanceError::NotADelegate(caller.clone()))?
            .clone();
        let member = self
            .membership
            .lookup(&member_addr)
            .expect("delegate index entries reference members");
        if member.jailed {
            return Err(GovernanceError::Jailed(member_addr));
        }
        if member.shares == 0 {
            return Err(GovernanceError::NoVotingShares(member_addr));
        }
        Ok((member_addr, member.shares))
    }

    fn log_commit(
        &mut self,
        log: &mut MoveLog,
        asset: &AssetId,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        self.treasury.commit(&mut self.assets, asset, amount)?;
        log.record(
            asset,
            self.treasury.escrow_account(),
            self.treasury.guild_account(),
            amount,
        );
        Ok(())
    }

    fn log_release(
        &mut self,
        log: &mut MoveLog,
        asset: &AssetId,
        recipient: &Address,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        self.treasury
            .release(&mut self.assets, asset, recipient, amount)?;
        log.record(asset, self.treasury.escrow_account(), recipient, amount);
        Ok(())
    }

    fn log_pay_out(
        &mut self,
        log: &mut MoveLog,
        asset: &AssetId,
        recipient: &Address,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        self.treasury
            .pay_out(&mut self.assets, asset, recipient, amount)?;
        log.record(asset, self.treasury.guild_account(), recipient, amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guildhall_bank::InMemoryAssets;

    #[test]
    fn move_log_unwinds_in_reverse() {
        let mut assets = InMemoryAssets::new();
        let alpha = AssetId::new("alpha");
        let (a, b) = (Address::new("a"), Address::new("b"));
        assets.mint(&alpha, &a, 100);

        let mut log = MoveLog::new();
        assets.transfer(&alpha, &a, &b, 30).unwrap();
        log.record(&alpha, &a, &b, 30);
        assets.transfer(&alpha, &a, &b, 20).unwrap();
        log.record(&alpha, &a, &b, 20);

        log.unwind(&mut assets);
        assert_eq!(assets.balance_of(&alpha, &a), 100);
        assert_eq!(assets.balance_of(&alpha, &b), 0);
    }
}
