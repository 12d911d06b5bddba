//! Deployment parameters — fixed at summoning time, immutable thereafter.

use crate::address::{Address, AssetId};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on `voting_period_length` and `grace_period_length`.
/// The limit value itself is accepted; limit + 1 is rejected.
pub const MAX_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;

/// Upper bound on `dilution_bound` (inclusive).
pub const MAX_DILUTION_BOUND: u128 = 1_000_000_000_000_000_000;

/// The immutable configuration of a guild.
///
/// `approved_assets[0]` doubles as the deposit asset: proposal deposits and
/// processing rewards are denominated in it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuildParams {
    /// The founding member — receives 1 share at summoning.
    pub summoner: Address,

    /// Initially whitelisted assets. The first entry is the deposit asset.
    pub approved_assets: Vec<AssetId>,

    /// Length of one period in seconds. All voting/grace/emergency windows
    /// are measured in whole periods.
    pub period_duration_secs: u64,

    /// Number of periods a proposal's voting window stays open.
    pub voting_period_length: u64,

    /// Number of periods between voting close and processing eligibility.
    /// May be zero.
    pub grace_period_length: u64,

    /// Number of periods past the end of a proposal's grace window after
    /// which processing takes the emergency path (forced failure, tribute
    /// withheld) so a stuck proposal cannot wedge the queue.
    pub emergency_exit_wait: u64,

    /// Bond (in the deposit asset) a sponsor posts when sponsoring.
    pub proposal_deposit: u128,

    /// Maximum multiple the total share+loot supply may grow to, relative to
    /// its running maximum while a proposal collected yes votes, before that
    /// proposal is auto-failed at processing.
    pub dilution_bound: u128,

    /// Portion of the deposit paid to whoever processes the proposal.
    pub processing_reward: u128,
}

impl GuildParams {
    /// Validate every construction-time invariant.
    ///
    /// A `GuildParams` value that fails validation must never reach a
    /// running engine — the engine constructor calls this first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summoner.is_zero() {
            return Err(ConfigError::ZeroSummoner);
        }
        if self.period_duration_secs == 0 {
            return Err(ConfigError::ZeroPeriodDuration);
        }
        if self.voting_period_length == 0 {
            return Err(ConfigError::ZeroVotingPeriodLength);
        }
        if self.voting_period_length > MAX_PERIOD_LENGTH {
            return Err(ConfigError::VotingPeriodLengthExceedsLimit(
                self.voting_period_length,
            ));
        }
        if self.grace_period_length > MAX_PERIOD_LENGTH {
            return Err(ConfigError::GracePeriodLengthExceedsLimit(
                self.grace_period_length,
            ));
        }
        if self.emergency_exit_wait == 0 {
            return Err(ConfigError::ZeroEmergencyExitWait);
        }
        if self.dilution_bound == 0 {
            return Err(ConfigError::ZeroDilutionBound);
        }
        if self.dilution_bound > MAX_DILUTION_BOUND {
            return Err(ConfigError::DilutionBoundExceedsLimit(self.dilution_bound));
        }
        if self.approved_assets.is_empty() {
            return Err(ConfigError::NoApprovedAssets);
        }
        let mut seen = HashSet::new();
        for asset in &self.approved_assets {
            if asset.is_zero() {
                return Err(ConfigError::ZeroApprovedAsset);
            }
            if !seen.insert(asset) {
                return Err(ConfigError::DuplicateApprovedAsset(asset.clone()));
            }
        }
        if self.proposal_deposit < self.processing_reward {
            return Err(ConfigError::DepositSmallerThanReward {
                deposit: self.proposal_deposit,
                reward: self.processing_reward,
            });
        }
        Ok(())
    }

    /// The asset proposal deposits are denominated in.
    ///
    /// Only meaningful after `validate()` — an empty asset list never reaches
    /// a running engine.
    pub fn deposit_asset(&self) -> &AssetId {
        &self.approved_assets[0]
    }

    /// Reference deployment numbers, handy for tests: 4.8h periods, 35-period
    /// voting/grace/emergency windows, deposit 10, dilution bound 3, reward 1.
    pub fn reference(summoner: Address, approved_assets: Vec<AssetId>) -> Self {
        Self {
            summoner,
            approved_assets,
            period_duration_secs: 17_280,
            voting_period_length: 35,
            grace_period_length: 35,
            emergency_exit_wait: 35,
            proposal_deposit: 10,
            dilution_bound: 3,
            processing_reward: 1,
        }
    }
}
