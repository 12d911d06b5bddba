//! Governance errors.
//!
//! Taxonomy: configuration errors (construction-time, fatal), state-guard
//! violations (wrong-state operation, nothing mutated), insufficient
//! balances, and external transfer failures (surfaced via `Bank`). Every
//! rejection names a specific cause so callers and tests can assert on it.

use guildhall_bank::BankError;
use guildhall_types::{Address, AssetId, ConfigError};
use thiserror::Error;

use crate::proposal::ProposalId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bank(#[from] BankError),

    // ── identity guards ──────────────────────────────────────────────
    #[error("{0} is not a member")]
    NotAMember(Address),

    #[error("{0} is not the delegate of any member")]
    NotADelegate(Address),

    #[error("member {0} has no voting shares")]
    NoVotingShares(Address),

    #[error("member {0} is jailed")]
    Jailed(Address),

    #[error("applicant {0} is jailed")]
    JailedApplicant(Address),

    #[error("applicant cannot be zero")]
    ZeroApplicant,

    #[error("asset cannot be zero")]
    ZeroAsset,

    #[error("delegate key cannot be zero")]
    ZeroDelegateKey,

    #[error("delegate key {0} is already in use")]
    DelegateKeyInUse(Address),

    // ── proposal state guards ────────────────────────────────────────
    #[error("unknown proposal {0}")]
    UnknownProposal(ProposalId),

    #[error("no proposal at queue index {0}")]
    UnknownQueueIndex(u64),

    #[error("proposal {0} is already sponsored")]
    AlreadySponsored(ProposalId),

    #[error("proposal {0} is cancelled")]
    ProposalCancelled(ProposalId),

    #[error("only the proposer may cancel proposal {0}")]
    NotProposer(ProposalId),

    #[error("voting on queue index {index} opens at period {starts_at}")]
    VotingNotStarted { index: u64, starts_at: u64 },

    #[error("voting on queue index {0} has closed")]
    VotingExpired(u64),

    #[error("member {member} has already voted on queue index {index}")]
    AlreadyVoted { index: u64, member: Address },

    #[error("queue index {index} is not processable until period {ready_at}")]
    ProcessingNotReady { index: u64, ready_at: u64 },

    #[error("queue index {0} is already processed")]
    AlreadyProcessed(u64),

    #[error("queue index {index} cannot be processed before its predecessor")]
    PreviousUnprocessed { index: u64 },

    // ── membership / exit guards ─────────────────────────────────────
    #[error("member {member} has a pending yes vote on queue index {index}")]
    PendingYesVote { member: Address, index: u64 },

    #[error("insufficient shares: need {needed}, have {available}")]
    InsufficientShares { needed: u128, available: u128 },

    #[error("insufficient loot: need {needed}, have {available}")]
    InsufficientLoot { needed: u128, available: u128 },

    // ── whitelist / guild-kick guards ────────────────────────────────
    #[error("asset {0} is not whitelisted")]
    AssetNotWhitelisted(AssetId),

    #[error("asset {0} is already whitelisted")]
    AlreadyWhitelisted(AssetId),

    #[error("a whitelist proposal for asset {0} is already pending")]
    WhitelistProposalPending(AssetId),

    #[error("a guild-kick proposal for member {0} is already pending")]
    KickProposalPending(Address),

    #[error("member {0} is already jailed")]
    AlreadyJailed(Address),

    #[error("member {0} has no shares or loot to kick")]
    NoStakeToKick(Address),

    #[error("duplicate asset {0} in ragequit subset")]
    DuplicateAssetInSubset(AssetId),

    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}
