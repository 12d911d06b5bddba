//! Construction-time configuration errors.

use crate::address::AssetId;
use thiserror::Error;

/// Rejections raised while validating `GuildParams` at summoning time.
///
/// Every variant is fatal: a guild is never constructed from invalid
/// parameters, and parameters are immutable afterwards.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("summoner cannot be zero")]
    ZeroSummoner,

    #[error("period duration cannot be zero")]
    ZeroPeriodDuration,

    #[error("voting period length cannot be zero")]
    ZeroVotingPeriodLength,

    #[error("voting period length {0} exceeds limit")]
    VotingPeriodLengthExceedsLimit(u64),

    #[error("grace period length {0} exceeds limit")]
    GracePeriodLengthExceedsLimit(u64),

    #[error("emergency exit wait cannot be zero")]
    ZeroEmergencyExitWait,

    #[error("dilution bound cannot be zero")]
    ZeroDilutionBound,

    #[error("dilution bound {0} exceeds limit")]
    DilutionBoundExceedsLimit(u128),

    #[error("need at least one approved asset")]
    NoApprovedAssets,

    #[error("approved asset cannot be zero")]
    ZeroApprovedAsset,

    #[error("duplicate approved asset {0}")]
    DuplicateApprovedAsset(AssetId),

    #[error("proposal deposit {deposit} cannot be smaller than processing reward {reward}")]
    DepositSmallerThanReward { deposit: u128, reward: u128 },
}
