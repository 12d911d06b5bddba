//! Shared fixtures for the governance integration tests.
#![allow(dead_code)]

pub use guildhall_bank::AssetLedger;
use guildhall_bank::InMemoryAssets;
use guildhall_governance::GovernanceEngine;
use guildhall_types::{Address, AssetId, GuildParams, Timestamp};

pub const PERIOD_SECS: u64 = 17_280;
pub const VOTING: u64 = 35;
pub const GRACE: u64 = 35;
pub const WAIT: u64 = 35;
pub const DEPOSIT: u128 = 10;
pub const REWARD: u128 = 1;

pub fn addr(raw: &str) -> Address {
    Address::new(raw)
}

pub fn gold() -> AssetId {
    AssetId::new("gold")
}

pub fn silver() -> AssetId {
    AssetId::new("silver")
}

pub fn summoner() -> Address {
    addr("summoner")
}

pub fn genesis() -> Timestamp {
    Timestamp::new(1_700_000_000)
}

/// Wall-clock instant at the start of the given period.
pub fn at_period(period: u64) -> Timestamp {
    genesis().plus_secs(period * PERIOD_SECS)
}

/// A fresh guild with the reference parameters, gold whitelisted, and the
/// given gold balances pre-minted.
pub fn summon_guild(balances: &[(&str, u128)]) -> GovernanceEngine<InMemoryAssets> {
    summon_guild_with_assets(vec![gold()], balances)
}

pub fn summon_guild_with_assets(
    approved: Vec<AssetId>,
    balances: &[(&str, u128)],
) -> GovernanceEngine<InMemoryAssets> {
    let mut assets = InMemoryAssets::new();
    for (holder, amount) in balances {
        assets.mint(&gold(), &addr(holder), *amount);
    }
    let params = GuildParams::reference(summoner(), approved);
    GovernanceEngine::summon(params, assets, genesis()).expect("reference params are valid")
}
