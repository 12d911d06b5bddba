//! Guild kicks, the dilution bound, and emergency processing.

mod common;

use common::*;
use guildhall_bank::{AssetBehavior, BankError};
use guildhall_governance::{GovernanceError, Vote};

/// Admit `applicant` with `shares` voting shares via a passed funding
/// proposal sponsored at `from_period`. Returns the processing period.
fn admit(
    guild: &mut guildhall_governance::GovernanceEngine<guildhall_bank::InMemoryAssets>,
    applicant: &str,
    shares: u128,
    from_period: u64,
) -> u64 {
    let id = guild
        .submit_proposal(
            &addr(applicant),
            &addr(applicant),
            shares,
            0,
            0,
            &gold(),
            0,
            &gold(),
            "",
        )
        .unwrap();
    let index = guild
        .sponsor_proposal(&summoner(), id, at_period(from_period))
        .unwrap();
    let start = guild.queued_proposal(index).unwrap().starting_period;
    guild
        .submit_vote(&summoner(), index, Vote::Yes, at_period(start))
        .unwrap();
    let done = start + VOTING + GRACE;
    assert!(guild
        .process_proposal(&addr("processor"), index, at_period(done))
        .unwrap());
    done
}

#[test]
fn guild_kick_converts_shares_to_loot_and_jails() {
    let mut guild = summon_guild(&[("summoner", 40)]);
    let after = admit(&mut guild, "rogue", 5, 0);
    assert_eq!(guild.total_shares(), 6);

    let id = guild
        .submit_guild_kick_proposal(&summoner(), &addr("rogue"), "misconduct")
        .unwrap();
    // One unresolved kick per target.
    assert_eq!(
        guild.submit_guild_kick_proposal(&summoner(), &addr("rogue"), ""),
        Err(GovernanceError::KickProposalPending(addr("rogue")))
    );

    let index = guild
        .sponsor_proposal(&summoner(), id, at_period(after))
        .unwrap();
    let start = guild.queued_proposal(index).unwrap().starting_period;
    guild
        .submit_vote(&summoner(), index, Vote::Yes, at_period(start))
        .unwrap();
    assert!(guild
        .process_proposal(&addr("processor"), index, at_period(start + VOTING + GRACE))
        .unwrap());

    let rogue = guild.member(&addr("rogue")).unwrap();
    assert!(rogue.jailed);
    assert_eq!(rogue.shares, 0);
    assert_eq!(rogue.loot, 5);
    assert_eq!(guild.total_shares(), 1);
    assert_eq!(guild.total_loot(), 5);

    // Jailed: no sponsoring, no voting, no new proposals naming them.
    assert_eq!(
        guild.sponsor_proposal(&addr("rogue"), 0, at_period(after)),
        Err(GovernanceError::Jailed(addr("rogue")))
    );
    assert_eq!(
        guild.submit_proposal(&summoner(), &addr("rogue"), 1, 0, 0, &gold(), 0, &gold(), ""),
        Err(GovernanceError::JailedApplicant(addr("rogue")))
    );
    assert_eq!(
        guild.submit_guild_kick_proposal(&summoner(), &addr("rogue"), ""),
        Err(GovernanceError::AlreadyJailed(addr("rogue")))
    );

    // But the loot can still be ragequit.
    guild.ragequit(&addr("rogue"), 0, 5).unwrap();
    assert_eq!(guild.total_loot(), 0);
}

#[test]
fn kick_requires_an_unjailed_member_with_stake() {
    let mut guild = summon_guild(&[("summoner", 40)]);
    assert_eq!(
        guild.submit_guild_kick_proposal(&summoner(), &addr("ghost"), ""),
        Err(GovernanceError::NotAMember(addr("ghost")))
    );
}

#[test]
fn dilution_bound_voids_late_passage() {
    // Two proposals sponsored back to back while total weight is 1. The
    // first mints 100 shares; by the time the second is processed, total
    // weight has grown past dilutionBound times what its yes voters saw,
    // so its passage is voided.
    let mut guild = summon_guild(&[("summoner", 40)]);
    let a = guild
        .submit_proposal(&summoner(), &addr("big"), 100, 0, 0, &gold(), 0, &gold(), "")
        .unwrap();
    let b = guild
        .submit_proposal(&summoner(), &addr("late"), 1, 0, 0, &gold(), 0, &gold(), "")
        .unwrap();
    let ia = guild.sponsor_proposal(&summoner(), a, genesis()).unwrap();
    let ib = guild.sponsor_proposal(&summoner(), b, genesis()).unwrap();

    guild
        .submit_vote(&summoner(), ia, Vote::Yes, at_period(1))
        .unwrap();
    guild
        .submit_vote(&summoner(), ib, Vote::Yes, at_period(2))
        .unwrap();
    assert_eq!(
        guild
            .queued_proposal(ib)
            .unwrap()
            .max_total_weight_at_yes_vote,
        1
    );

    assert!(guild
        .process_proposal(&addr("p"), ia, at_period(1 + VOTING + GRACE))
        .unwrap());
    assert_eq!(guild.total_shares(), 101);

    // 101 > 3 * 1: forced failure despite the unanimous yes.
    let passed = guild
        .process_proposal(&addr("p"), ib, at_period(2 + VOTING + GRACE))
        .unwrap();
    assert!(!passed);
    assert!(guild.member(&addr("late")).is_none());
    // The deposit is still split normally.
    assert_eq!(guild.assets().balance_of(&gold(), &addr("p")), 2 * REWARD);
}

#[test]
fn emergency_processing_unblocks_a_wedged_queue() {
    let mut guild = summon_guild_with_assets(vec![gold(), silver()], &[("summoner", 40)]);
    guild.assets_mut().mint(&silver(), &summoner(), 100);

    // Tribute in silver; the asset turns hostile after escrow, so the
    // failed proposal's tribute refund reverts and wedges the queue.
    let a = guild
        .submit_proposal(&summoner(), &addr("x"), 1, 0, 100, &silver(), 0, &gold(), "")
        .unwrap();
    let b = guild
        .submit_proposal(&summoner(), &addr("y"), 1, 0, 0, &gold(), 0, &gold(), "")
        .unwrap();
    let ia = guild.sponsor_proposal(&summoner(), a, genesis()).unwrap();
    let ib = guild.sponsor_proposal(&summoner(), b, genesis()).unwrap();
    guild
        .submit_vote(&summoner(), ia, Vote::No, at_period(1))
        .unwrap();
    guild
        .submit_vote(&summoner(), ib, Vote::Yes, at_period(2))
        .unwrap();
    guild
        .assets_mut()
        .set_behavior(&silver(), AssetBehavior::RejectAll);

    // Normal processing cannot complete: the refund transfer reverts, and
    // the error leaves the proposal unprocessed.
    let ready = 1 + VOTING + GRACE;
    assert_eq!(
        guild.process_proposal(&addr("p"), ia, at_period(ready)),
        Err(GovernanceError::Bank(BankError::TransferRejected {
            asset: silver()
        }))
    );
    assert!(!guild.queued_proposal(ia).unwrap().flags.processed);
    assert_eq!(
        guild.process_proposal(&addr("p"), ib, at_period(ready + 1)),
        Err(GovernanceError::PreviousUnprocessed { index: ib })
    );

    // Past the emergency window the tribute is withheld in escrow and the
    // proposal completes as failed; the deposit still splits normally.
    let emergency = 1 + VOTING + GRACE + WAIT;
    let passed = guild
        .process_proposal(&addr("p"), ia, at_period(emergency))
        .unwrap();
    assert!(!passed);
    assert_eq!(guild.escrow_balance(&silver()), 100);
    assert_eq!(guild.assets().balance_of(&gold(), &addr("p")), REWARD);

    // The queue moves again.
    assert!(guild
        .process_proposal(&addr("p"), ib, at_period(emergency))
        .unwrap());
    assert_eq!(guild.member(&addr("y")).unwrap().shares, 1);
}

#[test]
fn emergency_voids_passage_even_with_yes_majority() {
    let mut guild = summon_guild(&[("summoner", 40)]);
    let id = guild
        .submit_proposal(&summoner(), &addr("applicant"), 1, 0, 0, &gold(), 0, &gold(), "")
        .unwrap();
    let index = guild.sponsor_proposal(&summoner(), id, genesis()).unwrap();
    guild
        .submit_vote(&summoner(), index, Vote::Yes, at_period(1))
        .unwrap();

    // Nobody processed in time; the late call can only fail the proposal.
    let late = 1 + VOTING + GRACE + WAIT;
    let passed = guild
        .process_proposal(&addr("p"), index, at_period(late))
        .unwrap();
    assert!(!passed);
    assert!(guild.member(&addr("applicant")).is_none());
}
