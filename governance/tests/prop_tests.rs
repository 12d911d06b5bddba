//! Property tests over the governance engine.

mod common;

use common::*;
use guildhall_bank::Treasury;
use guildhall_governance::Vote;
use guildhall_types::Address;
use proptest::prelude::*;

/// Admit a member holding `shares` via a full proposal cycle. Returns the
/// period after processing.
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

proptest! {
    /// Ragequit pays out exactly floor(balance * burn / total) of each
    /// asset, against the pre-burn total.
    #[test]
    fn ragequit_payout_is_floor_proportional(
        treasury in 0u128..1_000_000_000,
        shares in 1u128..10_000,
        burn_frac in 0.0f64..=1.0,
    ) {
        let mut guild = summon_guild(&[("summoner", 20)]);
        admit(&mut guild, "member", shares, 0);
        let guild_account = Address::new(Treasury::GUILD_ACCOUNT);
        guild.assets_mut().mint(&gold(), &guild_account, treasury);

        let burn = ((shares as f64) * burn_frac) as u128;
        let burn = burn.clamp(1, shares);
        let total = guild.total_shares();
        let expected = treasury * burn / total;

        let before = guild.assets().balance_of(&gold(), &addr("member"));
        guild.ragequit(&addr("member"), burn, 0).unwrap();
        prop_assert_eq!(
            guild.assets().balance_of(&gold(), &addr("member")) - before,
            expected
        );
        prop_assert_eq!(guild.treasury_balance(&gold()), treasury - expected);
        prop_assert_eq!(guild.total_shares(), total - burn);
    }

    /// Starting periods are strictly increasing in sponsorship order, no
    /// matter when sponsorships happen.
    #[test]
    fn starting_periods_serialize(offsets in prop::collection::vec(0u64..50, 1..8)) {
        let mut guild = summon_guild(&[("summoner", 1_000)]);
        let mut period = 0;
        let mut previous = 0;
        for (n, offset) in offsets.into_iter().enumerate() {
            period += offset;
            let id = guild
                .submit_proposal(
                    &summoner(),
                    &addr(&format!("applicant-{n}")),
                    0, 0, 0, &gold(), 0, &gold(),
                    "",
                )
                .unwrap();
            let index = guild
                .sponsor_proposal(&summoner(), id, at_period(period))
                .unwrap();
            let starting = guild.queued_proposal(index).unwrap().starting_period;
            prop_assert!(starting > previous);
            prop_assert!(starting > guild.current_period(at_period(period)));
            previous = starting;
        }
    }

    /// Processing always conserves the deposit: reward to the processor,
    /// remainder to the sponsor, regardless of outcome.
    #[test]
    fn deposit_splits_exactly(yes in any::<bool>()) {
        let mut guild = summon_guild(&[("summoner", 20)]);
        let id = guild
            .submit_proposal(&summoner(), &addr("applicant"), 1, 0, 0, &gold(), 0, &gold(), "")
            .unwrap();
        let index = guild.sponsor_proposal(&summoner(), id, genesis()).unwrap();
        let vote = if yes { Vote::Yes } else { Vote::No };
        guild.submit_vote(&summoner(), index, vote, at_period(1)).unwrap();

        let sponsor_before = guild.assets().balance_of(&gold(), &summoner());
        guild
            .process_proposal(&addr("processor"), index, at_period(1 + VOTING + GRACE))
            .unwrap();
        prop_assert_eq!(
            guild.assets().balance_of(&gold(), &addr("processor")),
            REWARD
        );
        prop_assert_eq!(
            guild.assets().balance_of(&gold(), &summoner()) - sponsor_before,
            DEPOSIT - REWARD
        );
        prop_assert_eq!(guild.escrow_balance(&gold()), 0);
    }

    /// A vote adds exactly the caller's share weight to one tally, and the
    /// dilution snapshot never decreases.
    #[test]
    fn tallies_sum_member_shares(shares in 1u128..1_000, second_votes_yes in any::<bool>()) {
        let mut guild = summon_guild(&[("summoner", 40)]);
        let after = admit(&mut guild, "member", shares, 0);

        let id = guild
            .submit_proposal(&summoner(), &addr("applicant"), 0, 0, 0, &gold(), 0, &gold(), "")
            .unwrap();
        let index = guild.sponsor_proposal(&summoner(), id, at_period(after)).unwrap();
        let start = guild.queued_proposal(index).unwrap().starting_period;

        guild.submit_vote(&summoner(), index, Vote::Yes, at_period(start)).unwrap();
        let vote = if second_votes_yes { Vote::Yes } else { Vote::No };
        guild.submit_vote(&addr("member"), index, vote, at_period(start)).unwrap();

        let proposal = guild.queued_proposal(index).unwrap();
        if second_votes_yes {
            prop_assert_eq!(proposal.yes_votes, 1 + shares);
            prop_assert_eq!(proposal.no_votes, 0);
        } else {
            prop_assert_eq!(proposal.yes_votes, 1);
            prop_assert_eq!(proposal.no_votes, shares);
        }
        prop_assert_eq!(
            proposal.max_total_weight_at_yes_vote,
            guild.total_shares()
        );
    }
}
