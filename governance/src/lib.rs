//! Member-governed treasury — the proposal lifecycle state machine.
//!
//! Lifecycle: Submitted → Sponsored → VotingOpen → Grace → Processed
//! (or Submitted → Cancelled). Sponsorship strictly serializes voting
//! windows; processing is strict FIFO; members exit via ragequit, gated on
//! their highest pending yes vote.
//!
//! The whole core is a single sequential state machine: every operation is
//! an atomic, all-or-nothing transaction, and correctness rests on the
//! invariants (write-once votes, FIFO processing, monotone
//! highest-index-yes-vote, dilution-bound snapshot) rather than on locks.

pub mod engine;
pub mod error;
pub mod member;
pub mod proposal;
pub mod queue;

pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use member::{Member, MembershipLedger};
pub use proposal::{Proposal, ProposalFlags, ProposalId, ProposalKind, Vote};
pub use queue::ProposalQueue;
