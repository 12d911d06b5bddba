//! Asset custody for the guildhall treasury.
//!
//! This crate owns the seam to the outside world: the [`AssetLedger`] trait
//! models external fungible-asset contracts (which may be adversarial), and
//! [`Treasury`] is the guild's custody layer on top of it — two accounts
//! (guild bank + escrow) and the restricted movements between them.
//!
//! The treasury tracks nothing itself: every balance is whatever the asset
//! ledger reports. Transfer failure is never ignored — it aborts the
//! enclosing governance operation.

pub mod error;
pub mod ledger;
pub mod memory;
pub mod treasury;

pub use error::BankError;
pub use ledger::AssetLedger;
pub use memory::{AssetBehavior, InMemoryAssets};
pub use treasury::Treasury;
