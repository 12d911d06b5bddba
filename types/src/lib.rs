//! Fundamental types shared across the guildhall workspace.
//!
//! Everything here is deliberately dull: newtype wrappers for participant and
//! asset identities, a plain Unix-seconds timestamp, and the immutable
//! deployment parameters validated once at summoning time.

pub mod address;
pub mod error;
pub mod params;
pub mod time;

pub use address::{Address, AssetId};
pub use error::ConfigError;
pub use params::GuildParams;
pub use time::Timestamp;
