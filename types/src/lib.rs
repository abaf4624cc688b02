//! Core value types for pinstack.
//!
//! This crate contains the pure domain types for master-keyed interchangeable
//! cores: cut constraints, keys, lock presets and pin stacks. No IO and no
//! randomness; generation and combinating live in `pinstack-core`.

mod constraints;
mod key;
mod profile;
mod stack;

pub use constraints::{Cut, CutRange, KeySpec, Macs, Parity, SpecError, parity_of};
pub use key::{CUT_SEPARATOR, Key, KeyError, validate_macs};
pub use profile::LockProfile;
pub use stack::{PinStack, Segment, StackGeometry};
