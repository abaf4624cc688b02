//! Key generation and combinating for master-keyed interchangeable cores.
//!
//! - [`generate`]: random keys under range, MACS and parity constraints
//! - [`combinate`]: per-chamber pin stacks from change, master and control keys
//! - [`resolve_keys`] / [`Combination::build`]: the full control-first flow
//!
//! Randomness is always passed in, so callers can seed it.

mod combinate;
mod generate;
mod resolve;

pub use combinate::{CombinateError, combinate, combinate_with};
pub use generate::{candidates, generate};
pub use resolve::{
    Combination, CombinationError, KeyRequest, KeyRole, KeySet, ParityPolicy, ResolveError,
    resolve_keys,
};

pub use pinstack_types as types;
