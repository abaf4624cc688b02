//! Merging command-line flags with config defaults.

use anyhow::Result;

use pinstack_config::Defaults;
use pinstack_core::ParityPolicy;
use pinstack_types::{CutRange, KeySpec, LockProfile, Macs};

use crate::args::Cli;

pub const DEFAULT_PINS: usize = 6;
pub const DEFAULT_PROFILE: LockProfile = LockProfile::Sfic;

/// Settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub spec: KeySpec,
    pub policy: ParityPolicy,
}

impl Settings {
    /// Flags win over config, config wins over built-in defaults. A lock type
    /// replaces the cut range and MACS from the same layer and below.
    pub fn resolve(cli: &Cli, defaults: &Defaults) -> Result<Self> {
        let pins = cli.pins.or(defaults.pins).unwrap_or(DEFAULT_PINS);

        let (config_range, config_macs) = match defaults.profile {
            Some(profile) => (Some(profile.range()), Some(profile.macs())),
            None => (defaults.range, defaults.macs),
        };
        let (range, macs): (CutRange, Macs) = match cli.lock_type {
            Some(profile) => (profile.range(), profile.macs()),
            None => (
                cli.cuts.or(config_range).unwrap_or(DEFAULT_PROFILE.range()),
                cli.macs
                    .map(Macs::new)
                    .or(config_macs)
                    .unwrap_or(DEFAULT_PROFILE.macs()),
            ),
        };

        let strict = cli.strict_parity || defaults.strict_parity.unwrap_or(false);
        let policy = if strict {
            ParityPolicy::Strict
        } else {
            ParityPolicy::Lenient
        };

        let spec = KeySpec::new(pins, range, macs)?;
        tracing::debug!(pins, %range, %macs, ?policy, "resolved settings");
        Ok(Self { spec, policy })
    }
}
