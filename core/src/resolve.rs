//! Key-set resolution: literal or generated change, master and control keys.
//!
//! The control key is settled first. Its parity pattern then constrains the
//! generated change key chamber by chamber. The master key defaults to the
//! change key, which yields a core with no master pins.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use pinstack_types::{Key, KeyError, KeySpec, Parity, PinStack};

use crate::combinate::{CombinateError, combinate};
use crate::generate::generate;

/// Which key of the set an error or value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Change,
    Master,
    Control,
}

impl KeyRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            KeyRole::Change => "change",
            KeyRole::Master => "master",
            KeyRole::Control => "control",
        }
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether user-supplied change and master keys must match the control
/// key's parity.
///
/// Generated keys always match. `Lenient` only range/MACS-checks literal
/// keys, which is how pinning charts have traditionally been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParityPolicy {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{role} key: {error}")]
pub struct ResolveError {
    pub role: KeyRole,
    pub error: KeyError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Combinate(#[from] CombinateError),
}

/// Literal keys supplied by the caller; `None` means "generate" (or, for the
/// master key, "same as change").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRequest {
    pub change: Option<String>,
    pub master: Option<String>,
    pub control: Option<String>,
}

/// A resolved change/master/control triple sharing one [`KeySpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySet {
    pub change: Key,
    pub master: Key,
    pub control: Key,
}

/// Resolve a key set following the control-first flow.
pub fn resolve_keys<R: Rng + ?Sized>(
    spec: &KeySpec,
    request: &KeyRequest,
    policy: ParityPolicy,
    rng: &mut R,
) -> Result<KeySet, ResolveError> {
    let control = match &request.control {
        Some(literal) => parse(spec, literal, KeyRole::Control)?,
        None => generate(spec, None, rng).map_err(with_role(KeyRole::Control))?,
    };
    let parity = control.parity();

    let change = match &request.change {
        Some(literal) => {
            let key = parse(spec, literal, KeyRole::Change)?;
            enforce(policy, &key, &parity, KeyRole::Change)?;
            key
        }
        None => generate(spec, Some(parity.as_slice()), rng).map_err(with_role(KeyRole::Change))?,
    };

    let master = match &request.master {
        Some(literal) => {
            let key = parse(spec, literal, KeyRole::Master)?;
            enforce(policy, &key, &parity, KeyRole::Master)?;
            key
        }
        None => change.clone(),
    };

    tracing::debug!(%change, %master, %control, ?policy, "resolved key set");
    Ok(KeySet {
        change,
        master,
        control,
    })
}

fn parse(spec: &KeySpec, literal: &str, role: KeyRole) -> Result<Key, ResolveError> {
    Key::parse(*spec, literal).map_err(with_role(role))
}

fn enforce(
    policy: ParityPolicy,
    key: &Key,
    parity: &[Parity],
    role: KeyRole,
) -> Result<(), ResolveError> {
    match policy {
        ParityPolicy::Lenient => {
            if let Err(err) = key.check_parity(parity) {
                tracing::debug!(%role, %err, "literal key ignores control parity");
            }
            Ok(())
        }
        ParityPolicy::Strict => key.check_parity(parity).map_err(with_role(role)),
    }
}

fn with_role(role: KeyRole) -> impl Fn(KeyError) -> ResolveError {
    move |error| ResolveError { role, error }
}

/// A resolved key set together with its pin stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    #[serde(flatten)]
    pub keys: KeySet,
    pub stacks: Vec<PinStack>,
}

impl Combination {
    /// Resolve keys and combinate them in one step.
    pub fn build<R: Rng + ?Sized>(
        spec: &KeySpec,
        request: &KeyRequest,
        policy: ParityPolicy,
        rng: &mut R,
    ) -> Result<Self, CombinationError> {
        let keys = resolve_keys(spec, request, policy, rng)?;
        let stacks = combinate(&keys.change, &keys.master, &keys.control)?;
        Ok(Self { keys, stacks })
    }
}
