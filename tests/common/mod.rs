//! Shared test utilities and fixtures

#![allow(dead_code)]

use pinstack_types::{CutRange, Key, KeySpec, LockProfile, Macs};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn spec(pins: usize, min: u8, max: u8, macs: u8) -> KeySpec {
    KeySpec::new(pins, CutRange::new(min, max).unwrap(), Macs::new(macs)).unwrap()
}

pub fn preset(profile: LockProfile, pins: usize) -> KeySpec {
    KeySpec::new(pins, profile.range(), profile.macs()).unwrap()
}

pub fn sfic_key(literal: &str) -> Key {
    Key::parse(preset(LockProfile::Sfic, literal.len()), literal).unwrap()
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A spread of specs covering both presets, narrow ranges and small MACS.
pub fn spec_matrix() -> Vec<KeySpec> {
    vec![
        preset(LockProfile::Sfic, 6),
        preset(LockProfile::Kwikset, 5),
        spec(1, 0, 9, 0),
        spec(7, 0, 9, 1),
        spec(8, 2, 5, 2),
        spec(4, 3, 4, 1),
        spec(10, 0, 15, 3),
    ]
}
