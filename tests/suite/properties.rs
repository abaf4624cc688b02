//! Invariants that must hold for every generated key and every combination.

use pinstack_core::{combinate, generate};
use pinstack_types::{Key, LockProfile, Parity, parity_of, validate_macs};

use crate::common::{preset, seeded, spec_matrix};

const SEEDS: u64 = 64;

#[test]
fn generated_keys_stay_in_range_and_within_macs() {
    for spec in spec_matrix() {
        for seed in 0..SEEDS {
            let key = generate(&spec, None, &mut seeded(seed)).unwrap();
            assert_eq!(key.len(), spec.pins());
            assert!(
                key.cuts().iter().all(|&c| spec.range().contains(c)),
                "{key} escapes {}",
                spec.range()
            );
            assert!(validate_macs(key.cuts(), spec.macs()).is_ok(), "{key}");
        }
    }
}

#[test]
fn generated_keys_reproduce_the_requested_parity() {
    for spec in spec_matrix() {
        for seed in 0..SEEDS {
            let mut rng = seeded(seed);
            // A generated key is a witness that its own pattern is satisfiable.
            let witness = generate(&spec, None, &mut rng).unwrap();
            let pattern = witness.parity();
            let key = generate(&spec, Some(pattern.as_slice()), &mut rng).unwrap();
            assert_eq!(parity_of(key.cuts()), pattern);
            assert!(validate_macs(key.cuts(), spec.macs()).is_ok());
        }
    }
}

#[test]
fn any_parity_pattern_is_satisfiable_with_room_to_move() {
    // With MACS >= 1 and at least two cut depths, every window holds both
    // parities.
    let spec = preset(LockProfile::Kwikset, 6);
    for bits in 0u8..64 {
        let pattern: Vec<Parity> = (0..6)
            .map(|i| if bits >> i & 1 == 1 { Parity::Odd } else { Parity::Even })
            .collect();
        let key = generate(&spec, Some(pattern.as_slice()), &mut seeded(u64::from(bits))).unwrap();
        assert_eq!(key.parity(), pattern);
    }
}

#[test]
fn literal_round_trip_preserves_cuts() {
    for spec in spec_matrix() {
        for seed in 0..SEEDS {
            let key = generate(&spec, None, &mut seeded(seed)).unwrap();
            let reparsed = Key::parse(spec, &key.to_string()).unwrap();
            assert_eq!(reparsed.cuts(), key.cuts());
        }
    }
}

#[test]
fn every_sfic_combination_fills_23_units() {
    let spec = preset(LockProfile::Sfic, 6);
    for seed in 0..SEEDS {
        let mut rng = seeded(seed);
        let control = generate(&spec, None, &mut rng).unwrap();
        let change = generate(&spec, Some(control.parity().as_slice()), &mut rng).unwrap();
        let master = generate(&spec, None, &mut rng).unwrap();

        let stacks = combinate(&change, &master, &control).unwrap();
        assert_eq!(stacks.len(), 6);
        for (chamber, stack) in stacks.iter().enumerate() {
            assert_eq!(stack.total(), 23, "chamber {chamber}: {stack:?}");
            assert_eq!(stack.bottom, change[chamber].min(master[chamber]));
        }
    }
}

#[test]
fn parity_matched_change_key_gives_even_build_up_pins() {
    let spec = preset(LockProfile::Sfic, 6);
    for seed in 0..SEEDS {
        let mut rng = seeded(seed);
        let control = generate(&spec, None, &mut rng).unwrap();
        let change = generate(&spec, Some(control.parity().as_slice()), &mut rng).unwrap();
        let stacks = combinate(&change, &change, &control).unwrap();
        assert!(stacks.iter().all(|s| s.build_up % 2 == 0), "{stacks:?}");
    }
}
