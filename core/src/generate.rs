//! Random key generation under range, MACS and parity constraints.
//!
//! Candidates for each chamber are enumerated up front instead of rejection
//! sampled, so an impossible parity requirement fails immediately rather
//! than spinning forever. Drawing uniformly from the enumerated set gives
//! the same distribution as retry-until-match.

use rand::Rng;
use rand::distr::{Distribution, Uniform};

use pinstack_types::{Cut, CutRange, Key, KeyError, KeySpec, Parity};

/// Generate a key satisfying `spec`, and `parity` chamber by chamber when
/// given.
///
/// Chamber 0 is drawn from the full cut range; each later chamber from the
/// cut range intersected with the MACS window around its predecessor.
pub fn generate<R: Rng + ?Sized>(
    spec: &KeySpec,
    parity: Option<&[Parity]>,
    rng: &mut R,
) -> Result<Key, KeyError> {
    if let Some(pattern) = parity
        && pattern.len() != spec.pins()
    {
        return Err(KeyError::LengthMismatch {
            expected: spec.pins(),
            actual: pattern.len(),
        });
    }

    let mut cuts: Vec<Cut> = Vec::with_capacity(spec.pins());
    for chamber in 0..spec.pins() {
        let window = match cuts.last() {
            Some(&previous) => spec.range().window(previous, spec.macs()),
            None => spec.range(),
        };
        let wanted = parity.map(|pattern| pattern[chamber]);
        let cut = draw(chamber, window, wanted, rng)?;
        cuts.push(cut);
    }

    let key = Key::from_cuts(*spec, cuts)?;
    tracing::debug!(key = %key, "generated key");
    Ok(key)
}

/// Every cut in `window` with the wanted parity, ascending.
#[must_use]
pub fn candidates(window: CutRange, parity: Option<Parity>) -> Vec<Cut> {
    (window.min()..=window.max())
        .filter(|&cut| parity.is_none_or(|p| p.matches(cut)))
        .collect()
}

fn draw<R: Rng + ?Sized>(
    chamber: usize,
    window: CutRange,
    parity: Option<Parity>,
    rng: &mut R,
) -> Result<Cut, KeyError> {
    let unsatisfiable = || KeyError::Unsatisfiable {
        chamber,
        low: window.min(),
        high: window.max(),
        parity,
    };

    let pool = candidates(window, parity);
    if pool.is_empty() {
        tracing::debug!(chamber, %window, ?parity, "no candidate cut");
        return Err(unsatisfiable());
    }
    let index = Uniform::new(0, pool.len()).map_err(|_| unsatisfiable())?;
    Ok(pool[index.sample(rng)])
}
