//! Manufacturer constraints on key cuts.
//!
//! A [`KeySpec`] bundles the three constraints every key in a run shares:
//! pin count, inclusive cut-depth range, and the Maximum Adjacent Cut
//! Specification. Each is valid by construction.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single cut depth.
pub type Cut = u8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("pin count must be at least 1")]
    NoPins,
    #[error("pin count {pins} exceeds the maximum of {max}")]
    TooManyPins { pins: usize, max: usize },
    #[error("cut range {min}-{max} is inverted (min > max)")]
    InvertedRange { min: Cut, max: Cut },
    #[error("invalid cut range {0:?}: expected MIN-MAX, e.g. 0-9")]
    MalformedRange(String),
    #[error("unknown lock type {0:?} (expected sfic or kwikset)")]
    UnknownProfile(String),
}

/// Inclusive range of allowed cut depths.
///
/// Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CutRange {
    min: Cut,
    max: Cut,
}

impl CutRange {
    pub const fn new(min: Cut, max: Cut) -> Result<Self, SpecError> {
        if min > max {
            return Err(SpecError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range for compile-time constants.
    ///
    /// # Panics
    ///
    /// If `min > max`. In a `const` item that is a compile error.
    #[must_use]
    pub const fn from_bounds(min: Cut, max: Cut) -> Self {
        assert!(min <= max, "inverted cut range");
        Self { min, max }
    }

    /// Whether some legal cut needs more than one decimal digit.
    #[must_use]
    pub const fn is_multi_digit(self) -> bool {
        self.max > 9
    }

    #[must_use]
    pub const fn min(self) -> Cut {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> Cut {
        self.max
    }

    #[must_use]
    pub const fn contains(self, cut: Cut) -> bool {
        cut >= self.min && cut <= self.max
    }

    /// Intersect with the MACS window around `previous`.
    ///
    /// The result is never empty: `previous` itself lies in both ranges
    /// whenever it was a legal cut.
    #[must_use]
    pub fn window(self, previous: Cut, macs: Macs) -> Self {
        let low = previous.saturating_sub(macs.get()).max(self.min);
        let high = previous.saturating_add(macs.get()).min(self.max);
        Self {
            min: low,
            max: high.max(low),
        }
    }
}

impl fmt::Display for CutRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for CutRange {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SpecError::MalformedRange(s.to_string());
        let (min, max) = s.trim().split_once('-').ok_or_else(malformed)?;
        let min = min.trim().parse::<Cut>().map_err(|_| malformed())?;
        let max = max.trim().parse::<Cut>().map_err(|_| malformed())?;
        Self::new(min, max)
    }
}

/// Maximum Adjacent Cut Specification: the largest allowed depth difference
/// between neighboring chambers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Macs(u8);

impl Macs {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn allows(self, a: Cut, b: Cut) -> bool {
        a.abs_diff(b) <= self.0
    }
}

impl fmt::Display for Macs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parity of a cut depth (`cut % 2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(cut: Cut) -> Self {
        if cut % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    /// `0` for even, `1` for odd.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }

    #[must_use]
    pub const fn matches(self, cut: Cut) -> bool {
        cut % 2 == self.bit()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elementwise parity of a cut sequence.
#[must_use]
pub fn parity_of(cuts: &[Cut]) -> Vec<Parity> {
    cuts.iter().copied().map(Parity::of).collect()
}

/// Constraints shared by every key in one combinating run.
///
/// Invariant: `1 <= pins <= MAX_PINS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pins: usize,
    range: CutRange,
    macs: Macs,
}

impl KeySpec {
    /// Upper bound on the pin count. Real cores stop well below this.
    pub const MAX_PINS: usize = 32;

    pub fn new(pins: usize, range: CutRange, macs: Macs) -> Result<Self, SpecError> {
        if pins == 0 {
            return Err(SpecError::NoPins);
        }
        if pins > Self::MAX_PINS {
            return Err(SpecError::TooManyPins {
                pins,
                max: Self::MAX_PINS,
            });
        }
        Ok(Self { pins, range, macs })
    }

    #[must_use]
    pub const fn pins(&self) -> usize {
        self.pins
    }

    #[must_use]
    pub const fn range(&self) -> CutRange {
        self.range
    }

    #[must_use]
    pub const fn macs(&self) -> Macs {
        self.macs
    }
}
