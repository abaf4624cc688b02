//! Key value type: a validated sequence of cut depths.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::constraints::{Cut, KeySpec, Macs, Parity, parity_of};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("expected {expected} pins, got {actual} pins")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("chamber {chamber}: {found:?} is not a cut depth")]
    InvalidCut { chamber: usize, found: String },
    #[error("chamber {chamber}: cut {cut} outside range {min}-{max}")]
    CutOutOfRange {
        chamber: usize,
        cut: Cut,
        min: Cut,
        max: Cut,
    },
    #[error("pins ({chamber},{previous}): |{cut}-{previous_cut}| > MACS ({macs})")]
    MacsViolation {
        chamber: usize,
        previous: usize,
        cut: Cut,
        previous_cut: Cut,
        macs: u8,
    },
    #[error("chamber {chamber}: cut {cut} is not {expected}")]
    ParityViolation {
        chamber: usize,
        cut: Cut,
        expected: Parity,
    },
    #[error("chamber {chamber}: no {} cut in {low}-{high}", .parity.map_or("legal", Parity::as_str))]
    Unsatisfiable {
        chamber: usize,
        low: Cut,
        high: Cut,
        parity: Option<Parity>,
    },
}

/// Separates cuts in the written form of keys whose range goes past 9.
pub const CUT_SEPARATOR: char = '.';

fn parse_cut(token: &str) -> Option<Cut> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Check every adjacent pair of cuts against `macs`.
///
/// Fails at the first violating pair, reporting `(i, i-1)` and both values.
pub fn validate_macs(cuts: &[Cut], macs: Macs) -> Result<(), KeyError> {
    for (i, pair) in cuts.windows(2).enumerate() {
        let (previous_cut, cut) = (pair[0], pair[1]);
        if !macs.allows(previous_cut, cut) {
            return Err(KeyError::MacsViolation {
                chamber: i + 1,
                previous: i,
                cut,
                previous_cut,
                macs: macs.get(),
            });
        }
    }
    Ok(())
}

/// A key whose cuts satisfy the length, range and MACS constraints of its
/// [`KeySpec`].
///
/// Keys are immutable once built. Construct one with [`Key::parse`] (a
/// literal digit string, tip to bow) or [`Key::from_cuts`]; random keys come
/// from `pinstack_core::generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    cuts: Vec<Cut>,
    spec: KeySpec,
}

impl Key {
    /// Parse a literal such as `"13782"`, tip to bow.
    ///
    /// One digit per chamber, or cuts separated by `.` (`"12.11.8"`), which
    /// is how keys with cuts above 9 are written. Checks run in order:
    /// length, digits, range, MACS. Parity is not checked here; see
    /// [`Key::check_parity`].
    pub fn parse(spec: KeySpec, literal: &str) -> Result<Self, KeyError> {
        let literal = literal.trim();
        let tokens: Vec<&str> = if literal.contains(CUT_SEPARATOR) {
            literal.split(CUT_SEPARATOR).collect()
        } else {
            literal
                .char_indices()
                .map(|(i, c)| &literal[i..i + c.len_utf8()])
                .collect()
        };
        if tokens.len() != spec.pins() {
            return Err(KeyError::LengthMismatch {
                expected: spec.pins(),
                actual: tokens.len(),
            });
        }

        let cuts = tokens
            .iter()
            .enumerate()
            .map(|(chamber, token)| {
                parse_cut(token).ok_or_else(|| KeyError::InvalidCut {
                    chamber,
                    found: (*token).to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cuts(spec, cuts)
    }

    /// Build a key from already-decoded cuts, checking length, range and MACS.
    pub fn from_cuts(spec: KeySpec, cuts: Vec<Cut>) -> Result<Self, KeyError> {
        if cuts.len() != spec.pins() {
            return Err(KeyError::LengthMismatch {
                expected: spec.pins(),
                actual: cuts.len(),
            });
        }

        let range = spec.range();
        if let Some((chamber, &cut)) = cuts.iter().enumerate().find(|(_, c)| !range.contains(**c)) {
            return Err(KeyError::CutOutOfRange {
                chamber,
                cut,
                min: range.min(),
                max: range.max(),
            });
        }

        validate_macs(&cuts, spec.macs())?;
        Ok(Self { cuts, spec })
    }

    #[must_use]
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    #[must_use]
    pub fn spec(&self) -> KeySpec {
        self.spec
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Always false: a [`KeySpec`] has at least one pin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    #[must_use]
    pub fn parity(&self) -> Vec<Parity> {
        parity_of(&self.cuts)
    }

    /// Verify that every cut matches `pattern` chamber by chamber.
    pub fn check_parity(&self, pattern: &[Parity]) -> Result<(), KeyError> {
        if pattern.len() != self.cuts.len() {
            return Err(KeyError::LengthMismatch {
                expected: self.cuts.len(),
                actual: pattern.len(),
            });
        }
        for (chamber, (&cut, &expected)) in self.cuts.iter().zip(pattern).enumerate() {
            if !expected.matches(cut) {
                return Err(KeyError::ParityViolation {
                    chamber,
                    cut,
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Key {
    type Output = Cut;

    fn index(&self, chamber: usize) -> &Self::Output {
        &self.cuts[chamber]
    }
}

/// Digits run together for 0-9 ranges (`"13782"`). Wider ranges separate
/// cuts with [`CUT_SEPARATOR`] (`"12.11.8"`). Either form parses back.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separated = self.spec.range().is_multi_digit();
        for (chamber, cut) in self.cuts.iter().enumerate() {
            if separated && chamber > 0 {
                write!(f, "{CUT_SEPARATOR}")?;
            }
            write!(f, "{cut}")?;
        }
        Ok(())
    }
}

/// Keys serialize as their cut string.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
