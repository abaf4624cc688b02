//! Lock family presets.

use std::fmt;
use std::str::FromStr;

use crate::constraints::{CutRange, Macs, SpecError};

const SFIC_CUTS: CutRange = CutRange::from_bounds(0, 9);
const KWIKSET_CUTS: CutRange = CutRange::from_bounds(1, 7);

/// Supported lock families. Each fixes a cut range and MACS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockProfile {
    /// Small-format interchangeable core, cuts 0-9.
    #[default]
    Sfic,
    Kwikset,
}

impl LockProfile {
    pub const ALL: [LockProfile; 2] = [LockProfile::Sfic, LockProfile::Kwikset];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LockProfile::Sfic => "sfic",
            LockProfile::Kwikset => "kwikset",
        }
    }

    #[must_use]
    pub const fn range(self) -> CutRange {
        match self {
            LockProfile::Sfic => SFIC_CUTS,
            LockProfile::Kwikset => KWIKSET_CUTS,
        }
    }

    #[must_use]
    pub const fn macs(self) -> Macs {
        match self {
            LockProfile::Sfic => Macs::new(9),
            LockProfile::Kwikset => Macs::new(4),
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sfic" => Some(LockProfile::Sfic),
            "kwikset" => Some(LockProfile::Kwikset),
            _ => None,
        }
    }
}

impl fmt::Display for LockProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockProfile {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SpecError::UnknownProfile(s.to_string()))
    }
}
