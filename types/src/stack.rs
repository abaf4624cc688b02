//! Pin stack segmentation for one chamber.

use std::fmt;

use serde::Serialize;

/// The four pin segments of a chamber, ordered from the top (spring side)
/// down to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Top,
    BuildUp,
    Master,
    Bottom,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::Top,
        Segment::BuildUp,
        Segment::Master,
        Segment::Bottom,
    ];

    /// Two-letter row label used in pinning charts.
    #[must_use]
    pub fn abbrev(self) -> &'static str {
        match self {
            Segment::Top => "TP",
            Segment::BuildUp => "BU",
            Segment::Master => "MP",
            Segment::Bottom => "BP",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Top => "top",
            Segment::BuildUp => "build-up",
            Segment::Master => "master",
            Segment::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed dimensions of an interchangeable core chamber, in cut-depth units.
///
/// `total` is the full stack height every chamber must fill. The control
/// shear line sits `control_offset` units above the operating shear line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackGeometry {
    pub total: u8,
    pub control_offset: u8,
}

impl StackGeometry {
    /// Geometry of the 0-9 depth numbering used by SFIC cores.
    pub const STANDARD: StackGeometry = StackGeometry {
        total: 23,
        control_offset: 10,
    };
}

impl Default for StackGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Segment lengths for one chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PinStack {
    pub top: u8,
    pub build_up: u8,
    pub master: u8,
    pub bottom: u8,
}

impl PinStack {
    #[must_use]
    pub const fn get(&self, segment: Segment) -> u8 {
        match segment {
            Segment::Top => self.top,
            Segment::BuildUp => self.build_up,
            Segment::Master => self.master,
            Segment::Bottom => self.bottom,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.top as u32 + self.build_up as u32 + self.master as u32 + self.bottom as u32
    }
}
