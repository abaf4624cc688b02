//! Combinating: turning change, master and control cuts into pin stacks.

use thiserror::Error;

use pinstack_types::{Key, PinStack, Segment, StackGeometry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinateError {
    #[error("keys differ in length (change {change}, master {master}, control {control})")]
    LengthMismatch {
        change: usize,
        master: usize,
        control: usize,
    },
    #[error("chamber {chamber}: {segment} pin would be {value}; cuts fall outside the stack geometry")]
    NegativePinLength {
        chamber: usize,
        segment: Segment,
        value: i16,
    },
}

/// Pin stacks for every chamber using [`StackGeometry::STANDARD`].
pub fn combinate(
    change: &Key,
    master: &Key,
    control: &Key,
) -> Result<Vec<PinStack>, CombinateError> {
    combinate_with(StackGeometry::STANDARD, change, master, control)
}

/// Pin stacks for every chamber.
///
/// Per chamber:
/// - bottom = min(change, master)
/// - master pin = max(change, master) - bottom
/// - build-up = control + control_offset - (bottom + master pin)
/// - top = total - (build-up + master pin + bottom)
pub fn combinate_with(
    geometry: StackGeometry,
    change: &Key,
    master: &Key,
    control: &Key,
) -> Result<Vec<PinStack>, CombinateError> {
    if change.len() != master.len() || change.len() != control.len() {
        return Err(CombinateError::LengthMismatch {
            change: change.len(),
            master: master.len(),
            control: control.len(),
        });
    }

    (0..change.len())
        .map(|chamber| {
            chamber_stack(
                geometry,
                chamber,
                change[chamber],
                master[chamber],
                control[chamber],
            )
        })
        .collect()
}

fn chamber_stack(
    geometry: StackGeometry,
    chamber: usize,
    change: u8,
    master: u8,
    control: u8,
) -> Result<PinStack, CombinateError> {
    let bottom = i16::from(change.min(master));
    let master_pin = i16::from(change.max(master)) - bottom;
    let build_up = i16::from(control) + i16::from(geometry.control_offset) - (bottom + master_pin);
    let top = i16::from(geometry.total) - (build_up + master_pin + bottom);

    let checked = |segment: Segment, value: i16| {
        u8::try_from(value).map_err(|_| CombinateError::NegativePinLength {
            chamber,
            segment,
            value,
        })
    };

    let stack = PinStack {
        top: checked(Segment::Top, top)?,
        build_up: checked(Segment::BuildUp, build_up)?,
        master: checked(Segment::Master, master_pin)?,
        bottom: checked(Segment::Bottom, bottom)?,
    };
    debug_assert_eq!(stack.total(), u32::from(geometry.total));
    Ok(stack)
}
