//! Text rendering of a combination as a pinning chart.

use pinstack_core::{Combination, KeySet};
use pinstack_types::{PinStack, Segment};

const CELL_WIDTH: usize = 4;
const EMPTY_CELL: &str = "-";

/// Key summary followed by the pin chart.
#[must_use]
pub fn render_text(combination: &Combination) -> String {
    let mut out = key_summary(&combination.keys);
    out.push_str(&pin_chart(&combination.stacks));
    out
}

#[must_use]
pub fn key_summary(keys: &KeySet) -> String {
    format!(
        "Change key:  {}\nControl key: {}\nMaster key:  {}\n",
        keys.change, keys.control, keys.master
    )
}

/// One row per segment, one column per chamber.
///
/// Empty top, build-up and master pins print as `-`. Bottom pins always print
/// their length.
#[must_use]
pub fn pin_chart(stacks: &[PinStack]) -> String {
    let mut out = String::new();
    for segment in Segment::ALL {
        let cells: String = stacks
            .iter()
            .map(|stack| format!("{:>CELL_WIDTH$} ", cell(segment, stack.get(segment))))
            .collect();
        let row = format!("{}  {cells}", segment.abbrev());
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn cell(segment: Segment, value: u8) -> String {
    if value == 0 && segment != Segment::Bottom {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}
