use crate::constants::{FULL_TURN_DEGREES, SECTOR_COUNT, SECTOR_WIDTH_DEGREES};

/// Boundary indices (0..6) crossed while the wheel travels forward from
/// `previous_total` to `current_total`, both cumulative angles in degrees.
///
/// A boundary `b` counts as crossed when `previous_total < b <= current_total`,
/// so a step that lands exactly on a boundary reports it once and the next
/// step does not report it again. Large steps report every boundary passed.
pub fn crossed_boundaries(previous_total: f64, current_total: f64) -> impl Iterator<Item = usize> {
    let (first, last) = if current_total > previous_total {
        (
            (previous_total / SECTOR_WIDTH_DEGREES).floor() as i64 + 1,
            (current_total / SECTOR_WIDTH_DEGREES).floor() as i64,
        )
    } else {
        (1, 0)
    };

    (first..=last).map(|k| k.rem_euclid(SECTOR_COUNT as i64) as usize)
}

/// Detects a boundary crossing between two angles normalized to [0, 360).
///
/// The wheel only moves forward, so `current < previous` means the step
/// wrapped through 0°. When a single step passes several boundaries only the
/// last one is reported. The index names the boundary crossed, not the peg the
/// pointer touches; see [`peg_under_pointer`](super::resolver::peg_under_pointer).
pub fn detect_tick(previous: f64, current: f64) -> Option<usize> {
    let current = if current < previous {
        current + FULL_TURN_DEGREES
    } else {
        current
    };
    crossed_boundaries(previous, current).last()
}
