//! Pointer tracking: turns one cursor position into new segment endpoints and
//! colours for every grid point.

use crate::field::FlowField;
use crate::geometry::{Segment, Vec2};
use crate::ramp::{colormap_ratio, ramp_color};

/// Apply a pointer move to every point of `field`.
///
/// Runs to completion for all points before returning. Non-finite positions
/// leave the field untouched.
pub fn track(field: &mut FlowField, cursor: Vec2) -> bool {
    if !cursor.is_finite() {
        log::debug!("ignoring pointer move to non-finite position {:?}", cursor);
        return false;
    }

    let max_dist = field.viewport.diagonal();
    let length = field.deflect_length;
    let points = field.lattice.points();

    for ((point, vector), segment) in points
        .iter()
        .zip(field.vectors.iter_mut())
        .zip(field.segments.iter_mut())
    {
        // +dx: cursor right of the point, +dy: cursor below it
        let delta = cursor - *point;
        let dist = delta.length();
        // atan2(0, 0) == 0, so a cursor on the point gives a horizontal segment
        let angle = delta.angle();

        vector.offset = delta;
        vector.color = ramp_color(colormap_ratio(dist, max_dist));
        *segment = Segment::centered(*point, angle, length);
    }

    field.cursor = Some(cursor);
    true
}
