use std::num::NonZeroU32;

use crate::geometry::Dimensions;

/// Output dimensions for a resize request.
///
/// Both axes given: exact resize, aspect ratio not preserved. One axis
/// given: the other is derived from the current aspect ratio with round().
/// Neither: identity. Non-positive requests are unrepresentable here; the
/// caller rejects them before constructing the `NonZeroU32` values.
#[must_use]
pub fn scaled_dimensions(
    current: Dimensions,
    width: Option<NonZeroU32>,
    height: Option<NonZeroU32>,
) -> Dimensions {
    match (width, height) {
        (Some(w), Some(h)) => Dimensions::new(w.get(), h.get()),
        (Some(w), None) => Dimensions::new(
            w.get(),
            scale_axis(current.height, w.get(), current.width),
        ),
        (None, Some(h)) => Dimensions::new(
            scale_axis(current.width, h.get(), current.height),
            h.get(),
        ),
        (None, None) => current,
    }
}

fn scale_axis(other_axis: u32, target: u32, scaled_axis: u32) -> u32 {
    if scaled_axis == 0 {
        return other_axis;
    }
    let scaled = (f64::from(other_axis) * f64::from(target) / f64::from(scaled_axis)).round();
    (scaled as u32).max(1)
}
