//! Heading calculation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Calculate the angle between the vertical line through `reference` and the line from
/// `reference` to `target`, in image coordinates (y increasing downwards).
///
/// A positive angle means the vehicle shall turn counter-clockwise (the target is to the left), a
/// negative angle clockwise. A target on top of the reference gives zero.
///
/// Units: degrees
pub fn heading_deg(target: &Point2<f64>, reference: &Point2<f64>) -> f64 {
    let delta = target - reference;

    // atan2(0, -0) is pi rather than zero
    if delta.x == 0.0 && delta.y == 0.0 {
        return 0.0;
    }

    -delta.x.atan2(-delta.y).to_degrees()
}
