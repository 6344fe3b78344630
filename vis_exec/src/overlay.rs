//! # Path detector debug overlay
//!
//! Draws the result of a path detection for display in a viewer. Rendering only reads the
//! detector's status report, it has no influence on what is sent to the state machine.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use nalgebra::Point2;

use crate::path_det::StatusReport;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Radius of the vehicle and road centre markers.
///
/// Units: pixels
pub const MARKER_RADIUS_PX: i32 = 4;

/// Colour of the vehicle reference marker
pub const VEHICLE_COLOUR: Rgb<u8> = Rgb([0, 0, 255]);

/// Colour of the line showing the sampled row
pub const SAMPLE_ROW_COLOUR: Rgb<u8> = Rgb([0, 255, 0]);

/// Colour of the road centre marker
pub const ROAD_CENTRE_COLOUR: Rgb<u8> = Rgb([255, 0, 0]);

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Render the overlay for one detection, an image the same size as the processed mask.
///
/// Markers partially or fully outside the frame are clipped.
pub fn render(report: &StatusReport) -> RgbImage {
    let mut img = RgbImage::new(report.frame_width as u32, report.frame_height as u32);

    draw_filled_circle_mut(
        &mut img,
        to_canvas(&report.vehicle_ref),
        MARKER_RADIUS_PX,
        VEHICLE_COLOUR,
    );

    let row = report.sample_row as f32;
    draw_line_segment_mut(
        &mut img,
        (0.0, row),
        (report.frame_width as f32, row),
        SAMPLE_ROW_COLOUR,
    );

    let road_centre = Point2::new(report.road_centre.x as f64, report.road_centre.y as f64);
    draw_filled_circle_mut(
        &mut img,
        to_canvas(&road_centre),
        MARKER_RADIUS_PX,
        ROAD_CENTRE_COLOUR,
    );

    img
}

/// Convert a point into imageproc's canvas coordinates.
fn to_canvas(point: &Point2<f64>) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}
