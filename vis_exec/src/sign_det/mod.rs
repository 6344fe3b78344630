//! Sign detector module
//!
//! Classifies a road sign image by its colours. Signs with more red than blue along a scan line
//! are stop signs. Blue signs are turn signs, pointing towards the half of the sign holding the
//! most white pixels.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during SignDet operation.
#[derive(Debug, thiserror::Error)]
pub enum SignDetError {
    #[error("The sign's bounding box has no area ({0} x {1})")]
    EmptyBoundingBox(u32, u32),

    #[error(
        "The sign's bounding box ({bb_w} x {bb_h}) is larger than the sign image \
         ({img_w} x {img_h})"
    )]
    BoundingBoxOutsideImage {
        bb_w: u32,
        bb_h: u32,
        img_w: u32,
        img_h: u32,
    },

    #[error("Scan parameters must be non-zero")]
    InvalidScanParams,
}
