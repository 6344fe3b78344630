//! Path detector module
//!
//! A path is detected by sampling a single row towards the bottom of the binarised mask. The
//! first boundary pixel on either side of the frame centre is found, the road centre is taken
//! half way between them, and the heading is the angle between straight ahead and the line from
//! the vehicle to that road centre.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod boundary;
mod centre;
mod heading;
mod params;
mod profile;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use boundary::*;
pub use centre::*;
pub use heading::*;
pub use params::*;
pub use profile::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during PathDet operation.
#[derive(Debug, thiserror::Error)]
pub enum PathDetError {
    #[error("At least 2 samples are needed along a profile, got {0}")]
    TooFewSamples(usize),

    #[error("The sample row fraction must be in [0, 1), got {0}")]
    InvalidSampleRowFrac(f64),

    #[error("The sample semi-width fraction must be positive, got {0}")]
    InvalidSemiWidthFrac(f64),

    #[error("Fallback offsets must be finite and non-negative, got {0}")]
    InvalidFallbackOffset(f64),
}
