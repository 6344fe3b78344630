//! Parameters structure for PathDet

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::PathDetError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the path detector.
///
/// Any field missing from the parameter file takes its default value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathDetParams {
    /// Row of the mask to sample, as a fraction of the frame height from the top.
    pub sample_row_frac: f64,

    /// Distance searched on each side of the frame centre, as a fraction of the frame width.
    pub sample_semi_width_frac: f64,

    /// Number of samples taken along each side's search segment, including both ends.
    pub num_samples: usize,

    /// Distance from the frame centre at which the left boundary is assumed to be when no
    /// boundary pixel is found on the left.
    ///
    /// Units: pixels
    pub left_fallback_offset_px: f64,

    /// Distance from the frame centre at which the right boundary is assumed to be when no
    /// boundary pixel is found on the right.
    ///
    /// Units: pixels
    pub right_fallback_offset_px: f64,

    /// How the mask is sampled along the search segments.
    pub sampling: Sampling,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Mask sampling methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sampling {
    /// Value of the pixel nearest to the sample point.
    Nearest,

    /// Bilinear interpolation of the four pixels around the sample point.
    Bilinear,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for PathDetParams {
    fn default() -> Self {
        Self {
            sample_row_frac: 0.6,
            sample_semi_width_frac: 0.5,
            num_samples: 40,
            // The left/right asymmetry has never been calibrated, it is kept until it is.
            left_fallback_offset_px: 100.0,
            right_fallback_offset_px: 30.0,
            sampling: Sampling::Nearest,
        }
    }
}

impl Default for Sampling {
    fn default() -> Self {
        Sampling::Nearest
    }
}

impl PathDetParams {
    /// Check that the parameters describe a usable detector.
    pub fn validate(&self) -> Result<(), PathDetError> {
        if self.num_samples < 2 {
            return Err(PathDetError::TooFewSamples(self.num_samples));
        }

        if !(0.0..1.0).contains(&self.sample_row_frac) {
            return Err(PathDetError::InvalidSampleRowFrac(self.sample_row_frac));
        }

        if !(self.sample_semi_width_frac > 0.0 && self.sample_semi_width_frac.is_finite()) {
            return Err(PathDetError::InvalidSemiWidthFrac(self.sample_semi_width_frac));
        }

        for &offset in &[self.left_fallback_offset_px, self.right_fallback_offset_px] {
            if !(offset >= 0.0 && offset.is_finite()) {
                return Err(PathDetError::InvalidFallbackOffset(offset));
            }
        }

        Ok(())
    }
}
