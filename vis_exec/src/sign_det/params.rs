//! Parameters structure for SignDet

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::SignDetError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the sign detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignDetParams {
    /// A pixel is white when all of its channels are strictly above this value.
    pub white_threshold: u8,

    /// The colour scan runs along row `h / scan_row_divisor` of the sign.
    pub scan_row_divisor: u32,

    /// Only every `scan_col_step`th column is used in the colour scan.
    pub scan_col_step: u32,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for SignDetParams {
    fn default() -> Self {
        Self {
            white_threshold: 150,
            scan_row_divisor: 3,
            scan_col_step: 3,
        }
    }
}

impl SignDetParams {
    /// Check that the parameters describe a usable detector.
    pub fn validate(&self) -> Result<(), SignDetError> {
        if self.scan_row_divisor == 0 || self.scan_col_step == 0 {
            return Err(SignDetError::InvalidScanParams);
        }

        Ok(())
    }
}
