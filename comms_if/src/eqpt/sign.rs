//! # Sign Detector Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Sign information sent by the sign detector to the state machine.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SignDict {
    /// The recognised sign
    pub sign: SignType,

    /// Left edge of the sign's bounding box in the original camera view.
    ///
    /// Units: pixels
    pub x0: u32,

    /// Top edge of the sign's bounding box in the original camera view.
    ///
    /// Units: pixels
    pub y0: u32,

    /// Width of the sign's bounding box.
    ///
    /// Units: pixels
    pub w: u32,

    /// Height of the sign's bounding box.
    ///
    /// Units: pixels
    pub h: u32,
}

/// Bounding box of a sign in the original camera view.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub w: u32,
    pub h: u32,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Signs which can be recognised
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignType {
    /// Stop sign
    Stop,

    /// Turn left sign
    TurnLeft,

    /// Turn right sign
    TurnRight,

    /// The image is none of the recognised signs
    None,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SignDict {
    /// Build the dictionary for a sign found inside the given bounding box.
    pub fn new(sign: SignType, bb: BoundingBox) -> Self {
        Self {
            sign,
            x0: bb.x0,
            y0: bb.y0,
            w: bb.w,
            h: bb.h,
        }
    }
}
