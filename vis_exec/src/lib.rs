//! # Vision library.
//!
//! This library allows other crates in the workspace to access the detectors defined inside the
//! vision executable.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Binarised mask input - the frames the path detector works on
pub mod mask;

/// Path detector - estimates the heading towards the road centre from a boundary mask
pub mod path_det;

/// Sign detector - classifies road signs from their colour
pub mod sign_det;

/// Debug overlay - draws what the path detector found
#[cfg(feature = "overlay")]
pub mod overlay;
