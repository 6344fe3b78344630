//! # Communications interface crate.
//!
//! Provides the structures handed from the vision detectors to the state
//! machine.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Detector output definitions (path and sign)
pub mod eqpt;
