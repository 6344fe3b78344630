//! # Detector Interface
//!
//! This module defines the interface structures which the detectors send to the state machine.
//! The state machine is expected to act on these alone, without keeping any history.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod path;
pub mod sign;
