//! # Vision Executable Parameters
//!
//! This module provide parameters for the vision executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use vis_lib::{path_det::PathDetParams, sign_det::SignDetParams};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VisExecParams {

    /// Path detector parameters
    #[serde(default)]
    pub path_det: PathDetParams,

    /// Sign detector parameters
    #[serde(default)]
    pub sign_det: SignDetParams,
}
