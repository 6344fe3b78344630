//! Module interfaces
//!
//! Each detector stage in `vis_exec` shall implement all the items in this
//! module.

// ---------------------------------------------------------------------------
// MODULE STAGE
// ---------------------------------------------------------------------------

/// A processing stage of the vision pipeline.
///
/// Stages hold only their parameters, never data from previous frames, so
/// processing takes `&self` and a single stage may be shared between threads
/// processing different frames.
pub trait Stage: Sized {
    /// Parameters required during initialisation.
    type Params;
    /// An error which can occur during initialisation.
    type InitError;

    /// Data required for processing a single frame.
    type InputData;
    /// Data produced by processing a single frame.
    type OutputData;
    /// A report on the internals of the processing of a single frame.
    type StatusReport;
    /// An error which can occur during processing.
    type ProcError;

    /// Initialise the stage.
    ///
    /// # Inputs
    /// - `params`: The parameters the stage shall use for all processing.
    ///
    /// # Outputs
    /// - On success the initialised stage.
    /// - On error an `InitError` instance.
    fn init(params: Self::Params) -> Result<Self, Self::InitError>;

    /// Main stage processing function.
    ///
    /// # Inputs
    /// - `input_data`: The data required for processing by the stage.
    ///
    /// # Outputs
    /// - On success a tuple of the output data and status report.
    /// - On error a `ProcError` instance.
    fn proc(&self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>;
}
