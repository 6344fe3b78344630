//! Implementations for the SignDet state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use comms_if::eqpt::sign::{BoundingBox, SignDict, SignType};
use image::{Rgb, RgbImage};
use log::debug;
use serde::Serialize;

// Internal
use super::{SignDetError, SignDetParams};
use util::module::Stage;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// First row and column considered by the scans, the sign's outermost pixels are skipped.
const SCAN_START: u32 = 1;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Sign detector.
#[derive(Debug, Clone)]
pub struct SignDet {
    params: SignDetParams,
}

/// Input data to the sign detector.
#[derive(Debug, Clone)]
pub struct InputData {
    /// Colour image of the sign, cropped from the camera view
    pub image: RgbImage,

    /// Where the sign was found in the camera view
    pub bb: BoundingBox,
}

/// Status report for SignDet processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Number of scanned pixels more red than blue
    pub red_count: u32,

    /// Number of scanned pixels more blue than red
    pub blue_count: u32,

    /// White pixels in the left half, only counted for blue signs
    pub white_left: Option<u32>,

    /// White pixels in the right half, only counted for blue signs
    pub white_right: Option<u32>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Stage for SignDet {
    type Params = SignDetParams;
    type InitError = SignDetError;

    type InputData = InputData;
    type OutputData = SignDict;
    type StatusReport = StatusReport;
    type ProcError = SignDetError;

    fn init(params: Self::Params) -> Result<Self, Self::InitError> {
        params.validate()?;

        Ok(Self { params })
    }

    /// Classify the sign.
    fn proc(&self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let InputData { image, bb } = input_data;

        self.check_bounding_box(image, bb)?;

        let mut report = StatusReport::default();

        // Compare red and blue along one row
        let scan_row = bb.h / self.params.scan_row_divisor;
        for x in (SCAN_START..bb.w).step_by(self.params.scan_col_step as usize) {
            let Rgb([r, _, b]) = *image.get_pixel(x, scan_row);

            if r > b {
                report.red_count += 1;
            }
            else if b > r {
                report.blue_count += 1;
            }
        }

        let sign = if report.red_count > report.blue_count {
            SignType::Stop
        }
        else if report.red_count < report.blue_count {
            let half = bb.w / 2;
            let white_left = self.count_white(image, SCAN_START..half, SCAN_START..bb.h);
            let white_right = self.count_white(image, half..bb.w, SCAN_START..bb.h);

            report.white_left = Some(white_left);
            report.white_right = Some(white_right);

            // The arrow is white, and is thicker on the side it points to
            if white_right > white_left {
                SignType::TurnRight
            }
            else {
                SignType::TurnLeft
            }
        }
        else {
            SignType::None
        };

        debug!("Sign {}x{}: {:?} ({:?})", bb.w, bb.h, sign, report);

        Ok((SignDict::new(sign, *bb), report))
    }
}

impl SignDet {
    /// The bounding box must have an area and fit inside the sign image.
    fn check_bounding_box(&self, image: &RgbImage, bb: &BoundingBox) -> Result<(), SignDetError> {
        if bb.w == 0 || bb.h == 0 {
            return Err(SignDetError::EmptyBoundingBox(bb.w, bb.h));
        }

        let (img_w, img_h) = image.dimensions();
        if bb.w > img_w || bb.h > img_h {
            return Err(SignDetError::BoundingBoxOutsideImage {
                bb_w: bb.w,
                bb_h: bb.h,
                img_w,
                img_h,
            });
        }

        Ok(())
    }

    /// Count the white pixels in the given columns and rows.
    fn count_white(
        &self,
        image: &RgbImage,
        cols: std::ops::Range<u32>,
        rows: std::ops::Range<u32>,
    ) -> u32 {
        let threshold = self.params.white_threshold;
        let mut count = 0;

        for y in rows {
            for x in cols.clone() {
                if image.get_pixel(x, y).0.iter().all(|&c| c > threshold) {
                    count += 1;
                }
            }
        }

        count
    }
}
