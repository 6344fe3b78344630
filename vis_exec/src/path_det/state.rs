//! Implementations for the PathDet state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use comms_if::eqpt::path::PathDict;
use log::debug;
use nalgebra::Point2;
use num_traits::ToPrimitive;
use serde::Serialize;

// Internal
use super::{
    find_contacts, heading_deg, road_centre,
    Contacts, PathDetError, PathDetParams,
};
use crate::mask::Mask;
use util::module::Stage;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Path detector.
///
/// Holds nothing but its parameters, every frame is processed independently of the others.
#[derive(Debug, Clone)]
pub struct PathDet {
    params: PathDetParams,
}

/// Status report for PathDet processing.
///
/// Contains the intermediate geometry of one detection, used for the debug overlay and the
/// archives. Never sent to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusReport {
    /// Height of the processed mask.
    ///
    /// Units: pixels
    pub frame_height: usize,

    /// Width of the processed mask.
    ///
    /// Units: pixels
    pub frame_width: usize,

    /// The row which was searched for boundaries.
    pub sample_row: usize,

    /// The point the boundary search started from, the centre of the sampled row.
    pub search_origin: Point2<f64>,

    /// The assumed position of the vehicle, the bottom centre of the frame.
    pub vehicle_ref: Point2<f64>,

    /// Boundaries found either side of the search origin.
    pub contacts: Contacts,

    /// Detected road centre.
    pub road_centre: Point2<i64>,

    /// Calculated heading, identical to the one in the output `PathDict`.
    ///
    /// Units: degrees
    pub heading_deg: f64,
}

/// A flattened status report, one row of the path detector archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchRecord<'a> {
    pub frame: &'a str,
    pub heading_deg: f64,
    pub sample_row: usize,
    pub left_x: f64,
    pub left_is_fallback: bool,
    pub right_x: f64,
    pub right_is_fallback: bool,
    pub road_centre_x: i64,
    pub road_centre_y: i64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Stage for PathDet {
    type Params = PathDetParams;
    type InitError = PathDetError;

    type InputData = Mask<u8>;
    type OutputData = PathDict;
    type StatusReport = StatusReport;
    type ProcError = PathDetError;

    /// Initialise the path detector, rejecting invalid parameters.
    fn init(params: Self::Params) -> Result<Self, Self::InitError> {
        params.validate()?;

        Ok(Self { params })
    }

    fn proc(&self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        self.detect(input_data)
    }
}

impl PathDet {
    /// The parameters the detector was initialised with.
    pub fn params(&self) -> &PathDetParams {
        &self.params
    }

    /// Detect the path in a mask of any cell type.
    ///
    /// Returns the data for the state machine and a report of the intermediate geometry.
    pub fn detect<T>(&self, mask: &Mask<T>) -> Result<(PathDict, StatusReport), PathDetError>
    where
        T: Copy + ToPrimitive,
    {
        let height = mask.height();
        let width = mask.width();

        // Horizontal centre of the frame and the row to search, both on the pixel grid
        let centre_x = (width / 2) as f64;
        let sample_row = ((height as f64 * self.params.sample_row_frac) as usize).min(height - 1);

        let search_origin = Point2::new(centre_x, sample_row as f64);
        let vehicle_ref = Point2::new(centre_x, height as f64);

        let semi_width_px = (width as f64 * self.params.sample_semi_width_frac).floor();

        let contacts = find_contacts(mask, &search_origin, semi_width_px, &self.params)?;

        let road_centre = road_centre(&contacts.left.point, &contacts.right.point);

        let target = Point2::new(road_centre.x as f64, road_centre.y as f64);
        let heading = heading_deg(&target, &vehicle_ref);

        debug!(
            "Row {}: left {:?}, right {:?}, centre {:?}, heading {:.3} deg",
            sample_row,
            contacts.left,
            contacts.right,
            road_centre,
            heading
        );

        let report = StatusReport {
            frame_height: height,
            frame_width: width,
            sample_row,
            search_origin,
            vehicle_ref,
            contacts,
            road_centre,
            heading_deg: heading,
        };

        Ok((PathDict { heading }, report))
    }
}

impl StatusReport {
    /// Flatten the report into an archive record for the given frame.
    pub fn to_arch_record<'a>(&self, frame: &'a str) -> ArchRecord<'a> {
        ArchRecord {
            frame,
            heading_deg: self.heading_deg,
            sample_row: self.sample_row,
            left_x: self.contacts.left.point.x,
            left_is_fallback: self.contacts.left.is_fallback,
            right_x: self.contacts.right.point.x,
            right_is_fallback: self.contacts.right.is_fallback,
            road_centre_x: self.road_centre.x,
            road_centre_y: self.road_centre.y,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{s, Array2};

    fn path_det() -> PathDet {
        PathDet::init(PathDetParams::default()).unwrap()
    }

    /// A 100 x 100 mask with the given columns marked on the given rows.
    fn mask_with_columns(cols: &[usize], rows: std::ops::Range<usize>) -> Mask<u8> {
        let mut data = Array2::zeros((100, 100));
        for y in rows {
            for &x in cols {
                data[[y, x]] = 1;
            }
        }
        Mask::new(data).unwrap()
    }

    #[test]
    fn test_init_rejects_invalid_params() {
        assert!(matches!(
            PathDet::init(PathDetParams { num_samples: 0, ..Default::default() }),
            Err(PathDetError::TooFewSamples(0))
        ));
    }

    #[test]
    fn test_symmetric_road() {
        // Boundaries three pixels wide around x = 30 and x = 70. With 40 samples over 50 pixels
        // the scans step over single pixel columns at exactly 30 and 70.
        let mask = mask_with_columns(&[29, 30, 31, 69, 70, 71], 0..100);
        let (dict, report) = path_det().proc(&mask).unwrap();

        assert_eq!(report.sample_row, 60);
        assert_eq!(report.search_origin, Point2::new(50.0, 60.0));
        assert_eq!(report.vehicle_ref, Point2::new(50.0, 100.0));

        assert!(!report.contacts.left.is_fallback);
        assert!(!report.contacts.right.is_fallback);
        assert_relative_eq!(report.contacts.left.point.x, 50.0 - 15.0 * 50.0 / 39.0, epsilon = 1e-9);
        assert_relative_eq!(report.contacts.right.point.x, 50.0 + 15.0 * 50.0 / 39.0, epsilon = 1e-9);

        assert_eq!(report.road_centre, Point2::new(50, 60));
        assert_eq!(dict.heading, 0.0);
        assert_eq!(report.heading_deg, dict.heading);
    }

    #[test]
    fn test_single_pixel_boundaries_are_stepped_over() {
        // Nearest samples either side land on 31 and 29, then 69 and 71, so single pixel
        // boundaries at 30 and 70 are never seen and both sides fall back.
        let mut data = Array2::zeros((100, 100));
        data[[60, 30]] = 1u8;
        data[[60, 70]] = 1u8;
        let mask = Mask::new(data).unwrap();

        let (dict, report) = path_det().proc(&mask).unwrap();

        assert!(report.contacts.left.is_fallback && report.contacts.right.is_fallback);
        assert_eq!(report.contacts.left.point, Point2::new(-50.0, 60.0));
        assert_eq!(report.contacts.right.point, Point2::new(80.0, 60.0));
        assert_eq!(report.road_centre, Point2::new(15, 60));
        assert_relative_eq!(dict.heading, 41.185925165709655, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_row_falls_back() {
        // Evidence everywhere except the sampled row
        let mut data = Array2::ones((100, 100));
        data.row_mut(60).fill(0u8);
        let mask = Mask::new(data).unwrap();

        let (dict, report) = path_det().proc(&mask).unwrap();

        assert_eq!(report.contacts.left.point, Point2::new(-50.0, 60.0));
        assert_eq!(report.contacts.right.point, Point2::new(80.0, 60.0));
        assert!(report.contacts.left.is_fallback && report.contacts.right.is_fallback);
        assert_eq!(report.road_centre, Point2::new(15, 60));

        // Centre is 35 pixels left of and 40 pixels above the vehicle
        assert_relative_eq!(dict.heading, (35.0f64).atan2(40.0).to_degrees(), epsilon = 1e-12);
        assert!(dict.heading > 0.0);
    }

    #[test]
    fn test_road_bending() {
        // Only the right boundary visible, near the centre: road centre moves left
        let mask = mask_with_columns(&[60], 50..70);
        let (dict, report) = path_det().proc(&mask).unwrap();
        assert!(report.contacts.left.is_fallback);
        assert!(!report.contacts.right.is_fallback);
        assert!(dict.heading > 0.0);

        // Only the left boundary visible, near the centre: road centre moves right
        let mask = mask_with_columns(&[45], 50..70);
        let (dict, report) = path_det().proc(&mask).unwrap();
        assert!(!report.contacts.left.is_fallback);
        assert!(report.contacts.right.is_fallback);
        assert!(dict.heading < 0.0);
    }

    #[test]
    fn test_non_square_and_typed_masks() {
        let mut data = Array2::<f32>::zeros((480, 640));
        data.slice_mut(s![.., ..=100]).fill(0.5);
        data.slice_mut(s![.., 600..]).fill(1.0);
        let mask = Mask::new(data).unwrap();

        let (_, report) = path_det().detect(&mask).unwrap();

        assert_eq!(report.sample_row, 288);
        assert_eq!(report.search_origin, Point2::new(320.0, 288.0));
        assert_eq!(report.vehicle_ref, Point2::new(320.0, 480.0));
        assert!(!report.contacts.left.is_fallback);
        assert!(!report.contacts.right.is_fallback);
    }

    #[test]
    fn test_single_pixel_mask() {
        let mask = Mask::new(Array2::<u8>::zeros((1, 1))).unwrap();
        let (dict, report) = path_det().proc(&mask).unwrap();

        assert_eq!(report.sample_row, 0);
        assert_eq!(report.contacts.left.point, Point2::new(-100.0, 0.0));
        assert_eq!(report.contacts.right.point, Point2::new(30.0, 0.0));
        assert!(dict.heading.is_finite());
    }

    #[test]
    fn test_deterministic() {
        let mask = mask_with_columns(&[12, 33, 81], 40..80);
        let det = path_det();

        let (first, first_report) = det.proc(&mask).unwrap();
        for _ in 0..10 {
            let (dict, report) = det.proc(&mask).unwrap();
            assert_eq!(dict.heading.to_bits(), first.heading.to_bits());
            assert_eq!(report, first_report);
        }
    }

    #[test]
    fn test_frames_in_parallel() {
        let det = std::sync::Arc::new(path_det());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let det = det.clone();
                std::thread::spawn(move || {
                    let mask = mask_with_columns(&[20 + i, 75 - i], 0..100);
                    (mask.clone(), det.proc(&mask).unwrap().0)
                })
            })
            .collect();

        for handle in handles {
            let (mask, dict) = handle.join().unwrap();
            assert_eq!(det.proc(&mask).unwrap().0, dict);
        }
    }

    #[test]
    fn test_arch_record() {
        let mask = mask_with_columns(&[29, 30, 31], 0..100);
        let (_, report) = path_det().proc(&mask).unwrap();
        let record = report.to_arch_record("frame_0001.png");

        assert_eq!(record.frame, "frame_0001.png");
        assert_eq!(record.sample_row, 60);
        assert!(!record.left_is_fallback);
        assert!(record.right_is_fallback);
        assert_eq!(record.right_x, 80.0);
        assert_eq!(record.heading_deg, report.heading_deg);
    }
}
