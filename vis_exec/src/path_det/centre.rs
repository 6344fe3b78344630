//! Road centre estimation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;
use util::maths::round_half_up;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// The road centre is the midpoint of the left and right boundary contacts, snapped to the
/// pixel grid.
pub fn road_centre(left: &Point2<f64>, right: &Point2<f64>) -> Point2<i64> {
    let mid = nalgebra::center(left, right);

    Point2::new(round_half_up(mid.x) as i64, round_half_up(mid.y) as i64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_road_centre() {
        assert_eq!(
            road_centre(&Point2::new(30.0, 60.0), &Point2::new(70.0, 60.0)),
            Point2::new(50, 60)
        );
        assert_eq!(
            road_centre(&Point2::new(-50.0, 60.0), &Point2::new(80.0, 60.0)),
            Point2::new(15, 60)
        );
        assert_eq!(
            road_centre(&Point2::new(3.0, 10.0), &Point2::new(6.0, 10.0)),
            Point2::new(5, 10)
        );
        assert_eq!(
            road_centre(&Point2::new(30.769, 60.0), &Point2::new(69.2, 60.0)),
            Point2::new(50, 60)
        );
        assert_eq!(
            road_centre(&Point2::new(-61.0, 60.0), &Point2::new(-40.0, 60.0)),
            Point2::new(-50, 60)
        );
    }
}
