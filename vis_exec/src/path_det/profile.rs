//! Line profile sampling

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;
use ndarray::Array1;
use num_traits::ToPrimitive;
use util::maths::linspace;

use super::{PathDetError, Sampling};
use crate::mask::Mask;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Values sampled at equally spaced points along a straight segment of a mask.
///
/// The three arrays are parallel, `values[i]` is the mask value at `(x[i], y[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// x coordinate of each sample
    pub x: Array1<f64>,

    /// y coordinate of each sample
    pub y: Array1<f64>,

    /// Mask value at each sample
    pub values: Array1<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Profile {
    /// Take `num` equally spaced samples on the segment from `start` to `end`, both ends included.
    ///
    /// Samples which fall outside the mask read as zero.
    pub fn sample<T>(
        mask: &Mask<T>,
        start: &Point2<f64>,
        end: &Point2<f64>,
        num: usize,
        sampling: Sampling,
    ) -> Result<Self, PathDetError>
    where
        T: Copy + ToPrimitive,
    {
        if num < 2 {
            return Err(PathDetError::TooFewSamples(num));
        }

        let x = Array1::from(linspace(start.x, end.x, num));
        let y = Array1::from(linspace(start.y, end.y, num));

        let values = x
            .iter()
            .zip(y.iter())
            .map(|(&x, &y)| match sampling {
                Sampling::Nearest => mask.sample_nearest(x, y),
                Sampling::Bilinear => mask.sample_bilinear(x, y),
            })
            .collect();

        Ok(Self { x, y, values })
    }

    /// Number of samples in the profile.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinate of the `i`th sample.
    pub fn point(&self, i: usize) -> Option<Point2<f64>> {
        Some(Point2::new(*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Index of the first non-zero sample, counting from the start of the segment.
    pub fn first_nonzero(&self) -> Option<usize> {
        self.values.iter().position(|&v| v != 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    fn empty_mask(height: usize, width: usize) -> Mask<u8> {
        Mask::new(Array2::zeros((height, width))).unwrap()
    }

    #[test]
    fn test_sample_count_and_endpoints() {
        let mask = empty_mask(50, 80);
        let start = Point2::new(3.0, 7.0);
        let end = Point2::new(71.5, 42.25);

        for &num in &[2, 3, 40, 117] {
            let profile = Profile::sample(&mask, &start, &end, num, Sampling::Nearest).unwrap();

            assert_eq!(profile.len(), num);
            assert_eq!(profile.x.len(), num);
            assert_eq!(profile.y.len(), num);
            assert_eq!(profile.point(0), Some(start));
            assert_eq!(profile.point(num - 1), Some(end));
            assert_eq!(profile.point(num), None);
        }
    }

    #[test]
    fn test_samples_are_collinear_and_even() {
        let mask = empty_mask(50, 80);
        let start = Point2::new(60.0, 10.0);
        let end = Point2::new(5.0, 45.0);
        let profile = Profile::sample(&mask, &start, &end, 23, Sampling::Nearest).unwrap();

        let dir = end - start;
        let step = dir.norm() / 22.0;

        for i in 0..profile.len() {
            let p = profile.point(i).unwrap();
            let v = p - start;

            // Cross product with the segment direction is zero for points on the line
            assert_relative_eq!(v.x * dir.y - v.y * dir.x, 0.0, epsilon = 1e-9);
            assert_relative_eq!(v.norm(), step * i as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_too_few_samples() {
        let mask = empty_mask(5, 5);
        let p = Point2::new(1.0, 1.0);

        assert!(matches!(
            Profile::sample(&mask, &p, &p, 1, Sampling::Nearest),
            Err(PathDetError::TooFewSamples(1))
        ));
    }

    #[test]
    fn test_values_and_first_nonzero() {
        let mut data = Array2::<u8>::zeros((10, 20));
        data[[4, 3]] = 1;
        data[[4, 12]] = 1;
        let mask = Mask::new(data).unwrap();

        // Scan right to left along row 4 with one sample per pixel, starting off the mask
        let profile = Profile::sample(
            &mask,
            &Point2::new(25.0, 4.0),
            &Point2::new(0.0, 4.0),
            26,
            Sampling::Nearest,
        )
        .unwrap();

        assert_eq!(profile.values.iter().filter(|&&v| v != 0.0).count(), 2);
        assert_eq!(profile.first_nonzero(), Some(13));
        assert_eq!(profile.point(13), Some(Point2::new(12.0, 4.0)));

        let empty = Profile::sample(
            &mask,
            &Point2::new(0.0, 5.0),
            &Point2::new(19.0, 5.0),
            20,
            Sampling::Nearest,
        )
        .unwrap();
        assert_eq!(empty.first_nonzero(), None);
    }

    #[test]
    fn test_bilinear_sees_between_pixels() {
        let mut data = Array2::<u8>::zeros((3, 10));
        data[[1, 4]] = 1;
        let mask = Mask::new(data).unwrap();

        // Samples at x = 0, 1.5, 3, 4.5, 6, ... snap to pixels 0, 2, 3, 5, 6 and miss pixel 4,
        // but the interpolation at 4.5 still picks up half of it.
        let start = Point2::new(0.0, 1.0);
        let end = Point2::new(9.0, 1.0);

        let nearest = Profile::sample(&mask, &start, &end, 7, Sampling::Nearest).unwrap();
        let bilinear = Profile::sample(&mask, &start, &end, 7, Sampling::Bilinear).unwrap();

        assert_eq!(nearest.first_nonzero(), None);
        assert_eq!(bilinear.first_nonzero(), Some(3));
        assert_relative_eq!(bilinear.values[3], 0.5);
    }
}
