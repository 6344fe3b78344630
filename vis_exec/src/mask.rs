//! # Binarised mask
//!
//! A mask is a 2D grid where non-zero cells mark road boundary evidence. The origin is the
//! top-left pixel, with rows increasing downwards. Only the distinction between zero and non-zero
//! matters, so any numeric cell type is accepted.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::path::Path;

use image::GrayImage;
use ndarray::{Array2, ArrayD, Ix2};
use num_traits::ToPrimitive;
use util::maths::round_half_up;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A validated, non-empty, two dimensional mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask<T = u8> {
    /// Mask data indexed as `[row, column]`, i.e. `[y, x]`
    data: Array2<T>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    #[error("A mask must be a non-empty 2D grid, got an array of shape {0:?}")]
    InputShape(Vec<usize>),

    #[error("Couldn't load the mask image: {0}")]
    ImageError(#[from] image::ImageError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<T> Mask<T>
where
    T: Copy + ToPrimitive,
{
    /// Create a new mask from a `[height, width]` array.
    pub fn new(data: Array2<T>) -> Result<Self, MaskError> {
        if data.is_empty() {
            return Err(MaskError::InputShape(data.shape().to_vec()));
        }

        Ok(Self { data })
    }

    /// Create a new mask from an array of any rank, which must turn out to be 2D.
    pub fn from_dyn(data: ArrayD<T>) -> Result<Self, MaskError> {
        let shape = data.shape().to_vec();

        let data = data
            .into_dimensionality::<Ix2>()
            .map_err(|_| MaskError::InputShape(shape))?;

        Self::new(data)
    }

    /// Height of the mask.
    ///
    /// Units: pixels
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Width of the mask.
    ///
    /// Units: pixels
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Get the value of the pixel at `(x, y)` as a float, or zero if the pixel is outside the
    /// mask.
    pub fn get(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 {
            return 0.0;
        }

        self.data
            .get((y as usize, x as usize))
            .and_then(|v| v.to_f64())
            .unwrap_or(0.0)
    }

    /// Sample the mask at a continuous coordinate using the nearest pixel.
    ///
    /// Coordinates are snapped to the pixel grid with halves rounded up, samples outside the mask
    /// are zero.
    pub fn sample_nearest(&self, x: f64, y: f64) -> f64 {
        self.get(round_half_up(x) as i64, round_half_up(y) as i64)
    }

    /// Sample the mask at a continuous coordinate by bilinear interpolation of the four
    /// surrounding pixels.
    ///
    /// Pixels outside the mask count as zero.
    pub fn sample_bilinear(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();

        let dx = x - x0;
        let dy = y - y0;

        let (x0, y0) = (x0 as i64, y0 as i64);

        let p00 = self.get(x0, y0);
        let p10 = self.get(x0 + 1, y0);
        let p01 = self.get(x0, y0 + 1);
        let p11 = self.get(x0 + 1, y0 + 1);

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;

        top * (1.0 - dy) + bottom * dy
    }
}

impl Mask<u8> {
    /// Create a mask from an 8 bit greyscale image.
    pub fn from_luma(image: GrayImage) -> Result<Self, MaskError> {
        let (width, height) = image.dimensions();

        let data = Array2::from_shape_vec((height as usize, width as usize), image.into_raw())
            .map_err(|_| MaskError::InputShape(vec![height as usize, width as usize]))?;

        Self::new(data)
    }

    /// Load a mask from an image file, converting it to 8 bit greyscale.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MaskError> {
        Self::from_luma(image::open(path)?.to_luma8())
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::IxDyn;

    fn test_mask() -> Mask<u8> {
        let mut data = Array2::zeros((3, 4));
        data[[1, 2]] = 255;
        Mask::new(data).unwrap()
    }

    #[test]
    fn test_shape_validation() {
        assert!(matches!(
            Mask::<u8>::new(Array2::zeros((0, 10))),
            Err(MaskError::InputShape(s)) if s == vec![0, 10]
        ));
        assert!(matches!(
            Mask::<u8>::new(Array2::zeros((10, 0))),
            Err(MaskError::InputShape(_))
        ));
        assert!(matches!(
            Mask::<f32>::from_dyn(ArrayD::zeros(IxDyn(&[4, 4, 3]))),
            Err(MaskError::InputShape(s)) if s == vec![4, 4, 3]
        ));
        assert!(matches!(
            Mask::<u8>::from_dyn(ArrayD::zeros(IxDyn(&[16]))),
            Err(MaskError::InputShape(_))
        ));

        let mask = Mask::<u16>::from_dyn(ArrayD::zeros(IxDyn(&[4, 6]))).unwrap();
        assert_eq!((mask.height(), mask.width()), (4, 6));
    }

    #[test]
    fn test_from_luma() {
        let mut img = GrayImage::new(5, 2);
        img.put_pixel(4, 1, image::Luma([1]));

        let mask = Mask::from_luma(img).unwrap();
        assert_eq!((mask.height(), mask.width()), (2, 5));
        assert_eq!(mask.get(4, 1), 1.0);
        assert_eq!(mask.get(1, 4), 0.0);

        assert!(matches!(
            Mask::from_luma(GrayImage::new(0, 0)),
            Err(MaskError::InputShape(_))
        ));
    }

    #[test]
    fn test_get_outside_is_zero() {
        let mask = test_mask();
        assert_eq!(mask.get(2, 1), 255.0);
        assert_eq!(mask.get(-1, 1), 0.0);
        assert_eq!(mask.get(2, -1), 0.0);
        assert_eq!(mask.get(4, 1), 0.0);
        assert_eq!(mask.get(2, 3), 0.0);
    }

    #[test]
    fn test_sample_nearest() {
        let mask = test_mask();
        assert_eq!(mask.sample_nearest(2.0, 1.0), 255.0);
        assert_eq!(mask.sample_nearest(1.5, 0.5), 255.0);
        assert_eq!(mask.sample_nearest(2.49, 1.49), 255.0);
        assert_eq!(mask.sample_nearest(2.5, 1.0), 0.0);
        assert_eq!(mask.sample_nearest(1.49, 1.0), 0.0);
        assert_eq!(mask.sample_nearest(-100.0, 1.0), 0.0);
    }

    #[test]
    fn test_sample_bilinear() {
        let mask = test_mask();
        assert_relative_eq!(mask.sample_bilinear(2.0, 1.0), 255.0);
        assert_relative_eq!(mask.sample_bilinear(2.5, 1.0), 127.5);
        assert_relative_eq!(mask.sample_bilinear(1.5, 0.5), 63.75);
        assert_relative_eq!(mask.sample_bilinear(0.0, 0.0), 0.0);
        assert_relative_eq!(mask.sample_bilinear(3.5, 1.0), 0.0);
    }
}
