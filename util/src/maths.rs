//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Map a value from one range into another.
pub fn lin_map<T>(source_range: (T, T), target_range: (T, T), value: T) -> T
where
    T: Float
{
    target_range.0
        + ((value - source_range.0)
        * (target_range.1 - target_range.0)
        / (source_range.1 - source_range.0))
}

/// Return `num` evenly spaced values over the closed interval `[start, end]`.
///
/// The first and last values are exactly `start` and `end`. If `num` is 1
/// only `start` is returned, if `num` is 0 the result is empty.
pub fn linspace<T>(start: T, end: T, num: usize) -> Vec<T>
where
    T: Float
{
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            // `num` is small enough that the conversion cannot fail for any
            // float type, fall back to the start value regardless.
            let last = T::from(num - 1).unwrap_or_else(T::one);

            let mut values: Vec<T> = (0..num)
                .map(|i| {
                    let i = T::from(i).unwrap_or_else(T::zero);
                    lin_map((T::zero(), last), (start, end), i)
                })
                .collect();

            // Force the endpoint so that rounding never moves it
            values[num - 1] = end;

            values
        }
    }
}

/// Round a value to the nearest integer, with halves rounded towards positive
/// infinity.
///
/// This is the rounding used when snapping a continuous image coordinate onto
/// the pixel grid, so that `-0.5` and `0.5` land on pixels `0` and `1`.
pub fn round_half_up<T>(value: T) -> T
where
    T: Float
{
    let half = T::from(0.5).unwrap_or_else(T::zero);
    (value + half).floor()
}
