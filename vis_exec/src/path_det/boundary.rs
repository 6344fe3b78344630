//! Road boundary search

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use nalgebra::{Point2, Vector2};
use num_traits::ToPrimitive;
use serde::Serialize;

// Internal
use super::{PathDetError, PathDetParams, Profile};
use crate::mask::Mask;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Where the road boundary was found on one side of the search origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryContact {
    /// Position of the boundary.
    ///
    /// Units: pixels
    pub point: Point2<f64>,

    /// `true` if no boundary pixel was found and `point` is the fixed fallback position.
    pub is_fallback: bool,
}

/// The boundary contacts on both sides of the search origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contacts {
    pub left: BoundaryContact,
    pub right: BoundaryContact,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Search direction from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// Towards decreasing x
    Left,

    /// Towards increasing x
    Right,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Side {
    /// Unit vector pointing from the origin towards this side.
    pub fn direction(&self) -> Vector2<f64> {
        match self {
            Side::Left => Vector2::new(-1.0, 0.0),
            Side::Right => Vector2::new(1.0, 0.0),
        }
    }

    /// Distance to the assumed boundary when none is found on this side.
    ///
    /// Units: pixels
    pub fn fallback_offset_px(&self, params: &PathDetParams) -> f64 {
        match self {
            Side::Left => params.left_fallback_offset_px,
            Side::Right => params.right_fallback_offset_px,
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Find the road boundary on one side of `origin`.
///
/// The horizontal segment from `origin` to `semi_width_px` pixels away on the given side is
/// sampled and the first non-zero sample, counting outwards, is the boundary. If there is none
/// the search is not widened, the boundary is placed at the side's fallback offset instead.
pub fn find_contact<T>(
    mask: &Mask<T>,
    origin: &Point2<f64>,
    semi_width_px: f64,
    side: Side,
    params: &PathDetParams,
) -> Result<BoundaryContact, PathDetError>
where
    T: Copy + ToPrimitive,
{
    let end = *origin + side.direction() * semi_width_px;

    let profile = Profile::sample(mask, origin, &end, params.num_samples, params.sampling)?;

    let contact = match profile.first_nonzero().and_then(|i| profile.point(i)) {
        Some(point) => BoundaryContact {
            point,
            is_fallback: false,
        },
        None => BoundaryContact {
            point: *origin + side.direction() * side.fallback_offset_px(params),
            is_fallback: true,
        },
    };

    trace!("{:?} boundary contact: {:?}", side, contact);

    Ok(contact)
}

/// Find the road boundaries on the left and right of `origin`, each side independently.
pub fn find_contacts<T>(
    mask: &Mask<T>,
    origin: &Point2<f64>,
    semi_width_px: f64,
    params: &PathDetParams,
) -> Result<Contacts, PathDetError>
where
    T: Copy + ToPrimitive,
{
    Ok(Contacts {
        left: find_contact(mask, origin, semi_width_px, Side::Left, params)?,
        right: find_contact(mask, origin, semi_width_px, Side::Right, params)?,
    })
}
