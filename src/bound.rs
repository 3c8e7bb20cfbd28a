//! This module describes the Bound trait, which records the native range of each color model. None
//! of the conversions in this crate clamp on their own: a YUV color can be pushed outside the RGB
//! cube, and converting it back yields RGB channels below 0 or above 1. `Bound` is the explicit
//! step for callers who want their values pulled back into range.

use crate::color::RGBColor;
use crate::colorpoint::ColorPoint;
use crate::coord::Coord;

/// Describes a color model whose components have a native range. Only models that embed in 3D
/// space can be bounded this way, hence the use of the [`ColorPoint`] trait as a dependency.
/// # Example
/// Bound a YCbCr color that drifted out of its 8-bit range.
///
/// ```
/// # use chromata::prelude::*;
/// # use chromata::colors::YCbCrColor;
/// let drifted = YCbCrColor{y: 300., cb: -5., cr: 127.5};
/// assert!(!drifted.is_in_bounds());
/// let clamped = drifted.clamp();
/// assert_eq!(clamped, YCbCrColor{y: 255., cb: 0., cr: 127.5});
/// assert!(clamped.is_in_bounds());
/// ```
pub trait Bound: ColorPoint {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let [(x_min, x_max), (y_min, y_max), (z_min, z_max)] = Self::bounds();
        Coord {
            x: point.x.max(x_min).min(x_max),
            y: point.y.max(y_min).min(y_max),
            z: point.z.max(z_min).min(z_max),
        }
    }
    /// Returns a copy of this color with every component clamped to its native range. A color
    /// already in range comes back unchanged.
    fn clamp(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
    /// Whether every component already lies in its native range.
    fn is_in_bounds(&self) -> bool {
        let point: Coord = (*self).into();
        let [(x_min, x_max), (y_min, y_max), (z_min, z_max)] = Self::bounds();
        (x_min..=x_max).contains(&point.x)
            && (y_min..=y_max).contains(&point.y)
            && (z_min..=z_max).contains(&point.z)
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
    // alpha is not part of the projection, so carry it over by hand
    fn clamp(self) -> RGBColor {
        let clamped = RGBColor::from(RGBColor::clamp_coord(self.into()));
        RGBColor {
            a: self.a.clamp(0., 1.),
            ..clamped
        }
    }
}
