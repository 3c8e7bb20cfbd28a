//! This module implements the [`ColorPoint`] trait: a [`Color`] that can be projected into 3D space
//! and rebuilt from a point in it. Everything that only needs geometry, like tolerance comparisons,
//! midpoints, and distances, lives here so that every three-channel model shares one definition.

use float_cmp::approx_eq;

use crate::color::Color;
use crate::coord::Coord;

/// A color that can be treated as a point in 3D space. This is implemented automatically for every
/// [`Color`] that converts to and from [`Coord`].
///
/// Note that the geometry is that of the projection, not of perception: the midpoint of two HSL
/// colors is taken on their raw `(h, s, l)` triples, so hues are averaged as plain numbers.
///
/// # Example
/// ```
/// # use chromata::prelude::*;
/// # use chromata::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 1., v: 1.};
/// let blue = HSVColor{h: 240., s: 1., v: 1.};
/// let mid = red.midpoint(blue);
/// assert!(mid.approx_eq(&HSVColor{h: 120., s: 1., v: 1.}, 1e-10));
/// assert!((red.euclidean_distance(blue) - 240.).abs() <= 1e-10);
/// ```
pub trait ColorPoint: Color + Into<Coord> + From<Coord> + Copy {
    /// Whether every component of the two colors is within `tolerance` of the other.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let c1: Coord = (*self).into();
        let c2: Coord = (*other).into();
        approx_eq!(f64, c1.x, c2.x, epsilon = tolerance)
            && approx_eq!(f64, c1.y, c2.y, epsilon = tolerance)
            && approx_eq!(f64, c1.z, c2.z, epsilon = tolerance)
    }
    /// The Euclidean distance between the two projections.
    fn euclidean_distance(self, other: Self) -> f64 {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        c1.euclidean_distance(&c2)
    }
    /// The componentwise midpoint of the two projections.
    fn midpoint(self, other: Self) -> Self {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Self::from(c1.midpoint(&c2))
    }
    /// The weighted midpoint of the two projections, with `weight` as the share of `self`.
    fn weighted_midpoint(self, other: Self, weight: f64) -> Self {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Self::from(c1.weighted_midpoint(&c2, weight))
    }
}

impl<T: Color + Into<Coord> + From<Coord> + Copy> ColorPoint for T {}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::{HSLColor, YUVColor};

    #[test]
    fn test_approx_eq_tolerance() {
        let c1 = YUVColor { y: 0.5, u: 0.1, v: -0.1 };
        let c2 = YUVColor { y: 0.5005, u: 0.1, v: -0.1 };
        assert!(c1.approx_eq(&c2, 0.001));
        assert!(!c1.approx_eq(&c2, 0.0001));
    }

    #[test]
    fn test_weighted_midpoint() {
        let dark = HSLColor { h: 100., s: 0.2, l: 0.2 };
        let light = HSLColor { h: 200., s: 0.6, l: 0.8 };
        let mixed = dark.weighted_midpoint(light, 0.75);
        assert!(mixed.approx_eq(&HSLColor { h: 125., s: 0.3, l: 0.35 }, 1e-10));
        assert!(dark.weighted_midpoint(light, 1.0).approx_eq(&dark, 1e-10));
    }

    #[test]
    fn test_distance() {
        let c1 = YUVColor { y: 0.0, u: 0.0, v: 0.0 };
        let c2 = YUVColor { y: 0.3, u: 0.4, v: 0.0 };
        assert!((c1.euclidean_distance(c2) - 0.5).abs() <= 1e-10);
    }
}
