//! This module contains a struct, [`Coord`](crate::coord::Coord), that models a 3D coordinate space
//! and supports limited math in 3 dimensions with scalars and other coordinates. Every three-channel
//! color model in this crate projects into it, so mixing, clamping, and distance only have to be
//! written once.

use std::ops::{Add, Div, Mul, Sub};

use num::{Num, NumCast};

use crate::color::RGBColor;

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

fn scalar_to_f64<U: Scalar>(value: U) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`, which are treated
/// identically. Any color that converts to and from a `Coord` matches its components with these
/// axes in the order of the letters in its name: `HSLColor` puts `h` on the x-axis, `s` on the
/// y-axis, and `l` on the z-axis.
///
/// # Examples
/// ```
/// # use chromata::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// let diff = point_1 - point_2;
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// // only scalars multiply, and only on the right
/// let prod = point_1 * 2u8;
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// let quot = point_1 / 2.;
/// assert_eq!(quot, Coord{x: 0.5, y: 4., z: 3.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = scalar_to_f64(rhs);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

/// Division follows floating-point rules: dividing by zero gives infinities or NaN, never a panic.
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r = scalar_to_f64(rhs);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// The midpoint between two 3D points.
    /// # Example
    /// ```
    /// # use chromata::coord::Coord;
    /// let point1 = Coord{x: 0.25, y: 0., z: 1.};
    /// let point2 = Coord{x: 0.75, y: 1., z: 1.};
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-10);
    /// assert!((mid.y - 0.5).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        (*self + *other) / 2
    }
    /// The weighted midpoint: `weight` is the share of `self`, and `1 - weight` the share of
    /// `other`. A weight of 1 returns `self`, a weight of 0 returns `other`.
    /// # Example
    /// ```
    /// # use chromata::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        *self * weight + *other * (1.0 - weight)
    }
    /// The Euclidean distance between two 3D points. This is a poor analogue of how different two
    /// colors look: in HSV, (360, 1, 1) and (0, 1, 1) are the same red but 360 apart.
    /// # Example
    /// ```
    /// # use chromata::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let d = *self - *other;
        (d.x.powi(2) + d.y.powi(2) + d.z.powi(2)).sqrt()
    }
}

// RGB projects its three color channels; alpha does not survive the trip and comes back opaque.
impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor::opaque(c.x, c.y, c.z)
    }
}

impl From<RGBColor> for Coord {
    fn from(color: RGBColor) -> Coord {
        Coord {
            x: color.r,
            y: color.g,
            z: color.b,
        }
    }
}
