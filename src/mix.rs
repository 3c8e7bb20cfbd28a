//! This module describes the [`Mix`] trait. Mixing, in this context, is taking the midpoint of two
//! colors in some space: if colors A and B mix to A, then B is the same as A.
//!
//! Mixing differs depending on the color space being used. If A and B are two RGB colors, A.mix(B)
//! may be a very different color than A_hsl.mix(B_hsl) converted back. For this reason, only colors
//! of the same type can be mixed.
//!
//! Mixing here is additive, the way a screen combines light. It will not agree with paint: yellow
//! mixed with blue in RGB is gray, not green.

use crate::color::{Color, RGBColor};
use crate::colorpoint::ColorPoint;
use crate::colors::{HSLColor, HSVColor, YCbCrColor, YIQColor, YUVColor};

/// A color that can be mixed with another color of its own type.
pub trait Mix: Color {
    /// Given two colors, returns a color representing their midpoint.
    fn mix(self, other: Self) -> Self;
}

/// Averages every channel, alpha included.
///
/// # Example
/// ```
/// # use chromata::prelude::*;
/// let pink = RGBColor::RED.mix(RGBColor::WHITE);
/// assert_eq!(pink, RGBColor::opaque(1., 0.5, 0.5));
/// let faded = RGBColor::BLUE.mix(RGBColor::CLEAR);
/// assert_eq!(faded, RGBColor::new(0., 0., 0.5, 0.5));
/// ```
impl Mix for RGBColor {
    fn mix(self, other: RGBColor) -> RGBColor {
        self.mix_weighted(other, 0.5)
    }
}

impl RGBColor {
    /// Blends two colors, alpha included, with `weight` as the share of `self` and `1 - weight` the
    /// share of `other`. A weight of 0.5 is the same as [`Mix::mix`].
    ///
    /// # Example
    /// ```
    /// # use chromata::prelude::*;
    /// let mostly_red = RGBColor::RED.mix_weighted(RGBColor::BLUE, 0.75);
    /// assert_eq!(mostly_red, RGBColor::opaque(0.75, 0., 0.25));
    /// ```
    pub fn mix_weighted(self, other: RGBColor, weight: f64) -> RGBColor {
        let blend = |c1: f64, c2: f64| c1 * weight + c2 * (1.0 - weight);
        RGBColor::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
            blend(self.a, other.a),
        )
    }
}

macro_rules! impl_midpoint_mix {
    ($($color:ty),*) => {
        $(
            impl Mix for $color {
                fn mix(self, other: $color) -> $color {
                    ColorPoint::midpoint(self, other)
                }
            }
        )*
    };
}

impl_midpoint_mix!(HSLColor, HSVColor, YUVColor, YIQColor, YCbCrColor);
