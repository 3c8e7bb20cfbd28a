//! This file implements HSL: a simple transformation of RGB that creates a cylindrical space. HSL
//! and HSV are very similar but have an important difference: *value* in HSV runs from black to
//! fully saturated colors, whereas *lightness* in HSL runs from black to fully saturated in the
//! middle to white at the end. This makes the saturation component of HSL extremely inaccurate,
//! because light colors can have a very high saturation even if they are extremely close to white.
//!
//! HSL is computed from the hue/saturation/brightness projection of the color rather than from the
//! RGB channels directly, so it shares its hue with HSV exactly. The hue is stored in degrees; the
//! fraction-of-a-turn convention is only available through [`HSLColor::hue_fraction`] and
//! [`HSLColor::from_hue_fraction`].

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;

/// A color in the HSL color space, a direct transformation of the RGB space.
///
/// # Example
///
/// ```
/// # use chromata::prelude::*;
/// # use chromata::colors::HSLColor;
/// let steel_blue = HSLColor{h: 210.0, s: 0.5, l: 0.6};
/// assert_eq!(steel_blue.to_rgb().to_string(), "#6699CC");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component. Ranges from 0 to 360, as the angle in a cylindrical space. Exactly the same
    /// as the hue component of HSV.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1: 0 is always black, 1 always white, and fully
    /// saturated colors sit at 0.5.
    pub l: f64,
}

impl HSLColor {
    /// Creates a color from a hue given as a fraction of a full turn, rather than in degrees.
    pub fn from_hue_fraction(hue: f64, saturation: f64, lightness: f64) -> HSLColor {
        HSLColor {
            h: hue * 360.0,
            s: saturation,
            l: lightness,
        }
    }
    /// The hue as a fraction of a full turn.
    pub fn hue_fraction(&self) -> f64 {
        self.h / 360.0
    }
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let (h, s, v) = rgb.hsb_components();
        let l = ((2.0 - s) * v) / 2.0;
        // saturation is relative to the widest the double cone gets at this lightness, which is
        // nothing at both tips
        let saturation = if l == 0.0 {
            s
        } else if l == 1.0 {
            0.0
        } else if l < 0.5 {
            (s * v) / (l * 2.0)
        } else {
            (s * v) / (2.0 - l * 2.0)
        };
        HSLColor::from_hue_fraction(h, saturation, l)
    }

    fn to_rgba(&self, alpha: f64) -> RGBColor {
        let t = self.s * if self.l < 0.5 { self.l } else { 1.0 - self.l };
        let v = self.l + t;
        let s = if self.l > 0.0 { 2.0 * t / v } else { 0.0 };
        RGBColor::from_hsb(self.hue_fraction(), s, v, alpha)
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(color: HSLColor) -> Coord {
        Coord {
            x: color.h,
            y: color.s,
            z: color.l,
        }
    }
}

impl Bound for HSLColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}
