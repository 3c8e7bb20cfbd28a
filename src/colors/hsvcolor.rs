//! This module implements the HSV color space, also called HSB. The definition of value differs
//! from HSL's lightness: it goes from black to full saturation instead of black to white. This makes
//! value an extraordinarily poor analog of luminance (dark purple is the same value as white), but
//! does make the hue and saturation a bit more meaningful than HSL.
//!
//! HSV is the same thing as the hue/saturation/brightness projection of [`RGBColor`]: the only
//! difference is that here the hue is an angle in degrees, where `RGBColor` gives a fraction of a
//! turn. Use [`HSVColor::hue_fraction`] and [`HSVColor::from_hue_fraction`] to move between the two.
//!
//! [`RGBColor`]: ../../color/struct.RGBColor.html

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use chromata::prelude::*;
/// # use chromata::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 0.5, v: 0.8};
/// let yellow = HSVColor{h: 50., s: 0.5, v: 0.8};
/// assert_eq!(red.to_rgb().to_string(), "#CC6666");
/// assert_eq!(yellow.to_rgb().to_string(), "#CCBB66");
/// // note how the second one is strictly more light
/// assert!(yellow.to_rgb().white() > red.to_rgb().white());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees.
    pub h: f64,
    /// The saturation, defined as the radius of the HSV cylinder and the distance between the color
    /// and the equivalent-value grayscale. Ranges between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color. Ranges between 0 and 1.
    pub v: f64,
}

/// HSB is another name for HSV.
pub type HSBColor = HSVColor;

impl HSVColor {
    /// Creates a color from a hue given as a fraction of a full turn, rather than in degrees.
    pub fn from_hue_fraction(hue: f64, saturation: f64, value: f64) -> HSVColor {
        HSVColor {
            h: hue * 360.0,
            s: saturation,
            v: value,
        }
    }
    /// The hue as a fraction of a full turn.
    pub fn hue_fraction(&self) -> f64 {
        self.h / 360.0
    }
}

impl Color for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        let (h, s, v) = rgb.hsb_components();
        HSVColor::from_hue_fraction(h, s, v)
    }

    fn to_rgba(&self, alpha: f64) -> RGBColor {
        RGBColor::from_hsb(self.hue_fraction(), self.s, self.v, alpha)
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(color: HSVColor) -> Coord {
        Coord {
            x: color.h,
            y: color.s,
            z: color.v,
        }
    }
}

impl Bound for HSVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::DEFAULT_TOLERANCE;
    use crate::colorpoint::ColorPoint;

    #[test]
    fn test_hsv_rgb_conversion() {
        let red_hsv: HSVColor = RGBColor::RED.convert();
        assert!(red_hsv.h.abs() <= 0.0001);
        assert!((red_hsv.s - 1.0).abs() <= 0.0001);
        assert!((red_hsv.v - 1.0).abs() <= 0.0001);
        let blue_hsv: HSVColor = RGBColor::BLUE.convert();
        assert!((blue_hsv.h - 240.0).abs() <= 0.0001);
        let lavender_hsv = HSVColor {
            h: 243.5,
            s: 0.568,
            v: 0.925,
        };
        assert_eq!(lavender_hsv.to_rgb().to_string(), "#6E66EC");
    }

    #[test]
    fn test_hsb_alias() {
        let hsb: HSBColor = RGBColor::ORANGE.convert();
        assert!(hsb.approx_eq(&HSVColor { h: 30., s: 1., v: 1. }, DEFAULT_TOLERANCE));
        assert!((hsb.hue_fraction() - RGBColor::ORANGE.hue()).abs() <= 1e-10);
    }

    #[test]
    fn test_hsv_round_trip() {
        let colors = [
            HSVColor { h: 12., s: 0.4, v: 0.9 },
            HSVColor { h: 200., s: 1., v: 0.3 },
            HSVColor { h: 330., s: 0.75, v: 0.5 },
        ];
        for color in colors.iter() {
            let back: HSVColor = color.convert();
            assert!(back.approx_eq(color, DEFAULT_TOLERANCE), "{:?} {:?}", color, back);
            let alpha = color.to_rgba(0.5);
            assert_eq!(alpha.a, 0.5);
        }
    }
}
