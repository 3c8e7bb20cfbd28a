//! This module implements the CMYK color model used in printing. CMYK is subtractive: instead of
//! adding light like RGB, it describes how much of each ink absorbs light from white paper. Cyan,
//! magenta, and yellow inks in principle make black together, but real inks make a muddy brown, so
//! a separate black ("key") ink is used for everything the three share. This conversion is the
//! naive one with no ink profile, which is the only one that can be done without color
//! management.

use float_cmp::approx_eq;
use tracing::trace;

use crate::color::{Color, RGBColor};

/// A CMYK color. Every component is a percentage, ranging from 0 to 100.
///
/// # Example
/// Pure black is all key ink and nothing else.
///
/// ```
/// # use chromata::prelude::*;
/// # use chromata::colors::CMYKColor;
/// let black: CMYKColor = RGBColor::BLACK.convert();
/// assert_eq!((black.c, black.m, black.y, black.k), (0., 0., 0., 100.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// The cyan component, from 0 to 100.
    pub c: f64,
    /// The magenta component, from 0 to 100.
    pub m: f64,
    /// The yellow component, from 0 to 100.
    pub y: f64,
    /// The black (key) component, from 0 to 100.
    pub k: f64,
}

impl CMYKColor {
    /// Returns `true` if every component is within `tolerance` of the other color's.
    pub fn approx_eq(&self, other: &CMYKColor, tolerance: f64) -> bool {
        approx_eq!(f64, self.c, other.c, epsilon = tolerance)
            && approx_eq!(f64, self.m, other.m, epsilon = tolerance)
            && approx_eq!(f64, self.y, other.y, epsilon = tolerance)
            && approx_eq!(f64, self.k, other.k, epsilon = tolerance)
    }
}

impl Color for CMYKColor {
    fn from_rgb(rgb: RGBColor) -> CMYKColor {
        let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
        // at pure black the other inks are 0/0: black needs no colored ink
        let (c, m, y) = if k == 1.0 {
            trace!("black has no cyan, magenta, or yellow");
            (0.0, 0.0, 0.0)
        } else {
            (
                (1.0 - rgb.r - k) / (1.0 - k),
                (1.0 - rgb.g - k) / (1.0 - k),
                (1.0 - rgb.b - k) / (1.0 - k),
            )
        };
        CMYKColor {
            c: c * 100.0,
            m: m * 100.0,
            y: y * 100.0,
            k: k * 100.0,
        }
    }

    fn to_rgba(&self, alpha: f64) -> RGBColor {
        let c = self.c / 100.0;
        let m = self.m / 100.0;
        let y = self.y / 100.0;
        let k = self.k / 100.0;
        RGBColor::new(
            (1.0 - c) * (1.0 - k),
            (1.0 - m) * (1.0 - k),
            (1.0 - y) * (1.0 - k),
            alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::DEFAULT_TOLERANCE;

    fn cmyk(c: f64, m: f64, y: f64, k: f64) -> CMYKColor {
        CMYKColor { c, m, y, k }
    }

    #[test]
    fn test_cmyk_rgb_conversion() {
        let table = [
            (RGBColor::WHITE, cmyk(0., 0., 0., 0.)),
            (RGBColor::RED, cmyk(0., 100., 100., 0.)),
            (RGBColor::GREEN, cmyk(100., 0., 100., 0.)),
            (RGBColor::BLUE, cmyk(100., 100., 0., 0.)),
            (RGBColor::CYAN, cmyk(100., 0., 0., 0.)),
            (RGBColor::MAGENTA, cmyk(0., 100., 0., 0.)),
            (RGBColor::YELLOW, cmyk(0., 0., 100., 0.)),
            (RGBColor::GRAY, cmyk(0., 0., 0., 50.)),
            (RGBColor::ORANGE, cmyk(0., 50., 100., 0.)),
            (RGBColor::PURPLE, cmyk(0., 100., 0., 50.)),
        ];
        for &(rgb, expected) in table.iter() {
            let converted: CMYKColor = rgb.convert();
            assert!(converted.approx_eq(&expected, DEFAULT_TOLERANCE), "{:?}", converted);
            assert!(expected.to_rgb().approx_eq(&rgb, DEFAULT_TOLERANCE));
        }
    }

    #[test]
    fn test_black_is_not_nan() {
        for black in [RGBColor::BLACK, RGBColor::CLEAR].iter() {
            let converted = CMYKColor::from_rgb(*black);
            assert!(!converted.c.is_nan() && !converted.m.is_nan() && !converted.y.is_nan());
            assert_eq!(converted, cmyk(0., 0., 0., 100.));
        }
    }

    #[test]
    fn test_alpha_pass_through() {
        let clear = cmyk(0., 0., 0., 100.).to_rgba(0.0);
        assert!(clear.approx_eq(&RGBColor::CLEAR, DEFAULT_TOLERANCE));
        let color = cmyk(20., 40., 60., 10.).to_rgba(0.3);
        assert_eq!(color.a, 0.3);
    }

    #[test]
    fn test_cmyk_round_trip() {
        // only colors with no shared colored ink survive the round trip: the rest moves to black
        let colors = [
            cmyk(0., 40., 60., 10.),
            cmyk(0., 75., 12.5, 30.),
            cmyk(90., 5., 0., 80.),
        ];
        for color in colors.iter() {
            let back = CMYKColor::from_rgb(color.to_rgb());
            assert!(back.approx_eq(color, DEFAULT_TOLERANCE), "{:?} {:?}", color, back);
        }
    }
}
