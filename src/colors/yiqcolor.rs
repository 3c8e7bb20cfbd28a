//! This module implements YIQ, the color encoding of NTSC television. It shares its luma with YUV,
//! but its chroma axes are rotated by 33 degrees: I (in-phase) runs from blue to orange, the
//! direction the eye resolves finest, and Q (quadrature) from green to purple. The Rec. 601
//! coefficients are the NTSC ones; the Rec. 709 ones pair the HD luma weights with chroma rows that
//! have no published standard behind them, and are kept exactly as given so that existing data
//! keeps its meaning.

use crate::bound::Bound;
use crate::color::RGBColor;
use crate::consts::{Transform, YIQ_REC601, YIQ_REC709};
use crate::coord::Coord;
use crate::encoding::{EncodedColor, Encoding};

/// A YIQ color.
///
/// # Example
///
/// ```
/// # use chromata::prelude::*;
/// let yiq = RGBColor::RED.to_yiq(Encoding::Rec601);
/// assert!((yiq.y - 0.299).abs() <= 0.001);
/// assert!((yiq.i - 0.5959).abs() <= 0.001);
/// assert!((yiq.q - 0.2115).abs() <= 0.001);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YIQColor {
    /// The luma, from 0 to 1.
    pub y: f64,
    /// The in-phase chroma, within -0.6 to 0.6.
    pub i: f64,
    /// The quadrature chroma, within -0.6 to 0.6.
    pub q: f64,
}

fn transform(encoding: Encoding) -> &'static Transform {
    match encoding {
        Encoding::Rec601 => &*YIQ_REC601,
        Encoding::Rec709 => &*YIQ_REC709,
    }
}

impl EncodedColor for YIQColor {
    fn from_rgb_encoded(rgb: RGBColor, encoding: Encoding) -> YIQColor {
        let [y, i, q] = transform(encoding).apply([rgb.r, rgb.g, rgb.b]);
        YIQColor { y, i, q }
    }

    fn to_rgba_encoded(&self, encoding: Encoding, alpha: f64) -> RGBColor {
        let [r, g, b] = transform(encoding).invert([self.y, self.i, self.q]);
        RGBColor::new(r, g, b, alpha)
    }
}

impl_default_encoding!(YIQColor);

impl From<Coord> for YIQColor {
    fn from(c: Coord) -> YIQColor {
        YIQColor {
            y: c.x,
            i: c.y,
            q: c.z,
        }
    }
}

impl From<YIQColor> for Coord {
    fn from(color: YIQColor) -> Coord {
        Coord {
            x: color.y,
            y: color.i,
            z: color.q,
        }
    }
}

// wide enough for both encodings: I peaks at 0.5959 with Rec. 601 red, Q at 0.5861 with Rec. 709
// green
impl Bound for YIQColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (-0.6, 0.6), (-0.6, 0.6)]
    }
}
