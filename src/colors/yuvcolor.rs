//! This module implements YUV, the analog color encoding of PAL television. Y is luma, a weighted
//! sum of the RGB channels, and U and V are the blue and red differences B - Y and R - Y, scaled so
//! that U stays within ±0.436 and V within ±0.615. The luma weights, and with them the chroma rows,
//! depend on the [`Encoding`].
//!
//! [`Encoding`]: ../../encoding/enum.Encoding.html

use crate::bound::Bound;
use crate::color::RGBColor;
use crate::consts::{Transform, YUV_REC601, YUV_REC709};
use crate::coord::Coord;
use crate::encoding::{EncodedColor, Encoding};

/// A YUV color.
///
/// # Example
///
/// ```
/// # use chromata::prelude::*;
/// let yuv = RGBColor::BLUE.to_yuv(Encoding::Rec601);
/// assert!((yuv.y - 0.114).abs() <= 1e-10);
/// assert!((yuv.u - 0.436).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YUVColor {
    /// The luma, from 0 to 1.
    pub y: f64,
    /// The blue-difference chroma, roughly from -0.436 to 0.436.
    pub u: f64,
    /// The red-difference chroma, roughly from -0.615 to 0.615.
    pub v: f64,
}

fn transform(encoding: Encoding) -> &'static Transform {
    match encoding {
        Encoding::Rec601 => &*YUV_REC601,
        Encoding::Rec709 => &*YUV_REC709,
    }
}

impl EncodedColor for YUVColor {
    fn from_rgb_encoded(rgb: RGBColor, encoding: Encoding) -> YUVColor {
        let [y, u, v] = transform(encoding).apply([rgb.r, rgb.g, rgb.b]);
        YUVColor { y, u, v }
    }

    fn to_rgba_encoded(&self, encoding: Encoding, alpha: f64) -> RGBColor {
        let [r, g, b] = transform(encoding).invert([self.y, self.u, self.v]);
        RGBColor::new(r, g, b, alpha)
    }
}

impl_default_encoding!(YUVColor);

impl From<Coord> for YUVColor {
    fn from(c: Coord) -> YUVColor {
        YUVColor {
            y: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<YUVColor> for Coord {
    fn from(color: YUVColor) -> Coord {
        Coord {
            x: color.y,
            y: color.u,
            z: color.v,
        }
    }
}

impl Bound for YUVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (-0.436, 0.436), (-0.615, 0.615)]
    }
}
