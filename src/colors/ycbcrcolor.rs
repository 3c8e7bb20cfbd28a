//! This module implements YCbCr, the digital relative of YUV used in JPEG, MPEG, and most digital
//! video. Y is luma, Cb and Cr are the blue and red differences. All three channels use the full
//! 8-bit range: Y runs from 0 to 255, and the two chroma channels are centered on 127.5 so that
//! grays have Cb = Cr = 127.5. There's no footroom or headroom here: the "studio swing" ranges of
//! broadcast video are not supported.

use crate::bound::Bound;
use crate::color::RGBColor;
use crate::consts::{Transform, YCBCR_OFFSET, YCBCR_REC601, YCBCR_REC709, YCBCR_SCALE};
use crate::coord::Coord;
use crate::encoding::{EncodedColor, Encoding};

/// A YCbCr color, with every channel between 0 and 255.
///
/// # Example
/// The same red under the two encodings.
///
/// ```
/// # use chromata::prelude::*;
/// let sd = RGBColor::RED.to_ycbcr(Encoding::Rec601);
/// let hd = RGBColor::RED.to_ycbcr(Encoding::Rec709);
/// assert!((sd.y - 76.245).abs() <= 0.001);
/// assert!((hd.y - 54.213).abs() <= 0.001);
/// assert!((sd.cr - 255.).abs() <= 0.001 && (hd.cr - 255.).abs() <= 0.001);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YCbCrColor {
    /// The luma, from 0 to 255.
    pub y: f64,
    /// The blue-difference chroma, from 0 to 255.
    pub cb: f64,
    /// The red-difference chroma, from 0 to 255.
    pub cr: f64,
}

fn transform(encoding: Encoding) -> &'static Transform {
    match encoding {
        Encoding::Rec601 => &*YCBCR_REC601,
        Encoding::Rec709 => &*YCBCR_REC709,
    }
}

impl EncodedColor for YCbCrColor {
    fn from_rgb_encoded(rgb: RGBColor, encoding: Encoding) -> YCbCrColor {
        let [y, cb, cr] = transform(encoding).apply([rgb.r, rgb.g, rgb.b]);
        YCbCrColor {
            y: y * YCBCR_SCALE,
            cb: cb * YCBCR_SCALE + YCBCR_OFFSET,
            cr: cr * YCBCR_SCALE + YCBCR_OFFSET,
        }
    }

    fn to_rgba_encoded(&self, encoding: Encoding, alpha: f64) -> RGBColor {
        let normalized = [
            self.y / YCBCR_SCALE,
            (self.cb - YCBCR_OFFSET) / YCBCR_SCALE,
            (self.cr - YCBCR_OFFSET) / YCBCR_SCALE,
        ];
        let [r, g, b] = transform(encoding).invert(normalized);
        RGBColor::new(r, g, b, alpha)
    }
}

impl_default_encoding!(YCbCrColor);

impl From<Coord> for YCbCrColor {
    fn from(c: Coord) -> YCbCrColor {
        YCbCrColor {
            y: c.x,
            cb: c.y,
            cr: c.z,
        }
    }
}

impl From<YCbCrColor> for Coord {
    fn from(color: YCbCrColor) -> Coord {
        Coord {
            x: color.y,
            y: color.cb,
            z: color.cr,
        }
    }
}

impl Bound for YCbCrColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., YCBCR_SCALE), (0., YCBCR_SCALE), (0., YCBCR_SCALE)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::{Color, DEFAULT_TOLERANCE};
    use crate::colorpoint::ColorPoint;

    fn ycbcr(y: f64, cb: f64, cr: f64) -> YCbCrColor {
        YCbCrColor { y, cb, cr }
    }

    fn check_table(encoding: Encoding, table: &[(RGBColor, YCbCrColor)]) {
        for &(rgb, expected) in table.iter() {
            let converted = YCbCrColor::from_rgb_encoded(rgb, encoding);
            assert!(
                converted.approx_eq(&expected, DEFAULT_TOLERANCE),
                "{:?} {:?}",
                rgb,
                converted
            );
            let back = expected.to_rgba_encoded(encoding, rgb.a);
            assert!(back.approx_eq(&rgb, DEFAULT_TOLERANCE), "{:?} {:?}", rgb, back);
        }
    }

    #[test]
    fn test_ycbcr_rec601() {
        check_table(
            Encoding::Rec601,
            &[
                (RGBColor::WHITE, ycbcr(255.0, 127.5, 127.5)),
                (RGBColor::RED, ycbcr(76.245, 84.472, 255.0)),
                (RGBColor::GREEN, ycbcr(149.685, 43.028, 20.735)),
                (RGBColor::BLUE, ycbcr(29.07, 255.0, 106.765)),
                (RGBColor::CYAN, ycbcr(178.755, 170.528, 0.0)),
                (RGBColor::MAGENTA, ycbcr(105.315, 211.972, 234.265)),
                (RGBColor::YELLOW, ycbcr(225.93, 0.0, 148.235)),
                (RGBColor::BLACK, ycbcr(0.0, 127.5, 127.5)),
                (RGBColor::DARK_GRAY, ycbcr(85.0, 127.5, 127.5)),
                (RGBColor::GRAY, ycbcr(127.5, 127.5, 127.5)),
                (RGBColor::LIGHT_GRAY, ycbcr(170.0, 127.5, 127.5)),
                (RGBColor::CLEAR, ycbcr(0.0, 127.5, 127.5)),
            ],
        );
    }

    #[test]
    fn test_ycbcr_rec709() {
        check_table(
            Encoding::Rec709,
            &[
                (RGBColor::WHITE, ycbcr(255.0, 127.5, 127.5)),
                (RGBColor::RED, ycbcr(54.213, 98.284, 255.0)),
                (RGBColor::GREEN, ycbcr(182.376, 29.216, 11.691)),
                (RGBColor::BLUE, ycbcr(18.411, 255.0, 115.809)),
                (RGBColor::CYAN, ycbcr(200.787, 156.716, 0.0)),
                (RGBColor::MAGENTA, ycbcr(72.624, 225.784, 243.309)),
                (RGBColor::YELLOW, ycbcr(236.589, 0.0, 139.191)),
                (RGBColor::BLACK, ycbcr(0.0, 127.5, 127.5)),
                (RGBColor::DARK_GRAY, ycbcr(85.0, 127.5, 127.5)),
                (RGBColor::GRAY, ycbcr(127.5, 127.5, 127.5)),
                (RGBColor::LIGHT_GRAY, ycbcr(170.0, 127.5, 127.5)),
                (RGBColor::CLEAR, ycbcr(0.0, 127.5, 127.5)),
            ],
        );
    }

    #[test]
    fn test_ycbcr_round_trip() {
        let colors = [
            ycbcr(100.0, 140.0, 90.0),
            ycbcr(12.5, 127.5, 200.0),
            ycbcr(240.0, 60.0, 130.0),
        ];
        for encoding in Encoding::ALL.iter() {
            for color in colors.iter() {
                let rgb = color.to_rgba_encoded(*encoding, 1.0);
                let back = YCbCrColor::from_rgb_encoded(rgb, *encoding);
                assert!(back.approx_eq(color, DEFAULT_TOLERANCE), "{:?} {:?}", color, back);
            }
        }
        // the plain conversion is Rec. 601
        let default: YCbCrColor = RGBColor::RED.convert();
        assert!(default.approx_eq(&ycbcr(76.245, 84.472, 255.0), DEFAULT_TOLERANCE));
        assert!(default.to_rgb().approx_eq(&RGBColor::RED, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_mismatched_encoding() {
        let pairs = [
            (Encoding::Rec601, Encoding::Rec709),
            (Encoding::Rec709, Encoding::Rec601),
        ];
        for &(forward, backward) in pairs.iter() {
            let encoded = RGBColor::RED.to_ycbcr(forward);
            let decoded = encoded.to_rgba_encoded(backward, 1.0);
            assert!(!decoded.approx_eq(&RGBColor::RED, DEFAULT_TOLERANCE));
        }
    }
}
