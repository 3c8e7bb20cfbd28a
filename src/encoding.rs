//! This module describes the choice of luma/chroma coefficients shared by the YUV, YIQ, and YCbCr
//! color models. All three are linear transformations of RGB that split a color into a brightness
//! channel (luma) and two color-difference channels (chroma), and all three come in two flavors:
//! the standard-definition coefficients of ITU-R BT.601 and the high-definition coefficients of
//! ITU-R BT.709, which assume different display primaries and so weigh red, green, and blue
//! differently.
//!
//! The encoding is *not* stored in the converted color. Converting a color to YCbCr with Rec. 709
//! and back to RGB with Rec. 601 gives a well-formed but different color, and nothing can detect
//! that mistake: keeping both sides of a conversion on the same encoding is up to the caller. The
//! [`EncodedColor`] methods always ask for the encoding for exactly this reason. The plain
//! [`Color`] implementations of these models use [`Encoding::DEFAULT`].
//!
//! [`Color`]: ../color/trait.Color.html

use crate::color::RGBColor;

/// The set of luma and chroma coefficients used to encode a color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// ITU-R BT.601, used for standard-definition television. Luma is
    /// 0.299 R + 0.587 G + 0.114 B.
    Rec601,
    /// ITU-R BT.709, used for high-definition television. Luma is
    /// 0.2126 R + 0.7152 G + 0.0722 B.
    Rec709,
}

impl Encoding {
    /// The encoding used whenever a conversion doesn't name one: Rec. 601.
    pub const DEFAULT: Encoding = Encoding::Rec601;
    /// Both encodings, in declaration order.
    pub const ALL: [Encoding; 2] = [Encoding::Rec601, Encoding::Rec709];

    /// The red, green, and blue luma weights of this encoding. They always sum to 1.
    pub fn luma_weights(self) -> [f64; 3] {
        match self {
            Encoding::Rec601 => [0.299, 0.587, 0.114],
            Encoding::Rec709 => [0.2126, 0.7152, 0.0722],
        }
    }
}

impl Default for Encoding {
    fn default() -> Encoding {
        Encoding::DEFAULT
    }
}

/// A color model whose conversion to and from RGB depends on an [`Encoding`].
///
/// # Example
/// Using a different encoding for the way back gives a different color.
///
/// ```
/// # use chromata::prelude::*;
/// # use chromata::colors::YCbCrColor;
/// let ycbcr = YCbCrColor::from_rgb_encoded(RGBColor::RED, Encoding::Rec709);
/// let same = ycbcr.to_rgba_encoded(Encoding::Rec709, 1.0);
/// let wrong = ycbcr.to_rgba_encoded(Encoding::Rec601, 1.0);
/// assert!(same.approx_eq(&RGBColor::RED, 0.001));
/// assert!(!wrong.approx_eq(&RGBColor::RED, 0.001));
/// ```
pub trait EncodedColor: Sized {
    /// Converts from RGB with the given encoding. Alpha is dropped.
    fn from_rgb_encoded(rgb: RGBColor, encoding: Encoding) -> Self;
    /// Converts back to RGB with the given encoding and alpha. The encoding must be the one the
    /// color was created with, or the result will silently be a different color.
    fn to_rgba_encoded(&self, encoding: Encoding, alpha: f64) -> RGBColor;
}

/// Implements [`Color`](crate::color::Color) for an [`EncodedColor`] by fixing the encoding to
/// [`Encoding::DEFAULT`].
macro_rules! impl_default_encoding {
    ($($color:ty),*) => {
        $(
            impl $crate::color::Color for $color {
                /// Converts from RGB using `Encoding::DEFAULT` (Rec. 601).
                fn from_rgb(rgb: $crate::color::RGBColor) -> $color {
                    <$color as $crate::encoding::EncodedColor>::from_rgb_encoded(
                        rgb,
                        $crate::encoding::Encoding::DEFAULT,
                    )
                }
                /// Converts back to RGB using `Encoding::DEFAULT` (Rec. 601).
                fn to_rgba(&self, alpha: f64) -> $crate::color::RGBColor {
                    <$color as $crate::encoding::EncodedColor>::to_rgba_encoded(
                        self,
                        $crate::encoding::Encoding::DEFAULT,
                        alpha,
                    )
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rec601() {
        assert_eq!(Encoding::default(), Encoding::Rec601);
        assert_eq!(Encoding::DEFAULT, Encoding::Rec601);
    }

    #[test]
    fn test_luma_weights_sum_to_one() {
        for encoding in Encoding::ALL.iter() {
            let sum: f64 = encoding.luma_weights().iter().sum();
            assert!((sum - 1.0).abs() <= 1e-12);
        }
    }
}
