//! Chromata converts colors between normalized RGB(A) and the other color models in everyday use:
//! CMYK for print, HSL and HSV/HSB for color pickers, and the luma/chroma models YUV, YIQ, and YCbCr
//! used by television and video codecs. Every model converts to and from [`RGBColor`], which is the
//! hub all conversions pass through, and the [`Color`] trait ties them together.
//!
//! The luma/chroma models come in two flavors, Rec. 601 and Rec. 709, selected by [`Encoding`].
//! The encoding isn't recorded in the converted color, so decoding has to use the same encoding as
//! encoding did.
//!
//! On top of the conversions sit color mixing ([`Mix`]), the three classic [`MixingModel`]s, and
//! explicit clamping into each model's native range ([`Bound`]).
//!
//! [`RGBColor`]: color/struct.RGBColor.html
//! [`Color`]: color/trait.Color.html
//! [`Encoding`]: encoding/enum.Encoding.html
//! [`Mix`]: mix/trait.Mix.html
//! [`MixingModel`]: mixing_model/enum.MixingModel.html
//! [`Bound`]: bound/trait.Bound.html

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.51499 with -0.51_499
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod encoding;

pub mod bound;
pub mod color;
pub mod colorpoint;
pub mod colors;
pub mod consts;
pub mod coord;
pub mod mix;
pub mod mixing_model;
pub mod prelude;

#[cfg(test)]
mod tests {
    use crate::colors::{CMYKColor, HSBColor, HSLColor, YCbCrColor, YIQColor, YUVColor};
    use crate::prelude::*;

    #[test]
    fn test_every_model_round_trips() {
        let color = RGBColor::new(0.8, 0.35, 0.1, 0.7);
        let tol = 1e-9;
        let cmyk: CMYKColor = color.convert();
        assert!(cmyk.to_rgba(color.a).approx_eq(&color, tol));
        let hsl: HSLColor = color.convert();
        assert!(hsl.to_rgba(color.a).approx_eq(&color, tol));
        let hsb: HSBColor = color.convert();
        assert!(hsb.to_rgba(color.a).approx_eq(&color, tol));
        for &encoding in Encoding::ALL.iter() {
            let yuv = YUVColor::from_rgb_encoded(color, encoding);
            assert!(yuv.to_rgba_encoded(encoding, color.a).approx_eq(&color, tol));
            let yiq = YIQColor::from_rgb_encoded(color, encoding);
            assert!(yiq.to_rgba_encoded(encoding, color.a).approx_eq(&color, tol));
            let ycbcr = YCbCrColor::from_rgb_encoded(color, encoding);
            assert!(ycbcr.to_rgba_encoded(encoding, color.a).approx_eq(&color, tol));
        }
    }
}
