//! This module defines [`RGBColor`], the owned color value every conversion in this crate goes
//! through, and the [`Color`] trait that all of the other color models implement. An `RGBColor`
//! is nothing more than four floating-point channels, red, green, blue, and alpha, each nominally
//! between 0 and 1. Nothing here clamps: a color with a red channel of 1.3 is a perfectly good
//! value, it just can't be shown on a normal monitor.
//!
//! Besides raw channel access, `RGBColor` exposes the projections that used to come for free from a
//! platform color type: hue, saturation, and brightness (the "HSB" primitive that HSV and HSL are
//! built on) and a grayscale "white" level. It also knows a handful of named colors and can read
//! and write hex codes like `#FF8000`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use float_cmp::approx_eq;
use maplit::hashmap;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::colors::{YCbCrColor, YIQColor, YUVColor};
use crate::encoding::{EncodedColor, Encoding};

/// The tolerance used when comparing two colors that went through floating-point conversions. This
/// is the same accuracy the fixed-point tables for the YIQ and YCbCr models are given in.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// A trait that includes any color representation that can be converted to and from an RGB(A)
/// color. Most color models don't carry an alpha channel, so the conversion back to RGB asks for
/// one.
pub trait Color: Sized {
    /// Converts from an RGB color. The alpha channel of the input is not part of the result.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts back to an RGB color with the given alpha value.
    fn to_rgba(&self, alpha: f64) -> RGBColor;
    /// Converts back to a fully opaque RGB color.
    fn to_rgb(&self) -> RGBColor {
        self.to_rgba(1.0)
    }
    /// Converts between any two color models by going through RGB.
    /// # Example
    ///
    /// ```
    /// # use chromata::prelude::*;
    /// # use chromata::colors::{CMYKColor, HSLColor};
    /// let orange = HSLColor{h: 30., s: 1., l: 0.5};
    /// let cmyk: CMYKColor = orange.convert();
    /// assert!((cmyk.m - 50.).abs() <= 1e-10);
    /// assert!(cmyk.k.abs() <= 1e-10);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// An error that can occur when reading an [`RGBColor`] from a string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum RGBParseError {
    /// The string was not a hex code of the form `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    #[error("invalid hex color code")]
    InvalidHexSyntax,
    /// The string was not the name of a color this crate knows about.
    #[error("unknown color name")]
    UnknownColorName,
}

lazy_static! {
    // the leading # is optional, as many tools drop it
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([[:xdigit:]]{3}|[[:xdigit:]]{6}|[[:xdigit:]]{8})$")
            .expect("hex code pattern is valid");
    static ref COLOR_NAMES: HashMap<&'static str, RGBColor> = hashmap! {
        "black" => RGBColor::BLACK,
        "white" => RGBColor::WHITE,
        "red" => RGBColor::RED,
        "green" => RGBColor::GREEN,
        "blue" => RGBColor::BLUE,
        "cyan" => RGBColor::CYAN,
        "magenta" => RGBColor::MAGENTA,
        "yellow" => RGBColor::YELLOW,
        "orange" => RGBColor::ORANGE,
        "purple" => RGBColor::PURPLE,
        "brown" => RGBColor::BROWN,
        "gray" => RGBColor::GRAY,
        "grey" => RGBColor::GRAY,
        "darkgray" => RGBColor::DARK_GRAY,
        "darkgrey" => RGBColor::DARK_GRAY,
        "lightgray" => RGBColor::LIGHT_GRAY,
        "lightgrey" => RGBColor::LIGHT_GRAY,
        "clear" => RGBColor::CLEAR,
    };
}

/// A color with red, green, blue, and alpha channels. Each channel is a floating-point number that
/// ranges from 0 to 1 for colors that can actually be displayed; values outside that range are
/// allowed and survive every conversion unchanged in meaning.
///
/// # Example
///
/// ```
/// # use chromata::prelude::*;
/// let orange = RGBColor::opaque(1., 0.5, 0.);
/// assert_eq!(orange.to_string(), "#FF8000");
/// assert!((orange.hue() - 30. / 360.).abs() <= 1e-10);
/// let parsed: RGBColor = "#ff8000".parse().unwrap();
/// assert!(parsed.approx_eq(&orange, 0.01));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
    /// The alpha channel: 0 is fully transparent, 1 fully opaque.
    pub a: f64,
}

impl RGBColor {
    /// Pure black, fully opaque.
    pub const BLACK: RGBColor = RGBColor { r: 0., g: 0., b: 0., a: 1. };
    /// Pure white.
    pub const WHITE: RGBColor = RGBColor { r: 1., g: 1., b: 1., a: 1. };
    /// Pure red.
    pub const RED: RGBColor = RGBColor { r: 1., g: 0., b: 0., a: 1. };
    /// Pure green.
    pub const GREEN: RGBColor = RGBColor { r: 0., g: 1., b: 0., a: 1. };
    /// Pure blue.
    pub const BLUE: RGBColor = RGBColor { r: 0., g: 0., b: 1., a: 1. };
    /// Cyan: green and blue at full strength.
    pub const CYAN: RGBColor = RGBColor { r: 0., g: 1., b: 1., a: 1. };
    /// Magenta: red and blue at full strength.
    pub const MAGENTA: RGBColor = RGBColor { r: 1., g: 0., b: 1., a: 1. };
    /// Yellow: red and green at full strength.
    pub const YELLOW: RGBColor = RGBColor { r: 1., g: 1., b: 0., a: 1. };
    /// Orange, halfway between red and yellow.
    pub const ORANGE: RGBColor = RGBColor { r: 1., g: 0.5, b: 0., a: 1. };
    /// Purple, a half-strength magenta.
    pub const PURPLE: RGBColor = RGBColor { r: 0.5, g: 0., b: 0.5, a: 1. };
    /// Brown.
    pub const BROWN: RGBColor = RGBColor { r: 0.6, g: 0.4, b: 0.2, a: 1. };
    /// A 50% gray.
    pub const GRAY: RGBColor = RGBColor { r: 0.5, g: 0.5, b: 0.5, a: 1. };
    /// A gray with one third of full brightness.
    pub const DARK_GRAY: RGBColor = RGBColor { r: 1. / 3., g: 1. / 3., b: 1. / 3., a: 1. };
    /// A gray with two thirds of full brightness.
    pub const LIGHT_GRAY: RGBColor = RGBColor { r: 2. / 3., g: 2. / 3., b: 2. / 3., a: 1. };
    /// Black with zero alpha.
    pub const CLEAR: RGBColor = RGBColor { r: 0., g: 0., b: 0., a: 0. };

    /// Creates a color from all four channels.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> RGBColor {
        RGBColor { r, g, b, a }
    }
    /// Creates a fully opaque color.
    pub fn opaque(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor::new(r, g, b, 1.0)
    }
    /// Creates a color from an `(r, g, b)` tuple and a separate alpha value.
    pub fn from_rgb_tuple(rgb: (f64, f64, f64), alpha: f64) -> RGBColor {
        RGBColor::new(rgb.0, rgb.1, rgb.2, alpha)
    }
    /// Creates a color from an `(r, g, b, a)` tuple.
    pub fn from_rgba_tuple(rgba: (f64, f64, f64, f64)) -> RGBColor {
        RGBColor::new(rgba.0, rgba.1, rgba.2, rgba.3)
    }
    /// Creates a color from an `(a, r, g, b)` tuple.
    pub fn from_argb_tuple(argb: (f64, f64, f64, f64)) -> RGBColor {
        RGBColor::new(argb.1, argb.2, argb.3, argb.0)
    }
    /// Creates a gray with the given white level.
    pub fn from_white(white: f64, alpha: f64) -> RGBColor {
        RGBColor::new(white, white, white, alpha)
    }

    /// The red channel.
    pub fn red(&self) -> f64 {
        self.r
    }
    /// The green channel.
    pub fn green(&self) -> f64 {
        self.g
    }
    /// The blue channel.
    pub fn blue(&self) -> f64 {
        self.b
    }
    /// The alpha channel.
    pub fn alpha(&self) -> f64 {
        self.a
    }
    /// The red, green, and blue channels as a tuple.
    pub fn rgb_components(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }
    /// The red, green, blue, and alpha channels as a tuple.
    pub fn rgba_components(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }
    /// The alpha, red, green, and blue channels as a tuple.
    pub fn argb_components(&self) -> (f64, f64, f64, f64) {
        (self.a, self.r, self.g, self.b)
    }

    /// Gets the hue, saturation, and brightness of this color. Unlike [`HSVColor`], the hue is a
    /// fraction of a full turn between 0 and 1, not an angle in degrees. Grays have a hue and
    /// saturation of 0, although any hue would describe them equally well.
    ///
    /// [`HSVColor`]: ../colors/hsvcolor/struct.HSVColor.html
    pub fn hsb_components(&self) -> (f64, f64, f64) {
        // the hexagonal projection: tilting the RGB cube on its black corner, the distance from the
        // gray axis is just the largest channel minus the smallest
        let max_c = self.r.max(self.g).max(self.b);
        let min_c = self.r.min(self.g).min(self.b);
        let chroma = max_c - min_c;

        let sector = if chroma == 0.0 {
            0.0
        } else if max_c == self.r {
            ((self.g - self.b) / chroma).rem_euclid(6.0)
        } else if max_c == self.g {
            (self.b - self.r) / chroma + 2.0
        } else {
            (self.r - self.g) / chroma + 4.0
        };

        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };
        (sector / 6.0, saturation, max_c)
    }
    /// The hue as a fraction of a full turn, between 0 and 1.
    pub fn hue(&self) -> f64 {
        self.hsb_components().0
    }
    /// The HSB saturation, between 0 and 1.
    pub fn saturation(&self) -> f64 {
        self.hsb_components().1
    }
    /// The HSB brightness, which is the largest of the three color channels.
    pub fn brightness(&self) -> f64 {
        self.hsb_components().2
    }
    /// The grayscale level of this color: its Rec. 601 luma, which for a gray is simply the value of
    /// any channel.
    pub fn white(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Creates a color from a hue, saturation, and brightness. The hue is a fraction of a full turn
    /// and wraps around, so 1.25 is the same as 0.25.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> RGBColor {
        let chroma = saturation * brightness;
        let h = hue.rem_euclid(1.0) * 6.0;
        // second-largest channel, where the largest is the chroma and the smallest is 0
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h <= 1.0 {
            (chroma, x, 0.0)
        } else if h <= 2.0 {
            (x, chroma, 0.0)
        } else if h <= 3.0 {
            (0.0, chroma, x)
        } else if h <= 4.0 {
            (0.0, x, chroma)
        } else if h <= 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = brightness - chroma;
        RGBColor::new(r1 + offset, g1 + offset, b1 + offset, alpha)
    }

    /// Converts to YUV using the given encoding.
    pub fn to_yuv(&self, encoding: Encoding) -> YUVColor {
        YUVColor::from_rgb_encoded(*self, encoding)
    }
    /// Converts to YIQ using the given encoding.
    pub fn to_yiq(&self, encoding: Encoding) -> YIQColor {
        YIQColor::from_rgb_encoded(*self, encoding)
    }
    /// Converts to YCbCr using the given encoding.
    pub fn to_ycbcr(&self, encoding: Encoding) -> YCbCrColor {
        YCbCrColor::from_rgb_encoded(*self, encoding)
    }

    /// Returns `true` if every channel, alpha included, is within `tolerance` of the other color's.
    pub fn approx_eq(&self, other: &RGBColor, tolerance: f64) -> bool {
        approx_eq!(f64, self.r, other.r, epsilon = tolerance)
            && approx_eq!(f64, self.g, other.g, epsilon = tolerance)
            && approx_eq!(f64, self.b, other.b, epsilon = tolerance)
            && approx_eq!(f64, self.a, other.a, epsilon = tolerance)
    }

    /// Reads a hex code of the form `#rgb`, `#rrggbb`, or `#rrggbbaa`. The leading `#` may be left
    /// out, and upper- and lowercase digits are both fine.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` for anything else.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let digits = match HEX_CODE.captures(hex.trim()).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => {
                debug!(input = hex, "rejected hex code");
                return Err(RGBParseError::InvalidHexSyntax);
            }
        };
        let value = u32::from_str_radix(digits, 16).map_err(|_| RGBParseError::InvalidHexSyntax)?;
        let channel = |shift: u32, mask: u32, max: f64| f64::from((value >> shift) & mask) / max;
        Ok(match digits.len() {
            3 => RGBColor::opaque(
                channel(8, 0xF, 15.),
                channel(4, 0xF, 15.),
                channel(0, 0xF, 15.),
            ),
            6 => RGBColor::opaque(
                channel(16, 0xFF, 255.),
                channel(8, 0xFF, 255.),
                channel(0, 0xFF, 255.),
            ),
            _ => RGBColor::new(
                channel(24, 0xFF, 255.),
                channel(16, 0xFF, 255.),
                channel(8, 0xFF, 255.),
                channel(0, 0xFF, 255.),
            ),
        })
    }
    /// Looks up one of the named colors, ignoring case, spaces, and underscores: "Dark Gray",
    /// "dark_gray", and "darkgray" are all the same color.
    /// # Errors
    /// Returns `RGBParseError::UnknownColorName` if the name isn't known.
    pub fn from_color_name(name: &str) -> Result<RGBColor, RGBParseError> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_lowercase();
        COLOR_NAMES.get(key.as_str()).copied().ok_or_else(|| {
            debug!(input = name, "rejected color name");
            RGBParseError::UnknownColorName
        })
    }
    /// Writes the color as an uppercase `#RRGGBB` hex code, clamping channels to the displayable
    /// range and dropping alpha.
    pub fn to_hex_string(&self) -> String {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

impl Default for RGBColor {
    fn default() -> RGBColor {
        RGBColor::BLACK
    }
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    /// Returns this color with its alpha replaced.
    fn to_rgba(&self, alpha: f64) -> RGBColor {
        RGBColor { a: alpha, ..*self }
    }
    /// Returns this color unchanged, alpha included.
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    /// Accepts either a hex code or a color name. Anything starting with `#` can only be a hex
    /// code, so its syntax error is kept.
    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        if s.trim_start().starts_with('#') {
            return RGBColor::from_hex_code(s);
        }
        RGBColor::from_hex_code(s).or_else(|_| RGBColor::from_color_name(s))
    }
}

impl From<(f64, f64, f64)> for RGBColor {
    fn from(rgb: (f64, f64, f64)) -> RGBColor {
        RGBColor::from_rgb_tuple(rgb, 1.0)
    }
}

impl From<RGBColor> for (f64, f64, f64, f64) {
    fn from(color: RGBColor) -> (f64, f64, f64, f64) {
        color.rgba_components()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let color = RGBColor::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color.red(), 0.1);
        assert_eq!(color.green(), 0.2);
        assert_eq!(color.blue(), 0.3);
        assert_eq!(color.alpha(), 0.4);
        assert_eq!(color.rgb_components(), (0.1, 0.2, 0.3));
        assert_eq!(color.argb_components(), (0.4, 0.1, 0.2, 0.3));
        assert_eq!(RGBColor::from_argb_tuple(color.argb_components()), color);
        assert_eq!(RGBColor::from_rgba_tuple(color.rgba_components()), color);
        // out of range values are kept as is
        let bright = RGBColor::opaque(1.5, -0.25, 0.5);
        assert_eq!(bright.rgb_components(), (1.5, -0.25, 0.5));
    }

    #[test]
    fn test_hsb_components() {
        let (h, s, b) = RGBColor::RED.hsb_components();
        assert!(h.abs() <= 1e-10);
        assert!((s - 1.0).abs() <= 1e-10);
        assert!((b - 1.0).abs() <= 1e-10);
        // magenta sits at 300 degrees, not -60
        assert!((RGBColor::MAGENTA.hue() - 300. / 360.).abs() <= 1e-10);
        assert!((RGBColor::CYAN.hue() - 0.5).abs() <= 1e-10);
        assert!((RGBColor::BLUE.hue() - 2. / 3.).abs() <= 1e-10);
        // grays have no hue or saturation
        assert_eq!(RGBColor::GRAY.hue(), 0.0);
        assert_eq!(RGBColor::GRAY.saturation(), 0.0);
        assert_eq!(RGBColor::GRAY.brightness(), 0.5);
        assert_eq!(RGBColor::BLACK.saturation(), 0.0);
    }

    #[test]
    fn test_hsb_round_trip() {
        let colors = [
            RGBColor::opaque(0.2, 0.4, 0.9),
            RGBColor::opaque(0.9, 0.1, 0.3),
            RGBColor::opaque(0.5, 0.7, 0.1),
            RGBColor::ORANGE,
            RGBColor::BROWN,
            RGBColor::LIGHT_GRAY,
            RGBColor::BLACK,
        ];
        for color in colors.iter() {
            let (h, s, b) = color.hsb_components();
            let back = RGBColor::from_hsb(h, s, b, color.a);
            assert!(back.approx_eq(color, DEFAULT_TOLERANCE), "{:?} {:?}", color, back);
        }
        // hue wraps around
        assert!(RGBColor::from_hsb(1.0, 1.0, 1.0, 1.0).approx_eq(&RGBColor::RED, 1e-10));
        assert!(RGBColor::from_hsb(-0.5, 1.0, 1.0, 1.0).approx_eq(&RGBColor::CYAN, 1e-10));
    }

    #[test]
    fn test_white() {
        assert!((RGBColor::WHITE.white() - 1.0).abs() <= 1e-10);
        assert!((RGBColor::DARK_GRAY.white() - 1. / 3.).abs() <= 1e-10);
        assert!((RGBColor::from_white(0.25, 1.0).white() - 0.25).abs() <= 1e-10);
        assert!((RGBColor::RED.white() - 0.299).abs() <= 1e-10);
    }

    #[test]
    fn test_hex_codes() {
        let orange = RGBColor::from_hex_code("#FF8000").unwrap();
        assert!(orange.approx_eq(&RGBColor::opaque(1., 128. / 255., 0.), 1e-10));
        assert_eq!(orange.to_string(), "#FF8000");
        let short = RGBColor::from_hex_code("0f0").unwrap();
        assert!(short.approx_eq(&RGBColor::GREEN, 1e-10));
        let translucent = RGBColor::from_hex_code("#00000080").unwrap();
        assert!((translucent.a - 128. / 255.).abs() <= 1e-10);
        assert_eq!(RGBColor::opaque(1.4, -0.2, 0.5).to_hex_string(), "#FF0080");
        assert_eq!(
            RGBColor::from_hex_code("#12345"),
            Err(RGBParseError::InvalidHexSyntax)
        );
        assert_eq!(
            RGBColor::from_hex_code("#GG0000"),
            Err(RGBParseError::InvalidHexSyntax)
        );
    }

    #[test]
    fn test_color_names() {
        assert_eq!(RGBColor::from_color_name("Dark Gray"), Ok(RGBColor::DARK_GRAY));
        assert_eq!(RGBColor::from_color_name("light_grey"), Ok(RGBColor::LIGHT_GRAY));
        assert_eq!("orange".parse::<RGBColor>(), Ok(RGBColor::ORANGE));
        assert_eq!("#FFFF00".parse::<RGBColor>(), Ok(RGBColor::YELLOW));
        assert_eq!(
            "chartreuse".parse::<RGBColor>(),
            Err(RGBParseError::UnknownColorName)
        );
        assert_eq!("0f0".parse::<RGBColor>(), Ok(RGBColor::GREEN));
    }

    #[test]
    fn test_parse_keeps_hex_error() {
        assert_eq!(
            "#12345".parse::<RGBColor>(),
            Err(RGBParseError::InvalidHexSyntax)
        );
        assert_eq!(
            " #red".parse::<RGBColor>(),
            Err(RGBParseError::InvalidHexSyntax)
        );
        assert_eq!("red".parse::<RGBColor>(), Ok(RGBColor::RED));
    }

    #[test]
    fn test_rgb_conversion_keeps_alpha() {
        let color = RGBColor::new(0.3, 0.6, 0.9, 0.5);
        assert_eq!(color.to_rgb(), color);
        assert_eq!(color.to_rgba(0.25).a, 0.25);
        let same: RGBColor = color.convert();
        assert_eq!(same, color);
    }

    #[test]
    fn test_serde() {
        let color = RGBColor::new(0.25, 0.5, 0.75, 1.0);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"r":0.25,"g":0.5,"b":0.75,"a":1.0}"#);
        let back: RGBColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
