//! This module contains the color models that convert to and from [`RGBColor`]. For convenience,
//! each main type is imported into this module's namespace directly.
//!
//! CMYK, HSL and HSV are pure functions of the RGB channels. YUV, YIQ and YCbCr also depend on an
//! [`Encoding`], which their [`EncodedColor`] implementations take explicitly.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`Encoding`]: ../encoding/enum.Encoding.html
//! [`EncodedColor`]: ../encoding/trait.EncodedColor.html
pub mod cmykcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod ycbcrcolor;
pub mod yiqcolor;
pub mod yuvcolor;

// for convenience, use this namespace for the color objects
pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::{HSBColor, HSVColor};
pub use self::ycbcrcolor::YCbCrColor;
pub use self::yiqcolor::YIQColor;
pub use self::yuvcolor::YUVColor;
