//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. The prelude includes every trait in the crate, the ubiquitous [`RGBColor`],
//! its parse error [`RGBParseError`], the [`Encoding`] selector, and the [`MixingModel`] enum. The
//! individual color models in the [`colors`] module are not included.
//!
//! [`colors`]: ../colors/index.html

pub use crate::bound::Bound;
pub use crate::color::{Color, RGBColor, RGBParseError};
pub use crate::colorpoint::ColorPoint;
pub use crate::encoding::{EncodedColor, Encoding};
pub use crate::mix::Mix;
pub use crate::mixing_model::MixingModel;
