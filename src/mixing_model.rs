//! This module names the three classic ways of building a color wheel from a handful of primaries.
//! Each [`MixingModel`] knows its primary colors, the secondary colors those primaries combine into,
//! and the six tertiary colors that fall between them.

use crate::color::RGBColor;
use crate::mix::Mix;

/// A model that describes how colors are mixed together to form all other colors.
///
/// # Example
/// ```
/// # use chromata::prelude::*;
/// let (red, green, blue) = MixingModel::Additive.primary_colors();
/// assert_eq!((red, green, blue), (RGBColor::RED, RGBColor::GREEN, RGBColor::BLUE));
/// let (rose, ..) = MixingModel::Additive.tertiary_colors();
/// assert_eq!(rose, RGBColor::opaque(1., 0., 0.5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MixingModel {
    /// Light: red, green, and blue are added to black to form white. This is the RGB model.
    Additive,
    /// Print: cyan, magenta, and yellow inks are laid on white to form black. This is the CMY(K)
    /// model.
    Subtractive,
    /// Paint: red, yellow, and blue, the RYB wheel taught in art classes.
    Traditional,
}

impl MixingModel {
    /// The primary colors of the model.
    pub fn primary_colors(self) -> (RGBColor, RGBColor, RGBColor) {
        match self {
            MixingModel::Additive => (RGBColor::RED, RGBColor::GREEN, RGBColor::BLUE),
            MixingModel::Subtractive => (RGBColor::CYAN, RGBColor::MAGENTA, RGBColor::YELLOW),
            MixingModel::Traditional => (RGBColor::RED, RGBColor::YELLOW, RGBColor::BLUE),
        }
    }

    /// The secondary colors of the model.
    pub fn secondary_colors(self) -> (RGBColor, RGBColor, RGBColor) {
        match self {
            MixingModel::Additive => (RGBColor::CYAN, RGBColor::MAGENTA, RGBColor::YELLOW),
            MixingModel::Subtractive => (RGBColor::RED, RGBColor::GREEN, RGBColor::BLUE),
            MixingModel::Traditional => (RGBColor::PURPLE, RGBColor::ORANGE, RGBColor::GREEN),
        }
    }

    /// The six tertiary colors of the model. Each primary is mixed with the two secondaries that
    /// do not share its index, in the order (p0·s1, p0·s2, p1·s0, p1·s2, p2·s0, p2·s1).
    pub fn tertiary_colors(
        self,
    ) -> (RGBColor, RGBColor, RGBColor, RGBColor, RGBColor, RGBColor) {
        let (p0, p1, p2) = self.primary_colors();
        let (s0, s1, s2) = self.secondary_colors();
        (
            p0.mix(s1),
            p0.mix(s2),
            p1.mix(s0),
            p1.mix(s2),
            p2.mix(s0),
            p2.mix(s1),
        )
    }
}
