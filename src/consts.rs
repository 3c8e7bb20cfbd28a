//! This file provides the coefficient matrices of the YUV, YIQ, and YCbCr color models, one per
//! model and encoding. Only the RGB to luma/chroma direction is written down: the way back is the
//! exact matrix inverse, computed once, so a round trip returns the color it started from.

use nalgebra::{Matrix3, Vector3};

use crate::encoding::Encoding;

/// YCbCr channels are scaled from [0, 1] to [0, 255].
pub const YCBCR_SCALE: f64 = 255.0;
/// The chroma channels of YCbCr are centered on half of the scale.
pub const YCBCR_OFFSET: f64 = YCBCR_SCALE / 2.0;

/// A linear RGB transformation and its inverse.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transform {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl Transform {
    /// Panics on a singular matrix. Every matrix here is a constant of full rank, so that can only
    /// happen if one was typed in wrong.
    fn new(forward: Matrix3<f64>) -> Transform {
        let inverse = forward
            .try_inverse()
            .expect("constant coefficient matrix not invertible");
        Transform { forward, inverse }
    }

    /// RGB to the three channels of the model.
    pub(crate) fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let v = self.forward * Vector3::new(rgb[0], rgb[1], rgb[2]);
        [v[0], v[1], v[2]]
    }

    /// The three channels of the model back to RGB.
    pub(crate) fn invert(&self, channels: [f64; 3]) -> [f64; 3] {
        let v = self.inverse * Vector3::new(channels[0], channels[1], channels[2]);
        [v[0], v[1], v[2]]
    }
}

/// The normalized YCbCr matrix follows from the luma weights alone: Cb is B - Y and Cr is R - Y,
/// each scaled into [-0.5, 0.5].
fn ycbcr_matrix(encoding: Encoding) -> Matrix3<f64> {
    let [kr, kg, kb] = encoding.luma_weights();
    let cb = 2.0 * (1.0 - kb);
    let cr = 2.0 * (1.0 - kr);
    Matrix3::new(
        kr,
        kg,
        kb,
        -kr / cb,
        -kg / cb,
        0.5,
        0.5,
        -kg / cr,
        -kb / cr,
    )
}

lazy_static! {
    pub(crate) static ref YUV_REC601: Transform = Transform::new(Matrix3::new(
        00.29900,
        00.58700,
        00.11400,
        -0.14713,
        -0.28886,
        00.43600,
        00.61500,
        -0.51499,
        -0.10001,
    ));
    pub(crate) static ref YUV_REC709: Transform = Transform::new(Matrix3::new(
        00.21260,
        00.71520,
        00.07220,
        -0.09991,
        -0.33609,
        00.43600,
        00.61500,
        -0.55861,
        -0.05639,
    ));
    // NTSC 1953
    pub(crate) static ref YIQ_REC601: Transform = Transform::new(Matrix3::new(
        00.2990,
        00.5870,
        00.1140,
        00.5959,
        -0.2746,
        -0.3213,
        00.2115,
        -0.5227,
        00.3112,
    ));
    // there's no published standard for this one: the chroma rows are taken as given
    pub(crate) static ref YIQ_REC709: Transform = Transform::new(Matrix3::new(
        00.2126,
        00.7152,
        00.0722,
        00.5702,
        -0.2854,
        -0.2848,
        00.2512,
        -0.5861,
        00.3349,
    ));
    pub(crate) static ref YCBCR_REC601: Transform = Transform::new(ycbcr_matrix(Encoding::Rec601));
    pub(crate) static ref YCBCR_REC709: Transform = Transform::new(ycbcr_matrix(Encoding::Rec709));
}
