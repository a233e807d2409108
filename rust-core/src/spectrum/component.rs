//! One annotated DFT coefficient

use num_complex::Complex;
use serde::{Deserialize, Deserializer, Serialize};

/// Normalized DFT coefficient with its derived attributes
///
/// Field order is the serialized order. JSON has no NaN or infinity, so
/// non-finite values are written as `null` and read back as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyComponent {
    /// Signed frequency index (bins above N/2 fold to negative values)
    pub freq: i64,

    /// Magnitude |S(k)|
    #[serde(deserialize_with = "nullable_f64")]
    pub amp: f64,

    /// Angle of S(k) in radians, (-π, π]
    #[serde(deserialize_with = "nullable_f64")]
    pub phase: f64,

    #[serde(deserialize_with = "nullable_f64")]
    pub re: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub im: f64,
}

fn nullable_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl FrequencyComponent {
    /// Derive amplitude and phase from a normalized coefficient
    pub fn from_coefficient(coefficient: Complex<f64>, freq: i64) -> Self {
        Self {
            freq,
            amp: coefficient.norm(),
            phase: coefficient.im.atan2(coefficient.re),
            re: coefficient.re,
            im: coefficient.im,
        }
    }

    /// The coefficient as a complex number
    pub fn coefficient(&self) -> Complex<f64> {
        Complex::new(self.re, self.im)
    }
}
