use crate::application::ports::Transformer;
use crate::domain::errors::ArrayError;
use crate::domain::value_objects::BitPattern64;

/// Renders binary64 values as their raw IEEE-754 bit strings.
///
/// The output is a pure reinterpretation of the value's memory layout: the
/// sign of zero and any NaN payload survive unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitEncoder;

impl BitEncoder {
    /// 64 characters of '0'/'1', bit 63 (sign) first
    pub fn to_ieee754_bits(value: f64) -> String {
        BitPattern64::from_f64(value).to_string()
    }

    /// Inverse of [`BitEncoder::to_ieee754_bits`]
    pub fn from_ieee754_bits(bits: &str) -> Result<f64, ArrayError> {
        Ok(BitPattern64::from_bit_string(bits)?.to_f64())
    }
}

impl Transformer<f64, String> for BitEncoder {
    fn transform(&self, value: &f64) -> Result<String, ArrayError> {
        Ok(Self::to_ieee754_bits(*value))
    }
}
