use serde::{Deserialize, Serialize};

use crate::domain::errors::ArrayError;

/// Raw bit pattern of an IEEE-754 binary64 value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitPattern64(u64);

impl BitPattern64 {
    pub const WIDTH: usize = 64;

    pub fn from_f64(value: f64) -> Self {
        Self(value.to_bits())
    }

    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Parse a 64-character string of '0'/'1', most-significant bit first
    pub fn from_bit_string(bits: &str) -> Result<Self, ArrayError> {
        let count = bits.chars().count();
        if count != Self::WIDTH {
            return Err(ArrayError::InvalidLength {
                expected: Self::WIDTH,
                actual: count,
            });
        }

        let mut value = 0u64;
        for symbol in bits.chars() {
            let bit = match symbol {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(ArrayError::InvalidDigit {
                        digit: symbol,
                        base: 2,
                    })
                }
            };
            value = (value << 1) | bit;
        }

        Ok(Self(value))
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn to_f64(&self) -> f64 {
        f64::from_bits(self.0)
    }

    pub fn sign_bit(&self) -> bool {
        self.0 >> 63 == 1
    }

    /// Biased 11-bit exponent field
    pub fn exponent(&self) -> u16 {
        ((self.0 >> 52) & 0x7FF) as u16
    }

    /// 52-bit mantissa field
    pub fn mantissa(&self) -> u64 {
        self.0 & 0x000F_FFFF_FFFF_FFFF
    }
}

impl From<f64> for BitPattern64 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl std::fmt::Display for BitPattern64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:064b}", self.0)
    }
}

impl std::str::FromStr for BitPattern64 {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bit_string(s)
    }
}
