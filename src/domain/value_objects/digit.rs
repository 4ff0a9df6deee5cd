use serde::{Deserialize, Serialize};

use crate::domain::errors::ArrayError;

/// Validated decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: i32) -> Result<Self, ArrayError> {
        if !(0..=9).contains(&value) {
            return Err(ArrayError::InvalidDigitValue(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Digit {
    type Error = ArrayError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for i32 {
    fn from(digit: Digit) -> Self {
        i32::from(digit.0)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
