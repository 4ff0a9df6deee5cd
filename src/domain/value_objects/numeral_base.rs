use serde::{Deserialize, Serialize};

use crate::domain::errors::ArrayError;

/// Validated numeral base (2..=16) with the `0-9A-F` alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumeralBase(u32);

impl NumeralBase {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 16;

    const ALPHABET: &'static [u8; 16] = b"0123456789ABCDEF";

    pub fn new(base: u32) -> Result<Self, ArrayError> {
        if !(Self::MIN..=Self::MAX).contains(&base) {
            return Err(ArrayError::InvalidBase(base));
        }
        Ok(Self(base))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Map a digit character (case-insensitive) to its value in this base
    pub fn digit_value(&self, symbol: char) -> Result<u32, ArrayError> {
        let value = match symbol.to_ascii_uppercase() {
            c @ '0'..='9' => c as u32 - '0' as u32,
            c @ 'A'..='F' => c as u32 - 'A' as u32 + 10,
            _ => u32::MAX,
        };

        if value >= self.0 {
            return Err(ArrayError::InvalidDigit {
                digit: symbol,
                base: self.0,
            });
        }
        Ok(value)
    }

    /// Uppercase digit character for `value`, which must be below the base
    pub fn digit_char(&self, value: u32) -> Option<char> {
        if value >= self.0 {
            return None;
        }
        Some(Self::ALPHABET[value as usize] as char)
    }
}

impl Default for NumeralBase {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u32> for NumeralBase {
    type Error = ArrayError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NumeralBase> for u32 {
    fn from(base: NumeralBase) -> Self {
        base.0
    }
}

impl std::fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NumeralBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid numeral base: {}", s))?;
        Self::new(base).map_err(|e| e.to_string())
    }
}
