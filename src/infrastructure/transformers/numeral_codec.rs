use tracing::debug;

use crate::application::ports::Transformer;
use crate::domain::errors::ArrayError;
use crate::domain::value_objects::NumeralBase;

/// Converts digit strings in a fixed base (2..=16) to `i32` values and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumeralBaseCodec {
    base: NumeralBase,
}

impl NumeralBaseCodec {
    pub fn new(base: u32) -> Result<Self, ArrayError> {
        Ok(Self {
            base: NumeralBase::new(base)?,
        })
    }

    pub fn with_base(base: NumeralBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> NumeralBase {
        self.base
    }

    /// Convert `digits` written in `base` to an integer.
    ///
    /// Checks run in order: base range, absent string, empty string, then
    /// each digit left to right. Accumulation uses checked arithmetic and
    /// fails with `Overflow` past `i32::MAX`.
    pub fn to_decimal(digits: Option<&str>, base: u32) -> Result<i32, ArrayError> {
        let base = NumeralBase::new(base)?;
        let digits = digits.ok_or(ArrayError::NullArgument("digits"))?;
        Self::with_base(base).decode(digits)
    }

    /// Decode `digits` in this codec's base
    pub fn decode(&self, digits: &str) -> Result<i32, ArrayError> {
        if digits.is_empty() {
            return Err(ArrayError::EmptyInput("digits"));
        }

        let radix = self.base.value() as i32;
        let mut number: i32 = 0;
        for symbol in digits.chars() {
            let digit = self.base.digit_value(symbol)? as i32;
            number = number
                .checked_mul(radix)
                .and_then(|n| n.checked_add(digit))
                .ok_or_else(|| ArrayError::Overflow {
                    digits: digits.to_string(),
                    base: self.base.value(),
                })?;
        }

        debug!(digits, base = self.base.value(), number, "decoded numeral");
        Ok(number)
    }

    /// Render a non-negative value in this codec's base with uppercase digits
    pub fn encode(&self, value: u32) -> String {
        let radix = self.base.value();
        if value == 0 {
            return "0".to_string();
        }

        let mut remaining = value;
        let mut symbols = Vec::new();
        while remaining > 0 {
            // remainder is always below the base, so the alphabet lookup succeeds
            if let Some(symbol) = self.base.digit_char(remaining % radix) {
                symbols.push(symbol);
            }
            remaining /= radix;
        }

        symbols.iter().rev().collect()
    }
}

impl Transformer<String, i32> for NumeralBaseCodec {
    fn transform(&self, value: &String) -> Result<i32, ArrayError> {
        self.decode(value)
    }
}
