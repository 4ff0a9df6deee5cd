//! Integer predicates for `filter`.

use serde::{Deserialize, Serialize};

use crate::application::ports::Predicate;
use crate::domain::errors::ArrayError;
use crate::domain::value_objects::Digit;

/// Matches numbers whose decimal notation contains a given digit.
///
/// The sign is ignored, and `0` is treated as the single digit `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainsDigit {
    digit: Digit,
}

impl ContainsDigit {
    pub fn new(digit: i32) -> Result<Self, ArrayError> {
        Ok(Self {
            digit: Digit::new(digit)?,
        })
    }

    pub fn digit(&self) -> Digit {
        self.digit
    }
}

impl Predicate<i32> for ContainsDigit {
    fn matches(&self, value: &i32) -> bool {
        let wanted = u32::from(self.digit.value());
        let mut remaining = value.unsigned_abs();
        loop {
            if remaining % 10 == wanted {
                return true;
            }
            remaining /= 10;
            if remaining == 0 {
                return false;
            }
        }
    }
}

/// Matches numbers strictly greater than the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreaterThan {
    pub threshold: i32,
}

impl GreaterThan {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }
}

impl Predicate<i32> for GreaterThan {
    fn matches(&self, value: &i32) -> bool {
        *value > self.threshold
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenNumber;

impl Predicate<i32> for EvenNumber {
    fn matches(&self, value: &i32) -> bool {
        value % 2 == 0
    }
}

/// Matches non-negative numbers that read the same in both directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PalindromeNumber;

impl Predicate<i32> for PalindromeNumber {
    fn matches(&self, value: &i32) -> bool {
        if *value < 0 {
            return false;
        }

        // reversing an i32 can exceed i32::MAX, so widen first
        let original = i64::from(*value);
        let mut remaining = original;
        let mut reversed: i64 = 0;
        while remaining != 0 {
            reversed = reversed * 10 + remaining % 10;
            remaining /= 10;
        }

        reversed == original
    }
}
