use serde::{Deserialize, Serialize};

/// Hashable lookup key for an `f64`.
///
/// Every NaN collapses to a single key and both signed zeros share one key;
/// every other value is keyed by its exact bit pattern. This gives map lookups
/// the "a NaN key matches any NaN" behaviour that IEEE equality cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FloatKey(u64);

impl FloatKey {
    const CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(Self::CANONICAL_NAN)
        } else if value == 0.0 {
            Self(0)
        } else {
            Self(value.to_bits())
        }
    }

    pub fn to_f64(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
