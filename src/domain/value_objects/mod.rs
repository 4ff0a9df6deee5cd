mod bit_pattern;
mod digit;
mod float_key;
mod numeral_base;
mod sort_direction;

pub use bit_pattern::BitPattern64;
pub use digit::Digit;
pub use float_key::FloatKey;
pub use numeral_base::NumeralBase;
pub use sort_direction::SortDirection;
