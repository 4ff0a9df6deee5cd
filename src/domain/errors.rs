use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("Required argument is missing: {0}")]
    NullArgument(&'static str),

    #[error("Sequence cannot be empty: {0}")]
    EmptyInput(&'static str),

    #[error("Invalid numeral base {0}: must be between 2 and 16")]
    InvalidBase(u32),

    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Value of '{digits}' in base {base} exceeds the representable range")]
    Overflow { digits: String, base: u32 },

    #[error("No comparator supplied and the element type has no natural order")]
    ComparatorRequired,

    #[error("Invalid digit value {0}: must be between 0 and 9")]
    InvalidDigitValue(i32),

    #[error("Range [{start}, {start}+{length}) is outside a sequence of length {len}")]
    RangeOutOfBounds {
        start: usize,
        length: usize,
        len: usize,
    },

    #[error("No word registered for character '{0}'")]
    MissingWord(char),

    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formatting() {
        assert!(ArrayError::NullArgument("seq")
            .to_string()
            .contains("missing: seq"));
        assert!(ArrayError::EmptyInput("seq")
            .to_string()
            .contains("cannot be empty"));
        assert_eq!(
            ArrayError::InvalidBase(17).to_string(),
            "Invalid numeral base 17: must be between 2 and 16"
        );
        assert_eq!(
            ArrayError::InvalidDigit {
                digit: 'G',
                base: 16
            }
            .to_string(),
            "Invalid digit 'G' for base 16"
        );
        assert!(ArrayError::RangeOutOfBounds {
            start: 3,
            length: 4,
            len: 5
        }
        .to_string()
        .contains("length 5"));
    }

    #[test]
    fn test_error_debug_formatting() {
        let debug_str = format!("{:?}", ArrayError::MissingWord('x'));
        assert!(debug_str.contains("MissingWord"));
        assert!(debug_str.contains('x'));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(ArrayError::ComparatorRequired, ArrayError::ComparatorRequired);
        assert_ne!(
            ArrayError::NullArgument("seq"),
            ArrayError::EmptyInput("seq")
        );
    }
}
