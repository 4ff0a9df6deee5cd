//! Common validation utilities for sequence operations
//!
//! Every public operation runs these checks before doing any work, so a
//! rejected call never produces partial results.

use tracing::warn;

use crate::domain::errors::ArrayError;

/// Unwrap a required reference argument
///
/// Returns the argument or `NullArgument` naming it
pub fn require<'a, A: ?Sized>(arg: Option<&'a A>, name: &'static str) -> Result<&'a A, ArrayError> {
    arg.ok_or_else(|| {
        warn!(argument = name, "required argument is missing");
        ArrayError::NullArgument(name)
    })
}

/// Validate that a sequence is present and has at least one element
pub fn validate_sequence<'a, T>(
    seq: Option<&'a [T]>,
    name: &'static str,
) -> Result<&'a [T], ArrayError> {
    let seq = require(seq, name)?;
    if seq.is_empty() {
        warn!(argument = name, "sequence is empty");
        return Err(ArrayError::EmptyInput(name));
    }
    Ok(seq)
}

/// Validate that `[start, start + length)` lies inside a sequence of `len` elements
pub fn validate_range(len: usize, start: usize, length: usize) -> Result<(), ArrayError> {
    let in_bounds = start
        .checked_add(length)
        .is_some_and(|end| end <= len);

    if !in_bounds {
        warn!(start, length, len, "search range is out of bounds");
        return Err(ArrayError::RangeOutOfBounds { start, length, len });
    }
    Ok(())
}
