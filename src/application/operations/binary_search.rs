//! Binary search over ordered sequences
//!
//! The searched range must already be ordered consistently with the
//! comparator. That precondition is not checked: on a misordered range the
//! result is unspecified (it may or may not be `None`).

use std::cmp::Ordering;

use tracing::debug;

use crate::application::ports::{Comparator, NaturalOrder};
use crate::application::validation::{validate_range, validate_sequence};
use crate::domain::errors::ArrayError;

/// Search the whole sequence using the natural order of `T`
pub fn search<T: Ord>(seq: Option<&[T]>, item: &T) -> Result<Option<usize>, ArrayError> {
    search_by(seq, item, Some(&NaturalOrder))
}

/// Search the whole sequence with a caller-supplied comparator.
///
/// An absent comparator fails with `ComparatorRequired`; types with a natural
/// order should go through [`search`] instead.
pub fn search_by<T, C>(
    seq: Option<&[T]>,
    item: &T,
    comparator: Option<&C>,
) -> Result<Option<usize>, ArrayError>
where
    C: Comparator<T> + ?Sized,
{
    let seq = validate_sequence(seq, "seq")?;
    let comparator = comparator.ok_or(ArrayError::ComparatorRequired)?;
    Ok(search_unchecked(seq, 0, seq.len(), item, comparator))
}

/// Search the sub-range `[start, start + length)` of `seq`.
///
/// The range is bounds-checked instead of the sequence being null/empty
/// checked; a zero-length range simply finds nothing.
pub fn search_range<T, C>(
    seq: &[T],
    start: usize,
    length: usize,
    item: &T,
    comparator: Option<&C>,
) -> Result<Option<usize>, ArrayError>
where
    C: Comparator<T> + ?Sized,
{
    validate_range(seq.len(), start, length)?;
    let comparator = comparator.ok_or(ArrayError::ComparatorRequired)?;
    Ok(search_unchecked(seq, start, length, item, comparator))
}

fn search_unchecked<T, C>(seq: &[T], start: usize, length: usize, item: &T, comparator: &C) -> Option<usize>
where
    C: Comparator<T> + ?Sized,
{
    let mut low = start;
    let mut high = start + length;
    let mut probes = 0usize;

    let found = loop {
        if low >= high {
            break None;
        }

        // Two candidates left: check both directly instead of narrowing further
        if high - low <= 2 {
            break (low..high).find(|&index| {
                probes += 1;
                comparator.compare(&seq[index], item) == Ordering::Equal
            });
        }

        let mid = low + (high - low) / 2;
        probes += 1;
        match comparator.compare(&seq[mid], item) {
            Ordering::Equal => break Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    };

    debug!(start, length, probes, found = ?found, "binary search completed");
    found
}
