use tracing::debug;

use crate::application::ports::Comparator;
use crate::application::validation::{require, validate_sequence};
use crate::domain::errors::ArrayError;

/// Return a sorted copy of `seq`; the caller's sequence is left untouched.
///
/// Elements that compare equal keep no guaranteed relative order.
pub fn sort_by<T, C>(seq: Option<&[T]>, comparator: Option<&C>) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let seq = validate_sequence(seq, "seq")?;
    let comparator = require(comparator, "comparator")?;

    let mut sorted = seq.to_vec();
    sorted.sort_by(|a, b| comparator.compare(a, b));

    debug!(len = sorted.len(), "sort completed");
    Ok(sorted)
}
