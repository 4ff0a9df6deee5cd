use tracing::debug;

use crate::application::ports::Predicate;
use crate::application::validation::{require, validate_sequence};
use crate::domain::errors::ArrayError;

/// Select every element matching `predicate`, keeping the original order.
///
/// Fails with `NullArgument` when `seq` or `predicate` is absent and with
/// `EmptyInput` when `seq` has no elements.
pub fn filter<T, P>(seq: Option<&[T]>, predicate: Option<&P>) -> Result<Vec<T>, ArrayError>
where
    T: Clone,
    P: Predicate<T> + ?Sized,
{
    let seq = validate_sequence(seq, "seq")?;
    let predicate = require(predicate, "predicate")?;

    let filtered: Vec<T> = seq
        .iter()
        .filter(|value| predicate.matches(value))
        .cloned()
        .collect();

    debug!(input_len = seq.len(), kept = filtered.len(), "filter completed");
    Ok(filtered)
}
