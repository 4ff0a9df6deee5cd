use tracing::debug;

use crate::application::ports::Transformer;
use crate::application::validation::{require, validate_sequence};
use crate::domain::errors::ArrayError;

/// Map every element through `transformer`, preserving order and length.
///
/// The first failing element aborts the whole operation and its error is
/// returned; no partial output is produced.
pub fn transform<S, D, X>(seq: Option<&[S]>, transformer: Option<&X>) -> Result<Vec<D>, ArrayError>
where
    X: Transformer<S, D> + ?Sized,
{
    let seq = validate_sequence(seq, "seq")?;
    let transformer = require(transformer, "transformer")?;

    let transformed = seq
        .iter()
        .map(|value| transformer.transform(value))
        .collect::<Result<Vec<D>, ArrayError>>()?;

    debug!(len = transformed.len(), "transform completed");
    Ok(transformed)
}
