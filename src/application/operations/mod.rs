mod binary_search;
mod filter;
mod jagged;
mod sort;
mod transform;

pub use binary_search::{search, search_by, search_range};
pub use filter::filter;
pub use jagged::{max, min, sort_lines, sum, Line, LineAggregate};
pub use sort::sort_by;
pub use transform::transform;

use crate::application::ports::{Comparator, Predicate, Transformer};
use crate::domain::errors::ArrayError;

/// Method-style access to the sequence operations on any slice.
///
/// The sequence and capability are always present here, so only the empty
/// sequence check can fail.
pub trait SequenceExt<T> {
    fn filter_by<P>(&self, predicate: &P) -> Result<Vec<T>, ArrayError>
    where
        T: Clone,
        P: Predicate<T> + ?Sized;

    fn transform_with<D, X>(&self, transformer: &X) -> Result<Vec<D>, ArrayError>
    where
        X: Transformer<T, D> + ?Sized;

    fn sorted_with<C>(&self, comparator: &C) -> Result<Vec<T>, ArrayError>
    where
        T: Clone,
        C: Comparator<T> + ?Sized;

    fn search_with<C>(&self, item: &T, comparator: &C) -> Result<Option<usize>, ArrayError>
    where
        C: Comparator<T> + ?Sized;
}

impl<T> SequenceExt<T> for [T] {
    fn filter_by<P>(&self, predicate: &P) -> Result<Vec<T>, ArrayError>
    where
        T: Clone,
        P: Predicate<T> + ?Sized,
    {
        filter(Some(self), Some(predicate))
    }

    fn transform_with<D, X>(&self, transformer: &X) -> Result<Vec<D>, ArrayError>
    where
        X: Transformer<T, D> + ?Sized,
    {
        transform(Some(self), Some(transformer))
    }

    fn sorted_with<C>(&self, comparator: &C) -> Result<Vec<T>, ArrayError>
    where
        T: Clone,
        C: Comparator<T> + ?Sized,
    {
        sort_by(Some(self), Some(comparator))
    }

    fn search_with<C>(&self, item: &T, comparator: &C) -> Result<Option<usize>, ArrayError>
    where
        C: Comparator<T> + ?Sized,
    {
        search_by(Some(self), item, Some(comparator))
    }
}
