//! Comparators over optional elements: strings and jagged-array lines.

use std::cmp::Ordering;

mod lines;
mod strings;

pub use lines::LineComparator;
pub use strings::{LengthComparator, OccurrenceComparator};

/// Ascending order in which an absent value precedes every present one
fn absent_first<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    present: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => present(a, b),
    }
}
