use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::absent_first;
use crate::application::operations::{Line, LineAggregate};
use crate::application::ports::Comparator;
use crate::domain::value_objects::SortDirection;

/// Orders jagged-array lines by an aggregate of their elements.
///
/// Missing lines sort first in ascending direction and last in descending
/// direction. Lines without elements have no aggregate and order like
/// missing ones among present lines; `sort_lines` rejects them up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineComparator {
    pub aggregate: LineAggregate,
    pub direction: SortDirection,
}

impl LineComparator {
    pub fn new(aggregate: LineAggregate, direction: SortDirection) -> Self {
        Self {
            aggregate,
            direction,
        }
    }

    pub fn asc_by_sum() -> Self {
        Self::new(LineAggregate::Sum, SortDirection::Ascending)
    }

    pub fn desc_by_sum() -> Self {
        Self::new(LineAggregate::Sum, SortDirection::Descending)
    }

    pub fn asc_by_max() -> Self {
        Self::new(LineAggregate::Max, SortDirection::Ascending)
    }

    pub fn desc_by_max() -> Self {
        Self::new(LineAggregate::Max, SortDirection::Descending)
    }

    pub fn asc_by_min() -> Self {
        Self::new(LineAggregate::Min, SortDirection::Ascending)
    }

    pub fn desc_by_min() -> Self {
        Self::new(LineAggregate::Min, SortDirection::Descending)
    }
}

impl Comparator<Line> for LineComparator {
    fn compare(&self, a: &Line, b: &Line) -> Ordering {
        let ascending = absent_first(a.as_deref(), b.as_deref(), |a, b| {
            self.aggregate.reduce(a).cmp(&self.aggregate.reduce(b))
        });
        self.direction.apply(ascending)
    }
}
