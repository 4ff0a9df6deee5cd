use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::absent_first;
use crate::application::ports::Comparator;
use crate::domain::value_objects::SortDirection;

/// Orders optional strings by their length in characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthComparator {
    pub direction: SortDirection,
}

impl LengthComparator {
    pub fn ascending() -> Self {
        Self {
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending() -> Self {
        Self {
            direction: SortDirection::Descending,
        }
    }
}

impl Comparator<Option<String>> for LengthComparator {
    fn compare(&self, a: &Option<String>, b: &Option<String>) -> Ordering {
        let ascending = absent_first(a.as_deref(), b.as_deref(), |a, b| {
            a.chars().count().cmp(&b.chars().count())
        });
        self.direction.apply(ascending)
    }
}

/// Orders optional strings by how often `symbol` occurs in them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceComparator {
    pub symbol: char,
    pub direction: SortDirection,
}

impl OccurrenceComparator {
    pub fn ascending(symbol: char) -> Self {
        Self {
            symbol,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(symbol: char) -> Self {
        Self {
            symbol,
            direction: SortDirection::Descending,
        }
    }

    fn occurrences(&self, text: &str) -> usize {
        text.chars().filter(|c| *c == self.symbol).count()
    }
}

impl Comparator<Option<String>> for OccurrenceComparator {
    fn compare(&self, a: &Option<String>, b: &Option<String>) -> Ordering {
        let ascending = absent_first(a.as_deref(), b.as_deref(), |a, b| {
            self.occurrences(a).cmp(&self.occurrences(b))
        });
        self.direction.apply(ascending)
    }
}
