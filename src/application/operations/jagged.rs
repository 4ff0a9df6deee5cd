//! Sorting of jagged arrays: sequences of lines that may be absent.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::operations::sort::sort_by;
use crate::application::ports::Comparator;
use crate::application::validation::validate_sequence;
use crate::domain::errors::ArrayError;

/// One row of a jagged array; `None` is a missing line
pub type Line = Option<Vec<i32>>;

/// Reduction applied to a present line before lines are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAggregate {
    Sum,
    Max,
    Min,
}

impl LineAggregate {
    /// Reduce a line, failing with `NullArgument` / `EmptyInput` for an
    /// absent or empty line
    pub fn compute(self, line: Option<&[i32]>) -> Result<i64, ArrayError> {
        let line = validate_sequence(line, "line")?;
        self.reduce(line).ok_or(ArrayError::EmptyInput("line"))
    }

    /// Reduce a line; `None` when the line has no elements.
    /// Sums are accumulated in `i64` and cannot overflow for `i32` input.
    pub fn reduce(self, line: &[i32]) -> Option<i64> {
        match self {
            LineAggregate::Sum => {
                if line.is_empty() {
                    None
                } else {
                    Some(line.iter().map(|&value| i64::from(value)).sum())
                }
            }
            LineAggregate::Max => line.iter().copied().max().map(i64::from),
            LineAggregate::Min => line.iter().copied().min().map(i64::from),
        }
    }
}

impl std::fmt::Display for LineAggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAggregate::Sum => write!(f, "sum"),
            LineAggregate::Max => write!(f, "max"),
            LineAggregate::Min => write!(f, "min"),
        }
    }
}

pub fn sum(line: Option<&[i32]>) -> Result<i64, ArrayError> {
    LineAggregate::Sum.compute(line)
}

pub fn max(line: Option<&[i32]>) -> Result<i64, ArrayError> {
    LineAggregate::Max.compute(line)
}

pub fn min(line: Option<&[i32]>) -> Result<i64, ArrayError> {
    LineAggregate::Min.compute(line)
}

/// Return a sorted copy of a jagged array.
///
/// A present line with no elements has no aggregate, so the whole call is
/// rejected with `EmptyInput` before any comparison runs.
pub fn sort_lines<C>(lines: Option<&[Line]>, comparator: Option<&C>) -> Result<Vec<Line>, ArrayError>
where
    C: Comparator<Line> + ?Sized,
{
    let lines = validate_sequence(lines, "lines")?;

    if let Some(index) = lines
        .iter()
        .position(|line| line.as_ref().is_some_and(|values| values.is_empty()))
    {
        warn!(index, "jagged array contains an empty line");
        return Err(ArrayError::EmptyInput("line"));
    }

    sort_by(Some(lines), comparator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::comparators::LineComparator;

    fn jagged() -> Vec<Line> {
        vec![
            Some(vec![100]),
            Some(vec![1050, 10, -1050]),
            None,
            Some(vec![1, 2, 3]),
            None,
        ]
    }

    #[test]
    fn test_aggregates() {
        let line = [4, -2, 9];
        assert_eq!(sum(Some(&line)).unwrap(), 11);
        assert_eq!(max(Some(&line)).unwrap(), 9);
        assert_eq!(min(Some(&line)).unwrap(), -2);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let line = [i32::MAX, i32::MAX];
        assert_eq!(sum(Some(&line)).unwrap(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_aggregate_validation() {
        let empty: [i32; 0] = [];
        assert_eq!(sum(None), Err(ArrayError::NullArgument("line")));
        assert_eq!(max(Some(&empty)), Err(ArrayError::EmptyInput("line")));
        assert_eq!(LineAggregate::Min.reduce(&empty), None);
    }

    #[test]
    fn test_sort_lines_desc_by_sum() {
        let lines = jagged();

        let sorted = sort_lines(Some(lines.as_slice()), Some(&LineComparator::desc_by_sum())).unwrap();

        assert_eq!(
            sorted,
            vec![
                Some(vec![100]),
                Some(vec![1050, 10, -1050]),
                Some(vec![1, 2, 3]),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_sort_lines_asc_by_max_puts_missing_first() {
        let lines = jagged();

        let sorted = sort_lines(Some(lines.as_slice()), Some(&LineComparator::asc_by_max())).unwrap();

        assert_eq!(
            sorted,
            vec![
                None,
                None,
                Some(vec![1, 2, 3]),
                Some(vec![100]),
                Some(vec![1050, 10, -1050]),
            ]
        );
    }

    #[test]
    fn test_sort_lines_rejects_empty_line() {
        let lines = vec![Some(vec![1]), Some(vec![])];
        assert_eq!(
            sort_lines(Some(lines.as_slice()), Some(&LineComparator::asc_by_sum())),
            Err(ArrayError::EmptyInput("line"))
        );
    }

    #[test]
    fn test_sort_lines_validation() {
        let lines: Vec<Line> = Vec::new();
        assert_eq!(
            sort_lines(None, Some(&LineComparator::asc_by_min())),
            Err(ArrayError::NullArgument("lines"))
        );
        assert_eq!(
            sort_lines(Some(lines.as_slice()), Some(&LineComparator::asc_by_min())),
            Err(ArrayError::EmptyInput("lines"))
        );
    }
}
