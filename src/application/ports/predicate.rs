/// Port for element selection in `filter`
///
/// Implementations must be pure: the same value always yields the same answer.
pub trait Predicate<T: ?Sized> {
    /// Returns true if the value belongs in the filtered sequence
    fn matches(&self, value: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        self(value)
    }
}
