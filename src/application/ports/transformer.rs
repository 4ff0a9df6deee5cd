use crate::domain::errors::ArrayError;

/// Port for element-wise mapping in `transform`
///
/// A transformer is total over valid inputs and reports invalid ones through
/// a typed [`ArrayError`] instead of panicking.
pub trait Transformer<S: ?Sized, D> {
    fn transform(&self, value: &S) -> Result<D, ArrayError>;
}

impl<S, D, F> Transformer<S, D> for F
where
    S: ?Sized,
    F: Fn(&S) -> Result<D, ArrayError>,
{
    fn transform(&self, value: &S) -> Result<D, ArrayError> {
        self(value)
    }
}
