mod comparator;
mod predicate;
mod transformer;

pub use comparator::{Comparator, NaturalOrder, Reversed};
pub use predicate::Predicate;
pub use transformer::Transformer;
