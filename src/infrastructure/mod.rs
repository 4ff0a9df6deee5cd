pub mod comparators;
pub mod predicates;
pub mod transformers;
