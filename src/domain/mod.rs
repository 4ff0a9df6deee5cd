pub mod errors;
pub mod value_objects;

pub use errors::ArrayError;
