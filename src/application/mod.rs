pub mod operations;
pub mod ports;
pub mod validation;
