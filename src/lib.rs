//! # array_ext - Generic Array Processing Toolkit
//!
//! Predicate filtering, type-transforming mapping, comparator-driven sorting
//! (flat and jagged arrays) and binary search over arbitrary element types,
//! plus a family of deterministic value transformers.
//!
//! ## Architecture Layers
//!
//! - **Domain**: error type and validated value objects
//! - **Application**: capability ports (`Predicate`, `Transformer`,
//!   `Comparator`) and the sequence operations built on them
//! - **Infrastructure**: concrete predicates, comparators and transformers
//!   (IEEE-754 bit encoder, numeral codec, word transcriber)
//!
//! ## Example Usage
//!
//! ```
//! use array_ext::operations::{filter, transform};
//! use array_ext::transformers::NumeralBaseCodec;
//! use array_ext::predicates::EvenNumber;
//!
//! let digits = vec!["FF".to_string(), "7".to_string(), "10".to_string()];
//! let codec = NumeralBaseCodec::new(16)?;
//! let values: Vec<i32> = transform(Some(digits.as_slice()), Some(&codec))?;
//! assert_eq!(values, vec![255, 7, 16]);
//!
//! let even = filter(Some(values.as_slice()), Some(&EvenNumber))?;
//! assert_eq!(even, vec![16]);
//! # Ok::<(), array_ext::ArrayError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use application::operations::SequenceExt;
pub use application::{operations, ports};
pub use config::Config;
pub use domain::errors::ArrayError;
pub use domain::value_objects;
pub use infrastructure::{comparators, predicates, transformers};
