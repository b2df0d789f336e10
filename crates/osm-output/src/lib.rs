//! CSV output for shaped OSM elements.
//!
//! [`CsvOutputs`] owns the five output files; [`validate_element`] holds
//! the optional per-element schema checks.

pub mod error;
pub mod validate;
pub mod writer;

pub use error::{OutputError, Result};
pub use validate::validate_element;
pub use writer::{CsvOutputs, OutputOptions, WrittenTable};
