//! Shared data model for card-set series documents.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_series};
