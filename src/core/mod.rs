//! Core module containing the normalization types and algorithms

pub mod error;
pub mod extractors;
pub mod field;
pub mod params;
pub mod sanitize;
pub mod service;
pub mod sort;
pub mod viewer;

pub use error::{ConfigError, SiftError, SiftResult, SortError};
pub use extractors::{ListQuery, ValidSort};
pub use field::{FieldRule, FieldValue};
pub use params::{FindAllParams, Page, PageRequest};
pub use sanitize::{FilterShape, RawQuery, RawValue, SanitizeOutcome, sanitize};
pub use service::ListingService;
pub use sort::{SortDirection, SortSpec};
pub use viewer::Viewer;
