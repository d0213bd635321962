//! # Sift
//!
//! List-query normalization for REST APIs: the layer between raw HTTP query
//! parameters and the query builder that executes a listing.
//!
//! ## Components
//!
//! - **Sort parsing**: a `sortBy` expression (`rating` / `-rating`) is
//!   validated against a per-domain safelist of field names
//! - **Fail-open sanitization**: every recognized query parameter is coerced
//!   and validated on its own; invalid fields are dropped instead of failing
//!   the request, unknown fields are ignored
//! - **Listing contracts**: the sanitized filters and the acting viewer are
//!   composed into `FindAllParams` and handed to a `ListingService`, which
//!   returns a `Page` envelope
//! - **Domain tables**: seven built-in domain configurations (commerce,
//!   experiences, lodgings, places, restaurants, transport, google-reviews);
//!   adding a listable domain is one new table, not new logic
//!
//! ## Quick Start
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let raw = RawQuery::parse("sortBy=-rating&town=medellin&minRating=oops");
//! let outcome = sanitize(&raw, Restaurants::config());
//!
//! // minRating failed coercion and was dropped; the rest survived
//! assert_eq!(outcome.dropped, vec!["minRating"]);
//! assert_eq!(outcome.filters.sort().unwrap().field, "rating");
//!
//! let params = FindAllParams::new(Some(outcome.filters), None);
//! assert!(params.has_filters());
//! ```
//!
//! In an axum handler, use the extractors instead:
//!
//! ```rust,ignore
//! pub async fn list_restaurants(
//!     ListQuery(filters): ListQuery<Restaurants>,
//! ) -> Json<Page<Restaurant>> {
//!     // ...
//! }
//! ```

pub mod config;
pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        error::{ConfigError, SiftError, SiftResult, SortError},
        extractors::{ListQuery, ValidSort},
        field::{FieldRule, FieldValue},
        params::{FindAllParams, Page, PageRequest},
        sanitize::{FilterShape, RawQuery, RawValue, SanitizeOutcome, sanitize},
        service::ListingService,
        sort::{SortDirection, SortSpec},
        viewer::Viewer,
    };

    // === Config ===
    pub use crate::config::{
        DomainConfig, DomainRegistry, ListDomain,
        domains::{
            Commerce, Experiences, GoogleReviews, Lodgings, Places, Restaurants, Transport,
        },
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
