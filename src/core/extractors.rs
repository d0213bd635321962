//! Axum extractors for list-query normalization
//!
//! Two extractors, one per failure regime:
//!
//! - [`ListQuery`] is fail-open: it sanitizes the whole query map and never
//!   rejects a request over field content. Invalid fields are dropped and
//!   logged at debug level.
//! - [`ValidSort`] is fail-closed: it validates `sortBy` as a standalone API
//!   parameter and rejects the request with 422 and the full token
//!   enumeration when the value is invalid.

use std::convert::Infallible;
use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::SortError;
use super::sanitize::{FilterShape, RawQuery, RawValue, sanitize};
use super::sort::SortSpec;
use crate::config::ListDomain;

/// Fail-open extractor producing a sanitized filter shape
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn list_restaurants(
///     ListQuery(filters): ListQuery<Restaurants>,
/// ) -> Json<Page<Restaurant>> {
///     // filters contains only fields that passed validation
/// }
/// ```
pub struct ListQuery<D>(pub FilterShape, PhantomData<D>);

impl<D> ListQuery<D> {
    /// Wrap an already-sanitized shape
    pub fn new(filters: FilterShape) -> Self {
        Self(filters, PhantomData)
    }

    /// Get the inner filter shape
    pub fn into_inner(self) -> FilterShape {
        self.0
    }
}

impl<D> std::ops::Deref for ListQuery<D> {
    type Target = FilterShape;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, D> FromRequestParts<S> for ListQuery<D>
where
    S: Send + Sync,
    D: ListDomain + Send + Sync,
{
    // Sanitization cannot fail: bad fields degrade the listing, never the request
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.uri.query() {
            Some(query) => RawQuery::parse(query),
            None => RawQuery::new(),
        };

        let domain = D::config();
        let outcome = sanitize(&raw, domain);
        if !outcome.dropped.is_empty() {
            tracing::debug!(
                domain = %domain.name,
                dropped = ?outcome.dropped,
                "list query degraded, invalid fields dropped"
            );
        }

        Ok(ListQuery::new(outcome.filters))
    }
}

/// Fail-closed extractor for a standalone `sortBy` parameter
///
/// Yields `None` when the parameter is absent; rejects the request when it
/// is present but invalid.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn list_admin_reviews(
///     ValidSort(sort): ValidSort<GoogleReviews>,
/// ) -> Json<Page<Review>> {
///     // sort is None or a safelisted (field, direction) pair
/// }
/// ```
#[derive(Debug)]
pub struct ValidSort<D>(pub Option<SortSpec>, PhantomData<D>);

impl<D> ValidSort<D> {
    pub fn new(sort: Option<SortSpec>) -> Self {
        Self(sort, PhantomData)
    }

    pub fn into_inner(self) -> Option<SortSpec> {
        self.0
    }
}

impl<S, D> FromRequestParts<S> for ValidSort<D>
where
    S: Send + Sync,
    D: ListDomain + Send + Sync,
{
    type Rejection = SortError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let domain = D::config();

        let raw = match parts.uri.query() {
            Some(query) => RawQuery::parse(query),
            None => return Ok(ValidSort::new(None)),
        };

        match raw.get("sortBy") {
            None => Ok(ValidSort::new(None)),
            Some(RawValue::Single(value)) => {
                let spec = domain.parse_sort(value)?;
                Ok(ValidSort::new(Some(spec)))
            }
            // A repeated sortBy is not a valid sort expression
            Some(RawValue::Many(_)) => Err(SortError::new("sortBy", &domain.sort_fields)),
        }
    }
}
