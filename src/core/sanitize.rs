//! Fail-open filter sanitization
//!
//! Turns the raw, untyped query-parameter map of a list request into a
//! strongly-shaped filter object for one domain. Each field of the domain
//! shape is coerced and validated on its own: success includes the typed
//! value, failure drops the field. A bad `minPrice` or `sortBy` degrades the
//! listing on that one axis instead of failing the whole request. Keys not
//! declared in the shape are ignored entirely.

use indexmap::IndexMap;
use serde::Serialize;

use super::field::FieldValue;
use crate::config::DomainConfig;

/// A raw query-parameter value: a single string, or a string array when the
/// key appeared more than once in the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Single(String),
    Many(Vec<String>),
}

impl RawValue {
    /// The single string this value holds, if it is not an array
    pub fn as_single(&self) -> Option<&str> {
        match self {
            RawValue::Single(s) => Some(s),
            RawValue::Many(_) => None,
        }
    }
}

/// The raw key/value map of a list request, as received from the HTTP layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    entries: IndexMap<String, RawValue>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one key/value pair, folding repeated keys into an array
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.entry(key) {
            indexmap::map::Entry::Occupied(mut slot) => {
                let folded = match slot.get_mut() {
                    RawValue::Single(existing) => {
                        RawValue::Many(vec![std::mem::take(existing), value])
                    }
                    RawValue::Many(values) => {
                        values.push(value);
                        return;
                    }
                };
                slot.insert(folded);
            }
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(RawValue::Single(value));
            }
        }
    }

    /// Build from decoded key/value pairs (in order of appearance)
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut raw = Self::new();
        for (key, value) in pairs {
            raw.push(key, value);
        }
        raw
    }

    /// Parse a percent-encoded query string (the part after `?`)
    pub fn parse(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A sanitized filter object for one domain
///
/// Contains only fields that individually passed their coercion rule, in the
/// domain shape's declared order. May be empty. There is no way to observe
/// an invalid value through this type: population implies validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterShape {
    fields: IndexMap<String, FieldValue>,
}

impl FilterShape {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// The parsed sort spec, when a valid `sortBy` was present
    pub fn sort(&self) -> Option<&crate::core::sort::SortSpec> {
        self.fields.get("sortBy").and_then(FieldValue::as_sort)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render every field back to its raw query form
    ///
    /// Feeding the result through [`sanitize`] again reproduces this shape
    /// unchanged; sanitization is a stable projection.
    pub fn to_raw_query(&self) -> RawQuery {
        RawQuery::from_pairs(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_query_value())),
        )
    }
}

/// Result of sanitizing one raw query against one domain
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeOutcome {
    /// The best-effort valid filter object
    pub filters: FilterShape,

    /// Names of shape fields that were present but failed coercion, in shape
    /// order. Exposed for observability only; drops are not errors.
    pub dropped: Vec<String>,
}

/// Sanitize a raw query map against a domain's shape definition
///
/// Walks the shape in declared order. For each declared field present in the
/// raw map, runs that field's coercion rule: the coerced value is kept on
/// success, the field is dropped on failure. Array values are dropped (every
/// rule coerces a single string). Raw keys outside the shape never affect
/// the outcome. This function cannot fail.
pub fn sanitize(raw: &RawQuery, domain: &DomainConfig) -> SanitizeOutcome {
    let mut fields = IndexMap::new();
    let mut dropped = Vec::new();

    for (name, rule) in &domain.shape {
        let Some(value) = raw.get(name) else {
            continue;
        };

        let Some(single) = value.as_single() else {
            tracing::debug!(domain = %domain.name, field = %name, "dropped array-valued field");
            dropped.push(name.clone());
            continue;
        };

        match rule.coerce(name, single, &domain.sort_fields) {
            Ok(coerced) => {
                fields.insert(name.clone(), coerced);
            }
            Err(reason) => {
                tracing::debug!(domain = %domain.name, field = %name, %reason, "dropped invalid field");
                dropped.push(name.clone());
            }
        }
    }

    SanitizeOutcome {
        filters: FilterShape { fields },
        dropped,
    }
}
