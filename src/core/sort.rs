//! Sort expression parsing and validation
//!
//! A sort expression is a single field name, optionally prefixed with `-`
//! for descending order: `rating` sorts ascending, `-rating` descending.
//! The field name must exactly match one entry of the calling domain's
//! safelist; anything else is rejected.

use serde::{Deserialize, Serialize};

use super::error::SortError;

/// Direction of a parsed sort expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Check if this direction is descending
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

/// A validated (field, direction) pair parsed from one raw sort string
///
/// Constructed per request from the `sortBy` query parameter and handed to
/// the listing layer untouched. The field is guaranteed to be a member of
/// the safelist it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a raw sort string against a safelist of allowed field names
    ///
    /// Grammar: `['-'] fieldName`, where the field name must exactly,
    /// case-sensitively match one member of `allowed`. A single leading `-`
    /// means descending; no other marker is recognized, so `--rating` fails
    /// (the remainder `-rating` is not a safelisted field).
    ///
    /// `param` is the name of the query parameter being validated (normally
    /// `sortBy`); it only surfaces in the error message.
    pub fn parse(param: &str, raw: &str, allowed: &[String]) -> Result<Self, SortError> {
        let (field, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest, SortDirection::Descending),
            None => (raw, SortDirection::Ascending),
        };

        if allowed.iter().any(|a| a == field) {
            Ok(Self {
                field: field.to_string(),
                direction,
            })
        } else {
            Err(SortError::new(param, allowed))
        }
    }

    /// Render back to the raw query form (`field` or `-field`)
    pub fn to_query_value(&self) -> String {
        match self.direction {
            SortDirection::Ascending => self.field.clone(),
            SortDirection::Descending => format!("-{}", self.field),
        }
    }
}

/// Enumerate every accepted sort token for a safelist
///
/// Each field appears as both `field` and `-field`, in the safelist's
/// configured order. This listing feeds the validation error message and
/// API-parameter documentation, so its order is part of the contract.
pub fn accepted_tokens(allowed: &[String]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(allowed.len() * 2);
    for field in allowed {
        tokens.push(field.clone());
        tokens.push(format!("-{}", field));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safelist() -> Vec<String> {
        vec!["name".into(), "rating".into(), "createdAt".into()]
    }

    #[test]
    fn test_parse_plain_field_is_ascending() {
        let spec = SortSpec::parse("sortBy", "rating", &safelist()).expect("should parse");
        assert_eq!(spec.field, "rating");
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_parse_dash_prefix_is_descending() {
        let spec = SortSpec::parse("sortBy", "-rating", &safelist()).expect("should parse");
        assert_eq!(spec.field, "rating");
        assert_eq!(spec.direction, SortDirection::Descending);
        assert!(spec.direction.is_descending());
    }

    #[test]
    fn test_parse_unknown_field_fails() {
        assert!(SortSpec::parse("sortBy", "price", &safelist()).is_err());
        assert!(SortSpec::parse("sortBy", "-price", &safelist()).is_err());
    }

    #[test]
    fn test_parse_double_dash_fails() {
        assert!(SortSpec::parse("sortBy", "--rating", &safelist()).is_err());
    }

    #[test]
    fn test_parse_empty_string_fails() {
        assert!(SortSpec::parse("sortBy", "", &safelist()).is_err());
        assert!(SortSpec::parse("sortBy", "-", &safelist()).is_err());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(SortSpec::parse("sortBy", "Rating", &safelist()).is_err());
        assert!(SortSpec::parse("sortBy", "createdat", &safelist()).is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(SortSpec::parse("sortBy", " rating", &safelist()).is_err());
        assert!(SortSpec::parse("sortBy", "rating ", &safelist()).is_err());
        assert!(SortSpec::parse("sortBy", "- rating", &safelist()).is_err());
    }

    #[test]
    fn test_parse_rejects_multi_field() {
        assert!(SortSpec::parse("sortBy", "rating,name", &safelist()).is_err());
    }

    #[test]
    fn test_grammar_matches_anchored_alternation() {
        // parse succeeds iff the raw string matches ^-?(name|rating|createdAt)$
        let allowed = safelist();
        let candidates = [
            "name",
            "-name",
            "rating",
            "-rating",
            "createdAt",
            "-createdAt",
            "--name",
            "name-",
            "",
            "-",
            "ratings",
            "-ratings",
            "NAME",
        ];
        for raw in candidates {
            let by_grammar = {
                let (field, _) = match raw.strip_prefix('-') {
                    Some(rest) => (rest, ()),
                    None => (raw, ()),
                };
                allowed.iter().any(|a| a == field)
            };
            assert_eq!(
                SortSpec::parse("sortBy", raw, &allowed).is_ok(),
                by_grammar,
                "mismatch for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_to_query_value_round_trips() {
        let allowed = safelist();
        for raw in ["name", "-name", "createdAt", "-createdAt"] {
            let spec = SortSpec::parse("sortBy", raw, &allowed).expect("should parse");
            assert_eq!(spec.to_query_value(), raw);
        }
    }

    #[test]
    fn test_parse_error_names_the_validated_parameter() {
        let err = SortSpec::parse("orderBy", "price", &safelist()).unwrap_err();
        assert_eq!(err.field, "orderBy");
        assert!(err.to_string().starts_with("orderBy must be one of"));
    }

    #[test]
    fn test_accepted_tokens_order_follows_safelist() {
        let tokens = accepted_tokens(&safelist());
        assert_eq!(
            tokens,
            vec!["name", "-name", "rating", "-rating", "createdAt", "-createdAt"]
        );
    }

    #[test]
    fn test_accepted_tokens_empty_safelist() {
        assert!(accepted_tokens(&[]).is_empty());
    }
}
