//! Field coercion rules and typed field values
//!
//! A domain shape maps each recognized query parameter to a [`FieldRule`].
//! Coercion takes the raw string from the query and either produces a typed
//! [`FieldValue`] or a rejection message. The sanitizer turns rejections
//! into dropped fields; it never propagates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sort::SortSpec;

/// Date format accepted by the `Date` rule
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Coercion rule for one field of a domain shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldRule {
    /// Any string, kept as-is
    Text,

    /// Base-10 integer
    Integer,

    /// Finite floating-point number
    Number,

    /// Exactly `true` or `false`
    Boolean,

    /// Calendar date, `YYYY-MM-DD`
    Date,

    /// Exact membership in a closed value list
    OneOf { values: Vec<String> },

    /// Sort expression validated against the domain's safelist
    SortBy,
}

impl FieldRule {
    /// Coerce a raw query value into a typed field value
    ///
    /// `sort_fields` is the owning domain's safelist; only the `SortBy` rule
    /// consults it. The error carries a message for debug logging and is
    /// otherwise discarded by the sanitizer.
    pub fn coerce(&self, field: &str, raw: &str, sort_fields: &[String]) -> Result<FieldValue, String> {
        match self {
            FieldRule::Text => Ok(FieldValue::Text(raw.to_string())),

            FieldRule::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| format!("'{}' must be an integer (value: {})", field, raw)),

            FieldRule::Number => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(FieldValue::Number(n)),
                _ => Err(format!("'{}' must be a number (value: {})", field, raw)),
            },

            FieldRule::Boolean => match raw {
                "true" => Ok(FieldValue::Boolean(true)),
                "false" => Ok(FieldValue::Boolean(false)),
                _ => Err(format!(
                    "'{}' must be 'true' or 'false' (value: {})",
                    field, raw
                )),
            },

            FieldRule::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(FieldValue::Date)
                .map_err(|_| {
                    format!(
                        "'{}' must be a date in format {} (value: {})",
                        field, DATE_FORMAT, raw
                    )
                }),

            FieldRule::OneOf { values } => {
                if values.iter().any(|v| v == raw) {
                    Ok(FieldValue::Text(raw.to_string()))
                } else {
                    Err(format!(
                        "'{}' must be one of the values: {:?} (value: {})",
                        field, values, raw
                    ))
                }
            }

            FieldRule::SortBy => SortSpec::parse(field, raw, sort_fields)
                .map(FieldValue::Sort)
                .map_err(|e| e.to_string()),
        }
    }
}

/// A coerced, validated field value
///
/// Every populated field of a sanitized filter object holds one of these;
/// by construction it already passed its rule's coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Sort(SortSpec),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a number if possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a date if possible
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the value as a sort spec if possible
    pub fn as_sort(&self) -> Option<&SortSpec> {
        match self {
            FieldValue::Sort(s) => Some(s),
            _ => None,
        }
    }

    /// Render back to the raw query-string form
    ///
    /// Re-coercing this string under the same rule yields an equal value,
    /// which is what makes sanitization a stable projection.
    pub fn to_query_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            FieldValue::Sort(s) => s.to_query_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_SORT: &[String] = &[];

    // === Text ===

    #[test]
    fn test_text_accepts_any_string() {
        let value = FieldRule::Text
            .coerce("town", "medellin", NO_SORT)
            .expect("should coerce");
        assert_eq!(value, FieldValue::Text("medellin".to_string()));
    }

    #[test]
    fn test_text_accepts_empty_string() {
        assert!(FieldRule::Text.coerce("town", "", NO_SORT).is_ok());
    }

    // === Integer ===

    #[test]
    fn test_integer_parses() {
        let value = FieldRule::Integer
            .coerce("guests", "4", NO_SORT)
            .expect("should coerce");
        assert_eq!(value.as_integer(), Some(4));
    }

    #[test]
    fn test_integer_negative() {
        let value = FieldRule::Integer
            .coerce("offset", "-2", NO_SORT)
            .expect("should coerce");
        assert_eq!(value.as_integer(), Some(-2));
    }

    #[test]
    fn test_integer_rejects_decimal() {
        let result = FieldRule::Integer.coerce("guests", "4.5", NO_SORT);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("integer"));
    }

    #[test]
    fn test_integer_rejects_text() {
        assert!(FieldRule::Integer.coerce("guests", "four", NO_SORT).is_err());
    }

    // === Number ===

    #[test]
    fn test_number_parses_decimal() {
        let value = FieldRule::Number
            .coerce("minPrice", "19.99", NO_SORT)
            .expect("should coerce");
        assert_eq!(value.as_number(), Some(19.99));
    }

    #[test]
    fn test_number_parses_integer_string() {
        let value = FieldRule::Number
            .coerce("minPrice", "20", NO_SORT)
            .expect("should coerce");
        assert_eq!(value.as_number(), Some(20.0));
    }

    #[test]
    fn test_number_rejects_text() {
        assert!(FieldRule::Number.coerce("minPrice", "cheap", NO_SORT).is_err());
    }

    #[test]
    fn test_number_rejects_non_finite() {
        assert!(FieldRule::Number.coerce("minPrice", "NaN", NO_SORT).is_err());
        assert!(FieldRule::Number.coerce("minPrice", "inf", NO_SORT).is_err());
    }

    // === Boolean ===

    #[test]
    fn test_boolean_true_false() {
        assert_eq!(
            FieldRule::Boolean
                .coerce("openNow", "true", NO_SORT)
                .expect("should coerce")
                .as_boolean(),
            Some(true)
        );
        assert_eq!(
            FieldRule::Boolean
                .coerce("openNow", "false", NO_SORT)
                .expect("should coerce")
                .as_boolean(),
            Some(false)
        );
    }

    #[test]
    fn test_boolean_rejects_other_spellings() {
        assert!(FieldRule::Boolean.coerce("openNow", "True", NO_SORT).is_err());
        assert!(FieldRule::Boolean.coerce("openNow", "1", NO_SORT).is_err());
        assert!(FieldRule::Boolean.coerce("openNow", "yes", NO_SORT).is_err());
    }

    // === Date ===

    #[test]
    fn test_date_parses_iso() {
        let value = FieldRule::Date
            .coerce("checkIn", "2026-01-15", NO_SORT)
            .expect("should coerce");
        assert_eq!(
            value.as_date(),
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"))
        );
    }

    #[test]
    fn test_date_rejects_other_formats() {
        assert!(FieldRule::Date.coerce("checkIn", "15/01/2026", NO_SORT).is_err());
        assert!(FieldRule::Date.coerce("checkIn", "not-a-date", NO_SORT).is_err());
    }

    #[test]
    fn test_date_rejects_impossible_date() {
        assert!(FieldRule::Date.coerce("checkIn", "2026-02-30", NO_SORT).is_err());
    }

    // === OneOf ===

    #[test]
    fn test_one_of_accepts_member() {
        let rule = FieldRule::OneOf {
            values: vec!["$".into(), "$$".into(), "$$$".into()],
        };
        let value = rule.coerce("priceRange", "$$", NO_SORT).expect("should coerce");
        assert_eq!(value.as_text(), Some("$$"));
    }

    #[test]
    fn test_one_of_rejects_non_member() {
        let rule = FieldRule::OneOf {
            values: vec!["nature".into(), "culture".into()],
        };
        let result = rule.coerce("category", "nightlife", NO_SORT);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("category"));
    }

    #[test]
    fn test_one_of_is_case_sensitive() {
        let rule = FieldRule::OneOf {
            values: vec!["nature".into()],
        };
        assert!(rule.coerce("category", "Nature", NO_SORT).is_err());
    }

    // === SortBy ===

    #[test]
    fn test_sort_by_delegates_to_safelist() {
        let safelist = vec!["rating".to_string()];
        let value = FieldRule::SortBy
            .coerce("sortBy", "-rating", &safelist)
            .expect("should coerce");
        let spec = value.as_sort().expect("should be a sort");
        assert_eq!(spec.field, "rating");
        assert!(spec.direction.is_descending());

        assert!(FieldRule::SortBy.coerce("sortBy", "-price", &safelist).is_err());
    }

    #[test]
    fn test_sort_by_error_names_the_shape_key() {
        let safelist = vec!["rating".to_string()];
        let err = FieldRule::SortBy
            .coerce("orderBy", "-price", &safelist)
            .unwrap_err();
        assert!(err.starts_with("orderBy must be one of"));
    }

    // === to_query_value round trips ===

    #[test]
    fn test_query_value_round_trip_per_rule() {
        let safelist = vec!["rating".to_string()];
        let cases: Vec<(FieldRule, &str)> = vec![
            (FieldRule::Text, "medellin"),
            (FieldRule::Integer, "42"),
            (FieldRule::Number, "19.5"),
            (FieldRule::Number, "20"),
            (FieldRule::Boolean, "true"),
            (FieldRule::Date, "2026-01-15"),
            (FieldRule::SortBy, "-rating"),
        ];
        for (rule, raw) in cases {
            let value = rule.coerce("f", raw, &safelist).expect("should coerce");
            let rendered = value.to_query_value();
            let again = rule.coerce("f", &rendered, &safelist).expect("should re-coerce");
            assert_eq!(value, again, "rule {:?} raw {:?}", rule, raw);
        }
    }

    #[test]
    fn test_field_rule_yaml_representation() {
        let rule: FieldRule = serde_yaml::from_str("type: integer").expect("should parse");
        assert_eq!(rule, FieldRule::Integer);

        let rule: FieldRule =
            serde_yaml::from_str("type: one_of\nvalues: [a, b]").expect("should parse");
        assert_eq!(
            rule,
            FieldRule::OneOf {
                values: vec!["a".into(), "b".into()]
            }
        );
    }
}
