//! Built-in domain tables
//!
//! One configuration per listable resource type of the platform. These are
//! the only domain-specific tables in the crate: the sort safelists and the
//! filter shapes. All seven share the sanitization algorithm unchanged.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::DomainConfig;
use crate::core::field::FieldRule;

/// A domain usable as an extractor type parameter
///
/// Implemented by the built-in marker types below; implement it for your own
/// marker to route an extractor at a custom configuration.
pub trait ListDomain {
    /// The domain's process-wide configuration
    fn config() -> &'static DomainConfig;
}

fn shape<const N: usize>(entries: [(&str, FieldRule); N]) -> IndexMap<String, FieldRule> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn one_of<const N: usize>(values: [&str; N]) -> FieldRule {
    FieldRule::OneOf {
        values: values.into_iter().map(str::to_string).collect(),
    }
}

fn commerce() -> DomainConfig {
    DomainConfig::new(
        "commerce",
        &["name", "rating", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("town", FieldRule::Text),
            ("category", FieldRule::Text),
            ("openNow", FieldRule::Boolean),
            ("minRating", FieldRule::Number),
        ]),
    )
    .expect("commerce table is valid")
}

fn experiences() -> DomainConfig {
    DomainConfig::new(
        "experiences",
        &["name", "price", "rating", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("town", FieldRule::Text),
            ("category", FieldRule::Text),
            ("minPrice", FieldRule::Number),
            ("maxPrice", FieldRule::Number),
            ("date", FieldRule::Date),
            ("guests", FieldRule::Integer),
        ]),
    )
    .expect("experiences table is valid")
}

fn lodgings() -> DomainConfig {
    DomainConfig::new(
        "lodgings",
        &["name", "pricePerNight", "rating", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("town", FieldRule::Text),
            ("minPrice", FieldRule::Number),
            ("maxPrice", FieldRule::Number),
            ("guests", FieldRule::Integer),
            ("checkIn", FieldRule::Date),
            ("checkOut", FieldRule::Date),
        ]),
    )
    .expect("lodgings table is valid")
}

fn places() -> DomainConfig {
    DomainConfig::new(
        "places",
        &["name", "rating", "popularity", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("town", FieldRule::Text),
            ("category", one_of(["nature", "culture", "landmark", "nightlife"])),
            ("free", FieldRule::Boolean),
        ]),
    )
    .expect("places table is valid")
}

fn restaurants() -> DomainConfig {
    DomainConfig::new(
        "restaurants",
        &["name", "rating", "popularity", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("town", FieldRule::Text),
            ("cuisine", FieldRule::Text),
            ("priceRange", one_of(["$", "$$", "$$$", "$$$$"])),
            ("openNow", FieldRule::Boolean),
            ("minRating", FieldRule::Number),
        ]),
    )
    .expect("restaurants table is valid")
}

fn transport() -> DomainConfig {
    DomainConfig::new(
        "transport",
        &["name", "price", "departureAt", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("origin", FieldRule::Text),
            ("destination", FieldRule::Text),
            ("departureDate", FieldRule::Date),
            ("seats", FieldRule::Integer),
        ]),
    )
    .expect("transport table is valid")
}

fn google_reviews() -> DomainConfig {
    DomainConfig::new(
        "google-reviews",
        &["rating", "createdAt"],
        shape([
            ("sortBy", FieldRule::SortBy),
            ("minRating", FieldRule::Number),
            ("language", FieldRule::Text),
            ("translated", FieldRule::Boolean),
        ]),
    )
    .expect("google-reviews table is valid")
}

/// All built-in domain configurations, in platform order
pub fn all() -> Vec<DomainConfig> {
    vec![
        commerce(),
        experiences(),
        lodgings(),
        places(),
        restaurants(),
        transport(),
        google_reviews(),
    ]
}

macro_rules! builtin_domain {
    ($(#[$doc:meta])* $static_name:ident, $marker:ident, $ctor:ident) => {
        static $static_name: LazyLock<DomainConfig> = LazyLock::new($ctor);

        $(#[$doc])*
        #[derive(Debug)]
        pub struct $marker;

        impl ListDomain for $marker {
            fn config() -> &'static DomainConfig {
                &$static_name
            }
        }
    };
}

builtin_domain!(
    /// Marker for the commerce domain (`GET /commerce`)
    COMMERCE, Commerce, commerce
);
builtin_domain!(
    /// Marker for the experiences domain (`GET /experiences`)
    EXPERIENCES, Experiences, experiences
);
builtin_domain!(
    /// Marker for the lodgings domain (`GET /lodgings`)
    LODGINGS, Lodgings, lodgings
);
builtin_domain!(
    /// Marker for the places domain (`GET /places`)
    PLACES, Places, places
);
builtin_domain!(
    /// Marker for the restaurants domain (`GET /restaurants`)
    RESTAURANTS, Restaurants, restaurants
);
builtin_domain!(
    /// Marker for the transport domain (`GET /transport`)
    TRANSPORT, Transport, transport
);
builtin_domain!(
    /// Marker for the google-reviews domain (`GET /google-places/reviews`)
    GOOGLE_REVIEWS, GoogleReviews, google_reviews
);
