//! Bidirectional mapping between `PropertyFilter` and its URL query string
//!
//! Encoding iterates the filter's fields in a fixed, stable order so output is
//! deterministic. Decoding is tolerant: unknown keys are ignored, and a
//! recognized key whose value fails to parse as its declared type is dropped
//! rather than defaulted.

use url::form_urlencoded;

use crate::models::PropertyType;
use crate::search::PropertyFilter;

/// Query-string keys produced and consumed by this codec, in encode order.
///
/// None of these may collide with a routing parameter (`id`).
pub const FILTER_KEYS: [&str; 13] = [
    "property_type",
    "min_price",
    "max_price",
    "city",
    "district",
    "bedrooms",
    "bathrooms",
    "is_furnished",
    "has_parking",
    "has_security",
    "radius",
    "latitude",
    "longitude",
];

/// Serialize a filter into a query string, omitting empty fields.
///
/// The all-empty filter encodes to the empty string.
pub fn encode(filter: &PropertyFilter) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(t) = filter.property_type {
        query.append_pair("property_type", t.as_str());
    }
    if let Some(p) = filter.min_price {
        query.append_pair("min_price", &p.to_string());
    }
    if let Some(p) = filter.max_price {
        query.append_pair("max_price", &p.to_string());
    }
    if let Some(city) = filter.city.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("city", city);
    }
    if let Some(district) = filter.district.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("district", district);
    }
    if let Some(n) = filter.bedrooms {
        query.append_pair("bedrooms", &n.to_string());
    }
    if let Some(n) = filter.bathrooms {
        query.append_pair("bathrooms", &n.to_string());
    }
    if filter.is_furnished {
        query.append_pair("is_furnished", "true");
    }
    if filter.has_parking {
        query.append_pair("has_parking", "true");
    }
    if filter.has_security {
        query.append_pair("has_security", "true");
    }
    if let Some(r) = filter.radius {
        query.append_pair("radius", &r.to_string());
    }
    if let Some(lat) = filter.latitude {
        query.append_pair("latitude", &lat.to_string());
    }
    if let Some(lon) = filter.longitude {
        query.append_pair("longitude", &lon.to_string());
    }

    query.finish()
}

/// Parse a query string into a filter.
///
/// Malformed values degrade to "unconstrained" rather than erroring, so a
/// hand-edited or stale URL still yields a usable search.
pub fn decode(query: &str) -> PropertyFilter {
    let mut filter = PropertyFilter::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "property_type" => filter.property_type = PropertyType::parse(&value),
            "min_price" => filter.min_price = parse_price(&value),
            "max_price" => filter.max_price = parse_price(&value),
            "city" => filter.city = parse_text(&value),
            "district" => filter.district = parse_text(&value),
            "bedrooms" => filter.bedrooms = parse_count(&value),
            "bathrooms" => filter.bathrooms = parse_count(&value),
            "is_furnished" => {
                if let Some(b) = parse_bool(&value) {
                    filter.is_furnished = b;
                }
            }
            "has_parking" => {
                if let Some(b) = parse_bool(&value) {
                    filter.has_parking = b;
                }
            }
            "has_security" => {
                if let Some(b) = parse_bool(&value) {
                    filter.has_security = b;
                }
            }
            "radius" => filter.radius = parse_number(&value),
            "latitude" => filter.latitude = parse_number(&value),
            "longitude" => filter.longitude = parse_number(&value),
            _ => {}
        }
    }

    filter
}

/// Non-negative amount
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Any finite number (coordinates may be negative)
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Positive integer
fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
