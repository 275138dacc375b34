//! Search form controller
//!
//! Mediates between discrete user input events and a pending filter draft,
//! independent of the currently applied (URL-reflected) filter. Submission
//! only produces a navigation target; fetching is the listing feed's job.

use crate::models::PropertyType;
use crate::search::{codec, PropertyFilter};

/// Path of the listings view that submission navigates to
pub const LISTINGS_PATH: &str = "/properties";

/// In-memory draft of a property search form
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    draft: PropertyFilter,
}

impl SearchForm {
    /// A form with every field empty.
    ///
    /// This is the default even when the current URL carries filters; seeding
    /// from the URL is the explicit opt-in below.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the draft from an existing query string, so a revisited search
    /// shows its prior criteria.
    pub fn from_query(query: &str) -> Self {
        Self {
            draft: codec::decode(query),
        }
    }

    pub fn draft(&self) -> &PropertyFilter {
        &self.draft
    }

    /// Apply one user input event to the draft.
    ///
    /// Coercion rules per field kind: checkboxes become booleans, numeric
    /// inputs become a value or "field absent" (invalid text never surfaces
    /// as an error), selects and text inputs become strings. Unknown field
    /// names are ignored.
    pub fn update_field(&mut self, name: &str, raw: &str) {
        match name {
            "property_type" => self.draft.property_type = PropertyType::parse(raw),
            "min_price" => self.draft.min_price = coerce_price(raw),
            "max_price" => self.draft.max_price = coerce_price(raw),
            "city" => self.draft.city = coerce_text(raw),
            "district" => self.draft.district = coerce_text(raw),
            "bedrooms" => self.draft.bedrooms = coerce_count(raw),
            "bathrooms" => self.draft.bathrooms = coerce_count(raw),
            "is_furnished" => self.draft.is_furnished = coerce_checkbox(raw),
            "has_parking" => self.draft.has_parking = coerce_checkbox(raw),
            "has_security" => self.draft.has_security = coerce_checkbox(raw),
            "radius" => self.draft.radius = coerce_number(raw),
            "latitude" => self.draft.latitude = coerce_number(raw),
            "longitude" => self.draft.longitude = coerce_number(raw),
            _ => {}
        }
    }

    /// Serialize the draft and produce the navigation target for the
    /// listings view. No network call happens here.
    pub fn submit(&self) -> String {
        let query = codec::encode(&self.draft);
        if query.is_empty() {
            LISTINGS_PATH.to_string()
        } else {
            format!("{LISTINGS_PATH}?{query}")
        }
    }
}

fn coerce_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn coerce_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn coerce_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

fn coerce_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn coerce_checkbox(raw: &str) -> bool {
    // Browsers submit "on" for a checked box; accept explicit truths too.
    matches!(raw, "on" | "true" | "1" | "checked")
}
