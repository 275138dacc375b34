//! Data models for the Nyumba web gateway
//!
//! Listings, reviews, and user profiles are created and mutated exclusively by
//! the backend; the gateway holds ephemeral, read-mostly copies fetched per
//! view and discarded on navigation away.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod patch;
pub use patch::Patch;

/// Property categories recognized by listings and the search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Commercial,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Commercial,
        PropertyType::Land,
    ];

    /// Wire value, as used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
            PropertyType::Commercial => "Commercial",
            PropertyType::Land => "Land",
        }
    }

    /// Parse a wire value; anything unrecognized is None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "apartment" => Some(PropertyType::Apartment),
            "house" => Some(PropertyType::House),
            "villa" => Some(PropertyType::Villa),
            "commercial" => Some(PropertyType::Commercial),
            "land" => Some(PropertyType::Land),
            _ => None,
        }
    }
}

/// Lifecycle status of a listing, owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Rented,
    Pending,
    Maintenance,
}

impl PropertyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Rented => "Rented",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Maintenance => "Maintenance",
        }
    }
}

/// A rental listing as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    /// Floor area in square meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    pub price: f64,
    /// ISO-4217-like currency code, e.g. "UGX"
    pub currency: String,
    #[serde(default)]
    pub is_furnished: bool,
    #[serde(default)]
    pub has_parking: bool,
    #[serde(default)]
    pub has_security: bool,
    #[serde(default)]
    pub has_water: bool,
    #[serde(default)]
    pub has_electricity: bool,
    /// Image URLs in display order; may be empty
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A property review as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub property_id: i64,
    pub reviewer_id: i64,
    pub reviewer_name: String,
    pub rating: f32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Review submission payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewReview {
    pub property_id: i64,
    #[validate(range(min = 1.0, max = 5.0, message = "rating must be between 1 and 5"))]
    pub rating: f32,
    pub comment: String,
}

/// Mean rating over a review set, rounded to one decimal place
pub fn average_rating(reviews: &[Review]) -> f32 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: f32 = reviews.iter().map(|r| r.rating).sum();
    (sum / reviews.len() as f32 * 10.0).round() / 10.0
}

/// Current user's profile as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub user_type: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial profile update payload.
///
/// Each field tracks presence separately from "set to empty": an untouched
/// field stays off the wire entirely, while an explicit clear is sent as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub full_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub phone_number: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub bio: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub profile_picture: Patch<String>,
}

impl ProfileUpdate {
    /// True when no field would appear on the wire
    pub fn is_empty(&self) -> bool {
        self.full_name.is_absent()
            && self.phone_number.is_absent()
            && self.bio.is_absent()
            && self.profile_picture.is_absent()
    }
}
