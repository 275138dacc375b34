//! Structured search criteria for property listings

use crate::models::PropertyType;

/// Structured representation of a property search's constraints.
///
/// A field is "empty" when it is `None`, an empty string, or `false`; empty
/// fields never appear in the encoded query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub property_type: Option<PropertyType>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub is_furnished: bool,
    pub has_parking: bool,
    pub has_security: bool,
    /// Proximity search radius in kilometers
    pub radius: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PropertyFilter {
    /// True when every field holds its empty value
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.city.is_none()
            && self.district.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && !self.is_furnished
            && !self.has_parking
            && !self.has_security
            && self.radius.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
    }
}
