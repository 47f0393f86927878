// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Static attraction records and their localized API view

use geo_types::Point;
use serde::Serialize;

use super::{Locale, LocalizedText};

/// A tourist attraction known at startup
/// DOCUMENTATION: Read-only; the catalog owns every instance for the
/// lifetime of the process
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Stable slug (e.g. "wadi_shab")
    pub id: &'static str,

    /// Display name per locale
    pub name: LocalizedText,

    /// Short description per locale
    pub description: LocalizedText,

    /// Coordinates as (x = longitude, y = latitude)
    pub location: Point<f64>,

    /// Governorate the place belongs to
    pub region: &'static str,
}

impl Place {
    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }

    /// Convert to the localized API response
    pub fn to_response(&self, locale: Locale) -> PlaceResponse {
        PlaceResponse {
            id: self.id,
            name: self.name.get(locale),
            description: self.description.get(locale),
            latitude: self.latitude(),
            longitude: self.longitude(),
            region: self.region,
            locale,
        }
    }
}

/// Response DTO for API responses
#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub region: &'static str,
    pub locale: Locale,
}
