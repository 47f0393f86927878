// src/services/catalog.rs
// DOCUMENTATION: Static catalog of attractions
// PURPOSE: Read-only place list defined at startup

use crate::models::{LocalizedText, Place};
use geo_types::Point;
use std::sync::OnceLock;

/// Place catalog
/// DOCUMENTATION: Built once on first use and shared for the life of the
/// process. Nothing mutates it afterwards.
pub struct PlaceCatalog;

impl PlaceCatalog {
    /// All known places, in display order
    pub fn all() -> &'static [Place] {
        static PLACES: OnceLock<Vec<Place>> = OnceLock::new();
        PLACES.get_or_init(build_places)
    }

    /// Look a place up by its slug (case-insensitive)
    pub fn find(id: &str) -> Option<&'static Place> {
        let id = id.trim().to_lowercase();
        Self::all().iter().find(|p| p.id == id)
    }
}

fn build_places() -> Vec<Place> {
    vec![
        Place {
            id: "wadi_shab",
            name: LocalizedText::new("Wadi Shab", "وادي شاب"),
            description: LocalizedText::new(
                "A beautiful valley with turquoise pools and waterfalls.",
                "وادٍ جميل ببرك فيروزية وشلالات.",
            ),
            location: Point::new(59.0136, 22.8861),
            region: "Ash Sharqiyah South",
        },
        Place {
            id: "jebel_akhdar",
            name: LocalizedText::new("Jebel Akhdar", "الجبل الأخضر"),
            description: LocalizedText::new(
                "The Green Mountain, terraced farms & cool weather.",
                "الجبل الأخضر، مزارع مدرجة وطقس معتدل.",
            ),
            location: Point::new(57.4140, 23.0771),
            region: "Ad Dakhiliyah",
        },
        Place {
            id: "mutrah",
            name: LocalizedText::new("Mutrah Corniche", "كورنيش مطرح"),
            description: LocalizedText::new(
                "Seaside promenade and historic souq.",
                "ممشى بحري وسوق تاريخي.",
            ),
            location: Point::new(58.5430, 23.6160),
            region: "Muscat",
        },
        Place {
            id: "sultan_qaboos",
            name: LocalizedText::new("Sultan Qaboos Grand Mosque", "جامع السلطان قابوس الأكبر"),
            description: LocalizedText::new(
                "Landmark mosque with beautiful architecture.",
                "جامع بارز بعمارة رائعة.",
            ),
            location: Point::new(58.4078, 23.5859),
            region: "Muscat",
        },
        Place {
            id: "nizwa",
            name: LocalizedText::new("Nizwa Fort", "قلعة نزوى"),
            description: LocalizedText::new(
                "Historic fort and old market.",
                "قلعة تاريخية وسوق قديم.",
            ),
            location: Point::new(57.5333, 22.9333),
            region: "Ad Dakhiliyah",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Locale;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = PlaceCatalog::all().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PlaceCatalog::all().len());
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_find() {
        let nizwa = PlaceCatalog::find("NIZWA").unwrap();
        assert_eq!(nizwa.display_name(Locale::English), "Nizwa Fort");
        assert_eq!(nizwa.latitude(), 22.9333);
        assert!(PlaceCatalog::find("petra").is_none());
    }

    #[test]
    fn test_coordinates_are_in_oman() {
        for place in PlaceCatalog::all() {
            assert!((16.0..=27.0).contains(&place.latitude()), "{}", place.id);
            assert!((51.0..=60.5).contains(&place.longitude()), "{}", place.id);
        }
    }
}
