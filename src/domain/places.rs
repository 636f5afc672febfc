// src/domain/places.rs

use crate::domain::distance::Coordinates;

/// (display name, center) for the cities the scraper covers.
pub const CITY_CENTERS: &[(&str, Coordinates)] = &[
    ("Amsterdam", Coordinates { lat: 52.3731, lng: 4.8926 }),
    ("Den Haag", Coordinates { lat: 52.0799, lng: 4.3113 }),
    ("Haarlem", Coordinates { lat: 52.3812, lng: 4.6365 }),
    ("Leiden", Coordinates { lat: 52.1601, lng: 4.4970 }),
    ("Rotterdam", Coordinates { lat: 51.9225, lng: 4.4792 }),
    ("Utrecht", Coordinates { lat: 52.0907, lng: 5.1214 }),
];

pub const OFFICE_COORDS: Coordinates = Coordinates { lat: 52.3152336, lng: 4.9498692 };
pub const OFFICE_ADDRESS: &str = "Bijlmerdreef 106, 1102 CT Amsterdam, Netherlands";

/// Datasets store cities as slugs ("den-haag"), the UI shows "Den Haag".
pub fn city_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

pub fn city_center(city: &str) -> Option<Coordinates> {
    let slug = city_slug(city);
    CITY_CENTERS
        .iter()
        .find(|(name, _)| city_slug(name) == slug)
        .map(|(_, coords)| *coords)
}

pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITY_CENTERS.iter().map(|(name, _)| *name)
}

#[derive(Debug, Clone)]
pub struct Office {
    pub name: String,
    pub address: String,
    pub coords: Coordinates,
}

impl Office {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            address: OFFICE_ADDRESS.to_string(),
            coords: OFFICE_COORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_lookup_ignores_case_and_dashes() {
        assert!(city_center("den-haag").is_some());
        assert!(city_center("Den Haag").is_some());
        assert!(city_center("AMSTERDAM").is_some());
        assert!(city_center("Groningen").is_none());
    }
}
