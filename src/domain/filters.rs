// src/domain/filters.rs

use crate::domain::distance::Coordinates;
use crate::domain::listing::Listing;
use crate::domain::places::{city_names, city_slug};
use crate::errors::AppError;
use url::form_urlencoded;

pub const MAX_PRICE_LIMIT: i64 = 3500;
pub const MAX_SURFACE_LIMIT: i64 = 250;
pub const MAX_DAYS_ONLINE_LIMIT: i64 = 60;

pub const INTERIOR_TYPES: &[&str] = &["furnished", "unfurnished", "part-furnished", "shell"];

/// Set by the filter form so an emptied multiselect is not read as "all".
const APPLIED_KEY: &str = "applied";

#[derive(Debug, Clone, PartialEq)]
pub struct CustomMarker {
    pub name: String,
    pub coords: Coordinates,
}

/// Raw custom marker fields, kept so the form can be refilled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomMarkerInput {
    pub name: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub applied: bool,
    pub cities: Vec<String>,
    pub max_price: i64,
    pub min_surface: i64,
    pub interior_types: Vec<String>,
    pub max_days_online: i64,

    pub custom_marker_input: CustomMarkerInput,
    pub custom_marker: Option<CustomMarker>,
    pub custom_marker_error: Option<String>,

    // Listing ids whose markers the user marked in this page's lifetime.
    pub visited: Vec<String>,
    pub favorite: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            applied: false,
            cities: city_names().map(str::to_string).collect(),
            max_price: MAX_PRICE_LIMIT,
            min_surface: 0,
            interior_types: INTERIOR_TYPES.iter().map(|t| title_case(t)).collect(),
            max_days_online: MAX_DAYS_ONLINE_LIMIT,
            custom_marker_input: CustomMarkerInput::default(),
            custom_marker: None,
            custom_marker_error: None,
            visited: Vec::new(),
            favorite: Vec::new(),
        }
    }
}

impl Filters {
    pub fn from_query(query: Option<&str>) -> Result<Self, AppError> {
        let mut filters = Filters::default();
        let Some(query) = query else {
            return Ok(filters);
        };

        let mut cities = Vec::new();
        let mut interior_types = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim().to_string();
            match key.as_ref() {
                APPLIED_KEY => filters.applied = true,
                "city" if !value.is_empty() => cities.push(value),
                "interior_type" if !value.is_empty() => interior_types.push(value),
                "max_price" => filters.max_price = parse_int(&key, &value)?,
                "min_surface" => filters.min_surface = parse_int(&key, &value)?,
                "max_days_online" => filters.max_days_online = parse_int(&key, &value)?,
                "custom_marker_name" => filters.custom_marker_input.name = non_empty(value),
                "custom_marker_lat" => filters.custom_marker_input.lat = non_empty(value),
                "custom_marker_lng" => filters.custom_marker_input.lng = non_empty(value),
                "visited" if !value.is_empty() => filters.visited.push(value),
                "favorite" if !value.is_empty() => filters.favorite.push(value),
                _ => {}
            }
        }

        if filters.applied || !cities.is_empty() {
            filters.cities = cities;
        }
        if filters.applied || !interior_types.is_empty() {
            filters.interior_types = interior_types;
        }

        match filters.custom_marker_input.parse() {
            Ok(marker) => filters.custom_marker = marker,
            Err(msg) => filters.custom_marker_error = Some(msg),
        }

        Ok(filters)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let city = city_slug(&listing.city);
        if !self.cities.iter().any(|c| city_slug(c) == city) {
            return false;
        }

        if listing.price > self.max_price as f64 {
            return false;
        }

        // Unknown surface or age never satisfies a bound, not even 0.
        match listing.surface_area_amount {
            Some(surface) if surface >= self.min_surface as f64 => {}
            _ => return false,
        }

        let interior = listing.interior_type.trim().to_lowercase();
        let known = INTERIOR_TYPES.contains(&interior.as_str());
        let selected = self
            .interior_types
            .iter()
            .any(|t| t.trim().to_lowercase() == interior);
        if !(selected || !known || interior.is_empty()) {
            return false;
        }

        matches!(listing.days_online, Some(days) if days <= self.max_days_online)
    }

    /// Matching listings in dataset order, capped at `max_entries`.
    pub fn apply<'a>(&self, listings: &'a [Listing], max_entries: usize) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|l| self.matches(l))
            .take(max_entries)
            .collect()
    }

    /// Query pairs describing the filters. Marker statuses are left out:
    /// applying filters resets the map.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![(APPLIED_KEY, "1".to_string())];
        pairs.extend(self.cities.iter().map(|c| ("city", c.clone())));
        pairs.push(("max_price", self.max_price.to_string()));
        pairs.push(("min_surface", self.min_surface.to_string()));
        pairs.extend(self.interior_types.iter().map(|t| ("interior_type", t.clone())));
        pairs.push(("max_days_online", self.max_days_online.to_string()));

        if let Some(marker) = &self.custom_marker {
            pairs.push(("custom_marker_name", marker.name.clone()));
            pairs.push(("custom_marker_lat", marker.coords.lat.to_string()));
            pairs.push(("custom_marker_lng", marker.coords.lng.to_string()));
        }
        pairs
    }

    /// Shareable link to the page with these filters selected.
    pub fn share_url(&self, hostname: &str) -> String {
        let base = if hostname.starts_with("http") {
            hostname.to_string()
        } else {
            format!("http://{hostname}")
        };

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        format!("{}?{}", base.trim_end_matches('/'), serializer.finish())
    }
}

impl CustomMarkerInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.lat.is_none() && self.lng.is_none()
    }

    /// `Ok(None)` when nothing was entered; an error message for partial or
    /// invalid input.
    pub fn parse(&self) -> Result<Option<CustomMarker>, String> {
        if self.is_empty() {
            return Ok(None);
        }
        let (Some(name), Some(lat), Some(lng)) = (&self.name, &self.lat, &self.lng) else {
            return Err("Ups! You forgot to fill one of the fields.".into());
        };
        let lat: f64 = lat
            .parse()
            .map_err(|_| format!("Latitude '{lat}' is not a number."))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| format!("Longitude '{lng}' is not a number."))?;
        let coords = Coordinates::new(lat, lng).map_err(|e| e.to_string())?;

        Ok(Some(CustomMarker {
            name: name.clone(),
            coords,
        }))
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{key}' should be an integer, got '{value}'")))
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn title_case(s: &str) -> String {
    s.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
