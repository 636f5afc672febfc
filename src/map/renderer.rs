// src/map/renderer.rs
use crate::domain::distance::Coordinates;
use crate::domain::filters::CustomMarker;
use crate::domain::listing::Listing;
use crate::domain::markers::{Layer, MarkerRegistry, MarkerStatus, MarkerStyle};
use crate::domain::places::Office;
use crate::templates::components::{apartment_popup, place_popup};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

pub const START_ZOOM: u8 = 11;

#[derive(Debug, Serialize)]
pub struct ApartmentMarker {
    pub idx: usize,
    pub listing_id: String,
    pub coords: Coordinates,
    pub tooltip: String,
    pub popup: String,
    pub status: MarkerStatus,
    pub layer: Layer,
}

/// Markers that never cluster: the office and user-added places.
#[derive(Debug, Serialize)]
pub struct PlaceMarker {
    pub name: String,
    pub coords: Coordinates,
    pub popup: String,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Everything the client script needs to draw one map.
#[derive(Debug, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<ApartmentMarker>,
    pub places: Vec<PlaceMarker>,
    pub styles: BTreeMap<&'static str, MarkerStyle>,
    pub layers: BTreeMap<&'static str, Layer>,
    #[serde(skip)]
    pub registry: MarkerRegistry,
}

/// Statuses to restore, by listing id.
pub type StatusSeed<'a> = &'a [(String, MarkerStatus)];

pub fn render_map(
    listings: &[&Listing],
    max_entries: usize,
    office: &Office,
    custom_markers: &[CustomMarker],
    seed: StatusSeed<'_>,
) -> MapView {
    let shown: Vec<&Listing> = listings.iter().copied().take(max_entries).collect();

    let mut registry = MarkerRegistry::new();
    for listing in &shown {
        registry.register(&listing.id);
    }
    for (listing_id, status) in seed {
        if registry.set_status_by_id(listing_id, *status).is_none() {
            debug!("Ignoring {} status for unknown listing '{listing_id}'", status.as_str());
        }
    }

    let markers = shown
        .iter()
        .enumerate()
        .map(|(idx, listing)| {
            let entry = registry.get(idx);
            ApartmentMarker {
                idx,
                listing_id: listing.id.clone(),
                coords: listing.coords,
                tooltip: listing.title.clone(),
                popup: apartment_popup(idx, listing, office, custom_markers).into_string(),
                status: entry.map(|e| e.status).unwrap_or(MarkerStatus::Default),
                layer: entry.map(|e| e.layer).unwrap_or(Layer::Cluster),
            }
        })
        .collect();

    let mut places = vec![PlaceMarker {
        name: office.name.clone(),
        coords: office.coords,
        popup: place_popup(&office.name, &office.address).into_string(),
        color: "#f69730",
        icon: "🏢",
    }];
    places.extend(custom_markers.iter().map(|cm| PlaceMarker {
        name: cm.name.clone(),
        coords: cm.coords,
        popup: place_popup(&cm.name, "Custom marker").into_string(),
        color: "#436978",
        icon: "📍",
    }));

    MapView {
        center: average_coords(&shown).unwrap_or(office.coords),
        zoom: START_ZOOM,
        markers,
        places,
        styles: MarkerStatus::ALL
            .iter()
            .map(|s| (s.as_str(), s.style()))
            .collect(),
        layers: MarkerStatus::ALL
            .iter()
            .map(|s| (s.as_str(), s.layer()))
            .collect(),
        registry,
    }
}

pub fn average_coords(listings: &[&Listing]) -> Option<Coordinates> {
    if listings.is_empty() {
        return None;
    }
    let n = listings.len() as f64;
    let (lat, lng) = listings
        .iter()
        .fold((0.0, 0.0), |(lat, lng), l| (lat + l.coords.lat, lng + l.coords.lng));
    Some(Coordinates {
        lat: lat / n,
        lng: lng / n,
    })
}
