// src/domain/markers.rs

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStatus {
    Default,
    Visited,
    Favorite,
}

/// Which map layer a marker is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Cluster,
    Standalone,
}

/// Icon look for a status. The client script reads the same table.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

impl MarkerStatus {
    pub const ALL: [MarkerStatus; 3] = [
        MarkerStatus::Default,
        MarkerStatus::Visited,
        MarkerStatus::Favorite,
    ];

    pub fn layer(self) -> Layer {
        match self {
            MarkerStatus::Favorite => Layer::Standalone,
            MarkerStatus::Default | MarkerStatus::Visited => Layer::Cluster,
        }
    }

    pub fn style(self) -> MarkerStyle {
        match self {
            MarkerStatus::Default => MarkerStyle { color: "#2a81cb", icon: "🏠" },
            MarkerStatus::Visited => MarkerStyle { color: "#cb2b3e", icon: "👣" },
            MarkerStatus::Favorite => MarkerStyle { color: "#9c2bcb", icon: "⭐" },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerStatus::Default => "default",
            MarkerStatus::Visited => "visited",
            MarkerStatus::Favorite => "favorite",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEntry {
    pub listing_id: String,
    pub status: MarkerStatus,
    pub layer: Layer,
}

/// Marker handles of one rendered map, addressable by position and by
/// listing id. Owned by the rendering session; nothing is shared across
/// requests.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    entries: Vec<MarkerEntry>,
    by_id: HashMap<String, usize>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a marker in the cluster layer with the default status.
    /// A repeated listing id still gets its own marker; id lookups resolve
    /// to the first one.
    pub fn register(&mut self, listing_id: &str) -> usize {
        let idx = self.entries.len();
        self.entries.push(MarkerEntry {
            listing_id: listing_id.to_string(),
            status: MarkerStatus::Default,
            layer: Layer::Cluster,
        });
        self.by_id.entry(listing_id.to_string()).or_insert(idx);
        idx
    }

    pub fn mark_visited(&mut self, idx: usize) -> Option<&MarkerEntry> {
        self.set_status(idx, MarkerStatus::Visited)
    }

    pub fn mark_favorite(&mut self, idx: usize) -> Option<&MarkerEntry> {
        self.set_status(idx, MarkerStatus::Favorite)
    }

    pub fn reset(&mut self, idx: usize) -> Option<&MarkerEntry> {
        self.set_status(idx, MarkerStatus::Default)
    }

    /// Unknown indices are ignored and yield `None`.
    pub fn set_status(&mut self, idx: usize, status: MarkerStatus) -> Option<&MarkerEntry> {
        let entry = self.entries.get_mut(idx)?;
        entry.status = status;
        entry.layer = status.layer();
        Some(&*entry)
    }

    pub fn set_status_by_id(&mut self, listing_id: &str, status: MarkerStatus) -> Option<&MarkerEntry> {
        let idx = self.index_of(listing_id)?;
        self.set_status(idx, status)
    }

    pub fn index_of(&self, listing_id: &str) -> Option<usize> {
        self.by_id.get(listing_id).copied()
    }

    pub fn get(&self, idx: usize) -> Option<&MarkerEntry> {
        self.entries.get(idx)
    }

    pub fn in_layer(&self, layer: Layer) -> impl Iterator<Item = (usize, &MarkerEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.layer == layer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
