// src/dataset/cache.rs
use crate::dataset::{load_dataset, Dataset};
use crate::domain::places::Office;
use crate::errors::AppError;
use log::error;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Process-wide memo of the loaded dataset.
/// Only successful loads are kept; a failed load is retried on the next page view.
pub struct DatasetCache {
    uri: String,
    format: String,
    office: Office,
    timeout: Duration,
    slot: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new(uri: &str, format: &str, office: Office, timeout: Duration) -> Self {
        Self {
            uri: uri.to_string(),
            format: format.to_string(),
            office,
            timeout,
            slot: Mutex::new(None),
        }
    }

    pub fn office(&self) -> &Office {
        &self.office
    }

    pub fn get(&self) -> Result<Arc<Dataset>, AppError> {
        // Held across the load so concurrent first requests fetch once.
        // A load that panicked leaves the slot empty, so the guard is still usable.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let format = self.format.parse()?;
        let dataset = load_dataset(&self.uri, format, &self.office, self.timeout).map_err(|e| {
            error!("Loading dataset {} failed: {e}", self.uri);
            e
        })?;

        let dataset = Arc::new(dataset);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }
}
