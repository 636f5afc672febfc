mod renderer;

pub use renderer::{render_map, MapView};

use crate::errors::AppError;

/// Client-side marker controller. Reads the payload embedded by the page.
pub const MAP_CONTROLLER_JS: &str = include_str!("../../static/map_controller.js");

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const MARKERCLUSTER_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
pub const MARKERCLUSTER_BASE_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
pub const MARKERCLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

/// JSON for a `<script type="application/json">` block.
/// `</` is escaped so popup markup cannot close the script element.
pub fn payload_json(view: &MapView) -> Result<String, AppError> {
    let json = serde_json::to_string(view).map_err(|_| AppError::Internal)?;
    Ok(json.replace("</", "<\\/"))
}
