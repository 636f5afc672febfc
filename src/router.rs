use crate::app::App;
use crate::domain::filters::{CustomMarker, Filters};
use crate::domain::markers::MarkerStatus;
use crate::errors::{AppError, ResultResp};
use crate::map::{payload_json, render_map};
use crate::responses::html_response;
use crate::templates::pages::{map_page, MapPageVm};
use astra::Request;
use log::debug;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => show_map(&req, app),
        (_, "/") => Err(AppError::MethodNotAllowed),
        _ => Err(AppError::NotFound),
    }
}

fn show_map(req: &Request, app: &App) -> ResultResp {
    let filters = Filters::from_query(req.uri().query())?;
    let dataset = app.dataset.get()?;
    let office = app.dataset.office();

    let max_entries = app.config.max_entries;
    let shown = filters.apply(&dataset.listings, max_entries);
    let custom_markers: Vec<CustomMarker> = filters.custom_marker.iter().cloned().collect();
    let seed = status_seed(&filters);

    let view = render_map(&shown, max_entries, office, &custom_markers, &seed);
    debug!(
        "Rendering {} of {} apartments from {} ({} pre-marked)",
        view.registry.len(),
        dataset.listings.len(),
        dataset.uri,
        seed.len()
    );

    let vm = MapPageVm {
        office_name: &office.name,
        filters: &filters,
        share_url: filters.share_url(&app.config.web_hostname),
        payload_json: payload_json(&view)?,
        shown: view.registry.len(),
        max_entries,
    };
    html_response(map_page(&vm))
}

/// Statuses carried in the URL; favorite wins when an id appears in both.
fn status_seed(filters: &Filters) -> Vec<(String, MarkerStatus)> {
    let visited = filters
        .visited
        .iter()
        .map(|id| (id.clone(), MarkerStatus::Visited));
    let favorite = filters
        .favorite
        .iter()
        .map(|id| (id.clone(), MarkerStatus::Favorite));
    visited.chain(favorite).collect()
}
