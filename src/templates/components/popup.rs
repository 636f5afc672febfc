use crate::domain::distance::gmaps_directions_url;
use crate::domain::filters::CustomMarker;
use crate::domain::listing::Listing;
use crate::domain::places::Office;
use maud::{html, Markup};

const NEW_TAB: &str = "_blank";
const NO_OPENER: &str = "noopener noreferrer";

/// Popup body of an apartment marker. The buttons call the client-side
/// controller with the marker index.
pub fn apartment_popup(
    idx: usize,
    listing: &Listing,
    office: &Office,
    custom_markers: &[CustomMarker],
) -> Markup {
    let link = listing.url.as_deref().unwrap_or("#");
    let has_travel_times = listing.time_to_office.is_some() || listing.time_to_center.is_some();

    html! {
        div id=(format!("_apt_{idx}")) {
            @if let Some(thumbnail) = &listing.thumbnail {
                a href=(link) target=(NEW_TAB) rel=(NO_OPENER) {
                    img src=(thumbnail) width="150px" style="max-height: 125px; object-fit: cover";
                }
                br;
            }
            a href=(link) target=(NEW_TAB) rel=(NO_OPENER) style="font-weight: bold" { (listing.title) }
            br;
            small { (listing.address) }
            br;
            br;

            "💸 Price: " b { (format_amount(listing.price)) "€ per " (listing.price_period) }
            br;
            @if let Some(surface) = listing.surface_area_amount {
                "🧱 Surface: " (format_amount(surface)) " " (listing.surface_area_unit)
                br;
            }
            "🛋️ " (listing.interior_type)
            br;
            @if let Some(rooms) = listing.n_rooms {
                (rooms as i64) " Rooms"
                br;
            }
            br;

            "📏 " (format!("{:.1}", listing.distance_to_office_km)) " km from " (office.name)
            br;
            @if let Some(time) = &listing.time_to_office {
                "🚂 " (time) " from office*"
                br;
            }
            a href=(listing.office_directions_url) target=(NEW_TAB) rel=(NO_OPENER) { "Directions to office" }
            br;
            @if let Some(km) = listing.distance_to_center_km {
                "📏 " (format!("{km:.1}")) " km from the city center"
                br;
            }
            @if let Some(time) = &listing.time_to_center {
                "🚂 " (time) " from city center*"
                br;
            }
            @if let Some(url) = &listing.center_directions_url {
                a href=(url) target=(NEW_TAB) rel=(NO_OPENER) { "Directions to city center" }
                br;
            }
            br;

            @if !custom_markers.is_empty() {
                @for cm in custom_markers {
                    a href=(gmaps_directions_url(listing.coords, cm.coords)) target=(NEW_TAB) rel=(NO_OPENER) {
                        "Directions to '" (cm.name) "'"
                    }
                    br;
                }
                br;
            }

            small {
                @if has_travel_times {
                    "* est. time by public transport"
                    br;
                }
                @if let Some(first) = listing.first_seen_at {
                    "First seen at: " (first.date())
                    br;
                }
                @if let Some(last) = listing.last_seen_at {
                    "Last seen at: " (last.date())
                    br;
                }
            }

            div class="apt-actions" {
                button type="button" class="apt-btn" onclick=(format!("markVisited({idx})")) { "Mark visited" }
                button type="button" class="apt-btn" onclick=(format!("markFavorite({idx})")) { "Mark favorite" }
            }
            div class="apt-reset" {
                button type="button" class="apt-btn" onclick=(format!("setDefaultColor({idx})")) { "Reset" }
            }
        }
    }
}

pub fn place_popup(name: &str, detail: &str) -> Markup {
    html! {
        b { (name) }
        br;
        small { (detail) }
    }
}

/// Whole numbers without a trailing ".0".
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
