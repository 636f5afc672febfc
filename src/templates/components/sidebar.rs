use crate::domain::filters::{
    title_case, Filters, INTERIOR_TYPES, MAX_DAYS_ONLINE_LIMIT, MAX_PRICE_LIMIT, MAX_SURFACE_LIMIT,
};
use crate::domain::places::city_names;
use maud::{html, Markup};

const SHOW_VALUE: &str = "this.nextElementSibling.value = this.value";

pub fn sidebar(filters: &Filters, share_url: &str) -> Markup {
    html! {
        aside class="sidebar" {
            div class="notice warning" {
                "⚠️ Applying filters or changing the custom marker will reset the map, including "
                "visited and favorited apartments."
            }
            (filters_form(filters))
            hr;
            (custom_marker_form(filters))
            hr;
            h4 { "Share these filters" }
            input type="text" readonly value=(share_url) onfocus="this.select()";
        }
    }
}

pub fn filters_form(filters: &Filters) -> Markup {
    let interior_titles: Vec<String> = INTERIOR_TYPES.iter().map(|t| title_case(t)).collect();

    html! {
        h3 title="Filter the apartments on the map." { "Add filters" }
        form method="get" action="/" id="filters-form" {
            input type="hidden" name="applied" value="1";

            label for="city" { "City" }
            select name="city" id="city" multiple size="6" {
                @for city in city_names() {
                    option value=(city) selected[filters.cities.iter().any(|c| c.as_str() == city)] { (city) }
                }
            }

            label for="max_price" { "Max price" }
            input type="range" name="max_price" id="max_price" min="0" max=(MAX_PRICE_LIMIT) step="50"
                value=(filters.max_price) oninput=(SHOW_VALUE);
            output { (filters.max_price) }

            label for="min_surface" { "Min surface" }
            input type="range" name="min_surface" id="min_surface" min="0" max=(MAX_SURFACE_LIMIT) step="5"
                value=(filters.min_surface) oninput=(SHOW_VALUE);
            output { (filters.min_surface) }

            label for="interior_type" { "Interior type" }
            select name="interior_type" id="interior_type" multiple size="4" {
                @for title in &interior_titles {
                    option value=(title)
                        selected[filters.interior_types.iter().any(|t| t.eq_ignore_ascii_case(title))]
                    { (title) }
                }
            }

            label for="max_days_online" { "Max days online" }
            input type="range" name="max_days_online" id="max_days_online" min="0" max=(MAX_DAYS_ONLINE_LIMIT) step="1"
                value=(filters.max_days_online) oninput=(SHOW_VALUE);
            output { (filters.max_days_online) }

            // Keep the custom marker when only the filters change.
            @if let Some(name) = &filters.custom_marker_input.name {
                input type="hidden" name="custom_marker_name" value=(name);
            }
            @if let Some(lat) = &filters.custom_marker_input.lat {
                input type="hidden" name="custom_marker_lat" value=(lat);
            }
            @if let Some(lng) = &filters.custom_marker_input.lng {
                input type="hidden" name="custom_marker_lng" value=(lng);
            }

            button type="submit" { "Apply filters" }
        }
    }
}

pub fn custom_marker_form(filters: &Filters) -> Markup {
    let input = &filters.custom_marker_input;

    html! {
        h3 title="Add the coordinates of a place to add a custom marker on the map." { "Add a custom marker" }
        form method="get" action="/" id="custom-marker-form" {
            @for (key, value) in filters.to_query_pairs() {
                @if !key.starts_with("custom_marker_") {
                    input type="hidden" name=(key) value=(value);
                }
            }

            label for="custom_marker_name" { "Name" }
            input type="text" name="custom_marker_name" id="custom_marker_name"
                value=(input.name.as_deref().unwrap_or_default());

            label for="custom_marker_lat" { "Latitude" }
            input type="number" step="any" name="custom_marker_lat" id="custom_marker_lat"
                value=(input.lat.as_deref().unwrap_or_default());

            label for="custom_marker_lng" { "Longitude" }
            input type="number" step="any" name="custom_marker_lng" id="custom_marker_lng"
                value=(input.lng.as_deref().unwrap_or_default());

            button type="submit" { "Add custom marker" }

            @if let Some(err) = &filters.custom_marker_error {
                div class="notice error" { "🙈 " (err) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_form_reflects_selection() {
        let filters = Filters::from_query(Some("city=Leiden&max_price=1250")).unwrap();
        let html = filters_form(&filters).into_string();
        assert!(html.contains(r#"<option value="Leiden" selected>Leiden</option>"#));
        assert!(html.contains(r#"<option value="Utrecht">Utrecht</option>"#));
        assert!(html.contains(r#"value="1250""#));
    }

    #[test]
    fn custom_marker_form_keeps_filters_and_shows_errors() {
        let filters = Filters::from_query(Some("city=Leiden&custom_marker_name=Gym")).unwrap();
        let html = custom_marker_form(&filters).into_string();
        assert!(html.contains(r#"<input type="hidden" name="city" value="Leiden">"#));
        assert!(html.contains("forgot to fill one of the fields"));
    }
}
