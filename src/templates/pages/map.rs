use crate::domain::filters::Filters;
use crate::map::MAP_CONTROLLER_JS;
use crate::templates::components::sidebar;
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

pub const PAGE_TITLE: &str = "Apartments in The Netherlands";

pub struct MapPageVm<'a> {
    pub office_name: &'a str,
    pub filters: &'a Filters,
    pub share_url: String,
    /// Already escaped for embedding, see `map::payload_json`.
    pub payload_json: String,
    pub shown: usize,
    pub max_entries: usize,
}

pub fn map_page(vm: &MapPageVm) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        html! {
            div class="layout" {
                (sidebar(vm.filters, &vm.share_url))

                main class="content" {
                    h1 { (PAGE_TITLE) }
                    (about(vm.office_name))

                    div id="map" {}
                    script type="application/json" id="map-data" { (PreEscaped(&vm.payload_json)) }
                    script { (PreEscaped(MAP_CONTROLLER_JS)) }

                    @if vm.shown > 0 {
                        p id="summary" { "Showing " (vm.shown) " apartments (max " (vm.max_entries) ")." }
                    } @else {
                        p id="summary" class="limit-reached" { "No apartments found" }
                    }
                    @if vm.shown > 0 && vm.shown == vm.max_entries {
                        p class="limit-reached" {
                            "Showing the maximum number of apartments (" (vm.max_entries) "). "
                            "Try to apply some filters to see more relevant apartments for you."
                        }
                    }
                }
            }
        },
    )
}

fn about(office_name: &str) -> Markup {
    html! {
        details {
            summary { "ℹ️ About" }
            div class="notice info" {
                p {
                    "This map shows apartments that are for rent in some cities in The Netherlands and the distance "
                    "to their respective city center and to " (office_name) "."
                }
                p {
                    "The apartments are scraped from the following websites: "
                    a href="https://www.pararius.com/" target="_blank" rel="noopener noreferrer" { "Pararius" }
                }
                p {
                    "The apartments can also be marked as favorite (purple) or visited (red) in the map to keep track of them."
                }
                p { "Use the filters on the sidebar (left) to filter the apartments on the map or add a custom marker." }
                p { "Happy apartment hunting! 🏠" }
            }
        }
    }
}
