use crate::map::{LEAFLET_CSS, LEAFLET_JS, MARKERCLUSTER_BASE_CSS, MARKERCLUSTER_CSS, MARKERCLUSTER_JS};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const MAIN_CSS: &str = include_str!("../../../static/main.css");

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🗺️</text></svg>";
                link rel="stylesheet" href=(LEAFLET_CSS);
                link rel="stylesheet" href=(MARKERCLUSTER_BASE_CSS);
                link rel="stylesheet" href=(MARKERCLUSTER_CSS);
                script src=(LEAFLET_JS) {}
                script src=(MARKERCLUSTER_JS) {}
                style { (PreEscaped(MAIN_CSS)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Apartments map" }
                }
                (content)
            }
        }
    }
}
