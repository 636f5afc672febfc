// src/tests/router_tests/map_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, get, map_payload, sample_csv, test_app, write_sample_parquet, write_temp_file,
};

#[test]
fn renders_one_marker_per_listing() {
    let path = write_temp_file("render", "csv", sample_csv(3).as_bytes());
    let app = test_app(&path, "csv", 500);

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Apartments in The Netherlands"));
    assert!(body.contains(r#"<div id="map">"#));
    assert!(body.contains("Showing 3 apartments (max 500)."));
    assert!(!body.contains("maximum number of apartments"));

    let payload = map_payload(&body);
    let markers = payload["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[2]["listing_id"], "apt-2");
    assert!(markers.iter().all(|m| m["layer"] == "cluster"));
    // Office marker is always on the base map.
    assert_eq!(payload["places"][0]["name"], "the Office");
}

#[test]
fn caps_markers_at_max_entries() {
    let path = write_temp_file("cap", "csv", sample_csv(6).as_bytes());
    let app = test_app(&path, "csv", 4);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert_eq!(map_payload(&body)["markers"].as_array().unwrap().len(), 4);
    assert!(body.contains("Showing 4 apartments (max 4)."));
    assert!(body.contains("Showing the maximum number of apartments (4)."));
}

#[test]
fn filters_from_query_string() {
    let path = write_temp_file("filter", "csv", sample_csv(3).as_bytes());
    let app = test_app(&path, "csv", 500);

    let body = body_string(handle(get("/?city=Leiden&city=Den+Haag"), &app).unwrap());
    assert!(body.contains("No apartments found"));
    assert!(map_payload(&body)["markers"].as_array().unwrap().is_empty());

    let body = body_string(handle(get("/?max_price=1100"), &app).unwrap());
    assert!(body.contains("No apartments found"));

    let body = body_string(handle(get("/?city=Amsterdam&max_price=1200"), &app).unwrap());
    assert!(body.contains("Showing 3 apartments"));

    // Sample apartments have been online for 10 days.
    let body = body_string(handle(get("/?max_days_online=9"), &app).unwrap());
    assert!(body.contains("No apartments found"));
    let body = body_string(handle(get("/?max_days_online=10"), &app).unwrap());
    assert!(body.contains("Showing 3 apartments"));
}

#[test]
fn rows_without_surface_or_timestamps_are_filtered_out() {
    let csv = "id,title,city,price,lat,lng,surface_area_amount,first_seen_at,last_seen_at\n\
               a,Full,utrecht,900,52.09,5.12,40,2024-01-01 00:00:00,2024-01-20 12:00:00\n\
               b,No surface,utrecht,900,52.09,5.12,,2024-01-01 00:00:00,2024-01-02 00:00:00\n\
               c,Never seen,utrecht,900,52.09,5.12,40,,\n\
               d,No price,utrecht,,52.09,5.12,40,2024-01-01 00:00:00,2024-01-02 00:00:00\n";
    let path = write_temp_file("nulls", "csv", csv.as_bytes());
    let app = test_app(&path, "csv", 500);

    let body = body_string(handle(get("/?max_days_online=19"), &app).unwrap());
    let payload = map_payload(&body);
    let markers = payload["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0]["listing_id"], "a");
}

#[test]
fn marker_statuses_in_url_are_restored() {
    let path = write_temp_file("status", "csv", sample_csv(3).as_bytes());
    let app = test_app(&path, "csv", 500);

    let body = body_string(handle(get("/?favorite=apt-1&visited=apt-2&visited=apt-1"), &app).unwrap());
    let payload = map_payload(&body);
    let markers = payload["markers"].as_array().unwrap();

    assert_eq!(markers[0]["status"], "default");
    assert_eq!(markers[1]["status"], "favorite");
    assert_eq!(markers[1]["layer"], "standalone");
    assert_eq!(markers[2]["status"], "visited");
    assert_eq!(markers[2]["layer"], "cluster");
}

#[test]
fn custom_marker_is_added_to_map() {
    let path = write_temp_file("custom", "csv", sample_csv(1).as_bytes());
    let app = test_app(&path, "csv", 500);

    let body = body_string(
        handle(
            get("/?custom_marker_name=Gym&custom_marker_lat=52.36&custom_marker_lng=4.9"),
            &app,
        )
        .unwrap(),
    );
    let payload = map_payload(&body);
    assert_eq!(payload["places"].as_array().unwrap().len(), 2);
    assert_eq!(payload["places"][1]["name"], "Gym");
    assert!(body.contains("custom_marker_name=Gym"));
}

#[test]
fn page_carries_share_link() {
    let path = write_temp_file("share", "csv", sample_csv(1).as_bytes());
    let app = test_app(&path, "csv", 500);

    let body = body_string(handle(get("/?city=Utrecht&max_price=2000"), &app).unwrap());
    assert!(body.contains("http://localhost:8501?applied=1&amp;city=Utrecht&amp;max_price=2000"));
}

#[test]
fn serves_parquet_datasets() {
    let path = write_sample_parquet("router", 3);
    let app = test_app(&path, "parquet", 500);

    let body = body_string(handle(get("/"), &app).unwrap());
    let payload = map_payload(&body);
    assert_eq!(payload["markers"].as_array().unwrap().len(), 3);
    assert_eq!(payload["markers"][0]["tooltip"], "Parquet flat 0");
}
