// src/tests/router_tests/error_tests.rs

use crate::errors::AppError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{
    body_string, expect_err, get, sample_csv, temp_path, test_app, write_temp_file,
};

#[test]
fn missing_dataset_renders_error_instead_of_map() {
    let app = test_app(&temp_path("missing", "parquet"), "parquet", 500);

    let err = expect_err(handle(get("/"), &app));
    assert!(matches!(err, AppError::DataAccess(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("Could not load the apartments dataset"));
    assert!(!body.contains(r#"id="map""#));
}

#[test]
fn dataset_without_coordinates_is_format_error() {
    let path = write_temp_file("nocoords", "csv", b"id,title,price,city\n1,Flat,1200,leiden\n");
    let app = test_app(&path, "csv", 500);

    let err = expect_err(handle(get("/"), &app));
    assert!(matches!(err, AppError::Format(_)));
    assert_eq!(html_error_response(err).status(), 500);
}

#[test]
fn unsupported_format_is_data_access_error() {
    let path = write_temp_file("fmt", "csv", sample_csv(1).as_bytes());
    let app = test_app(&path, "xlsx", 500);

    assert!(matches!(
        handle(get("/"), &app),
        Err(AppError::DataAccess(msg)) if msg.contains("'xlsx'")
    ));
}

#[test]
fn invalid_query_value_is_bad_request() {
    let path = write_temp_file("badq", "csv", sample_csv(1).as_bytes());
    let app = test_app(&path, "csv", 500);

    let err = expect_err(handle(get("/?min_surface=big"), &app));
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(html_error_response(err).status(), 400);
}

#[test]
fn unknown_path_is_not_found() {
    let path = write_temp_file("404", "csv", sample_csv(1).as_bytes());
    let app = test_app(&path, "csv", 500);

    let err = expect_err(handle(get("/static/main.css"), &app));
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn only_get_is_allowed_on_the_page() {
    let path = write_temp_file("405", "csv", sample_csv(1).as_bytes());
    let app = test_app(&path, "csv", 500);

    let mut req = get("/");
    *req.method_mut() = "POST".parse().unwrap();
    assert!(matches!(handle(req, &app), Err(AppError::MethodNotAllowed)));
}

#[test]
fn error_details_are_escaped() {
    let resp = html_error_response(AppError::BadRequest("<img src=x>".into()));
    let body = body_string(resp);
    assert!(body.contains("&lt;img src=x&gt;"));
}
