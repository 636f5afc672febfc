use crate::errors::AppError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert an AppError into a proper HTML response page
pub fn html_error_response(err: AppError) -> Response {
    match &err {
        AppError::DataAccess(msg) => render_error(
            err.status(),
            "Could not load the apartments dataset",
            msg,
        ),
        AppError::Format(msg) => render_error(err.status(), "The apartments dataset is malformed", msg),
        AppError::Validation(msg) => render_error(err.status(), "Invalid coordinates", msg),
        AppError::BadRequest(msg) => render_error(err.status(), "Bad Request", msg),
        AppError::Config(msg) => render_error(err.status(), "Configuration error", msg),
        AppError::NotFound | AppError::MethodNotAllowed | AppError::Internal => {
            render_error(err.status(), &err.to_string(), "")
        }
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, heading: &str, detail: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="content" {
                h1 { "Error " (status) }
                p { (heading) }
                @if !detail.is_empty() {
                    div class="notice error" { code { (detail) } }
                }
                p { a href="/" { "← Back to the map" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
