pub mod html;

// Normal HTML response
pub use html::html_response;
