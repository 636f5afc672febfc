pub mod error;
pub mod popup;
pub mod sidebar;

pub use error::html_error_response;
pub use popup::{apartment_popup, place_popup};
pub use sidebar::sidebar;
