pub mod distance;
pub mod filters;
pub mod listing;
pub mod markers;
pub mod places;
