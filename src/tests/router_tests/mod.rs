mod error_tests;
mod map_tests;
