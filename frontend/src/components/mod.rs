pub mod error_boundary;
pub mod filter_components;
pub mod navbar;
pub mod suspend_boundary;
pub mod tour_components;
