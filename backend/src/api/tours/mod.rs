//! Tour listing endpoints.

mod list_tours;
pub use list_tours::{list_tours, list_tours_from};
