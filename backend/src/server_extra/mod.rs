//! Plain axum routes mounted next to the app router.

pub mod tours_json;
