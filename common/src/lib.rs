//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_labels;
pub mod filter_state;
pub mod filter_view;
pub mod tour;
pub mod tours_query;
