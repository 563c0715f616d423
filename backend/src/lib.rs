//! Server side of the tours site: API client, listing endpoints, extra routes.

pub mod api;
pub mod http_utils;
pub mod server_extra;
