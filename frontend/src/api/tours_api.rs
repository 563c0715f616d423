//! Client API calls for the tour listings.

use common::{tour::TourPackage, tours_query::ToursQuery};
use dioxus::prelude::*;


#[server]
pub async fn list_tours(query: ToursQuery) -> Result<Vec<TourPackage>, ServerFnError> {
    let x = backend::api::tours::list_tours(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}
