//! Listing endpoint backing the excursion and package pages.

use common::{tour::{TourListResponse, TourPackage}, tours_query::ToursQuery};

use crate::http_utils::tours_api_client::{fetch_data_from, get_tours_api_url};

pub async fn list_tours(query: ToursQuery) -> anyhow::Result<Vec<TourPackage>> {
    list_tours_from(&get_tours_api_url(), query).await
}

pub async fn list_tours_from(base_url: &str, query: ToursQuery) -> anyhow::Result<Vec<TourPackage>> {
    let response = fetch_data_from::<TourListResponse>(base_url, &query.resource_query()).await?;
    tracing::info!("list_tours: {} {} tours", response.data.len(), query.tour_type);
    Ok(response.data)
}
