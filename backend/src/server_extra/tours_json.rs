use axum::{Json, body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use common::tours_query::{TourType, ToursQuery};
use tracing::info;

use crate::api::tours::list_tours;

/// `GET /_api/tours/{tour_type}`: the fetched listing as raw JSON.
pub async fn tours_json(Path(tour_type): Path<String>) -> Response {
    info!("Serving tours json: {}", tour_type);
    let tour_type = match tour_type.parse::<TourType>() {
        Ok(t) => t,
        Err(e) => return (StatusCode::BAD_REQUEST, Body::from(e.to_string())).into_response(),
    };
    match list_tours(ToursQuery::new(tour_type)).await {
        Ok(tours) => Json(tours).into_response(),
        Err(e) => {
            tracing::error!("tours_json: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
