//! Listing fetch against an in-process tours API.

use std::collections::HashMap;

use axum::{Router, extract::{Path, Query}, http::StatusCode, routing::get};
use backend::{api::tours::list_tours_from, http_utils::tours_api_client::fetch_data_from, server_extra::tours_json::tours_json};
use common::tours_query::{TourType, ToursQuery};

const EXCURSIONS_PAYLOAD: &str = r#"{
    "data": [
        {"id": 1, "title": "Giza Pyramids & Sphinx", "type": "excursion", "location": "Giza", "price": 49, "old_price": 65, "rating": 4.9, "reviews_count": 1203, "duration": "5 hours"},
        {"id": 2, "title": "Egyptian Museum tour", "type": "excursion", "location": "Cairo", "price": 35}
    ],
    "meta": {"pagination": {"page": 1, "pageCount": 1}}
}"#;

const GIZA_SEARCH_PAYLOAD: &str = r#"{"data": [{"id": 1, "title": "Giza Pyramids & Sphinx", "type": "excursion", "price": 49}]}"#;

async fn tours_handler(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    match (params.get("type").map(String::as_str), params.get("search").map(String::as_str)) {
        (Some("excursion"), Some("Giza & Sphinx")) => (StatusCode::OK, GIZA_SEARCH_PAYLOAD.to_string()),
        (Some("excursion"), Some(_)) => (StatusCode::OK, r#"{"data": []}"#.to_string()),
        (Some("excursion"), None) => (StatusCode::OK, EXCURSIONS_PAYLOAD.to_string()),
        (Some("package"), _) => (StatusCode::OK, r#"{"data": []}"#.to_string()),
        _ => (StatusCode::BAD_REQUEST, "missing type".to_string()),
    }
}

async fn spawn_fixture_api() -> String {
    let app = Router::new()
        .route("/api/tours", get(tours_handler))
        .route("/api/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }))
        .route("/api/garbage", get(|| async { "<html>not json</html>" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn lists_excursions() {
    let base_url = spawn_fixture_api().await;
    let tours = list_tours_from(&base_url, ToursQuery::new(TourType::Excursion)).await.unwrap();
    assert_eq!(tours.len(), 2);
    assert_eq!(tours[0].title, "Giza Pyramids & Sphinx");
    assert_eq!(tours[0].reviews_count, 1203);
    assert_eq!(tours[1].location, "Cairo");
    assert_eq!(tours[1].duration, None);
}

#[tokio::test]
async fn search_text_reaches_the_api_decoded() {
    let base_url = spawn_fixture_api().await;
    let query = ToursQuery::new(TourType::Excursion).with_search(" Giza & Sphinx ");
    let tours = list_tours_from(&base_url, query).await.unwrap();
    assert_eq!(tours.len(), 1);
    assert_eq!(tours[0].title, "Giza Pyramids & Sphinx");

    let query = ToursQuery::new(TourType::Excursion).with_search("Luxor");
    let tours = list_tours_from(&base_url, query).await.unwrap();
    assert!(tours.is_empty());
}

#[tokio::test]
async fn empty_listing_is_not_an_error() {
    let base_url = spawn_fixture_api().await;
    let tours = list_tours_from(&format!("{}/", base_url), ToursQuery::new(TourType::Package)).await.unwrap();
    assert!(tours.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_as_load_error() {
    let base_url = spawn_fixture_api().await;
    let err = fetch_data_from::<serde_json::Value>(&base_url, "broken").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("upstream exploded"), "{message}");
}

#[tokio::test]
async fn malformed_payload_surfaces_as_load_error() {
    let base_url = spawn_fixture_api().await;
    let err = fetch_data_from::<serde_json::Value>(&base_url, "garbage").await.unwrap_err();
    assert!(err.to_string().starts_with("Malformed payload from"), "{err:#}");
}

#[tokio::test]
async fn unreachable_api_surfaces_as_load_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let result = list_tours_from(&format!("http://{}/api", addr), ToursQuery::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn json_route_rejects_unknown_tour_type() {
    let response = tours_json(Path("cruise".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
