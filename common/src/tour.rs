//! Tour listing records as served by the tours API.

use serde::{Deserialize, Serialize};

use crate::tours_query::TourType;

/// One bookable tour or excursion.
///
/// Decoded leniently: unknown fields are ignored and missing ones take their
/// defaults, since the listing only needs a handful of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TourPackage {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub tour_type: TourType,
    pub price: f64,
    pub old_price: Option<f64>,
    pub rating: Option<f32>,
    pub reviews_count: u64,
    pub duration: Option<String>,
    pub image_url: Option<String>,
}

impl TourPackage {
    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}

/// Envelope of the `tours` endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TourListResponse {
    pub data: Vec<TourPackage>,
}
