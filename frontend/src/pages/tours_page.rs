use common::tours_query::{TourType, ToursQuery};
use dioxus::prelude::*;

use crate::components::tour_components::tours_listing::ToursListing;

/// Listing page for one tour type.
#[component]
pub fn ToursPage(tour_type: TourType) -> Element {
    rsx! {
        Title { "Tours & Excursions - {tour_type.display_name()}" }
        div {
            id: "x-tours-page",
            style: "padding-top: 24px;",
            // a new tour type is a new page view, with fresh filters
            ToursListing {
                key: "{tour_type}",
                query: ToursQuery::new(tour_type),
                heading: tour_type.display_name().to_string(),
            }
        }
    }
}
