use common::tours_query::{TourType, ToursQuery};
use dioxus::prelude::*;

use crate::components::tour_components::{excursion_search_bar::ExcursionSearchBar, tours_listing::ToursListing};

/// Top excursions page, optionally narrowed by the `?search=` text.
#[component]
pub fn TopExcursionsPage(search: String) -> Element {
    let query = ToursQuery::new(TourType::Excursion).with_search(&search);

    rsx! {
        Title { "Tours & Excursions - Top Excursions" }
        div {
            id: "x-top-excursions-page",
            style: "padding-top: 48px;",
            ExcursionSearchBar { original_search: search.clone() }
            ToursListing {
                query,
                heading: "Tours and Tickets to Experience Giza Pyramids".to_string(),
            }
        }
    }
}
