//! Listing block shared by the excursion and package pages.
//!
//! Owns the page's filter state and fetches the listing once, on the server,
//! before the first render.

use common::{tour::TourPackage, tours_query::ToursQuery};
use dioxus::prelude::*;

use crate::{
    api::tours_api::list_tours,
    components::{
        error_boundary::{ComponentErrorDisplay, RetryButton},
        filter_components::{applied_filters_strip::AppliedFiltersStrip, filter_sheet::FilterSheet},
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
        tour_components::tour_card::TourCard,
    },
    data_definitions::filter_control::use_filter_state,
};

#[component]
pub fn ToursListing(query: ReadSignal<ToursQuery>, heading: ReadSignal<String>) -> Element {
    let filter_control = use_filter_state();
    use_context_provider(move || filter_control);
    let mut is_filter_open = use_signal(|| false);
    // bumped by every "Try Again"; the fetch re-runs when it changes
    let mut load_attempt = use_signal(|| 0_u32);
    let retry_load = use_callback(move |_: ()| {
        dioxus::logger::tracing::info!("retrying tour listing load");
        *load_attempt.write() += 1;
    });

    rsx! {
        div {
            id: "x-tours-listing",
            style: "display: flex; flex-direction: column; width: 100%;",
            h2 {
                class: "x-listing-heading",
                "{heading}"
            }
            AppliedFiltersStrip { on_open: move |_| is_filter_open.set(true) }
            SuspendWrapper {
                on_retry: retry_load,
                TourResults { query, load_attempt, on_retry: retry_load }
            }

            if is_filter_open() {
                FilterSheet {
                    filters: filter_control.filters,
                    dispatch: filter_control.dispatch,
                    on_dismiss: move |_| is_filter_open.set(false),
                }
            }
        }
    }
}

#[component]
fn TourResults(query: ReadSignal<ToursQuery>, load_attempt: ReadSignal<u32>, on_retry: Callback<()>) -> Element {
    let tours = use_server_future(move || {
        let _attempt = load_attempt();
        list_tours(query.read().clone())
    })?;
    let tours: Option<Result<Vec<TourPackage>, ServerFnError>> = tours.cloned();
    let tours = match tours {
        Some(Err(e)) => {
            dioxus::logger::tracing::error!("tour listing failed to load: {e}");
            return rsx! {
                ComponentErrorDisplay {
                    error_txt: format!("{e}"),
                    RetryButton { on_retry }
                }
            };
        }
        Some(Ok(t)) => t,
        None => return rsx! { LoadingIndicator {} },
    };

    if tours.is_empty() {
        let empty_text = match query.read().search.as_deref() {
            Some(text) => format!("No tours match \"{text}\"."),
            None => "No tours available right now.".to_string(),
        };
        return rsx! {
            p { class: "x-empty-results", "{empty_text}" }
        };
    }

    rsx! {
        ul {
            id: "x-tour-results-grid",
            class: "x-tour-results-grid",
            for tour in tours {
                li {
                    key: "{tour.id}",
                    TourCard { tour: tour.clone() }
                }
            }
        }
    }
}
