use common::tours_query::TourType;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdExplore;
use dioxus_free_icons::icons::md_image_icons::MdLandscape;
use dioxus_free_icons::{Icon, IconShape};

use crate::data_definitions::theme::Theme;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        Title { "Tours & Excursions - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",
            div {
                style: "font-size: 40px; font-weight: 600; letter-spacing: -0.02em;",
                "Discover Egypt "
                span { style: "color: {theme.accent_color};", "your way" }
            }
            div {
                style: "font-size: 20px; line-height: 1.6; max-width: 640px; color: {theme.muted_text_color};",
                "Day trips to the pyramids, Nile cruises and multi-day packages, picked by people who live there."
            }
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    margin-top: 10px;
                ",
                HomeCard {
                    to: Route::top_excursions(""),
                    title: "Top Excursions".to_string(),
                    description: "Tours and tickets for the sights you came for, from half-day trips to full days out.".to_string(),
                    icon: MdExplore,
                }
                HomeCard {
                    to: Route::ToursPage { tour_type: TourType::Package },
                    title: "Tour Packages".to_string(),
                    description: "Multi-day itineraries with accommodation, transfers and guides included.".to_string(),
                    icon: MdLandscape,
                }
            }
        }
    }
}

#[component]
fn HomeCard<I: IconShape + 'static + Clone + PartialEq>(to: Route, title: String, description: String, icon: I) -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        Link {
            to,
            class: "x-home-card",
            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 26px; font-weight: 500; color: {theme.accent_color};",
                Icon { icon, style: "width: 28px; height: 28px;" }
                "{title}"
            }
            div {
                style: "font-size: 17px; line-height: 1.5; color: {theme.text_color};",
                "{description}"
            }
        }
    }
}
