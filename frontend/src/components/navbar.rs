//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExplore, MdHome};
use dioxus_free_icons::icons::md_image_icons::MdLandscape;
use dioxus_free_icons::Icon;

use common::tours_query::TourType;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::theme::Theme;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            nav {
                id: "x-nav-topbar",
                style: "
                    position: fixed;
                    top: 0px;
                    left: 0px;
                    right: 0px;
                    z-index: 100;
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 64px;
                    padding: 0 20px;
                    background-color: {theme.surface_color};
                    box-shadow: 0 2px 10px rgba(0,0,0,0.08);
                ",
                Link {
                    to: Route::HomePage {},
                    class: "x-nav-link",
                    span {
                        style: "font-size: 22px; font-weight: 600; color: {theme.accent_color};",
                        "Tours & Excursions"
                    }
                }
                div { style: "flex-grow:1;" }
                NavbarLink { to: Route::HomePage {}, label: "Home".to_string(), icon: MdHome }
                NavbarLink { to: Route::top_excursions(""), label: "Top Excursions".to_string(), icon: MdExplore }
                NavbarLink { to: Route::ToursPage { tour_type: TourType::Package }, label: "Tour Packages".to_string(), icon: MdLandscape }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; padding-top: 64px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLink<I: dioxus_free_icons::IconShape + 'static + Clone + PartialEq>(to: Route, label: String, icon: I) -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        Link {
            to,
            class: "x-nav-link",
            Icon { icon, style: "width: 20px; height: 20px; color: {theme.accent_color};" }
            span { style: "color: {theme.text_color}; font-size: 15px;", "{label}" }
        }
    }
}
