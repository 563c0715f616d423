use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::theme::Theme;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let theme = use_context_provider(Theme::default);
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            id: "x-app-root",
            style: "font-family: {theme.font_family}; color: {theme.text_color}; height: 100%;",
            GlobalErrorBoundary {
                boundary_name: "App".to_string(),
                Router::<Route> {}
            }
        }
    }
}
