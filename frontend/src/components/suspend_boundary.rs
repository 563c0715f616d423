//! Loading and failure wrapper for views that wait on the tours API.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;
use crate::data_definitions::theme::Theme;

/// Shows [`LoadingIndicator`] while the children are suspended on a fetch and
/// hands render failures to [`ComponentErrorBoundary`] with `on_retry`.
#[component]
pub fn SuspendWrapper(on_retry: Callback<()>, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_: SuspenseContext| rsx! { LoadingIndicator {} },
            ComponentErrorBoundary {
                on_retry,
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "color: {theme.muted_text_color}; text-align: center;",
            role: "status",
            "Loading tours..."
        }
    }
}
