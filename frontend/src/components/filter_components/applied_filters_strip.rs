use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_image_icons::MdTune};

use crate::data_definitions::{filter_control::FilterControl, theme::Theme};

/// "Filters (n)" opener followed by one chip per active selection.
#[component]
pub fn AppliedFiltersStrip(on_open: Callback<()>) -> Element {
    let theme = use_context::<Theme>();
    let filter_control = use_context::<FilterControl>();
    let filters = filter_control.filters.read();
    let active_count = filters.active_filter_count();
    let labels = filters.applied_filter_labels();

    rsx! {
        div {
            id: "x-applied-filters-strip",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                margin: 0 20px 16px 20px;
            ",
            button {
                class: "x-outline-button",
                style: "border-color: {theme.accent_color}; color: {theme.accent_color};",
                onclick: move |_| on_open(()),
                Icon { icon: MdTune, style: "width: 18px; height: 18px;" }
                if active_count > 0 {
                    "Filters ({active_count})"
                } else {
                    "Filters"
                }
            }
            for label in labels {
                span {
                    key: "{label}",
                    class: "x-filter-chip",
                    style: "border-color: {theme.accent_color};",
                    "{label}"
                }
            }
        }
    }
}
