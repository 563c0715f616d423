//! The filter sheet itself.
//!
//! Holds no state of its own: it draws whatever [`FilterState`] it is handed
//! and turns every click into a [`FilterCommand`] for the owner. Closing it
//! (close icon, backdrop, "Apply Filters") only calls `on_dismiss`.

use common::{filter_state::{FilterCommand, FilterState}, filter_view::{FilterSidebarView, SheetAction, SheetEffect}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::{
    components::filter_components::{
        filter_option_list::{FilterOptionList, OptionIndicator},
        filter_section::FilterSection,
        price_range_control::PriceRangeControl,
    },
    data_definitions::theme::Theme,
};

#[component]
pub fn FilterSheet(filters: ReadSignal<FilterState>, dispatch: Callback<FilterCommand>, on_dismiss: Callback<()>) -> Element {
    let theme = use_context::<Theme>();
    let view = FilterSidebarView::from_state(&filters.read());
    let run = move |action: SheetAction| match action.effect() {
        SheetEffect::Dispatch(command) => dispatch(command),
        SheetEffect::Dismiss => on_dismiss(()),
    };

    rsx! {
        div {
            id: "x-filter-sheet-backdrop",
            class: "x-filter-sheet-backdrop",
            onclick: move |_| run(SheetAction::Backdrop),
        }
        div {
            id: "x-filter-sheet",
            class: "x-filter-sheet",
            style: "background-color: {theme.surface_color};",

            // CLOSE
            button {
                class: "x-icon-button",
                style: "position: absolute; top: 8px; right: 16px;",
                aria_label: "Close filters",
                onclick: move |_| run(SheetAction::CloseIcon),
                Icon { icon: MdClose, style: "width: 32px; height: 32px; color: {theme.danger_color};" }
            }

            // HEADER
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    justify-content: flex-start;
                    align-items: center;
                    gap: 12px;
                    margin-bottom: 16px;
                ",
                h2 { style: "font-size: 20px; font-weight: 500;", "Applied filters" }
                button {
                    class: "x-text-button",
                    style: "color: {theme.danger_color};",
                    onclick: move |_| run(SheetAction::ClearAll),
                    "Clear All"
                }
            }

            // SECTIONS
            div {
                style: "overflow-y: auto; flex-grow: 1;",
                FilterSection {
                    title: "Destinations".to_string(),
                    default_open: true,
                    FilterOptionList { options: view.destinations.clone(), indicator: OptionIndicator::Radio, dispatch }
                }
                FilterSection {
                    title: "Price".to_string(),
                    PriceRangeControl { price_range: view.price_range, bounds: view.price_bounds, dispatch }
                }
                FilterSection {
                    title: "Star rating".to_string(),
                    FilterOptionList { options: view.star_ratings.clone(), indicator: OptionIndicator::Checkbox, dispatch }
                }
                FilterSection {
                    title: "Amenities".to_string(),
                    FilterOptionList { options: view.amenities.clone(), indicator: OptionIndicator::Checkbox, dispatch }
                }
                FilterSection {
                    title: "Accommodation Type".to_string(),
                    FilterOptionList { options: view.accommodation_types.clone(), indicator: OptionIndicator::Checkbox, dispatch }
                }
            }

            // APPLY
            div {
                style: "margin-top: 16px;",
                button {
                    class: "x-apply-button",
                    style: "background: linear-gradient(90deg, {theme.accent_color} 0%, #C9974A 100%);",
                    onclick: move |_| run(SheetAction::ApplyFilters),
                    "Apply Filters"
                }
            }
        }
    }
}
