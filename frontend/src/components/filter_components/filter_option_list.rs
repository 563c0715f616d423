use common::{filter_state::FilterCommand, filter_view::FilterOption};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked}};

use crate::data_definitions::theme::Theme;

/// Look of the selection marker. Purely visual: what a click does is decided
/// by the option's command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionIndicator {
    Radio,
    Checkbox,
}

#[component]
pub fn FilterOptionList(options: Vec<FilterOption>, indicator: OptionIndicator, dispatch: Callback<FilterCommand>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            for option in options {
                FilterOptionRow { key: "{option.label}", option, indicator, dispatch }
            }
        }
    }
}

#[component]
fn FilterOptionRow(option: FilterOption, indicator: OptionIndicator, dispatch: Callback<FilterCommand>) -> Element {
    let theme = use_context::<Theme>();
    let command = option.on_click;
    let role = if indicator == OptionIndicator::Radio { "radio" } else { "checkbox" };
    let marker_style = format!("width: 24px; height: 24px; flex-shrink: 0; color: {};", theme.accent_color);
    rsx! {
        div {
            class: "x-filter-option-row",
            role,
            aria_checked: "{option.selected}",
            onclick: move |_| dispatch(command),

            if indicator == OptionIndicator::Radio {
                if option.selected {
                    Icon { icon: MdRadioButtonChecked, style: marker_style.clone() }
                } else {
                    Icon { icon: MdRadioButtonUnchecked, style: marker_style.clone() }
                }
            } else {
                if option.selected {
                    Icon { icon: MdCheckBox, style: marker_style.clone() }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: marker_style.clone() }
                }
            }
            span { style: "margin-left: 8px;", "{option.label}" }
        }
    }
}
