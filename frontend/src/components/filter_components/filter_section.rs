use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandLess, MdExpandMore}};

/// Collapsible block with a clickable title row.
#[component]
pub fn FilterSection(title: String, #[props(default)] default_open: bool, children: Element) -> Element {
    let mut is_open = use_signal(move || default_open);
    rsx! {
        div {
            class: "x-filter-section",
            style: "border-bottom: 1px solid #E5E7EB; padding: 12px 0;",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let open = *is_open.read();
                    is_open.set(!open);
                },
                h3 { style: "font-size: 17px; font-weight: 500;", "{title}" }
                if is_open() {
                    Icon { icon: MdExpandLess, style: "width: 24px; height: 24px;" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 24px; height: 24px;" }
                }
            }
            if is_open() {
                div { style: "padding-top: 10px;", {children} }
            }
        }
    }
}
