use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{data_definitions::theme::Theme, routes::Route};

/// Free-text search over excursions. Submitting navigates, so the search
/// text lives in the url and survives reloads.
#[component]
pub fn ExcursionSearchBar(original_search: ReadSignal<String>) -> Element {
    let theme = use_context::<Theme>();
    let mut typed_search = use_signal(|| original_search.read().clone());
    // navigation does not reset local signals
    use_effect(move || {
        let new_search = original_search.read().clone();
        typed_search.set(new_search);
    });
    let search_has_changed = use_memo(move || typed_search.read().trim() != original_search.read().as_str());
    let search_button_color = use_memo(move || if search_has_changed() { theme.accent_color } else { theme.muted_text_color });
    let trigger_search = move |_: ()| {
        let search = typed_search.read().clone();
        dioxus::logger::tracing::info!("searching excursions for {search:?}");
        navigator().push(Route::top_excursions(&search));
    };
    let search_oninput = move |event: Event<FormData>| {
        typed_search.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };

    rsx! {
        div {
            id: "x-excursion-search-box",
            role: "search",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                background-color: {theme.surface_color};
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                max-width: 500px;
                margin: 0 16px 16px 16px;
                border: 1px solid rgba(101, 101, 101, 0.8);
            ",
            button {
                r#type: "button",
                aria_label: "Search",
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: {search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search excursions",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: {theme.text_color};
                    font-size: 16px;
                    font-family: {theme.font_family};
                ",
                value: "{typed_search}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
