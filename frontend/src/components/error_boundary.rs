//! Error boundaries and the load-error display.

use dioxus::prelude::*;

use crate::data_definitions::theme::Theme;

/// Last-resort boundary around the router: a short apology, a way home, and
/// the raw error folded away for bug reports.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        ErrorBoundary {
            handle_error: move |error_context: ErrorContext| {
                rsx! {
                    div {
                        id: "x-global-error",
                        style: "display: flex; flex-direction: column; gap: 16px; padding: 40px; max-width: 720px;",
                        h1 {
                            style: "color: {theme.danger_color}; font-size: 32px; font-weight: 600;",
                            "Something went wrong on our side"
                        }
                        p {
                            style: "color: {theme.muted_text_color}; font-size: 18px;",
                            "The page could not be shown. Your filters were not saved."
                        }
                        // plain anchor: the App-level boundary sits outside the router
                        a {
                            href: "/",
                            class: "x-outline-button",
                            style: "color: {theme.accent_color}; border-color: {theme.accent_color}; align-self: flex-start; text-decoration: none;",
                            "Back to the home page"
                        }
                        details {
                            summary { style: "cursor: pointer; color: {theme.muted_text_color};", "Technical details ({boundary_name})" }
                            pre {
                                style: "color: {theme.text_color}; text-wrap: auto; margin-top: 8px;",
                                "{error_context:#?}"
                            }
                        }
                    }
                }
            },
            children
        }
    }
}

/// Boundary around a fetched view. "Try Again" clears the error and asks the
/// owner to load the data again.
#[component]
pub fn ComponentErrorBoundary(on_retry: Callback<()>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |error_context: ErrorContext| {
                let error_txt = match error_context.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        RetryButton {
                            on_retry: move |_| {
                                error_context.clear_errors();
                                on_retry(());
                            }
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn RetryButton(on_retry: Callback<()>) -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        button {
            class: "x-outline-button",
            style: "border-color: {theme.accent_color}; color: {theme.accent_color};",
            onclick: move |_| on_retry(()),
            "Try Again"
        }
    }
}

/// Shown in place of a view whose data could not be loaded.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    let theme = use_context::<Theme>();
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "24px",

            h2 {
                style: "color:{theme.danger_color}; font-size: 24px; margin: 5px;",
                "We couldn't load the tours",
            }

            pre {
                style: "color:{theme.muted_text_color}; padding: 10px; margin: 5px; text-wrap: auto; max-width: 600px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
