use common::tour::TourPackage;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSchedule, md_communication_icons::MdLocationOn, md_toggle_icons::MdStar}};

use crate::data_definitions::theme::Theme;

#[component]
pub fn TourCard(tour: TourPackage) -> Element {
    let theme = use_context::<Theme>();
    let price = format_price(tour.price);
    let old_price = tour.old_price.filter(|_| tour.is_discounted()).map(format_price);

    rsx! {
        article {
            class: "x-tour-card",
            if let Some(image_url) = tour.image_url.clone() {
                img { class: "x-tour-card-image", src: "{image_url}", alt: "{tour.title}" }
            } else {
                div { class: "x-tour-card-image x-tour-card-image-placeholder" }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 6px; padding: 12px 14px 16px 14px;",
                if !tour.location.is_empty() {
                    div {
                        class: "x-tour-card-meta",
                        style: "color: {theme.muted_text_color};",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{tour.location}"
                    }
                }
                h3 { style: "font-size: 17px; font-weight: 600; line-height: 1.3;", "{tour.title}" }
                if let Some(duration) = tour.duration.clone() {
                    div {
                        class: "x-tour-card-meta",
                        style: "color: {theme.muted_text_color};",
                        Icon { icon: MdSchedule, style: "width: 16px; height: 16px;" }
                        "{duration}"
                    }
                }
                if let Some(rating) = tour.rating {
                    div {
                        class: "x-tour-card-meta",
                        Icon { icon: MdStar, style: "width: 16px; height: 16px; color: {theme.accent_color};" }
                        "{rating:.1}"
                        span { style: "color: {theme.muted_text_color};", "({tour.reviews_count} reviews)" }
                    }
                }
                div {
                    style: "display: flex; align-items: baseline; gap: 8px; margin-top: 4px;",
                    span { style: "color: {theme.muted_text_color}; font-size: 13px;", "From" }
                    if let Some(old_price) = old_price {
                        span { style: "color: {theme.danger_color}; text-decoration: line-through;", "${old_price}" }
                    }
                    span { style: "font-size: 19px; font-weight: 700;", "${price}" }
                }
            }
        }
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}
