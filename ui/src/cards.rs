use dioxus::prelude::*;
use types::dashboard::TopProduct;

use crate::format::format_currency;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/120";

/// Picks the image to show: the product URL unless it is missing, blank, or
/// is the one that already failed to load.
pub fn image_source<'a>(url: Option<&'a str>, failed: Option<&str>) -> &'a str {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(u) if failed != Some(u) => u,
        _ => PLACEHOLDER_IMAGE,
    }
}

#[component]
pub fn StatCard(
    icon: String,
    title: String,
    value: String,
    caption: String,
    variant: String,
) -> Element {
    rsx! {
        div { class: "stat-card stat-card-{variant}",
            div { class: "stat-icon", "{icon}" }
            div { class: "stat-content",
                h3 { "{title}" }
                p { class: "stat-value", "{value}" }
                span { class: "stat-label", "{caption}" }
            }
        }
    }
}

#[component]
pub fn SummaryItem(label: String, value: String) -> Element {
    rsx! {
        div { class: "summary-item",
            span { class: "summary-label", "{label}" }
            span { class: "summary-value", "{value}" }
        }
    }
}

#[component]
pub fn TopProductPanel(product: TopProduct) -> Element {
    let mut failed_image = use_signal(|| None::<String>);

    let src = image_source(product.image_url.as_deref(), failed_image.read().as_deref())
        .to_string();
    let meta = [product.brand.as_deref(), product.category.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" • ");
    let revenue = format_currency(product.total_revenue);

    rsx! {
        div { class: "top-product-section",
            h2 { "🏆 Producto Top del Momento" }
            div { class: "top-product-card",
                img {
                    src: "{src}",
                    alt: "{product.name}",
                    onerror: {
                        let src = src.clone();
                        move |_| {
                            if src != PLACEHOLDER_IMAGE {
                                failed_image.set(Some(src.clone()));
                            }
                        }
                    },
                }
                div { class: "product-info",
                    h3 { "{product.name}" }
                    p { class: "product-meta", "{meta}" }
                    div { class: "product-stats",
                        span { class: "product-stat",
                            strong { "Vendidos:" }
                            " {product.total_sold}"
                        }
                        span { class: "product-stat",
                            strong { "Ingresos:" }
                            " {revenue}"
                        }
                    }
                }
            }
        }
    }
}
