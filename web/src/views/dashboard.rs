use api::ApiClient;
use dioxus::prelude::*;
use secrecy::SecretString;
use types::{DashboardModel, FetchError, SessionStore};
use ui::format::{format_currency, format_currency_fixed};
use ui::{
    BarChart, ChartCard, LineChart, PieChart, StatCard, SummaryItem, TopProductPanel, ValueFormat,
};

use crate::Route;
use crate::request::{RequestTracker, Ticket};

mod series;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardModel),
    Failed(String),
}

impl From<Result<DashboardModel, FetchError>> for DashboardState {
    fn from(result: Result<DashboardModel, FetchError>) -> Self {
        match result {
            Ok(model) => DashboardState::Ready(model),
            Err(error) => DashboardState::Failed(error.message),
        }
    }
}

/// Dashboard state plus the ticket bookkeeping that keeps a slow response
/// from overwriting a newer one.
#[derive(Debug, Default)]
struct DashboardLoader {
    state: DashboardState,
    tracker: RequestTracker,
}

impl DashboardLoader {
    /// Starts a fetch and shows the busy indicator. `None` when the session
    /// has no token to fetch with.
    fn begin(&mut self, session: &SessionStore) -> Option<(SecretString, Ticket)> {
        let Some(token) = session.token() else {
            tracing::debug!("session cleared before dashboard fetch");
            return None;
        };

        self.state = DashboardState::Loading;
        Some((token, self.tracker.begin()))
    }

    fn finish(&mut self, ticket: Ticket, result: Result<DashboardModel, FetchError>) {
        if self.tracker.is_current(ticket) {
            self.state = result.into();
        } else {
            tracing::debug!("discarding stale dashboard response");
        }
    }
}

fn sign_out(session: &SessionStore) -> Route {
    session.clear();
    tracing::info!("logged out");
    Route::Login {}
}

#[component]
pub fn Dashboard() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_context::<SessionStore>();
    let nav = use_navigator();

    let mut loader = use_signal(DashboardLoader::default);

    let load = {
        let session = session.clone();
        move || {
            let Some((token, ticket)) = loader.write().begin(&session) else {
                nav.replace(Route::Login {});
                return;
            };

            let client = client.clone();
            spawn(async move {
                let result = client.fetch_dashboard(&token).await;
                loader.write().finish(ticket, result);
            });
        }
    };

    // Fetch once on mount
    use_effect({
        let mut load = load.clone();
        move || load()
    });

    let state = loader.read().state.clone();
    let user_label = session.user_label().unwrap_or_else(|| "Admin".to_string());
    let mut retry = load;

    rsx! {
        DashboardView {
            state,
            user_label,
            on_retry: move |_| retry(),
            on_logout: move |_| {
                nav.push(sign_out(&session));
            },
        }
    }
}

#[component]
fn DashboardView(
    state: DashboardState,
    user_label: String,
    on_retry: EventHandler<MouseEvent>,
    on_logout: EventHandler<MouseEvent>,
) -> Element {
    match state {
        DashboardState::Loading => rsx! {
            div { class: "loading-container",
                div { class: "spinner" }
                p { "Cargando dashboard..." }
            }
        },
        DashboardState::Failed(message) => rsx! {
            div { class: "error-container",
                h2 { "❌ Error" }
                p { "{message}" }
                button { onclick: move |evt| on_retry.call(evt), "Reintentar" }
            }
        },
        DashboardState::Ready(model) => rsx! {
            div { class: "dashboard-container",
                div { class: "dashboard-header",
                    h1 { class: "dashboard-title", "📊 Dashboard de Analytics" }
                    div { class: "user-menu",
                        span { class: "user-email", "👤 {user_label}" }
                        button {
                            class: "logout-button",
                            onclick: move |evt| on_logout.call(evt),
                            "Cerrar Sesión"
                        }
                    }
                }
                DashboardBody { model }
            }
        },
    }
}

#[component]
fn DashboardBody(model: DashboardModel) -> Element {
    let sales = &model.sales;
    let subscriptions = &model.subscriptions;
    let today = &model.today_summary;

    rsx! {
        div { class: "stats-cards",
            StatCard {
                icon: "💰",
                title: "Ingresos",
                value: format_currency(sales.total_sales),
                caption: "Total de ventas",
                variant: "revenue",
            }
            StatCard {
                icon: "🛒",
                title: "Ventas",
                value: sales.total_orders.to_string(),
                caption: "Pedidos totales",
                variant: "orders",
            }
            StatCard {
                icon: "👥",
                title: "Suscriptores Activos",
                value: subscriptions.active_subscriptions.to_string(),
                caption: format!("De {} totales", subscriptions.total_subscriptions),
                variant: "subscribers",
            }
            StatCard {
                icon: "📦",
                title: "Productos",
                value: model.total_products.to_string(),
                caption: format!("{} con stock bajo", model.low_stock_products),
                variant: "products",
            }
        }

        if let Some(product) = model.top_product.clone() {
            TopProductPanel { product }
        }

        div { class: "today-summary",
            h2 { "📊 Resumen de Hoy" }
            div { class: "summary-grid",
                SummaryItem { label: "Ventas Totales", value: format_currency_fixed(today.total_sales) }
                SummaryItem { label: "Pedidos Totales", value: today.total_orders.to_string() }
                SummaryItem { label: "Productos Vendidos", value: today.total_products_sold.to_string() }
                SummaryItem { label: "Nuevos Suscriptores", value: today.new_subscriptions.to_string() }
            }
        }

        div { class: "charts-grid",
            ChartCard { title: "📈 Ventas Mensuales",
                BarChart {
                    data: series::monthly_sales(&model),
                    series: "Ventas ($)",
                    color: "#8884d8",
                    format: ValueFormat::Currency,
                }
            }
            ChartCard { title: "👥 Nuevos Suscriptores",
                LineChart {
                    data: series::new_subscribers(&model),
                    series: "Nuevos Suscriptores",
                    color: "#82ca9d",
                }
            }
            ChartCard { title: "🎯 Categorías Top",
                PieChart {
                    slices: series::category_slices(&model),
                    format: ValueFormat::Currency,
                }
            }
            ChartCard { title: "✅ Suscriptores Activos",
                LineChart {
                    data: series::active_subscribers(&model),
                    series: "Suscriptores Activos",
                    color: "#0088FE",
                }
            }
            ChartCard { title: "🔥 Productos Más Vendidos", full_width: true,
                BarChart {
                    data: series::top_products(&model),
                    series: "Unidades Vendidas",
                    color: "#FF8042",
                    horizontal: true,
                }
            }
        }
    }
}
