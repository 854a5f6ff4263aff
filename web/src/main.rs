use api::ApiClient;
use dioxus::prelude::*;

mod config;
mod guard;
mod request;
mod storage;
mod views;

#[cfg(test)]
mod fixtures;

use config::Config;
use guard::SessionGuard;
use views::{Dashboard, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[layout(SessionGuard)]
        #[route("/admin/dashboard")]
        Dashboard {},
}

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().map_err(|error| {
            tracing::error!(?error, "invalid configuration");
            format!("{error:#}")
        })
    });

    let body = match config {
        Ok(config) => rsx! { Shell { config } },
        Err(message) => rsx! {
            div { class: "error-container",
                h2 { "❌ Configuración inválida" }
                p { "{message}" }
            }
        },
    };

    rsx! {
        document::Title { "BeFit · Panel de Administración" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        {body}
    }
}

/// Provides the backend client and session store to every view.
#[component]
fn Shell(config: Config) -> Element {
    use_context_provider(|| {
        tracing::info!(api = %config.api_base_url, "starting admin panel");
        ApiClient::new(config.api_base_url.clone())
    });
    use_context_provider(storage::session_store);

    rsx! { Router::<Route> {} }
}
