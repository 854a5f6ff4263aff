use dioxus::prelude::*;
use types::SessionStore;

use crate::Route;

/// Outcome of a navigation to a protected route.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// A stored token is all it takes; whether the backend still accepts it is
/// found out by the first authenticated request.
pub fn authorize(session: &SessionStore) -> Access {
    match session.token() {
        Some(_) => Access::Granted,
        None => Access::Redirect(Route::Login {}),
    }
}

/// Layout wrapping every protected route.
#[component]
pub fn SessionGuard() -> Element {
    let session = use_context::<SessionStore>();

    match authorize(&session) {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::Redirect(to) => {
            tracing::debug!(?to, "no session token, redirecting");
            navigator().replace(to);
            rsx! {
                div { class: "loading-container", "Redirigiendo..." }
            }
        }
    }
}
