use api::ApiClient;
use dioxus::prelude::*;
use types::{AuthError, LoginCredentials, SessionStore};

use crate::Route;
use crate::request::RequestTracker;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl LoginStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, LoginStatus::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoginStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Exchange the credentials for a token and remember who logged in.
/// The store is only touched once the backend has accepted them.
pub async fn submit(
    client: &ApiClient,
    session: &SessionStore,
    credentials: LoginCredentials,
) -> Result<(), AuthError> {
    let response = client.login(&credentials).await?;
    session.set_session(&response.access_token, &credentials.email)?;

    tracing::info!(email = %credentials.email, "logged in");
    Ok(())
}

/// Where a finished attempt leaves the form, and where to go next.
fn settle(result: Result<(), AuthError>) -> (LoginStatus, Option<Route>) {
    match result {
        Ok(()) => (LoginStatus::Idle, Some(Route::Dashboard {})),
        Err(error) => (LoginStatus::Failed(error.message), None),
    }
}

#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_context::<SessionStore>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(LoginStatus::default);
    let mut tracker = use_signal(RequestTracker::default);

    let busy = status.read().is_busy();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let client = client.clone();
        let session = session.clone();
        let credentials = LoginCredentials::new(email(), password());
        let ticket = tracker.write().begin();
        status.set(LoginStatus::Submitting);

        spawn(async move {
            let result = submit(&client, &session, credentials).await;
            if !tracker.read().is_current(ticket) {
                return;
            }
            let (next, route) = settle(result);
            status.set(next);
            if let Some(route) = route {
                nav.push(route);
            }
        });
    };

    rsx! {
        div { class: "login-container",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { "🏋️ BeFit" }
                    p { "Panel de Administración" }
                }

                form { class: "login-form", onsubmit: on_submit,
                    if let Some(err) = status.read().error() {
                        div { class: "error-message", "❌ {err}" }
                    }

                    div { class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "admin@befit.com",
                            required: true,
                            disabled: busy,
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "password", "Contraseña" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            required: true,
                            disabled: busy,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    button { r#type: "submit", class: "login-button", disabled: busy,
                        if busy {
                            span { class: "spinner-small" }
                            "Iniciando sesión..."
                        } else {
                            "Iniciar Sesión"
                        }
                    }
                }

                div { class: "login-footer",
                    p { "¿Olvidaste tu contraseña?" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::LOGIN_PATH;
    use secrecy::{ExposeSecret, SecretString};
    use types::{LOGIN_FAILED_MESSAGE, MemoryStorage, SessionStorage, USER_EMAIL_KEY};
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn backend(response: ResponseTemplate) -> (MockServer, ApiClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(response)
            .mount(&server)
            .await;
        let client = ApiClient::new(Url::parse(&server.uri()).unwrap());
        (server, client)
    }

    #[test]
    fn status_flags() {
        assert!(!LoginStatus::Idle.is_busy());
        assert!(LoginStatus::Submitting.is_busy());
        assert_eq!(LoginStatus::Submitting.error(), None);

        let failed = LoginStatus::Failed("Credenciales inválidas".into());
        assert!(!failed.is_busy());
        assert_eq!(failed.error(), Some("Credenciales inválidas"));
    }

    #[tokio::test]
    async fn successful_login_stores_token_and_email() {
        let (_server, client) = backend(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "access_token": "tok-123" })),
        )
        .await;
        let session = SessionStore::new(MemoryStorage::new());

        submit(&client, &session, LoginCredentials::new("admin@befit.com", "pw"))
            .await
            .unwrap();

        assert_eq!(session.token().unwrap().expose_secret(), "tok-123");
        assert_eq!(session.user_label().as_deref(), Some("admin@befit.com"));
    }

    #[test]
    fn success_moves_to_dashboard() {
        let (status, route) = settle(Ok(()));

        assert_eq!(status, LoginStatus::Idle);
        assert_eq!(route, Some(Route::Dashboard {}));
        assert_eq!(route.unwrap().to_string(), "/admin/dashboard");
    }

    #[test]
    fn failure_stays_on_form_with_message() {
        let (status, route) = settle(Err(AuthError::new("Credenciales inválidas")));

        assert_eq!(status.error(), Some("Credenciales inválidas"));
        assert_eq!(route, None);
    }

    #[tokio::test]
    async fn rejected_login_leaves_store_untouched() {
        let (_server, client) = backend(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "detail": "Credenciales inválidas" })),
        )
        .await;
        let storage = MemoryStorage::new();
        let session = SessionStore::new(storage.clone());
        session
            .set_session(&SecretString::from("previous".to_string()), "old@befit.com")
            .unwrap();

        let err = submit(&client, &session, LoginCredentials::new("new@befit.com", "bad"))
            .await
            .unwrap_err();

        assert_eq!(err.message, "Credenciales inválidas");
        assert_eq!(session.token().unwrap().expose_secret(), "previous");
        assert_eq!(storage.get(USER_EMAIL_KEY).as_deref(), Some("old@befit.com"));
    }

    #[tokio::test]
    async fn rejection_without_detail_uses_fallback() {
        let (_server, client) = backend(ResponseTemplate::new(500)).await;
        let storage = MemoryStorage::new();
        let session = SessionStore::new(storage.clone());

        let err = submit(&client, &session, LoginCredentials::new("a@b.c", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.message, LOGIN_FAILED_MESSAGE);
        assert!(storage.is_empty());
    }
}
