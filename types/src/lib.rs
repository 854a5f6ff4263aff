mod auth;
pub mod dashboard;
mod error;
mod session;

pub use auth::{LoginCredentials, LoginResponse};
pub use dashboard::DashboardModel;
pub use error::{
    AuthError, DASHBOARD_FAILED_MESSAGE, FetchError, LOGIN_FAILED_MESSAGE, StorageError,
};
pub use session::{
    ACCESS_TOKEN_KEY, MemoryStorage, SessionStorage, SessionStore, USER_EMAIL_KEY,
};

pub(crate) use session::secret_string;
