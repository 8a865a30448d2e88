use crate::error::LoginError;
use common::auth::{ACCESS_TOKEN_KEY, ROLE_KEY};
use common::LoginResponse;
use gloo_storage::{LocalStorage, Storage};

/// Durable key-value storage the destination pages read the session from.
pub trait SessionStore {
    fn put(&self, key: &str, value: &str) -> Result<(), LoginError>;
}

/// Writes the token and role handed out by a successful login.
pub fn persist(store: &impl SessionStore, session: &LoginResponse) -> Result<(), LoginError> {
    store.put(ACCESS_TOKEN_KEY, &session.access_token)?;
    store.put(ROLE_KEY, &session.role)
}

/// `window.localStorage`. Values go in raw rather than JSON-encoded so the
/// other pages can use a plain `getItem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn put(&self, key: &str, value: &str) -> Result<(), LoginError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| LoginError::Storage(format!("{:?}", e)))
    }
}
