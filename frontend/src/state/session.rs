use std::{cell::RefCell, rc::Rc};

use leptos::*;

use crate::{
    api::ApiClient,
    utils::storage::{self as storage_utils, StorageError},
};

pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Browser `localStorage`, under [`TOKEN_STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        storage_utils::read_item(TOKEN_STORAGE_KEY)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        storage_utils::write_item(TOKEN_STORAGE_KEY, token)
    }

    fn clear(&self) -> Result<(), StorageError> {
        storage_utils::remove_item(TOKEN_STORAGE_KEY)
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// The signed-in state of this browser tab.
///
/// Set on login, cleared on logout, read on every screen entry and every
/// request. A stale token is indistinguishable from a fresh one until the
/// server rejects it.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn browser() -> Self {
        Self::with_store(LocalStorageTokenStore)
    }

    pub fn in_memory() -> Self {
        Self::with_store(MemoryTokenStore::default())
    }

    pub fn with_store(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                log::warn!("Failed to read session token: {}", err);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        self.store.save(token)?;
        log::info!("Session started");
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear()?;
        log::info!("Session cleared");
        Ok(())
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::browser)
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

/// Provides one [`Session`] and an [`ApiClient`] bound to it.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = use_session();
    provide_context(session.clone());
    provide_context(ApiClient::new(session));
    view! { <>{children()}</> }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl TokenStore for FailingStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _token: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(TOKEN_STORAGE_KEY.into()))
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Remove(TOKEN_STORAGE_KEY.into()))
        }
    }

    #[test]
    fn sign_in_and_out_toggle_authentication() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.sign_in("jwt-token").unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-token"));

        session.sign_out().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn clones_share_the_same_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.sign_in("shared").unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let session = Session::with_store(MemoryTokenStore::with_token(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn unreadable_store_counts_as_signed_out() {
        let session = Session::with_store(FailingStore);
        assert!(session.token().is_none());
        assert_eq!(
            session.sign_in("t"),
            Err(StorageError::Write(TOKEN_STORAGE_KEY.into()))
        );
    }
}
