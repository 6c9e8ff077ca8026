//! Ownership of the bearer token.
//!
//! [`TokenVault`] is the only place the token lives in memory. Session actions
//! are its only writers and the API client reads it when building each
//! request, so the persisted copy and the in-memory copy cannot drift apart.

use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Failure reported by a persistent token backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("token storage unavailable: {0}")]
pub struct TokenStoreError(pub String);

/// Durable storage that outlives a page load.
pub trait TokenStore {
    fn read(&self) -> Result<Option<String>, TokenStoreError>;
    fn write(&self, token: &str) -> Result<(), TokenStoreError>;
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Browser `localStorage`, storing the token as a raw string.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Result<Option<String>, TokenStoreError> {
        LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|err| TokenStoreError(format!("{err:?}")))
    }

    fn write(&self, token: &str) -> Result<(), TokenStoreError> {
        LocalStorage::raw()
            .set_item(&self.key, token)
            .map_err(|err| TokenStoreError(format!("{err:?}")))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        LocalStorage::delete(&self.key);
        Ok(())
    }
}

/// Process-local store, used where no browser storage exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if a previous page load logged in.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    /// What a fresh page load would find.
    pub fn persisted(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Single owner of the current token and its persisted copy.
#[derive(Clone)]
pub struct TokenVault {
    store: Rc<dyn TokenStore>,
    current: Rc<RefCell<Option<String>>>,
}

impl TokenVault {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
            current: Rc::new(RefCell::new(None)),
        }
    }

    /// Loads the persisted token into memory and returns it.
    ///
    /// A storage failure is treated as "no token".
    pub fn hydrate(&self) -> Option<String> {
        let persisted = match self.store.read() {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                log::warn!("reading persisted token failed: {err}");
                None
            }
        };
        self.current.borrow_mut().clone_from(&persisted);
        persisted
    }

    /// Token to attach to outgoing requests.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Makes `token` current and persists it for later page loads.
    pub fn persist(&self, token: &str) {
        *self.current.borrow_mut() = Some(token.to_string());
        if let Err(err) = self.store.write(token) {
            log::warn!("persisting token failed: {err}");
        }
    }

    /// Forgets the token in memory and in storage.
    pub fn clear(&self) {
        self.current.borrow_mut().take();
        if let Err(err) = self.store.clear() {
            log::warn!("clearing persisted token failed: {err}");
        }
    }

    pub(crate) fn same_vault(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

impl fmt::Debug for TokenVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVault")
            .field("is_set", &self.is_set())
            .finish_non_exhaustive()
    }
}
