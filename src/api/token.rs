//! Admin token persistence.
//!
//! In the browser the token lives in `localStorage` under [`TOKEN_STORAGE_KEY`] so a reload keeps
//! the admin signed in. Native builds keep it in memory for the lifetime of the process.

use std::{cell::RefCell, rc::Rc};

/// Storage key the admin token is kept under
pub const TOKEN_STORAGE_KEY: &str = "adminToken";

/// Where the admin bearer token is kept between requests
pub trait TokenStore {
    /// The stored token, `None` when absent or empty
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by a shared in-memory slot
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        store.set(&token.into());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .filter(|token| !token.is_empty())
            .cloned()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use dioxus_logger::tracing;

    use super::{TokenStore, TOKEN_STORAGE_KEY};

    /// Token store backed by the browser's `localStorage`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorageTokenStore;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    impl TokenStore for LocalStorageTokenStore {
        fn get(&self) -> Option<String> {
            storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }

        fn set(&self, token: &str) {
            let stored = storage().map(|storage| storage.set_item(TOKEN_STORAGE_KEY, token).is_ok());

            if stored != Some(true) {
                tracing::warn!("Failed to persist admin token to localStorage");
            }
        }

        fn clear(&self) {
            let removed = storage().map(|storage| storage.remove_item(TOKEN_STORAGE_KEY).is_ok());

            if removed != Some(true) {
                tracing::warn!("Failed to remove admin token from localStorage");
            }
        }
    }
}

/// Token store for the current target
pub fn platform_token_store() -> Rc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageTokenStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryTokenStore::default())
    }
}
