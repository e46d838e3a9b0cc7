//! Token Store
//!
//! Read access to authentication tokens. Where tokens are persisted is up to
//! the host; [`MemoryTokenStore`] keeps them in process.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

/// Source of authentication tokens
pub trait TokenStore {
    /// Token stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// In-process token store; clones share the same entries
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Rc<RefCell<AHashMap<String, String>>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `token` under `key`
    pub fn set(&self, key: impl Into<String>, token: impl Into<String>) {
        let key = key.into();
        tracing::debug!(key = %key, "token stored");
        self.tokens.borrow_mut().insert(key, token.into());
    }

    /// Remove the token under `key`, returning it
    pub fn remove(&self, key: &str) -> Option<String> {
        tracing::debug!(key, "token removed");
        self.tokens.borrow_mut().remove(key)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.tokens.borrow().get(key).cloned()
    }
}
