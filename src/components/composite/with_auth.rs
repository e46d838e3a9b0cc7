//! WithAuth Wrapper
//!
//! Wraps any component so it only renders for an authenticated user. The
//! token is checked on every render; a missing or empty token shows a login
//! message instead of the wrapped content.

use std::rc::Rc;

use crate::app::{div, Component, Node, Scope};
use crate::constants::{AUTH_TOKEN_KEY, LOGIN_MESSAGE};
use crate::error::Result;
use crate::services::TokenStore;

/// Authentication guard around a component
pub struct WithAuth<C: Component> {
    inner: C,
    store: Rc<dyn TokenStore>,
    token_key: String,
}

/// Guard `component` behind the token in `store`
pub fn with_auth<C: Component>(component: C, store: impl TokenStore + 'static) -> WithAuth<C> {
    WithAuth {
        inner: component,
        store: Rc::new(store),
        token_key: AUTH_TOKEN_KEY.to_string(),
    }
}

impl<C: Component> WithAuth<C> {
    /// Check a different storage key
    pub fn token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Whether the store currently holds a non-empty token
    pub fn is_authenticated(&self) -> bool {
        self.store
            .get(&self.token_key)
            .is_some_and(|token| !token.is_empty())
    }

    /// The wrapped component
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Component> Component for WithAuth<C> {
    fn render(&self, scope: &Scope) -> Result<Node> {
        if !self.is_authenticated() {
            tracing::debug!(key = %self.token_key, "guarded content hidden");
            return Ok(div().class("login-required").child(LOGIN_MESSAGE).into());
        }
        self.inner.render(scope)
    }
}
