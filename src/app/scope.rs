//! Scope - Explicit Context Passing
//!
//! A scope is handed to every `render` call. Providers create a child scope
//! carrying their context; descendants look contexts up by type, walking
//! outwards so the nearest provider shadows any outer one.

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::state::Invalidation;

struct ScopeInner {
    parent: Option<Scope>,
    contexts: AHashMap<TypeId, Rc<dyn Any>>,
    invalidation: Invalidation,
    depth: usize,
}

/// Render scope: a chain of provided contexts plus the tree's invalidation flag
#[derive(Clone)]
pub struct Scope {
    inner: Rc<ScopeInner>,
}

impl Scope {
    /// Root scope for a tree driven by `invalidation`
    pub fn root(invalidation: Invalidation) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                parent: None,
                contexts: AHashMap::new(),
                invalidation,
                depth: 0,
            }),
        }
    }

    /// Root scope with its own flag, for rendering outside a runtime
    pub fn detached() -> Self {
        Self::root(Invalidation::new())
    }

    /// Child scope that provides `value` to everything rendered inside it
    pub fn provide<T: 'static>(&self, value: T) -> Scope {
        let mut contexts: AHashMap<TypeId, Rc<dyn Any>> = AHashMap::new();
        contexts.insert(TypeId::of::<T>(), Rc::new(value));
        Self {
            inner: Rc::new(ScopeInner {
                parent: Some(self.clone()),
                contexts,
                invalidation: self.inner.invalidation.clone(),
                depth: self.inner.depth + 1,
            }),
        }
    }

    /// Nearest context of type `T`, if any provider is in scope
    pub fn context<T: 'static>(&self) -> Option<Rc<T>> {
        let key = TypeId::of::<T>();
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(value) = current.inner.contexts.get(&key) {
                return value.clone().downcast::<T>().ok();
            }
            scope = current.inner.parent.as_ref();
        }
        None
    }

    /// Nearest context of type `T`, or the misuse error naming `component`
    pub fn require<T: 'static>(&self, component: &'static str, context: &'static str) -> Result<Rc<T>> {
        self.context::<T>().ok_or_else(|| {
            tracing::warn!(component, context, "context lookup outside provider");
            Error::MissingContext { component, context }
        })
    }

    /// Flag that state bound in this tree should mark on change
    pub fn invalidation(&self) -> &Invalidation {
        &self.inner.invalidation
    }

    /// Number of providers between this scope and the root
    pub fn depth(&self) -> usize {
        self.inner.depth
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.inner.depth)
            .field("contexts", &self.inner.contexts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Theme(&'static str);

    #[derive(Debug, PartialEq)]
    struct Locale(&'static str);

    #[test]
    fn test_lookup_walks_outwards() {
        let root = Scope::detached();
        let outer = root.provide(Theme("dark"));
        let inner = outer.provide(Locale("en"));

        assert_eq!(inner.context::<Theme>().as_deref(), Some(&Theme("dark")));
        assert_eq!(inner.context::<Locale>().as_deref(), Some(&Locale("en")));
        assert!(outer.context::<Locale>().is_none());
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn test_nearest_provider_shadows() {
        let root = Scope::detached();
        let outer = root.provide(Theme("dark"));
        let inner = outer.provide(Theme("light"));

        assert_eq!(inner.context::<Theme>().as_deref(), Some(&Theme("light")));
        assert_eq!(outer.context::<Theme>().as_deref(), Some(&Theme("dark")));
    }

    #[test]
    fn test_require_outside_provider_fails_every_time() {
        let root = Scope::detached();
        for _ in 0..3 {
            let err = root.require::<Theme>("Button", "Theme").expect_err("no provider");
            assert!(matches!(
                err,
                Error::MissingContext { component: "Button", context: "Theme" }
            ));
        }
    }

    #[test]
    fn test_children_share_invalidation() {
        let root = Scope::detached();
        let child = root.provide(Theme("dark"));
        child.invalidation().invalidate();
        assert!(root.invalidation().is_dirty());
    }
}
