//! TabsState - Active Tab Selection

use std::fmt::{Debug, Display};

use uuid::Uuid;

use super::cell::{StateCell, Subscription};

/// Key type usable to identify tabs
pub trait TabKey: Clone + Eq + Display + Debug + 'static {}

impl<K: Clone + Eq + Display + Debug + 'static> TabKey for K {}

/// Selection state owned by one tab group
///
/// Descendants receive a clone: they can read the active key and request a
/// new selection, but never write the cell directly.
#[derive(Debug)]
pub struct TabsState<K: TabKey> {
    /// Identity of the owning group
    group: Uuid,
    /// Currently active key
    active: StateCell<K>,
}

impl<K: TabKey> TabsState<K> {
    /// Create state for a new group, starting at `default`
    ///
    /// `default` is not checked against any tab key.
    pub fn new(default: K) -> Self {
        let group = Uuid::new_v4();
        tracing::debug!(%group, default = %default, "tabs state created");
        Self {
            group,
            active: StateCell::new(default),
        }
    }

    /// Identity of the owning group
    pub fn group(&self) -> Uuid {
        self.group
    }

    /// The currently active key
    pub fn active(&self) -> K {
        self.active.get()
    }

    /// Whether `key` is the active key
    pub fn is_active(&self, key: &K) -> bool {
        self.active.with(|active| active == key)
    }

    /// Make `key` active and notify every subscriber
    ///
    /// The key is written unconditionally, even when it equals the current
    /// one or matches no tab.
    pub fn select(&self, key: K) {
        tracing::debug!(group = %self.group, key = %key, "tab selected");
        self.active.set(key);
    }

    /// Run `callback` after every selection
    pub fn subscribe(&self, callback: impl Fn(&K) + 'static) -> Subscription {
        self.active.subscribe(callback)
    }

    /// The underlying cell, for binding to a render invalidation
    pub(crate) fn cell(&self) -> &StateCell<K> {
        &self.active
    }
}

impl<K: TabKey> Clone for TabsState<K> {
    fn clone(&self) -> Self {
        Self {
            group: self.group,
            active: self.active.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_default_is_active() {
        let state = TabsState::new("1".to_string());
        assert_eq!(state.active(), "1");
        assert!(state.is_active(&"1".to_string()));
        assert!(!state.is_active(&"2".to_string()));
    }

    #[test]
    fn test_select_is_shared_between_clones() {
        let state = TabsState::new(1u32);
        let handle = state.clone();
        handle.select(2);
        assert_eq!(state.active(), 2);
        assert_eq!(state.group(), handle.group());
    }

    #[test]
    fn test_repeated_select_notifies_each_time() {
        let state = TabsState::new("a");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            state.subscribe(move |k| seen.borrow_mut().push(*k))
        };

        state.select("b");
        state.select("b");
        state.select("zzz");

        assert_eq!(*seen.borrow(), vec!["b", "b", "zzz"]);
        assert_eq!(state.active(), "zzz");
    }

    #[test]
    fn test_groups_have_distinct_identity() {
        let a = TabsState::new(0u8);
        let b = TabsState::new(0u8);
        assert_ne!(a.group(), b.group());
    }
}
