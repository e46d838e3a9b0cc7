//! Tabs Component
//!
//! Compound tabs: a [`Tabs`] group owns the active key and provides it to
//! every [`Tab`] and [`TabPanel`] rendered anywhere inside it. Tabs and
//! panels are not wired to each other; they only share the group's state.
//!
//! ```text
//! Tabs(default)
//! ├── TabList
//! │   ├── Tab(key) ── activate → select(key)
//! │   └── Tab(key)
//! └── TabPanels
//!     ├── TabPanel(key) ── renders only while key is active
//!     └── TabPanel(key)
//! ```
//!
//! The context is keyed by the key type, so a `Tab<String>` only sees a
//! `Tabs<String>`.

use uuid::Uuid;

use crate::app::{button, div, render_children, AnyComponent, Component, Node, Scope};
use crate::error::Result;
use crate::state::{RenderBinding, TabKey, TabsState};

/// Element id of the tab with `key` in `group`
pub fn tab_id<K: TabKey>(group: Uuid, key: &K) -> String {
    format!("tab-{group}-{key}")
}

/// Element id of the panel with `key` in `group`
pub fn tab_panel_id<K: TabKey>(group: Uuid, key: &K) -> String {
    format!("tab-panel-{group}-{key}")
}

/// Tab group: owns the active key and provides it to its subtree
pub struct Tabs<K: TabKey> {
    state: TabsState<K>,
    binding: RenderBinding,
    children: Vec<AnyComponent>,
}

impl<K: TabKey> Tabs<K> {
    /// Create a group whose initially active key is `default`
    pub fn new(default: K) -> Self {
        Self {
            state: TabsState::new(default),
            binding: RenderBinding::new(),
            children: Vec::new(),
        }
    }

    /// Add a child component
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Handle to the group's state
    ///
    /// Cloning it before mounting lets callers observe or drive the group.
    pub fn state(&self) -> &TabsState<K> {
        &self.state
    }

    /// The currently active key
    pub fn active(&self) -> K {
        self.state.active()
    }

    /// Make `key` active
    pub fn select(&self, key: K) {
        self.state.select(key);
    }

    /// Build a complete tab list and panel set from `(key, label, content)` rows
    pub fn with_items<I, L, C>(default: K, items: I) -> Self
    where
        I: IntoIterator<Item = (K, L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        let mut list = TabList::new();
        let mut panels = TabPanels::new();
        for (key, label, content) in items {
            let label: String = label.into();
            let content: String = content.into();
            list = list.child(Tab::new(key.clone(), label));
            panels = panels.child(TabPanel::new(key, content));
        }
        Self::new(default).child(list).child(panels)
    }
}

impl<K: TabKey> Component for Tabs<K> {
    fn render(&self, scope: &Scope) -> Result<Node> {
        self.binding.bind(self.state.cell(), scope.invalidation());

        let inner = scope.provide(self.state.clone());
        let children = render_children(&self.children, &inner)?;

        Ok(div()
            .class("tabs")
            .attr("data-group", self.state.group().to_string())
            .children(children)
            .into())
    }
}

/// Layout wrapper for tabs
#[derive(Default)]
pub struct TabList {
    children: Vec<AnyComponent>,
}

impl TabList {
    /// Create an empty tab list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child component
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Component for TabList {
    fn render(&self, scope: &Scope) -> Result<Node> {
        Ok(div()
            .class("tab-list")
            .attr("role", "tablist")
            .children(render_children(&self.children, scope)?)
            .into())
    }
}

/// Selectable tab; activating it selects its key
pub struct Tab<K: TabKey> {
    key: K,
    label: Vec<AnyComponent>,
}

impl<K: TabKey> Tab<K> {
    /// Create a tab with a label
    pub fn new(key: K, label: impl Component + 'static) -> Self {
        Self {
            key,
            label: vec![Box::new(label)],
        }
    }

    /// Append more label content
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.label.push(Box::new(child));
        self
    }

    /// Key this tab selects
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: TabKey> Component for Tab<K> {
    fn render(&self, scope: &Scope) -> Result<Node> {
        let state = scope.require::<TabsState<K>>("Tab", "Tabs")?;
        let is_active = state.is_active(&self.key);

        let key = self.key.clone();
        let on_select = state.clone();

        Ok(button()
            .id(tab_id(state.group(), &self.key))
            .class("tab")
            .class_if(is_active, "active")
            .attr("role", "tab")
            .attr("aria-selected", is_active.to_string())
            .attr("data-key", self.key.to_string())
            .on_activate(move || on_select.select(key.clone()))
            .children(render_children(&self.label, scope)?)
            .into())
    }
}

/// Layout wrapper for panels
#[derive(Default)]
pub struct TabPanels {
    children: Vec<AnyComponent>,
}

impl TabPanels {
    /// Create an empty panel set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child component
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Component for TabPanels {
    fn render(&self, scope: &Scope) -> Result<Node> {
        Ok(div()
            .class("tab-panels")
            .children(render_children(&self.children, scope)?)
            .into())
    }
}

/// Panel shown only while its key is active
pub struct TabPanel<K: TabKey> {
    key: K,
    children: Vec<AnyComponent>,
}

impl<K: TabKey> TabPanel<K> {
    /// Create a panel with body content
    pub fn new(key: K, content: impl Component + 'static) -> Self {
        Self {
            key,
            children: vec![Box::new(content)],
        }
    }

    /// Append more body content
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Key this panel belongs to
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: TabKey> Component for TabPanel<K> {
    fn render(&self, scope: &Scope) -> Result<Node> {
        let state = scope.require::<TabsState<K>>("TabPanel", "Tabs")?;
        if !state.is_active(&self.key) {
            return Ok(Node::Empty);
        }

        Ok(div()
            .id(tab_panel_id(state.group(), &self.key))
            .class("tab-panel")
            .attr("role", "tabpanel")
            .attr("data-key", self.key.to_string())
            .children(render_children(&self.children, scope)?)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn key(k: &str) -> String {
        k.to_string()
    }

    fn sample(default: &str) -> Tabs<String> {
        Tabs::new(key(default))
            .child(
                TabList::new()
                    .child(Tab::new(key("1"), "Tab 1"))
                    .child(Tab::new(key("2"), "Tab 2")),
            )
            .child(
                TabPanels::new()
                    .child(TabPanel::new(key("1"), "Content for Tab 1"))
                    .child(TabPanel::new(key("2"), "Content for Tab 2")),
            )
    }

    fn visible_panels(node: &Node) -> Vec<String> {
        node.find_all(|e| e.has_class("tab-panel"))
            .into_iter()
            .map(|e| e.text_content())
            .collect()
    }

    #[test]
    fn test_default_panel_only() {
        let tabs = sample("1");
        let node = tabs.render(&Scope::detached()).expect("render");
        assert_eq!(visible_panels(&node), vec!["Content for Tab 1"]);
    }

    #[test]
    fn test_unmatched_default_shows_nothing() {
        let tabs = sample("9");
        let node = tabs.render(&Scope::detached()).expect("render");
        assert!(visible_panels(&node).is_empty());
        assert!(node.find_all(|e| e.has_class("active")).is_empty());
    }

    #[test]
    fn test_active_flag_follows_selection() {
        let tabs = sample("1");
        tabs.select(key("2"));
        let node = tabs.render(&Scope::detached()).expect("render");

        let group = tabs.state().group();
        let tab1 = node.find(&tab_id(group, &key("1"))).expect("tab 1");
        let tab2 = node.find(&tab_id(group, &key("2"))).expect("tab 2");
        assert!(!tab1.has_class("active"));
        assert_eq!(tab1.get_attr("aria-selected"), Some("false"));
        assert!(tab2.has_class("active"));
        assert_eq!(tab2.get_attr("aria-selected"), Some("true"));
        assert_eq!(visible_panels(&node), vec!["Content for Tab 2"]);
    }

    #[test]
    fn test_tab_handler_selects_key() {
        let tabs = sample("1");
        let node = tabs.render(&Scope::detached()).expect("render");
        let tab2 = node.find(&tab_id(tabs.state().group(), &key("2"))).expect("tab 2");

        assert!(tab2.handle(&crate::eventing::UiEvent::Activate));
        assert_eq!(tabs.active(), "2");
    }

    #[test]
    fn test_tab_outside_group_is_misuse() {
        let err = Tab::new(key("1"), "Tab 1")
            .render(&Scope::detached())
            .expect_err("no group");
        assert!(matches!(err, Error::MissingContext { component: "Tab", context: "Tabs" }));
    }

    #[test]
    fn test_panel_outside_group_is_misuse() {
        let err = TabPanel::new(key("1"), "body")
            .render(&Scope::detached())
            .expect_err("no group");
        assert!(matches!(
            err,
            Error::MissingContext { component: "TabPanel", context: "Tabs" }
        ));
    }

    #[test]
    fn test_nested_group_shadows_outer() {
        let inner = Tabs::new(key("b"))
            .child(Tab::new(key("a"), "inner a"))
            .child(Tab::new(key("b"), "inner b"));
        let inner_group = inner.state().group();

        let outer = Tabs::new(key("a"))
            .child(Tab::new(key("a"), "outer a"))
            .child(TabPanel::new(key("a"), inner));
        let outer_group = outer.state().group();

        let node = outer.render(&Scope::detached()).expect("render");
        let outer_a = node.find(&tab_id(outer_group, &key("a"))).expect("outer a");
        let inner_a = node.find(&tab_id(inner_group, &key("a"))).expect("inner a");
        let inner_b = node.find(&tab_id(inner_group, &key("b"))).expect("inner b");

        assert!(outer_a.has_class("active"));
        assert!(!inner_a.has_class("active"));
        assert!(inner_b.has_class("active"));
    }

    #[test]
    fn test_with_items_builds_list_and_panels() {
        let tabs = Tabs::with_items(
            key("b"),
            vec![(key("a"), "A", "alpha"), (key("b"), "B", "beta")],
        );
        let node = tabs.render(&Scope::detached()).expect("render");
        assert_eq!(node.find_all(|e| e.has_class("tab")).len(), 2);
        assert_eq!(visible_panels(&node), vec!["beta"]);
    }

    #[test]
    fn test_render_binds_once() {
        let tabs = sample("1");
        let scope = Scope::detached();
        tabs.render(&scope).expect("render");
        tabs.render(&scope).expect("render");
        assert_eq!(tabs.state().cell().subscriber_count(), 1);
        tabs.select(key("2"));
        assert!(scope.invalidation().is_dirty());
    }
}
