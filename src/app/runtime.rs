//! Runtime - Mounted Component Tree
//!
//! Owns a root component and its latest rendered tree. Events are processed
//! one at a time; if a handler changed bound state, the tree is re-rendered
//! before `dispatch` returns. Changes made between events are rendered before
//! the next event is routed, so no event sees a stale tree.

use std::fmt;

use tracing::{debug, info, warn};

use super::component::Component;
use super::element::{Element, Node};
use super::scope::Scope;
use crate::error::{Error, Result};
use crate::eventing::UiEvent;
use crate::state::Invalidation;

/// A mounted root component
pub struct Runtime {
    root: Box<dyn Component>,
    invalidation: Invalidation,
    tree: Node,
    render_count: u64,
}

impl Runtime {
    /// Render `root` for the first time
    ///
    /// Fails if any component in the tree fails to render, e.g. a tab
    /// rendered outside its tab group.
    pub fn mount(root: impl Component + 'static) -> Result<Self> {
        let mut runtime = Self {
            root: Box::new(root),
            invalidation: Invalidation::new(),
            tree: Node::Empty,
            render_count: 0,
        };
        runtime.render()?;
        info!("component tree mounted");
        Ok(runtime)
    }

    /// Re-render the tree unconditionally
    pub fn render(&mut self) -> Result<()> {
        let scope = Scope::root(self.invalidation.clone());
        let tree = self.root.render(&scope)?;
        self.tree = tree;
        self.render_count += 1;
        self.invalidation.take();
        debug!(render = self.render_count, "tree rendered");
        Ok(())
    }

    /// Deliver `event` to the element with id `target`
    ///
    /// State changed outside a handler is rendered first, so the event is
    /// routed through the current tree. Returns whether a handler consumed
    /// the event.
    pub fn dispatch(&mut self, target: &str, event: UiEvent) -> Result<bool> {
        self.flush()?;

        let Some(element) = self.tree.find(target) else {
            warn!(id = target, event = event.kind(), "event target not found");
            return Err(Error::UnknownTarget {
                id: target.to_string(),
            });
        };

        let handled = element.handle(&event);
        debug!(id = target, event = event.kind(), handled, "event dispatched");

        self.flush()?;
        Ok(handled)
    }

    /// Re-render if bound state changed; the flag stays set if rendering fails
    fn flush(&mut self) -> Result<()> {
        if self.invalidation.is_dirty() {
            self.render()?;
        }
        Ok(())
    }

    /// Shorthand for dispatching [`UiEvent::Activate`]
    pub fn activate(&mut self, target: &str) -> Result<bool> {
        self.dispatch(target, UiEvent::Activate)
    }

    /// Latest rendered tree
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Markup of the latest rendered tree
    pub fn markup(&self) -> String {
        self.tree.to_markup()
    }

    /// Element with the given id in the latest tree
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.tree.find(id)
    }

    /// Whether bound state changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.invalidation.is_dirty()
    }

    /// Number of completed renders
    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("render_count", &self.render_count)
            .field("dirty", &self.is_dirty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::component::component_fn;
    use crate::app::element::button;
    use crate::state::{RenderBinding, StateCell};
    use std::rc::Rc;

    struct Counter {
        count: StateCell<u32>,
        binding: RenderBinding,
    }

    impl Component for Counter {
        fn render(&self, scope: &Scope) -> Result<Node> {
            self.binding.bind(&self.count, scope.invalidation());
            let count = self.count.clone();
            Ok(button()
                .id("inc")
                .on_activate(move || count.update(|c| *c += 1))
                .child(self.count.get().to_string())
                .into())
        }
    }

    #[test]
    fn test_state_change_rerenders_before_return() {
        let mut rt = Runtime::mount(Counter {
            count: StateCell::new(0),
            binding: RenderBinding::new(),
        })
        .expect("mount");
        assert_eq!(rt.markup(), "<button id=\"inc\">0</button>");

        assert!(rt.activate("inc").expect("dispatch"));
        assert!(!rt.is_dirty());
        assert_eq!(rt.markup(), "<button id=\"inc\">1</button>");
        assert_eq!(rt.render_count(), 2);
    }

    #[test]
    fn test_unhandled_event_does_not_rerender() {
        let mut rt = Runtime::mount(Counter {
            count: StateCell::new(0),
            binding: RenderBinding::new(),
        })
        .expect("mount");

        assert!(!rt.dispatch("inc", UiEvent::input("x")).expect("dispatch"));
        assert_eq!(rt.render_count(), 1);
    }

    #[test]
    fn test_state_set_between_events_renders_before_routing() {
        let count = StateCell::new(0);
        let mut rt = Runtime::mount(Counter {
            count: count.clone(),
            binding: RenderBinding::new(),
        })
        .expect("mount");

        count.set(5);
        assert!(rt.is_dirty());
        assert_eq!(rt.markup(), "<button id=\"inc\">0</button>");

        assert!(rt.activate("inc").expect("dispatch"));
        assert_eq!(count.get(), 6);
        assert_eq!(rt.markup(), "<button id=\"inc\">6</button>");
        assert_eq!(rt.render_count(), 3);
    }

    #[test]
    fn test_failed_rerender_keeps_tree_dirty() {
        let level = StateCell::new(0u8);
        let binding = RenderBinding::new();
        let root = {
            let level = level.clone();
            component_fn(move |scope| {
                binding.bind(&level, scope.invalidation());
                if level.get() > 0 {
                    scope.require::<Rc<u8>>("Gauge", "Meter")?;
                }
                let level = level.clone();
                Ok(button()
                    .id("raise")
                    .on_activate(move || level.set(1))
                    .into())
            })
        };
        let mut rt = Runtime::mount(root).expect("mount");

        let err = rt.activate("raise").expect_err("re-render fails");
        assert!(err.is_misuse());
        assert!(rt.is_dirty());
        assert_eq!(rt.render_count(), 1);

        // Every later event retries the pending render
        assert!(rt.activate("raise").is_err());
        assert!(rt.is_dirty());

        level.set(0);
        rt.render().expect("recovers");
        assert!(!rt.is_dirty());
        assert_eq!(rt.render_count(), 2);
    }

    #[test]
    fn test_unknown_target() {
        let mut rt = Runtime::mount("just text").expect("mount");
        let err = rt.activate("nope").expect_err("no such element");
        assert!(matches!(err, Error::UnknownTarget { ref id } if id == "nope"));
    }

    #[test]
    fn test_mount_propagates_render_errors() {
        let failing = component_fn(|scope| {
            scope.require::<Rc<u8>>("Gauge", "Meter").map(|_| Node::Empty)
        });
        let err = Runtime::mount(failing).expect_err("missing provider");
        assert!(err.is_misuse());
    }
}
