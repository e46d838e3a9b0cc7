//! PointerTracker Component
//!
//! Tracks the pointer position over a full-height area and hands it to a
//! caller-supplied render callback, which decides what to show.

use crate::app::{div, Component, Node, Scope};
use crate::error::Result;
use crate::eventing::Position;
use crate::state::{RenderBinding, StateCell};

/// Render callback invoked with the latest pointer position
pub type RenderFn = Box<dyn Fn(Position) -> Node>;

/// Area that tracks the pointer and delegates rendering
pub struct PointerTracker {
    id: String,
    position: StateCell<Position>,
    render: RenderFn,
    binding: RenderBinding,
}

impl PointerTracker {
    /// Create a tracker; `render` decides what the area shows
    pub fn new(id: impl Into<String>, render: impl Fn(Position) -> Node + 'static) -> Self {
        Self {
            id: id.into(),
            position: StateCell::new(Position::default()),
            render: Box::new(render),
            binding: RenderBinding::new(),
        }
    }

    /// Last recorded pointer position
    pub fn position(&self) -> Position {
        self.position.get()
    }

    /// Handle to the position state
    pub fn state(&self) -> &StateCell<Position> {
        &self.position
    }
}

impl Component for PointerTracker {
    fn render(&self, scope: &Scope) -> Result<Node> {
        self.binding.bind(&self.position, scope.invalidation());

        let position = self.position.clone();
        Ok(div()
            .id(self.id.clone())
            .class("pointer-tracker")
            .attr("style", "height: 100vh")
            .on_pointer_move(move |p| position.set(p))
            .child((self.render)(self.position.get()))
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Element, Runtime};
    use crate::eventing::UiEvent;

    fn heading(p: Position) -> Node {
        Element::new("h1")
            .child(format!("Mouse position: ({}, {})", p.x, p.y))
            .into()
    }

    #[test]
    fn test_initial_position_is_origin() {
        let tracker = PointerTracker::new("area", heading);
        assert_eq!(tracker.position(), Position::new(0.0, 0.0));

        let rt = Runtime::mount(tracker).expect("mount");
        assert_eq!(rt.tree().text_content(), "Mouse position: (0, 0)");
    }

    #[test]
    fn test_pointer_move_rerenders_callback() {
        let tracker = PointerTracker::new("area", heading);
        let state = tracker.state().clone();
        let mut rt = Runtime::mount(tracker).expect("mount");

        assert!(rt.dispatch("area", UiEvent::pointer_move(12.0, 34.5)).expect("move"));
        assert_eq!(state.get(), Position::new(12.0, 34.5));
        assert_eq!(rt.tree().text_content(), "Mouse position: (12, 34.5)");
        assert_eq!(rt.render_count(), 2);
    }

    #[test]
    fn test_callback_may_render_nothing() {
        let tracker = PointerTracker::new("area", |_| Node::Empty);
        let node = tracker.render(&Scope::detached()).expect("render");
        let area = node.as_element().expect("element");
        assert!(area.child_nodes().is_empty());
    }
}
