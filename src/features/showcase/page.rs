//! Showcase Page
//!
//! One page combining every component: configured tabs, both input styles,
//! a pointer tracker and a guarded dashboard.

use crate::app::{div, render_children, AnyComponent, Component, Element, Node, Scope};
use crate::components::{with_auth, ControlledInput, PointerTracker, Tabs, UncontrolledInput};
use crate::domain::AppConfig;
use crate::error::Result;
use crate::eventing::Position;
use crate::services::MemoryTokenStore;
use crate::state::{StateCell, TabsState};

/// Element id of the controlled input
pub const SEARCH_INPUT_ID: &str = "search";
/// Element id of the uncontrolled input container
pub const NOTE_INPUT_ID: &str = "note";
/// Element id of the pointer tracking area
pub const POINTER_AREA_ID: &str = "pointer-area";

/// Handles kept by the controller after the page is mounted
#[derive(Debug, Clone)]
pub struct ShowcaseHandles {
    /// Tab group state
    pub tabs: TabsState<String>,
    /// Keys in display order
    pub keys: Vec<String>,
    /// Controlled input value
    pub search: StateCell<String>,
    /// Pointer position
    pub pointer: StateCell<Position>,
    /// Token store consulted by the guarded dashboard
    pub tokens: MemoryTokenStore,
    /// Storage key the dashboard checks
    pub token_key: String,
    /// Ids of the uncontrolled input's field and button
    pub note_field_id: String,
    pub note_show_id: String,
}

/// The showcase page component
pub struct ShowcasePage {
    sections: Vec<AnyComponent>,
}

impl ShowcasePage {
    /// Build the page from config, returning the handles needed to drive it
    pub fn build(config: &AppConfig) -> (Self, ShowcaseHandles) {
        let tabs = Tabs::with_items(
            config.tabs.default.clone(),
            config
                .tabs
                .items
                .iter()
                .map(|item| (item.key.clone(), item.label.clone(), item.content.clone())),
        );

        let search = ControlledInput::new(SEARCH_INPUT_ID).placeholder("Search");

        let note = UncontrolledInput::new(NOTE_INPUT_ID, |value| {
            tracing::info!(value, "note value shown");
        });

        let pointer = PointerTracker::new(POINTER_AREA_ID, |p| {
            Element::new("h1")
                .child(format!("Mouse position: ({}, {})", p.x, p.y))
                .into()
        });

        let tokens = MemoryTokenStore::new();
        if let Some(token) = &config.auth.token {
            tokens.set(config.auth.token_key.clone(), token.clone());
        }
        let dashboard = with_auth(
            Element::new("h1").child("Welcome to the Dashboard!"),
            tokens.clone(),
        )
        .token_key(config.auth.token_key.clone());

        let handles = ShowcaseHandles {
            tabs: tabs.state().clone(),
            keys: config.tabs.items.iter().map(|item| item.key.clone()).collect(),
            search: search.state().clone(),
            pointer: pointer.state().clone(),
            tokens,
            token_key: config.auth.token_key.clone(),
            note_field_id: note.field_id(),
            note_show_id: note.show_button_id(),
        };

        let page = Self {
            sections: vec![
                Box::new(tabs),
                Box::new(search),
                Box::new(note),
                Box::new(pointer),
                Box::new(dashboard),
            ],
        };
        (page, handles)
    }
}

impl Component for ShowcasePage {
    fn render(&self, scope: &Scope) -> Result<Node> {
        Ok(div()
            .class("showcase")
            .children(render_children(&self.sections, scope)?)
            .into())
    }
}
