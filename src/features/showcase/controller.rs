//! Showcase Controller
//!
//! Mounts the showcase page and drives it with host events.

use std::io::Write;

use tracing::info;

use super::page::{ShowcaseHandles, ShowcasePage, POINTER_AREA_ID, SEARCH_INPUT_ID};
use crate::app::Runtime;
use crate::components::{tab_id, tab_panel_id};
use crate::domain::AppConfig;
use crate::error::Result;
use crate::eventing::UiEvent;

/// Showcase page controller
#[derive(Debug)]
pub struct ShowcaseController {
    runtime: Runtime,
    handles: ShowcaseHandles,
}

impl ShowcaseController {
    /// Build and mount the page described by `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        let (page, handles) = ShowcasePage::build(config);
        let runtime = Runtime::mount(page)?;
        Ok(Self { runtime, handles })
    }

    // ==================== Events ====================

    /// Activate the tab with `key`
    pub fn click_tab(&mut self, key: &str) -> Result<bool> {
        let id = tab_id(self.handles.tabs.group(), &key.to_string());
        self.runtime.activate(&id)
    }

    /// Type into the controlled search input
    pub fn type_search(&mut self, text: &str) -> Result<bool> {
        self.runtime.dispatch(SEARCH_INPUT_ID, UiEvent::input(text))
    }

    /// Type into the uncontrolled note input, then press "Show Value"
    pub fn type_note_and_show(&mut self, text: &str) -> Result<bool> {
        let field = self.handles.note_field_id.clone();
        let show = self.handles.note_show_id.clone();
        self.runtime.dispatch(&field, UiEvent::input(text))?;
        self.runtime.activate(&show)
    }

    /// Move the pointer over the tracking area
    pub fn move_pointer(&mut self, x: f64, y: f64) -> Result<bool> {
        self.runtime.dispatch(POINTER_AREA_ID, UiEvent::pointer_move(x, y))
    }

    /// Store or clear the auth token, then re-render
    pub fn set_token(&mut self, token: Option<&str>) -> Result<()> {
        let key = self.handles.token_key.clone();
        match token {
            Some(token) => self.handles.tokens.set(key, token),
            None => {
                self.handles.tokens.remove(&key);
            }
        }
        // Token storage is not observable state; re-render explicitly.
        self.runtime.render()
    }

    // ==================== Queries ====================

    /// Currently active tab key
    pub fn active_tab(&self) -> String {
        self.handles.tabs.active()
    }

    /// Text of the visible panel, if any
    pub fn visible_panel(&self) -> Option<String> {
        let group = self.handles.tabs.group();
        self.handles.keys.iter().find_map(|key| {
            self.runtime
                .find(&tab_panel_id(group, key))
                .map(|panel| panel.text_content())
        })
    }

    /// Driving handles
    pub fn handles(&self) -> &ShowcaseHandles {
        &self.handles
    }

    /// The mounted runtime
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Markup of the current page
    pub fn markup(&self) -> String {
        self.runtime.markup()
    }

    // ==================== Script ====================

    /// Activate every tab in order, writing the page after each step
    pub fn run_script(&mut self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "initial (active = {}):", self.active_tab())?;
        writeln!(out, "{}", self.markup())?;

        let keys = self.handles.keys.clone();
        for key in &keys {
            self.click_tab(key)?;
            let panel = self.visible_panel().unwrap_or_default();
            info!(key = %key, panel = %panel, "tab activated");
            writeln!(out, "\nafter activating tab {key}:")?;
            writeln!(out, "{}", self.markup())?;
        }
        Ok(())
    }
}
