//! Eventing - Host Event Types

pub mod ui_event;

pub use ui_event::{Position, UiEvent};
