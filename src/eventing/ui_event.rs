//! UiEvent - Host Input Events
//!
//! Discrete input events delivered by the host to one addressed element.

use serde::{Deserialize, Serialize};

/// Pointer position in host coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Input events for host -> component communication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Element activated (click, tap, Enter)
    Activate,

    /// Text field content changed
    Input(String),

    /// Pointer moved over the element
    PointerMove(Position),
}

impl UiEvent {
    /// Create an input event
    pub fn input(text: impl Into<String>) -> Self {
        Self::Input(text.into())
    }

    /// Create a pointer move event
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove(Position::new(x, y))
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Activate => "activate",
            UiEvent::Input(_) => "input",
            UiEvent::PointerMove(_) => "pointer-move",
        }
    }
}
