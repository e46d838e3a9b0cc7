//! Composite Components
//!
//! Components that coordinate children or wrap other components.

pub mod pointer_tracker;
pub mod tabs;
pub mod with_auth;

pub use pointer_tracker::{PointerTracker, RenderFn};
pub use tabs::{tab_id, tab_panel_id, Tab, TabList, TabPanel, TabPanels, Tabs};
pub use with_auth::{with_auth, WithAuth};
