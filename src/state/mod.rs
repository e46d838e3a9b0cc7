//! State - Observable State Modules
//!
//! Shared state lives in [`StateCell`]s. Components mutate state only
//! through the methods exposed here, and every write notifies subscribers:
//!
//! ```text
//! UI Event → handler → State Method → StateCell::set → Invalidation → Runtime re-render
//! ```

pub mod cell;
pub mod tabs_state;

pub use cell::{Invalidation, RenderBinding, StateCell, Subscription};
pub use tabs_state::{TabKey, TabsState};
