//! UI Patterns Library
//!
//! Headless UI composition patterns. The centerpiece is compound tabs: a
//! [`components::Tabs`] group shares its active key with every tab and
//! panel rendered inside it through an explicit [`app::Scope`], and
//! re-renders them through observable [`state::StateCell`]s. Alongside it:
//! controlled and uncontrolled inputs, a render-callback pointer tracker and
//! an authentication guard.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod logging;
pub mod services;
pub mod state;
pub mod utils;

pub use error::{Error, Result};
