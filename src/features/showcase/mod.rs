//! Showcase Feature
//!
//! A page exercising every component, plus the controller that drives it.

pub mod controller;
pub mod page;

pub use controller::ShowcaseController;
pub use page::{ShowcaseHandles, ShowcasePage};
