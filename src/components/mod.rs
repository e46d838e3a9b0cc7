//! Components - Reusable UI Components
//!
//! Components built on the [`crate::app`] model. None of them do I/O.

pub mod composite;
pub mod primitives;

pub use composite::*;
pub use primitives::*;
