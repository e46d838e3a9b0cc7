//! Primitive Components
//!
//! Basic building blocks like inputs.

pub mod text_input;

pub use text_input::{ControlledInput, UncontrolledInput};
