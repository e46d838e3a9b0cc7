//! App - Component Model
//!
//! The render contract ([`Component`]), the output tree ([`Node`]), explicit
//! context passing ([`Scope`]) and the event/re-render loop ([`Runtime`]).

pub mod component;
pub mod element;
pub mod runtime;
pub mod scope;

pub use component::{component_fn, render_children, AnyComponent, Component, FnComponent};
pub use element::{button, div, text_field, Element, InputRef, Node};
pub use runtime::Runtime;
pub use scope::Scope;
