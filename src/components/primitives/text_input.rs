//! TextInput Components
//!
//! Two ways to own a text field's value:
//! - [`ControlledInput`]: the value lives in component state and every
//!   keystroke goes through it, so the rendered `value` is always the state.
//! - [`UncontrolledInput`]: the host element keeps the value; the component
//!   only holds an [`InputRef`] and reads it when asked.

use std::rc::Rc;

use crate::app::{button, div, text_field, Component, InputRef, Node, Scope};
use crate::error::Result;
use crate::state::{RenderBinding, StateCell};

/// Text input whose value is component state
pub struct ControlledInput {
    id: String,
    value: StateCell<String>,
    placeholder: Option<String>,
    binding: RenderBinding,
}

impl ControlledInput {
    /// Create an empty controlled input
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: StateCell::new(String::new()),
            placeholder: None,
            binding: RenderBinding::new(),
        }
    }

    /// Set the initial value
    pub fn value(self, value: impl Into<String>) -> Self {
        self.value.set(value.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Handle to the value state
    pub fn state(&self) -> &StateCell<String> {
        &self.value
    }

    /// Current value
    pub fn current(&self) -> String {
        self.value.get()
    }
}

impl Component for ControlledInput {
    fn render(&self, scope: &Scope) -> Result<Node> {
        self.binding.bind(&self.value, scope.invalidation());

        let value = self.value.clone();
        let mut field = text_field()
            .id(self.id.clone())
            .attr("value", self.value.get())
            .on_input(move |text| value.set(text.to_string()));
        if let Some(placeholder) = &self.placeholder {
            field = field.attr("placeholder", placeholder.clone());
        }
        Ok(field.into())
    }
}

/// Text input whose value is owned by the host element
pub struct UncontrolledInput {
    id: String,
    input_ref: InputRef,
    on_show: Rc<dyn Fn(&str)>,
}

impl UncontrolledInput {
    /// Create an uncontrolled input; `on_show` receives the value when the
    /// "Show Value" button is activated
    pub fn new(id: impl Into<String>, on_show: impl Fn(&str) + 'static) -> Self {
        Self {
            id: id.into(),
            input_ref: InputRef::new(),
            on_show: Rc::new(on_show),
        }
    }

    /// Reference to the host-side value
    pub fn input_ref(&self) -> &InputRef {
        &self.input_ref
    }

    /// Element id of the text field
    pub fn field_id(&self) -> String {
        format!("{}-field", self.id)
    }

    /// Element id of the "Show Value" button
    pub fn show_button_id(&self) -> String {
        format!("{}-show", self.id)
    }
}

impl Component for UncontrolledInput {
    fn render(&self, _scope: &Scope) -> Result<Node> {
        let input_ref = self.input_ref.clone();
        let on_show = self.on_show.clone();

        Ok(div()
            .id(self.id.clone())
            .class("uncontrolled-input")
            .child(text_field().id(self.field_id()).node_ref(&self.input_ref))
            .child(
                button()
                    .id(self.show_button_id())
                    .on_activate(move || on_show(&input_ref.current()))
                    .child("Show Value"),
            )
            .into())
    }
}
