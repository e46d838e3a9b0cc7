//! Component - Render Contract

use super::element::{Element, Node};
use super::scope::Scope;
use crate::error::Result;

/// Anything that can describe its output for a given scope
///
/// Rendering is side-effect free apart from binding state to the scope's
/// invalidation flag; it may run any number of times.
pub trait Component {
    fn render(&self, scope: &Scope) -> Result<Node>;
}

/// Boxed component, as stored by containers
pub type AnyComponent = Box<dyn Component>;

/// Render every child in order, stopping at the first error
pub fn render_children(children: &[AnyComponent], scope: &Scope) -> Result<Vec<Node>> {
    children.iter().map(|child| child.render(scope)).collect()
}

impl Component for &'static str {
    fn render(&self, _scope: &Scope) -> Result<Node> {
        Ok(Node::text(*self))
    }
}

impl Component for String {
    fn render(&self, _scope: &Scope) -> Result<Node> {
        Ok(Node::text(self.clone()))
    }
}

impl Component for Node {
    fn render(&self, _scope: &Scope) -> Result<Node> {
        Ok(self.clone())
    }
}

impl Component for Element {
    fn render(&self, _scope: &Scope) -> Result<Node> {
        Ok(Node::Element(self.clone()))
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&self, scope: &Scope) -> Result<Node> {
        (**self).render(scope)
    }
}

/// Component backed by a closure
pub struct FnComponent<F>(F);

impl<F: Fn(&Scope) -> Result<Node>> Component for FnComponent<F> {
    fn render(&self, scope: &Scope) -> Result<Node> {
        (self.0)(scope)
    }
}

/// Wrap a closure as a component
pub fn component_fn<F: Fn(&Scope) -> Result<Node>>(f: F) -> FnComponent<F> {
    FnComponent(f)
}
