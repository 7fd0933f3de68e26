use crate::{Introspect, Shape};
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

// A string is a value: its bytes belong to it alone, so it has no identity.
impl Introspect for &str {
    fn shape(&self) -> Shape {
        Shape::String { len: self.len() }
    }
}

impl Introspect for String {
    fn shape(&self) -> Shape {
        Shape::String { len: self.len() }
    }
}

impl Introspect for Box<str> {
    fn shape(&self) -> Shape {
        Shape::String { len: self.len() }
    }
}

impl Introspect for Rc<str> {
    fn shape(&self) -> Shape {
        Shape::String { len: self.len() }
    }
}

impl Introspect for Arc<str> {
    fn shape(&self) -> Shape {
        Shape::String { len: self.len() }
    }
}

impl Introspect for Cow<'_, str> {
    fn shape(&self) -> Shape {
        Shape::String { len: self.len() }
    }
}
