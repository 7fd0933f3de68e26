use crate::{ChildVisitor, Introspect, IntrospectError, Shape};
use std::cell::{Cell, RefCell};
use std::mem;

// Cell types are looked through. A `RefCell` that is mutably borrowed right
// now cannot be read and only its own bytes are charged.
impl<T: Introspect + Copy> Introspect for Cell<T> {
    fn shape(&self) -> Shape {
        self.get().shape()
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        let value = self.get();
        value.visit_children(visitor);
    }

    fn nil_shape() -> Shape {
        T::nil_shape()
    }
}

impl<T: Introspect> Introspect for RefCell<T> {
    fn shape(&self) -> Shape {
        match self.try_borrow() {
            Ok(value) => value.shape(),
            Err(_) => Shape::Unsupported {
                handle: mem::size_of::<Self>(),
                reason: IntrospectError::Borrowed,
            },
        }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        if let Ok(value) = self.try_borrow() {
            value.visit_children(visitor);
        }
    }

    fn nil_shape() -> Shape {
        T::nil_shape()
    }
}
