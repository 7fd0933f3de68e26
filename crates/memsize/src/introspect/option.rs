use crate::{ChildVisitor, Introspect, Shape};
use std::marker::PhantomData;

// `Some` is invisible; `None` is the nil form of whatever it would hold.
impl<T: Introspect> Introspect for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(value) => value.shape(),
            None => T::nil_shape(),
        }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        if let Some(value) = self {
            value.visit_children(visitor);
        }
    }

    fn nil_shape() -> Shape {
        T::nil_shape()
    }
}

impl<T: Introspect, E: Introspect> Introspect for Result<T, E> {
    fn shape(&self) -> Shape {
        match self {
            Ok(value) => value.shape(),
            Err(error) => error.shape(),
        }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        match self {
            Ok(value) => value.visit_children(visitor),
            Err(error) => error.visit_children(visitor),
        }
    }
}

impl<T: ?Sized> Introspect for PhantomData<T> {
    fn shape(&self) -> Shape {
        Shape::Absent
    }
}
