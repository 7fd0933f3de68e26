use crate::{Introspect, IntrospectError, Shape};
use std::mem;
use std::ops::{Deref, DerefMut};

/// Wraps a value that cannot be looked into, such as a closure or a foreign
/// handle. Only its own bytes are charged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Opaque<T>(pub T);

impl<T> Opaque<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Opaque<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Opaque<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Introspect for Opaque<T> {
    fn shape(&self) -> Shape {
        Shape::Unsupported {
            handle: mem::size_of::<T>(),
            reason: IntrospectError::Opaque,
        }
    }
}
