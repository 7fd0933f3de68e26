use crate::{ChildVisitor, Introspect, IntrospectError, Shape};
use std::mem;
use std::sync::{Mutex, RwLock, TryLockError};

// Sync types are looked through without ever blocking: a lock held elsewhere
// or poisoned degrades to the lock's own bytes.
fn lock_failure<G>(error: &TryLockError<G>) -> IntrospectError {
    match error {
        TryLockError::Poisoned(_) => IntrospectError::Poisoned,
        TryLockError::WouldBlock => IntrospectError::Contended,
    }
}

impl<T: Introspect> Introspect for Mutex<T> {
    fn shape(&self) -> Shape {
        match self.try_lock() {
            Ok(value) => value.shape(),
            Err(error) => Shape::Unsupported {
                handle: mem::size_of::<Self>(),
                reason: lock_failure(&error),
            },
        }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        if let Ok(value) = self.try_lock() {
            value.visit_children(visitor);
        }
    }

    fn nil_shape() -> Shape {
        T::nil_shape()
    }
}

impl<T: Introspect> Introspect for RwLock<T> {
    fn shape(&self) -> Shape {
        match self.try_read() {
            Ok(value) => value.shape(),
            Err(error) => Shape::Unsupported {
                handle: mem::size_of::<Self>(),
                reason: lock_failure(&error),
            },
        }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        if let Ok(value) = self.try_read() {
            value.visit_children(visitor);
        }
    }

    fn nil_shape() -> Shape {
        T::nil_shape()
    }
}
