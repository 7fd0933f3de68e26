use super::collection::Elements;
use crate::layout::POINTER_BYTE_SIZE;
use crate::{ChildVisitor, Identity, Introspect, IntrospectError, Label, Shape};
use std::ptr::NonNull;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

// Pointer types.
// Raw pointers aren't necessarily safe to dereference, even if they're nonnull.
macro_rules! impl_introspect_for_raw_pointer {
    ( $( $pointer:ty ),+ $(,)* ) => {
        $(
            impl<T> Introspect for $pointer {
                fn shape(&self) -> Shape {
                    Shape::Unsupported {
                        handle: POINTER_BYTE_SIZE,
                        reason: IntrospectError::RawPointer,
                    }
                }
            }
        )+
    };
}

impl_introspect_for_raw_pointer!(*const T, *mut T, NonNull<T>);

#[cfg(test)]
mod test_raw_pointer_types {
    use super::*;

    #[test]
    fn test_pointer() {
        let x = 1i8;
        let ptr = &x as *const i8;
        assert_total_size_eq!(ptr, POINTER_BYTE_SIZE);
    }

    #[test]
    fn test_mutable_pointer() {
        let mut x = 1i8;
        let ptr = &mut x as *mut i8;
        assert_total_size_eq!(ptr, POINTER_BYTE_SIZE);
    }

    #[test]
    fn test_nonnull_pointer() {
        let mut x = 1i8;
        let ptr = NonNull::from(&mut x);
        assert_total_size_eq!(ptr, POINTER_BYTE_SIZE);
    }

    #[test]
    fn test_raw_pointer_reason() {
        let x = 1u64;
        let ptr = &x as *const u64;
        assert_eq!(
            ptr.shape(),
            Shape::Unsupported {
                handle: POINTER_BYTE_SIZE,
                reason: IntrospectError::RawPointer,
            }
        );
    }
}

// Reference and owning pointer types.
macro_rules! impl_introspect_for_pointer {
    ( $( $pointer:ty ),+ $(,)* ) => {
        $(
            impl<T: Introspect> Introspect for $pointer {
                fn shape(&self) -> Shape {
                    Shape::Pointer(Some(Identity::of(&**self)))
                }

                fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                    visitor.visit(Label::Referent, &**self);
                }

                fn nil_shape() -> Shape {
                    Shape::Pointer(None)
                }
            }
        )+
    };
}

impl_introspect_for_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// Shared slices are charged once per allocation, however many clones point at it.
macro_rules! impl_introspect_for_shared_slice {
    ( $( $pointer:ty ),+ $(,)* ) => {
        $(
            impl<T: Introspect> Introspect for $pointer {
                fn shape(&self) -> Shape {
                    Shape::Pointer(Some(Identity::of(&**self)))
                }

                fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                    visitor.visit(Label::Referent, &Elements(&**self));
                }

                fn nil_shape() -> Shape {
                    Shape::Pointer(None)
                }
            }
        )+
    };
}

impl_introspect_for_shared_slice!(Rc<[T]>, Arc<[T]>);

// A dead weak pointer is a null pointer.
macro_rules! impl_introspect_for_weak {
    ( $( $weak:ty ),+ $(,)* ) => {
        $(
            impl<T: Introspect> Introspect for $weak {
                fn shape(&self) -> Shape {
                    match self.upgrade() {
                        Some(strong) => Shape::Pointer(Some(Identity::of(&*strong))),
                        None => Shape::Pointer(None),
                    }
                }

                fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                    if let Some(strong) = self.upgrade() {
                        visitor.visit(Label::Referent, &*strong);
                    }
                }

                fn nil_shape() -> Shape {
                    Shape::Pointer(None)
                }
            }
        )+
    };
}

impl_introspect_for_weak!(rc::Weak<T>, sync::Weak<T>);
