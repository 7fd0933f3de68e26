use crate::{ChildVisitor, Identity, Introspect, Label, Shape};
use std::rc::Rc;
use std::sync::Arc;

// Dynamic types: a handle to a value whose concrete type is erased.
macro_rules! impl_introspect_for_dynamic {
    ( $( $handle:ty ),+ $(,)* ) => {
        $(
            impl Introspect for $handle {
                fn shape(&self) -> Shape {
                    Shape::Dynamic(Some(Identity::of(&**self)))
                }

                fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                    visitor.visit(Label::Held, &**self);
                }

                fn nil_shape() -> Shape {
                    Shape::Dynamic(None)
                }
            }
        )+
    };
}

impl_introspect_for_dynamic!(
    &dyn Introspect,
    Box<dyn Introspect>,
    Box<dyn Introspect + Send>,
    Box<dyn Introspect + Send + Sync>,
    Rc<dyn Introspect>,
    Arc<dyn Introspect + Send + Sync>,
);
