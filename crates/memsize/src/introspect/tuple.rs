use crate::{ChildVisitor, Introspect, Label, Shape};
use std::mem;

// Empty type.
impl Introspect for () {
    fn shape(&self) -> Shape {
        Shape::Record { static_size: 0 }
    }
}

// Tuple types are records with positional fields.
macro_rules! impl_introspect_for_tuple {
    ( $first_type:ident $(,)* ) => {};

    ( $first_type:ident $( , $types:ident )+ $(,)* ) => {
        impl< $first_type $( , $types )+ > Introspect for ( $first_type $( , $types )+ )
        where
            $first_type: Introspect,
            $( $types: Introspect ),*
        {
            fn shape(&self) -> Shape {
                Shape::Record { static_size: mem::size_of::<Self>() }
            }

            fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                #[allow(non_snake_case)]
                let ( $first_type $( , $types )+ ) = self;

                let mut position = 0;
                visitor.visit(Label::Position(position), $first_type);
                $(
                    position += 1;
                    visitor.visit(Label::Position(position), $types);
                )+
            }
        }

        impl_introspect_for_tuple!( $( $types ),+ );
    };
}

impl_introspect_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

// Array types.
impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Record { static_size: mem::size_of::<Self>() }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        for (index, element) in self.iter().enumerate() {
            visitor.visit(Label::Index(index), element);
        }
    }
}
