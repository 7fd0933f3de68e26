use crate::{Introspect, Shape};
use std::mem;

impl Introspect for bool {
    fn shape(&self) -> Shape {
        Shape::Bool
    }
}

macro_rules! impl_introspect_for_numeric {
    ( $type:ty ) => {
        impl Introspect for $type {
            fn shape(&self) -> Shape {
                Shape::Numeric { width: mem::size_of::<$type>() }
            }
        }
    };

    ( $( $type:ty ),+ $(,)* ) => {
        $( impl_introspect_for_numeric!( $type ); )+
    }
}

impl_introspect_for_numeric!(
    char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
