#[cfg(test)]
macro_rules! assert_total_size_eq {
    ($value:expr, $expected:expr $(,)*) => {
        assert_eq!($crate::total_size(&$value), ($expected) as u64);
    };

    ($value:expr, $expected:expr, $guard:expr $(,)*) => {
        assert_eq!(
            $crate::Traversal::new($guard, &$crate::Options::default()).measure(&$value),
            ($expected) as u64
        );
    };
}

mod cell;
mod collection;
mod dynamic;
mod opaque;
mod option;
mod primitive;
mod ptr;
mod string;
mod sync;
mod tuple;

pub use opaque::*;
