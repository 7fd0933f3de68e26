use crate::layout::{SEQUENCE_HEADER_BYTES, SLICE_HEADER_BYTES};
use crate::{ChildVisitor, Identity, Introspect, Label, MapInfo, SequenceInfo, Shape};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::mem;

// Sequence types.
fn buffer_identity<T>(start: *const T, capacity: usize) -> Option<Identity> {
    let extent = capacity * mem::size_of::<T>();
    if extent == 0 {
        None
    } else {
        Some(Identity::from_raw(start as *const (), extent))
    }
}

fn visit_elements<'a, T: Introspect + 'a>(
    elements: impl Iterator<Item = &'a T>,
    visitor: &mut dyn ChildVisitor,
) {
    for (index, element) in elements.enumerate() {
        visitor.visit(Label::Index(index), element);
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Sequence(Some(SequenceInfo {
            header: SEQUENCE_HEADER_BYTES,
            element_size: mem::size_of::<T>(),
            len: self.len(),
            capacity: self.capacity(),
            identity: buffer_identity(self.as_ptr(), self.capacity()),
        }))
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        visit_elements(self.iter(), visitor);
    }

    fn nil_shape() -> Shape {
        Shape::Sequence(None)
    }
}

impl<T: Introspect> Introspect for VecDeque<T> {
    fn shape(&self) -> Shape {
        // The ring buffer is not exposed; its first live slot stands in for it.
        let start = self.as_slices().0.as_ptr();

        Shape::Sequence(Some(SequenceInfo {
            header: SEQUENCE_HEADER_BYTES,
            element_size: mem::size_of::<T>(),
            len: self.len(),
            capacity: self.capacity(),
            identity: if self.is_empty() {
                None
            } else {
                buffer_identity(start, self.capacity())
            },
        }))
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        visit_elements(self.iter(), visitor);
    }

    fn nil_shape() -> Shape {
        Shape::Sequence(None)
    }
}

// Slice types.
// A slice on its own is laid out like a fixed array.
impl<T: Introspect> Introspect for [T] {
    fn shape(&self) -> Shape {
        Shape::Record {
            static_size: mem::size_of_val(self),
        }
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        visit_elements(self.iter(), visitor);
    }
}

/// A sized stand-in for a slice, so that it can be handed out as a child.
pub(crate) struct Elements<'a, T>(pub(crate) &'a [T]);

impl<T: Introspect> Introspect for Elements<'_, T> {
    fn shape(&self) -> Shape {
        <[T] as Introspect>::shape(self.0)
    }

    fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
        <[T] as Introspect>::visit_children(self.0, visitor);
    }
}

// A borrowed or boxed slice is a sequence that cannot grow.
macro_rules! impl_introspect_for_slice_handle {
    ( $( $handle:ty ),+ $(,)* ) => {
        $(
            impl<T: Introspect> Introspect for $handle {
                fn shape(&self) -> Shape {
                    Shape::Sequence(Some(SequenceInfo {
                        header: SLICE_HEADER_BYTES,
                        element_size: mem::size_of::<T>(),
                        len: self.len(),
                        capacity: self.len(),
                        identity: buffer_identity(self.as_ptr(), self.len()),
                    }))
                }

                fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                    visit_elements(self.iter(), visitor);
                }

                fn nil_shape() -> Shape {
                    Shape::Sequence(None)
                }
            }
        )+
    };
}

impl_introspect_for_slice_handle!(&[T], &mut [T], Box<[T]>);


// Associative containers.
fn first_entry_identity<T>(first: Option<&T>) -> Option<Identity> {
    first.map(Identity::of)
}

macro_rules! impl_introspect_for_map {
    ( $map:ident < K, V $( , $hasher:ident )? > ) => {
        impl<K: Introspect, V: Introspect $( , $hasher )?> Introspect for $map<K, V $( , $hasher )?> {
            fn shape(&self) -> Shape {
                Shape::Map(Some(MapInfo {
                    header: mem::size_of::<Self>(),
                    len: self.len(),
                    identity: first_entry_identity(self.keys().next()),
                }))
            }

            fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                for (key, value) in self.iter() {
                    visitor.visit(Label::Key, key);
                    visitor.visit(Label::Value, value);
                }
            }

            fn nil_shape() -> Shape {
                Shape::Map(None)
            }
        }
    };
}

// Sets are maps whose values take no room.
macro_rules! impl_introspect_for_set {
    ( $set:ident < K $( , $hasher:ident )? > ) => {
        impl<K: Introspect $( , $hasher )?> Introspect for $set<K $( , $hasher )?> {
            fn shape(&self) -> Shape {
                Shape::Map(Some(MapInfo {
                    header: mem::size_of::<Self>(),
                    len: self.len(),
                    identity: first_entry_identity(self.iter().next()),
                }))
            }

            fn visit_children(&self, visitor: &mut dyn ChildVisitor) {
                for key in self.iter() {
                    visitor.visit(Label::Key, key);
                }
            }

            fn nil_shape() -> Shape {
                Shape::Map(None)
            }
        }
    };
}

impl_introspect_for_map!(HashMap<K, V, S>);
impl_introspect_for_map!(BTreeMap<K, V>);
impl_introspect_for_set!(HashSet<K, S>);
impl_introspect_for_set!(BTreeSet<K>);

#[cfg(feature = "enable-indexmap")]
mod indexmap_types {
    use super::*;
    use indexmap::{IndexMap, IndexSet};

    impl_introspect_for_map!(IndexMap<K, V, S>);
    impl_introspect_for_set!(IndexSet<K, S>);
}
