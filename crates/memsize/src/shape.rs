use crate::layout::{DYNAMIC_HANDLE_BYTES, POINTER_BYTE_SIZE, STRING_HEADER_BYTES};
use crate::IntrospectError;
use std::fmt;
use std::mem;

/// The category a value is dispatched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Absent,
    Bool,
    Numeric,
    String,
    Sequence,
    Map,
    Record,
    Pointer,
    Dynamic,
    Unsupported,
}

/// Names one backing allocation for the duration of a measurement.
///
/// The extent is part of the identity so that a pointer to a record and a
/// pointer to that record's first field are told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    address: usize,
    extent: usize,
}

impl Identity {
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self {
            address: value as *const T as *const () as usize,
            extent: mem::size_of_val(value),
        }
    }

    pub fn from_raw(address: *const (), extent: usize) -> Self {
        Self {
            address: address as usize,
            extent,
        }
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn extent(&self) -> usize {
        self.extent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceInfo {
    /// Size of the handle: pointer and length, plus capacity for growable
    /// sequences.
    pub header: usize,
    /// Static size of one element slot.
    pub element_size: usize,
    pub len: usize,
    pub capacity: usize,
    /// Absent while no buffer is allocated.
    pub identity: Option<Identity>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapInfo {
    /// Size of the container handle itself.
    pub header: usize,
    pub len: usize,
    pub identity: Option<Identity>,
}

/// What a value looks like to the traversal.
///
/// `None` payloads stand for nil: a null pointer, a missing dynamic value, a
/// sequence or map that does not exist at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Absent,
    Bool,
    Numeric { width: usize },
    String { len: usize },
    Sequence(Option<SequenceInfo>),
    Map(Option<MapInfo>),
    Record { static_size: usize },
    Pointer(Option<Identity>),
    Dynamic(Option<Identity>),
    Unsupported { handle: usize, reason: IntrospectError },
}

impl Shape {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Absent => Kind::Absent,
            Shape::Bool => Kind::Bool,
            Shape::Numeric { .. } => Kind::Numeric,
            Shape::String { .. } => Kind::String,
            Shape::Sequence(_) => Kind::Sequence,
            Shape::Map(_) => Kind::Map,
            Shape::Record { .. } => Kind::Record,
            Shape::Pointer(_) => Kind::Pointer,
            Shape::Dynamic(_) => Kind::Dynamic,
            Shape::Unsupported { .. } => Kind::Unsupported,
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        match self {
            Shape::Sequence(Some(info)) => info.identity,
            Shape::Map(Some(info)) => info.identity,
            Shape::Pointer(identity) | Shape::Dynamic(identity) => *identity,
            _ => None,
        }
    }

    /// Bytes the value occupies inside whatever holds it: its header, width
    /// or static size, without anything it refers to.
    pub fn inline_bytes(&self) -> usize {
        match self {
            Shape::Absent | Shape::Sequence(None) | Shape::Map(None) => 0,
            Shape::Bool => 1,
            Shape::Numeric { width } => *width,
            Shape::String { .. } => STRING_HEADER_BYTES,
            Shape::Sequence(Some(info)) => info.header,
            Shape::Map(Some(info)) => info.header,
            Shape::Record { static_size } => *static_size,
            Shape::Pointer(_) => POINTER_BYTE_SIZE,
            Shape::Dynamic(_) => DYNAMIC_HANDLE_BYTES,
            Shape::Unsupported { handle, .. } => *handle,
        }
    }
}

/// How a child hangs off its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label<'a> {
    /// Named record field.
    Field(&'a str),
    /// Positional record field, as in tuples and tuple structs.
    Position(usize),
    /// Sequence or array element.
    Index(usize),
    Key,
    Value,
    /// Target of a pointer.
    Referent,
    /// Value behind a dynamic handle.
    Held,
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Field(name) => write!(f, ".{}", name),
            Label::Position(position) => write!(f, ".{}", position),
            Label::Index(index) => write!(f, "[{}]", index),
            Label::Key => f.write_str(".key"),
            Label::Value => f.write_str(".value"),
            Label::Referent => f.write_str(".ptr"),
            Label::Held => f.write_str(".elem"),
        }
    }
}

/// Receives the children of a value, in order.
pub trait ChildVisitor {
    fn visit(&mut self, label: Label<'_>, child: &dyn Introspect);
}

/// Exposes the shape of a value and its children to the traversal.
///
/// Implementations describe; they never compute sizes themselves. All of
/// the size policy lives in [`crate::Traversal`].
pub trait Introspect {
    fn shape(&self) -> Shape;

    /// Hands every direct child to `visitor`: fields of a record, elements of
    /// a sequence, keys and values of a map, the target of a pointer.
    fn visit_children(&self, _visitor: &mut dyn ChildVisitor) {}

    /// Shape of a missing value of this type, used for `None`.
    fn nil_shape() -> Shape
    where
        Self: Sized,
    {
        Shape::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_distinguishes_extent() {
        #[repr(C)]
        struct Pair {
            first: u64,
            second: u64,
        }

        let pair = Pair { first: 1, second: 2 };
        assert_eq!(pair.first + pair.second, 3);

        let whole = Identity::of(&pair);
        let first = Identity::of(&pair.first);

        assert_eq!(whole.address(), first.address());
        assert_ne!(whole, first);
        assert_eq!(whole.extent(), 16);
    }

    #[test]
    fn test_label_display() {
        let rendered: Vec<String> = [
            Label::Field("name"),
            Label::Position(1),
            Label::Index(3),
            Label::Key,
            Label::Value,
            Label::Referent,
            Label::Held,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(
            rendered,
            [".name", ".1", "[3]", ".key", ".value", ".ptr", ".elem"]
        );
    }

    #[test]
    fn test_inline_bytes_of_nil() {
        assert_eq!(Shape::Sequence(None).inline_bytes(), 0);
        assert_eq!(Shape::Map(None).inline_bytes(), 0);
        assert_eq!(Shape::Pointer(None).inline_bytes(), POINTER_BYTE_SIZE);
        assert_eq!(Shape::Dynamic(None).inline_bytes(), DYNAMIC_HANDLE_BYTES);
    }
}
