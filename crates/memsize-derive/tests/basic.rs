use memsize::layout::{POINTER_BYTE_SIZE, STRING_HEADER_BYTES};
use memsize::{total_size, Introspect, Kind, Label, Options, Shape, TraceEvent};

use std::mem;

#[test]
fn test_struct_flat() {
    #[derive(Introspect)]
    struct Point {
        x: i32,
        y: i32,
    }

    let p = Point { x: 1, y: 2 };
    assert_eq!(p.shape(), Shape::Record { static_size: 8 });
    assert_eq!(8 + 4 + 4, total_size(&p));
}

#[test]
fn test_tuple() {
    #[derive(Introspect)]
    struct Tuple(i32, i32);

    let p = Tuple(1, 2);
    assert_eq!(8 + 4 + 4, total_size(&p));
}

#[test]
fn test_struct_generic() {
    #[derive(Introspect)]
    struct Generic<T> {
        x: T,
        y: T,
    }

    let g = Generic { x: 1i64, y: 2i64 };
    assert_eq!(16 + 8 + 8, total_size(&g));
}

#[test]
fn test_struct_generic_with_where_clause() {
    #[derive(Introspect)]
    struct Wrapped<'a, T>
    where
        T: Clone,
    {
        inner: &'a T,
    }

    let value = 7u16;
    let w = Wrapped { inner: &value };
    assert_eq!(
        (POINTER_BYTE_SIZE + POINTER_BYTE_SIZE + 2) as u64,
        total_size(&w)
    );
}

#[test]
fn test_struct_empty() {
    #[derive(Introspect)]
    struct Empty;

    let e = Empty;
    assert_eq!(0, total_size(&e));
}

#[test]
fn test_struct_padding() {
    // This struct is packed in order <x, z, y> because 'y: i32' requires 32-bit
    // alignment but x and z do not, so its static size is 8 and not 12.
    #[derive(Introspect)]
    struct Padding {
        x: i8,
        y: i32,
        z: i8,
    }

    let p = Padding { x: 1, y: 2, z: 3 };
    assert_eq!(8 + 1 + 4 + 1, total_size(&p));
}

#[test]
fn test_skip() {
    #[derive(Introspect)]
    struct Cached {
        name: String,
        #[introspect(skip)]
        #[allow(dead_code)]
        scratch: Vec<u8>,
    }

    let c = Cached {
        name: "ab".to_string(),
        scratch: vec![0; 100],
    };
    assert_eq!(
        (mem::size_of::<Cached>() + STRING_HEADER_BYTES + 2) as u64,
        total_size(&c)
    );
}

#[test]
fn test_raw_identifier_label() {
    #[derive(Introspect)]
    struct Token {
        r#type: u8,
    }

    struct Labels(Vec<String>);
    impl memsize::ChildVisitor for Labels {
        fn visit(&mut self, label: Label<'_>, _child: &dyn Introspect) {
            self.0.push(label.to_string());
        }
    }

    let mut labels = Labels(Vec::new());
    Token { r#type: 1 }.visit_children(&mut labels);
    assert_eq!(labels.0, [".type"]);
}

#[test]
fn test_enum() {
    #[derive(Introspect)]
    #[allow(dead_code)]
    enum Things {
        A,
        B(),
        C(i32),
        D { x: i32 },
        E(i32, String),
        F { x: i32, y: i32 },
    }

    let record = mem::size_of::<Things>();

    assert_eq!(record as u64, total_size(&Things::A));
    assert_eq!(record as u64, total_size(&Things::B()));
    assert_eq!((record + 4) as u64, total_size(&Things::C(1)));
    assert_eq!((record + 4) as u64, total_size(&Things::D { x: 1 }));
    assert_eq!(
        (record + 4 + STRING_HEADER_BYTES + 3) as u64,
        total_size(&Things::E(1, "abc".to_string()))
    );
    assert_eq!((record + 8) as u64, total_size(&Things::F { x: 1, y: 2 }));
}

#[test]
fn test_fieldless_enum() {
    #[derive(Introspect)]
    #[allow(dead_code)]
    enum Direction {
        North,
        South,
    }

    assert_eq!(1, total_size(&Direction::South));
}

#[test]
fn test_enum_skip() {
    #[derive(Introspect)]
    #[allow(dead_code)]
    enum Slot {
        Filled(#[introspect(skip)] Vec<u8>, u16),
        Named {
            #[introspect(skip)]
            hidden: String,
            shown: u16,
        },
    }

    let record = mem::size_of::<Slot>() as u64;
    assert_eq!(record + 2, total_size(&Slot::Filled(vec![1, 2, 3], 9)));
    assert_eq!(
        record + 2,
        total_size(&Slot::Named {
            hidden: "x".to_string(),
            shown: 3,
        })
    );
}

#[test]
fn test_field_paths() {
    #[derive(Introspect)]
    struct Person {
        name: String,
        tags: Vec<&'static str>,
    }

    let person = Person {
        name: "Jo".to_string(),
        tags: vec!["a"],
    };
    let mut events: Vec<TraceEvent> = Vec::new();
    memsize::total_size_with(&person, &Options::default(), Some(&mut events));

    let paths: Vec<(&str, Kind)> = events
        .iter()
        .map(|event| (event.path.as_str(), event.kind))
        .collect();
    assert_eq!(
        paths,
        [
            ("root.name", Kind::String),
            ("root.tags[0]", Kind::String),
            ("root.tags", Kind::Sequence),
            ("root", Kind::Record),
        ]
    );
}
