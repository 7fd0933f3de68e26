//! Transitive, deduplicated memory footprint of an object graph.
//!
//! [`total_size`] returns the bytes taken by a value plus every allocation
//! reachable from it: string contents, sequence buffers, map storage, the
//! targets of pointers. An allocation reached through several handles, or
//! through a cycle, is charged once; each handle is charged every time.
//!
//! ```
//! use memsize::{total_size, Introspect};
//! use std::rc::Rc;
//!
//! #[derive(Introspect)]
//! struct Person {
//!     name: String,
//!     friends: Vec<Rc<Person>>,
//! }
//!
//! let jane = Rc::new(Person { name: "Jane".to_string(), friends: Vec::new() });
//! let john = Person { name: "John".to_string(), friends: vec![jane.clone(), jane] };
//!
//! assert!(total_size(&john) > 0);
//! ```
//!
//! Sizes are estimates built from fixed handle costs (see [`layout`]) and
//! static type sizes, not allocator measurements.

extern crate self as memsize;

mod engine;
mod error;
mod guard;
mod introspect;
pub mod layout;
mod options;
mod shape;
mod sink;
mod stack;

pub use engine::*;
pub use error::*;
pub use guard::*;
pub use introspect::*;
pub use options::*;
pub use shape::*;
pub use sink::{DiagnosticSink, Note, TraceEvent, TracingSink};

#[cfg(feature = "derive")]
pub use memsize_derive::*;

/// Returns the size of `value` and everything reachable from it, in bytes.
///
/// Absent and nil values weigh nothing, null handles weigh their handle.
pub fn total_size(value: &dyn Introspect) -> u64 {
    total_size_with(value, &Options::default(), None)
}

/// Like [`total_size`], with explicit options and an optional sink that
/// receives one [`TraceEvent`] per visited node.
pub fn total_size_with(
    value: &dyn Introspect,
    options: &Options,
    sink: Option<&mut dyn DiagnosticSink>,
) -> u64 {
    let mut visited = VisitedSet::new();

    let mut traversal = Traversal::new(&mut visited, options);
    if let Some(sink) = sink {
        traversal = traversal.with_sink(sink);
    }
    let total = traversal.measure(value);

    tracing::trace!(
        target: "memsize",
        total,
        allocations = visited.len(),
        "measured value"
    );

    total
}
