use crate::{Identity, IntrospectError, Kind, Label};
use std::fmt::Write;

/// What happened to a node's payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Note {
    Charged,
    /// Reached again through another handle; only the handle was charged.
    AlreadyCharged,
    /// Absent value, null handle, or nil container.
    Nil,
    Degraded(IntrospectError),
}

/// One node of a measurement, reported after its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub path: String,
    pub kind: Kind,
    /// Total contribution of this node, children included.
    pub bytes: u64,
    pub identity: Option<Identity>,
    pub note: Note,
}

/// Observes a measurement. Has no say in the result.
pub trait DiagnosticSink {
    fn record(&mut self, event: TraceEvent);
}

impl DiagnosticSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Forwards every node to `tracing` at TRACE level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, event: TraceEvent) {
        match event.note {
            Note::Degraded(reason) => tracing::trace!(
                target: "memsize",
                path = %event.path,
                kind = ?event.kind,
                bytes = event.bytes,
                %reason,
                "handle only"
            ),
            note => tracing::trace!(
                target: "memsize",
                path = %event.path,
                kind = ?event.kind,
                bytes = event.bytes,
                address = event.identity.map(|identity| identity.address()),
                ?note,
                "measured"
            ),
        }
    }
}

/// Path of the node being measured, rendered as `root.field[3].ptr`.
#[derive(Debug)]
pub(crate) struct TracePath {
    rendered: String,
    marks: Vec<usize>,
}

impl TracePath {
    pub(crate) fn root() -> Self {
        Self {
            rendered: String::from("root"),
            marks: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, label: Label<'_>) {
        self.marks.push(self.rendered.len());
        // Writing into a `String` cannot fail.
        let _ = write!(self.rendered, "{}", label);
    }

    pub(crate) fn pop(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.rendered.truncate(mark);
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.rendered
    }
}
