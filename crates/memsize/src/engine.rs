use crate::sink::TracePath;
use crate::stack::ensure_sufficient_stack;
use crate::{
    Accounting, ChildVisitor, CycleGuard, DiagnosticSink, Introspect, Label, Note, Options, Shape,
    TraceEvent,
};

/// One recursive measurement over a single cycle guard.
///
/// Every backing allocation reachable from the measured values is charged at
/// most once for as long as the guard lives. Handles are charged every time
/// they are met.
pub struct Traversal<'a> {
    guard: &'a mut dyn CycleGuard,
    options: &'a Options,
    sink: Option<&'a mut dyn DiagnosticSink>,
    path: Option<TracePath>,
}

/// What a node costs: its inline part, and the total including everything it
/// refers to.
#[derive(Clone, Copy, Debug)]
struct Charge {
    inline: u64,
    total: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChildCost {
    Total,
    BeyondInline,
}

impl<'a> Traversal<'a> {
    pub fn new(guard: &'a mut dyn CycleGuard, options: &'a Options) -> Self {
        Self {
            guard,
            options,
            sink: None,
            path: None,
        }
    }

    pub fn with_sink(mut self, sink: &'a mut dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self.path = Some(TracePath::root());
        self
    }

    /// Returns the size of `value` in bytes, including everything reachable
    /// from it that this traversal has not charged yet.
    pub fn measure(&mut self, value: &dyn Introspect) -> u64 {
        self.charge(value).total
    }

    fn charge(&mut self, value: &dyn Introspect) -> Charge {
        ensure_sufficient_stack(|| self.charge_shape(value))
    }

    fn charge_shape(&mut self, value: &dyn Introspect) -> Charge {
        let shape = value.shape();
        let inline = shape.inline_bytes() as u64;

        let (total, note) = match shape {
            Shape::Absent | Shape::Sequence(None) | Shape::Map(None) => (0, Note::Nil),

            Shape::Bool | Shape::Numeric { .. } => (inline, Note::Charged),

            Shape::String { len } => (inline + len as u64, Note::Charged),

            Shape::Sequence(Some(info)) => {
                let storage = info.capacity as u64 * info.element_size as u64;
                let elements = self.charge_children(value, self.nested_cost());
                (inline + storage + elements, Note::Charged)
            }

            Shape::Map(Some(info)) => {
                let buckets = self.options.map_overhead(info.len);
                let entries = self.charge_children(value, ChildCost::Total);
                (inline + buckets + entries, Note::Charged)
            }

            Shape::Record { .. } => {
                let fields = self.charge_children(value, self.nested_cost());
                (inline + fields, Note::Charged)
            }

            Shape::Pointer(None) | Shape::Dynamic(None) => (inline, Note::Nil),

            Shape::Pointer(Some(identity)) | Shape::Dynamic(Some(identity)) => {
                // Marked before descending, so a path leading back here stops.
                if self.guard.charge_once(identity) {
                    let payload = self.charge_children(value, ChildCost::Total);
                    (inline + payload, Note::Charged)
                } else {
                    (inline, Note::AlreadyCharged)
                }
            }

            Shape::Unsupported { reason, .. } => (inline, Note::Degraded(reason)),
        };

        self.emit(&shape, total, note);

        Charge { inline, total }
    }

    fn nested_cost(&self) -> ChildCost {
        match self.options.accounting {
            Accounting::AsObserved => ChildCost::Total,
            Accounting::Exclusive => ChildCost::BeyondInline,
        }
    }

    fn charge_children(&mut self, value: &dyn Introspect, cost: ChildCost) -> u64 {
        let mut children = Children {
            traversal: self,
            cost,
            sum: 0,
        };
        value.visit_children(&mut children);
        children.sum
    }

    fn emit(&mut self, shape: &Shape, bytes: u64, note: Note) {
        if let (Some(sink), Some(path)) = (self.sink.as_deref_mut(), self.path.as_ref()) {
            sink.record(TraceEvent {
                path: path.as_str().to_string(),
                kind: shape.kind(),
                bytes,
                identity: shape.identity(),
                note,
            });
        }
    }
}

struct Children<'t, 'a> {
    traversal: &'t mut Traversal<'a>,
    cost: ChildCost,
    sum: u64,
}

impl ChildVisitor for Children<'_, '_> {
    fn visit(&mut self, label: Label<'_>, child: &dyn Introspect) {
        if let Some(path) = self.traversal.path.as_mut() {
            path.push(label);
        }

        let charge = self.traversal.charge(child);

        if let Some(path) = self.traversal.path.as_mut() {
            path.pop();
        }

        self.sum += match self.cost {
            ChildCost::Total => charge.total,
            ChildCost::BeyondInline => charge.total - charge.inline,
        };
    }
}
