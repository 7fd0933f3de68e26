use crate::Identity;
use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Remembers which allocations have already been charged.
pub trait CycleGuard {
    /// When first called on a given identity returns true, else returns false.
    fn charge_once(&mut self, identity: Identity) -> bool;
}

impl CycleGuard for BTreeSet<Identity> {
    fn charge_once(&mut self, identity: Identity) -> bool {
        self.insert(identity)
    }
}

impl<S: BuildHasher> CycleGuard for HashSet<Identity, S> {
    fn charge_once(&mut self, identity: Identity) -> bool {
        self.insert(identity)
    }
}

/// The guard a top-level measurement starts from.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: FxHashSet<Identity>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.seen.contains(identity)
    }

    /// Number of distinct allocations charged so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl CycleGuard for VisitedSet {
    fn charge_once(&mut self, identity: Identity) -> bool {
        self.seen.insert(identity)
    }
}
