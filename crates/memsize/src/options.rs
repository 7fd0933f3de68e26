/// Default overhead charged per map bucket.
pub const MAP_BUCKET_BYTES: u64 = 48;

/// Default number of entries assumed to share one bucket.
pub const MAP_ENTRIES_PER_BUCKET: u64 = 8;

/// How the static part of record fields and sequence elements is charged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accounting {
    /// A record charges its static size and then every field in full; a
    /// sequence charges its whole capacity and then every element in full.
    /// Fixed-size children are therefore counted twice. This is an upper
    /// bound.
    #[default]
    AsObserved,

    /// Fields and elements are charged only for what lies beyond their own
    /// inline storage, which the parent already paid for.
    Exclusive,
}

/// Heuristics and policy for a measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub accounting: Accounting,
    pub map_bucket_bytes: u64,
    pub map_entries_per_bucket: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            accounting: Accounting::default(),
            map_bucket_bytes: MAP_BUCKET_BYTES,
            map_entries_per_bucket: MAP_ENTRIES_PER_BUCKET,
        }
    }
}

impl Options {
    pub fn accounting(mut self, accounting: Accounting) -> Self {
        self.accounting = accounting;
        self
    }

    pub fn map_buckets(mut self, bucket_bytes: u64, entries_per_bucket: u64) -> Self {
        self.map_bucket_bytes = bucket_bytes;
        self.map_entries_per_bucket = entries_per_bucket;
        self
    }

    /// Estimated bucket storage of a map holding `len` entries.
    pub fn map_overhead(&self, len: usize) -> u64 {
        let per_bucket = self.map_entries_per_bucket.max(1);
        (len as u64).div_ceil(per_bucket) * self.map_bucket_bytes
    }
}
