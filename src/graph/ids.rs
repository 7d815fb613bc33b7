use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Opaque identifier of a vertex.
///
/// Ids are never zero; zero is reserved as the "invalid" id at raw-integer
/// boundaries (FFI, Python, HTTP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(NonZeroU64);

impl VertexId {
    /// Wraps a raw id, returning `None` for the reserved value 0
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(VertexId)
    }

    /// Returns the raw id
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Opaque identifier of an edge, drawn from the same space as [`VertexId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(NonZeroU64);

impl EdgeId {
    /// Wraps a raw id, returning `None` for the reserved value 0
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(EdgeId)
    }

    /// Returns the raw id
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Monotonic counter shared by vertices and edges, so the two id kinds never collide
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: NonZeroU64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1
    pub fn new() -> Self {
        IdAllocator {
            next: NonZeroU64::MIN,
        }
    }

    pub fn next_vertex(&mut self) -> VertexId {
        VertexId(self.allocate())
    }

    pub fn next_edge(&mut self) -> EdgeId {
        EdgeId(self.allocate())
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next.get() - 1
    }

    fn allocate(&mut self) -> NonZeroU64 {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .expect("identifier space exhausted");
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
