use std::cmp::Ordering;

use mazeai_core::CellId;

/// Entry of a priority-ordered frontier.
///
/// Ordered for use in a `BinaryHeap` (a max-heap) so that the smallest
/// `priority` pops first; equal priorities pop in insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) id: CellId,
    /// Accumulated path cost when this entry was pushed.
    pub(crate) cost: i64,
    /// Cost plus estimate; the heap key.
    pub(crate) priority: i64,
    pub(crate) seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
