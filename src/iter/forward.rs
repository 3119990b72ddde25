use super::cursor::{Snapshot, SnapshotIterator};
use crate::error::Result;

/// Walks a snapshot from the first element to the last.
///
/// Order is insertion order for vertices and discovery order for edges and neighbors.
#[derive(Debug, Clone)]
pub struct ForwardIter<T> {
    snapshot: Snapshot<T>,
}

impl<T: Clone> ForwardIter<T> {
    /// Captures `items` with the cursor before the first element.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            snapshot: Snapshot::at_start(items),
        }
    }

    /// Mutable access to the current element of the snapshot copy.
    ///
    /// Only the iterator's own copy changes; the graph is never reachable from here.
    ///
    /// # Errors
    /// [`GraphError::NoCurrent`](crate::GraphError::NoCurrent) before the first move.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        self.snapshot.current_mut()
    }

    /// Consumes the iterator, returning its snapshot.
    pub fn into_data(self) -> Vec<T> {
        self.snapshot.items().to_vec()
    }
}

impl<T: Clone> SnapshotIterator for ForwardIter<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.snapshot.len()
    }

    fn data(&self) -> Vec<T> {
        self.snapshot.items().to_vec()
    }

    fn current(&self) -> Result<&T> {
        self.snapshot.current()
    }

    fn has_next(&self) -> bool {
        self.snapshot.remaining_forward() > 0
    }

    fn advance(&mut self) -> Result<&T> {
        self.snapshot.step_forward()
    }

    fn reset(&mut self) {
        self.snapshot.rewind_to(0);
    }
}

impl<T: Clone> Iterator for ForwardIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.snapshot.step_forward().ok().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.remaining_forward();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ForwardIter<T> {}
