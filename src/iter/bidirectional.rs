use super::cursor::{Retreat, Snapshot, SnapshotIterator};
use crate::error::Result;

/// A single cursor that can move both ways over a snapshot.
///
/// The cursor starts before the first element. Moving forward past the last element
/// fails with [`Direction::Forward`](crate::Direction::Forward); moving back from the
/// start fails with [`Direction::Backward`](crate::Direction::Backward). After walking
/// off the end, [`retreat`](Retreat::retreat) returns the last element seen.
#[derive(Debug, Clone)]
pub struct BidirectionalIter<T> {
    snapshot: Snapshot<T>,
}

impl<T: Clone> BidirectionalIter<T> {
    /// Captures `items` with the cursor before the first element.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            snapshot: Snapshot::at_start(items),
        }
    }

    /// Mutable access to the current element of the snapshot copy.
    ///
    /// # Errors
    /// [`GraphError::NoCurrent`](crate::GraphError::NoCurrent) before the first move.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        self.snapshot.current_mut()
    }

    /// Number of elements already stepped over in the forward direction.
    pub fn position(&self) -> usize {
        self.snapshot.remaining_backward()
    }
}

impl<T: Clone> SnapshotIterator for BidirectionalIter<T> {
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

impl<T: Clone> Retreat for BidirectionalIter<T> {
    fn has_prev(&self) -> bool {
        self.snapshot.remaining_backward() > 0
    }

    fn retreat(&mut self) -> Result<&T> {
        self.snapshot.step_backward()
    }
}

impl<T: Clone> Iterator for BidirectionalIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.snapshot.step_forward().ok().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.remaining_forward();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for BidirectionalIter<T> {}
