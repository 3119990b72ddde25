use super::cursor::{Snapshot, SnapshotIterator};
use crate::error::{Direction, GraphError, Result};

/// Walks a snapshot from the last element to the first.
///
/// [`data`](SnapshotIterator::data) still reports the snapshot in its original order;
/// only the cursor runs backwards.
#[derive(Debug, Clone)]
pub struct ReverseIter<T> {
    snapshot: Snapshot<T>,
}

impl<T: Clone> ReverseIter<T> {
    /// Captures `items` with the cursor after the last element.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            snapshot: Snapshot::at_end(items),
        }
    }

    /// Mutable access to the current element of the snapshot copy.
    ///
    /// # Errors
    /// [`GraphError::NoCurrent`](crate::GraphError::NoCurrent) before the first move.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        self.snapshot.current_mut()
    }
}

impl<T: Clone> SnapshotIterator for ReverseIter<T> {
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
        self.snapshot.remaining_backward() > 0
    }

    fn advance(&mut self) -> Result<&T> {
        // Walking backwards through the snapshot is forward motion for this cursor.
        self.snapshot
            .step_backward()
            .map_err(|_| GraphError::Exhausted {
                direction: Direction::Forward,
            })
    }

    fn reset(&mut self) {
        let end = self.snapshot.len();
        self.snapshot.rewind_to(end);
    }
}

impl<T: Clone> Iterator for ReverseIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.snapshot.step_backward().ok().cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.remaining_backward();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ReverseIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_order() {
        let it = ReverseIter::new(vec![1, 2, 3]);
        assert_eq!(it.data(), vec![1, 2, 3]);
        assert_eq!(it.collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_reverse_exhaustion_is_forward_for_the_caller() {
        let mut it = ReverseIter::new(vec!['a']);
        assert!(it.has_next());
        assert_eq!(it.advance(), Ok(&'a'));
        assert!(!it.has_next());
        assert_eq!(
            it.advance(),
            Err(GraphError::Exhausted {
                direction: Direction::Forward
            })
        );

        it.reset();
        assert_eq!(it.len(), 1);
        assert_eq!(it.advance(), Ok(&'a'));
    }

    #[test]
    fn test_empty() {
        let mut it = ReverseIter::<u8>::new(Vec::new());
        assert_eq!(it.size(), 0);
        assert!(!it.has_next());
        assert!(it.advance().is_err());
        assert!(it.current().is_err());
    }
}
