use super::cursor::{Retreat, SnapshotIterator};
use crate::error::Result;

/// Narrows any snapshot iterator to read-only access.
///
/// The wrapper forwards traversal and hides every operation that hands out mutable
/// access (`current_mut`, `into_data`). There is no way back to the wrapped iterator.
#[derive(Debug, Clone)]
pub struct ReadOnly<I> {
    inner: I,
}

impl<I: SnapshotIterator> ReadOnly<I> {
    /// Wraps `inner`.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: SnapshotIterator> SnapshotIterator for ReadOnly<I> {
    type Item = I::Item;

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn data(&self) -> Vec<I::Item> {
        self.inner.data()
    }

    fn current(&self) -> Result<&I::Item> {
        self.inner.current()
    }

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn advance(&mut self) -> Result<&I::Item> {
        self.inner.advance()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<I: Retreat> Retreat for ReadOnly<I> {
    fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    fn retreat(&mut self) -> Result<&I::Item> {
        self.inner.retreat()
    }
}

impl<I: Iterator> Iterator for ReadOnly<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for ReadOnly<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{BidirectionalIter, ForwardIter, ReverseIter};

    #[test]
    fn test_forwards_traversal() {
        let mut it = ReadOnly::new(ForwardIter::new(vec![1, 2]));
        assert_eq!(it.size(), 2);
        assert_eq!(it.advance(), Ok(&1));
        assert_eq!(it.current(), Ok(&1));
        assert_eq!(it.next(), Some(2));
        assert!(!it.has_next());
    }

    #[test]
    fn test_keeps_backward_motion() {
        let mut it = ReadOnly::new(BidirectionalIter::new(vec!["a", "b"]));
        it.advance().unwrap();
        assert!(it.has_prev());
        assert_eq!(it.retreat(), Ok(&"a"));
    }

    #[test]
    fn test_wraps_reverse() {
        let it = ReadOnly::new(ReverseIter::new(vec![1, 2, 3]));
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
