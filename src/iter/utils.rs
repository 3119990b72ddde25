//! Helpers built only on the [`SnapshotIterator`] contract.
//!
//! Each helper consumes elements from the cursor's current position onward, so calling
//! one after partial traversal only sees what is left.

use super::cursor::SnapshotIterator;

/// Advances to the end, collecting every element stepped over.
pub fn drain<I: SnapshotIterator>(iter: &mut I) -> Vec<I::Item> {
    let mut out = Vec::with_capacity(iter.size());
    while iter.has_next() {
        match iter.advance() {
            Ok(item) => out.push(item.clone()),
            Err(_) => break,
        }
    }
    out
}

/// Advances to the end, returning how many elements were stepped over.
pub fn count<I: SnapshotIterator>(iter: &mut I) -> usize {
    let mut n = 0;
    while iter.has_next() && iter.advance().is_ok() {
        n += 1;
    }
    n
}

/// Advances until `pred` matches and returns a copy of the matching element.
///
/// On a match the cursor stays on it, so [`SnapshotIterator::current`] returns the same
/// element. Returns `None` with the cursor at the end when nothing matches.
pub fn find<I, P>(iter: &mut I, mut pred: P) -> Option<I::Item>
where
    I: SnapshotIterator,
    P: FnMut(&I::Item) -> bool,
{
    while iter.has_next() {
        let item = iter.advance().ok()?;
        if pred(item) {
            return Some(item.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::{BidirectionalIter, ForwardIter, ReverseIter};

    #[test]
    fn test_drain_from_current_position() {
        let mut it = ForwardIter::new(vec![1, 2, 3]);
        it.advance().unwrap();
        assert_eq!(drain(&mut it), vec![2, 3]);
        assert!(!it.has_next());
        assert!(drain(&mut it).is_empty());
    }

    #[test]
    fn test_count() {
        let mut it = ReverseIter::new(vec!['a', 'b', 'c']);
        assert_eq!(count(&mut it), 3);
        it.reset();
        assert_eq!(count(&mut it), it.size());
    }

    #[test]
    fn test_find_leaves_cursor_on_match() {
        let mut it = BidirectionalIter::new(vec![5, 8, 13, 21]);
        assert_eq!(find(&mut it, |x| x % 2 == 0), Some(8));
        assert_eq!(it.current(), Ok(&8));
        assert_eq!(find(&mut it, |x| *x > 100), None);
        assert!(!it.has_next());
    }
}
