//! The shared iterator contract and the gap cursor every variant is built on.

use crate::error::{Direction, GraphError, Result};

/// Contract shared by every snapshot iterator variant.
pub trait SnapshotIterator {
    /// Element type; iterators hand out clones of their snapshot.
    type Item: Clone;

    /// Number of elements captured when the iterator was created.
    fn size(&self) -> usize;

    /// Returns an independent copy of the whole snapshot, in snapshot order.
    fn data(&self) -> Vec<Self::Item>;

    /// Returns the element most recently yielded by a cursor move.
    ///
    /// # Errors
    /// [`GraphError::NoCurrent`] before the first move or after [`reset`](Self::reset).
    fn current(&self) -> Result<&Self::Item>;

    /// Returns `true` if [`advance`](Self::advance) would yield an element.
    fn has_next(&self) -> bool;

    /// Moves the cursor over the next element and returns it.
    ///
    /// # Errors
    /// [`GraphError::Exhausted`] with [`Direction::Forward`] once every element was yielded.
    fn advance(&mut self) -> Result<&Self::Item>;

    /// Returns the cursor to its starting position and forgets the current element.
    fn reset(&mut self);
}

/// Backward motion, available on iterators that can step back over yielded elements.
pub trait Retreat: SnapshotIterator {
    /// Returns `true` if [`retreat`](Self::retreat) would yield an element.
    fn has_prev(&self) -> bool;

    /// Moves the cursor back over the previous element and returns it.
    ///
    /// # Errors
    /// [`GraphError::Exhausted`] with [`Direction::Backward`] at the starting position.
    fn retreat(&mut self) -> Result<&Self::Item>;
}

/// Owned copy of a collection plus a gap cursor over it.
///
/// `pos` is the gap index in `0..=items.len()`; `last` is the element most recently
/// stepped over.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot<T> {
    items: Vec<T>,
    pos: usize,
    last: Option<usize>,
}

impl<T> Snapshot<T> {
    /// Cursor before the first element.
    pub(crate) fn at_start(items: Vec<T>) -> Self {
        Self {
            items,
            pos: 0,
            last: None,
        }
    }

    /// Cursor after the last element.
    pub(crate) fn at_end(items: Vec<T>) -> Self {
        let pos = items.len();
        Self {
            items,
            pos,
            last: None,
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Elements left before the end.
    pub(crate) fn remaining_forward(&self) -> usize {
        self.items.len() - self.pos
    }

    /// Elements left before the start.
    pub(crate) fn remaining_backward(&self) -> usize {
        self.pos
    }

    pub(crate) fn current(&self) -> Result<&T> {
        self.last
            .and_then(|idx| self.items.get(idx))
            .ok_or(GraphError::NoCurrent)
    }

    pub(crate) fn current_mut(&mut self) -> Result<&mut T> {
        match self.last {
            Some(idx) => self.items.get_mut(idx).ok_or(GraphError::NoCurrent),
            None => Err(GraphError::NoCurrent),
        }
    }

    pub(crate) fn step_forward(&mut self) -> Result<&T> {
        if self.pos >= self.items.len() {
            return Err(GraphError::Exhausted {
                direction: Direction::Forward,
            });
        }
        let idx = self.pos;
        self.pos += 1;
        self.last = Some(idx);
        Ok(&self.items[idx])
    }

    pub(crate) fn step_backward(&mut self) -> Result<&T> {
        if self.pos == 0 {
            return Err(GraphError::Exhausted {
                direction: Direction::Backward,
            });
        }
        self.pos -= 1;
        self.last = Some(self.pos);
        Ok(&self.items[self.pos])
    }

    pub(crate) fn rewind_to(&mut self, pos: usize) {
        self.pos = pos;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_cursor_moves() {
        let mut snap = Snapshot::at_start(vec!['a', 'b']);
        assert_eq!(snap.current(), Err(GraphError::NoCurrent));
        assert_eq!(snap.step_forward(), Ok(&'a'));
        assert_eq!(snap.step_forward(), Ok(&'b'));
        assert!(snap.step_forward().is_err());
        // Failed moves keep the last yielded element current.
        assert_eq!(snap.current(), Ok(&'b'));
        assert_eq!(snap.step_backward(), Ok(&'b'));
        assert_eq!(snap.step_backward(), Ok(&'a'));
        assert_eq!(
            snap.step_backward(),
            Err(GraphError::Exhausted {
                direction: Direction::Backward
            })
        );
    }

    #[test]
    fn test_at_end_and_rewind() {
        let mut snap = Snapshot::at_end(vec![1, 2, 3]);
        assert_eq!(snap.remaining_forward(), 0);
        assert_eq!(snap.remaining_backward(), 3);
        assert_eq!(snap.step_backward(), Ok(&3));

        *snap.current_mut().unwrap() = 30;
        assert_eq!(snap.items(), &[1, 2, 30]);

        snap.rewind_to(0);
        assert!(snap.current().is_err());
        assert_eq!(snap.len(), 3);
    }
}
