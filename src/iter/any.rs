use super::bidirectional::BidirectionalIter;
use super::cursor::SnapshotIterator;
use super::forward::ForwardIter;
use super::reverse::ReverseIter;
use crate::error::Result;

/// Selects the traversal variant an iterator factory produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IterKind {
    /// First to last.
    #[default]
    Forward,
    /// Last to first.
    Reverse,
    /// Single cursor movable both ways.
    Bidirectional,
}

/// Closed set of traversal variants behind the shared contract.
#[derive(Debug, Clone)]
pub enum AnyIter<T> {
    /// See [`ForwardIter`].
    Forward(ForwardIter<T>),
    /// See [`ReverseIter`].
    Reverse(ReverseIter<T>),
    /// See [`BidirectionalIter`].
    Bidirectional(BidirectionalIter<T>),
}

impl<T: Clone> AnyIter<T> {
    /// Captures `items` in the variant named by `kind`.
    pub fn new(kind: IterKind, items: Vec<T>) -> Self {
        match kind {
            IterKind::Forward => AnyIter::Forward(ForwardIter::new(items)),
            IterKind::Reverse => AnyIter::Reverse(ReverseIter::new(items)),
            IterKind::Bidirectional => AnyIter::Bidirectional(BidirectionalIter::new(items)),
        }
    }

    /// The variant this iterator was built as.
    pub fn kind(&self) -> IterKind {
        match self {
            AnyIter::Forward(_) => IterKind::Forward,
            AnyIter::Reverse(_) => IterKind::Reverse,
            AnyIter::Bidirectional(_) => IterKind::Bidirectional,
        }
    }

    /// Returns the bidirectional cursor, if this is one.
    pub fn as_bidirectional(&mut self) -> Option<&mut BidirectionalIter<T>> {
        match self {
            AnyIter::Bidirectional(it) => Some(it),
            _ => None,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $it:ident => $body:expr) => {
        match $self {
            AnyIter::Forward($it) => $body,
            AnyIter::Reverse($it) => $body,
            AnyIter::Bidirectional($it) => $body,
        }
    };
}

impl<T: Clone> SnapshotIterator for AnyIter<T> {
    type Item = T;

    fn size(&self) -> usize {
        dispatch!(self, it => it.size())
    }

    fn data(&self) -> Vec<T> {
        dispatch!(self, it => it.data())
    }

    fn current(&self) -> Result<&T> {
        dispatch!(self, it => it.current())
    }

    fn has_next(&self) -> bool {
        dispatch!(self, it => it.has_next())
    }

    fn advance(&mut self) -> Result<&T> {
        dispatch!(self, it => it.advance())
    }

    fn reset(&mut self) {
        dispatch!(self, it => it.reset());
    }
}

impl<T: Clone> Iterator for AnyIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        dispatch!(self, it => it.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        dispatch!(self, it => it.size_hint())
    }
}

impl<T: Clone> ExactSizeIterator for AnyIter<T> {}
