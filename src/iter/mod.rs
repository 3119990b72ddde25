//! Snapshot iterators over vertices, edges, and neighbor lists.
//!
//! Every iterator copies its target collection when it is created, so it is never
//! invalidated by later mutation of the graph; re-acquire an iterator to observe changes.
//!
//! All variants share the [`SnapshotIterator`] contract and use a *gap cursor*: the
//! position sits between elements, starting before the first one (after the last one for
//! [`ReverseIter`]). [`SnapshotIterator::advance`] returns the element it steps over and
//! [`SnapshotIterator::current`] repeats the most recently returned element.
//!
//! The variant set is closed: [`AnyIter`] is the tagged union selected by [`IterKind`].

mod any;
mod bidirectional;
mod cursor;
mod forward;
mod read_only;
mod reverse;
pub mod utils;

pub use any::{AnyIter, IterKind};
pub use bidirectional::BidirectionalIter;
pub use cursor::{Retreat, SnapshotIterator};
pub use forward::ForwardIter;
pub use read_only::ReadOnly;
pub use reverse::ReverseIter;
