//! Slot arenas backing the graph's vertex and half-edge storage.

pub(crate) mod pool;

pub(crate) use pool::Pool;
