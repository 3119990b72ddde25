//! Structured mutation events.
//!
//! With the `tracing` feature enabled, [`graph_event!`] forwards to `tracing::trace!`;
//! without it the macro expands to nothing and its arguments are not evaluated.

macro_rules! graph_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "twin_graph", $($arg)*);
        }
    };
}

pub(crate) use graph_event;
