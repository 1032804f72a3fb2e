//! Observability: accessor events and the sink boundary they flow through.
//!
//! Generator and accessor code only ever call `sink::record`. The default
//! sink folds events into a thread-local `EventReport`; tests and hosts can
//! install a scoped override with `with_event_sink`.

pub(crate) mod report;
pub(crate) mod sink;

// re-exports
pub use report::{AttributeCounters, EventOps, EventReport};
pub use sink::{AccessorEvent, EventSink, event_report, event_reset, with_event_sink};
