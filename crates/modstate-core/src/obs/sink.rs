//! Event sink boundary.
//!
//! Accessor code MUST NOT touch report state directly. All instrumentation
//! flows through `AccessorEvent` and `EventSink`.
use crate::{model::Ordinal, obs::report};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn EventSink>>> = const { RefCell::new(None) };
}

///
/// AccessorEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessorEvent<'a> {
    Defined {
        attribute: &'a str,
        constants: usize,
        methods: usize,
    },
    Predicate {
        attribute: &'a str,
        ordinal: Ordinal,
        matched: bool,
    },
    Mutation {
        attribute: &'a str,
        ordinal: Ordinal,
    },
    MutationFailed {
        attribute: &'a str,
        ordinal: Ordinal,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: AccessorEvent<'_>);
}

/// GlobalEventSink
/// Default sink that folds events into the thread-local report.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalEventSink;

impl EventSink for GlobalEventSink {
    fn record(&self, event: AccessorEvent<'_>) {
        report::apply(event);
    }
}

pub(crate) fn record(event: AccessorEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GlobalEventSink.record(event),
    }
}

/// Snapshot the thread-local report.
#[must_use]
pub fn event_report() -> report::EventReport {
    report::snapshot()
}

/// Reset the thread-local report.
pub fn event_reset() {
    report::reset();
}

/// Run a closure with a temporary sink override.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_event_sink<T>(sink: Rc<dyn EventSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn EventSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
