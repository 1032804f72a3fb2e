use crate::{model::Ordinal, obs::sink::AccessorEvent};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

thread_local! {
    static EVENT_STATE: RefCell<EventReport> = RefCell::new(EventReport::default());
}

///
/// EventReport
/// Ephemeral, in-memory counters for generated accessors.
/// Each thread folds into its own report.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub attributes: BTreeMap<String, AttributeCounters>,
}

impl EventReport {
    fn apply(&mut self, event: AccessorEvent<'_>) {
        match event {
            AccessorEvent::Defined {
                attribute,
                constants,
                methods,
            } => {
                let constants = to_count(constants);
                let methods = to_count(methods);

                self.ops.definitions = self.ops.definitions.saturating_add(1);
                self.ops.constants_defined = self.ops.constants_defined.saturating_add(constants);
                self.ops.methods_generated = self.ops.methods_generated.saturating_add(methods);

                let entry = self.attribute_mut(attribute);
                entry.definitions = entry.definitions.saturating_add(1);
            }

            AccessorEvent::Predicate {
                attribute, matched, ..
            } => {
                self.ops.predicate_calls = self.ops.predicate_calls.saturating_add(1);
                if matched {
                    self.ops.predicate_matches = self.ops.predicate_matches.saturating_add(1);
                }

                let entry = self.attribute_mut(attribute);
                entry.predicate_calls = entry.predicate_calls.saturating_add(1);
                if matched {
                    entry.predicate_matches = entry.predicate_matches.saturating_add(1);
                }
            }

            AccessorEvent::Mutation { attribute, ordinal } => {
                self.ops.mutations = self.ops.mutations.saturating_add(1);

                let entry = self.attribute_mut(attribute);
                entry.mutations = entry.mutations.saturating_add(1);
                entry.last_persisted = Some(ordinal);
            }

            AccessorEvent::MutationFailed { attribute, .. } => {
                self.ops.mutation_failures = self.ops.mutation_failures.saturating_add(1);

                let entry = self.attribute_mut(attribute);
                entry.mutation_failures = entry.mutation_failures.saturating_add(1);
            }
        }
    }

    fn attribute_mut(&mut self, attribute: &str) -> &mut AttributeCounters {
        self.attributes.entry(attribute.to_string()).or_default()
    }
}

///
/// EventOps
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Generation
    pub definitions: u64,
    pub constants_defined: u64,
    pub methods_generated: u64,

    // Predicates
    pub predicate_calls: u64,
    pub predicate_matches: u64,

    // Mutators
    pub mutations: u64,
    pub mutation_failures: u64,
}

///
/// AttributeCounters
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AttributeCounters {
    pub definitions: u64,
    pub predicate_calls: u64,
    pub predicate_matches: u64,
    pub mutations: u64,
    pub mutation_failures: u64,

    /// Ordinal written by the most recent successful mutation.
    pub last_persisted: Option<Ordinal>,
}

fn to_count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Fold one event into the thread-local report.
pub(crate) fn apply(event: AccessorEvent<'_>) {
    EVENT_STATE.with(|state| state.borrow_mut().apply(event));
}

/// Clone the current report.
pub(crate) fn snapshot() -> EventReport {
    EVENT_STATE.with(|state| state.borrow().clone())
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    EVENT_STATE.with(|state| *state.borrow_mut() = EventReport::default());
}
