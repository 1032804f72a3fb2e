//! Core runtime for modstate: ordinal constants, generated predicate and
//! mutator bindings, the host registry, and the event sink boundary.
//!
//! Given an attribute and an ordered list of labels, `define_enum` produces
//!
//! - a constant namespace binding each label to its zero-based ordinal,
//! - one `<label>?` predicate comparing the live field against that ordinal,
//! - one `<label>!` mutator writing the ordinal and persisting the field.
//!
//! This is not a state machine: any label may be set from any other.

pub mod accessor;
pub mod error;
pub mod inflect;
pub mod model;
pub mod module;
pub mod obs;
pub mod registry;
pub mod traits;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only; inflection helpers and observability stay in
/// their modules.
///

pub mod prelude {
    pub use crate::{
        accessor::{EnumAccessors, MethodKind, MethodName, define_enum},
        model::{ColumnKey, Field, Ordinal},
        module::EnumModule,
        registry::EnumRegistry,
        traits::Persist,
    };
}
