use crate::{
    accessor::{MethodKind, MethodName},
    inflect::{demodulize, method_base_name},
    model::{Field, Ordinal},
    module::EnumModule,
    obs::{AccessorEvent, sink},
};
use std::fmt;

///
/// Predicate
///
/// Generated `<label>?` query: true iff the live field value equals the
/// label's constant.
///

pub struct Predicate<R> {
    name: MethodName,
    attribute: String,
    ordinal: Ordinal,
    get: fn(&R) -> Option<Ordinal>,
}

impl<R> Predicate<R> {
    #[must_use]
    pub const fn name(&self) -> &MethodName {
        &self.name
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Ordinal the field is compared against.
    #[must_use]
    pub const fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    #[must_use]
    pub fn call(&self, record: &R) -> bool {
        let matched = (self.get)(record) == Some(self.ordinal);

        sink::record(AccessorEvent::Predicate {
            attribute: &self.attribute,
            ordinal: self.ordinal,
            matched,
        });

        matched
    }
}

impl<R> Clone for Predicate<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            attribute: self.attribute.clone(),
            ordinal: self.ordinal,
            get: self.get,
        }
    }
}

impl<R> fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("attribute", &self.attribute)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

/// Build one predicate per label, in definition order.
///
/// Each predicate compares against the constant bound in `module`, so a
/// repeated label checks its last position.
#[must_use]
pub fn build_predicates<R, S: AsRef<str>>(
    module: &EnumModule,
    labels: &[S],
    field: &Field<R>,
) -> Vec<Predicate<R>> {
    labels
        .iter()
        .filter_map(|label| {
            let label = label.as_ref();
            let ordinal = module.const_get(demodulize(label))?;

            Some(Predicate {
                name: MethodName::new(method_base_name(label), MethodKind::Predicate),
                attribute: module.attribute().to_string(),
                ordinal,
                get: field.getter(),
            })
        })
        .collect()
}
