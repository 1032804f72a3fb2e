use crate::{
    accessor::{MethodKind, MethodName},
    inflect::{demodulize, method_base_name},
    model::{ColumnKey, Field, Ordinal},
    module::EnumModule,
    obs::{AccessorEvent, sink},
    traits::Persist,
};
use std::fmt;

///
/// Mutator
///
/// Generated `<label>!` command: writes the label's ordinal into the field,
/// then persists that one field through the host.
///

pub struct Mutator<R> {
    name: MethodName,
    attribute: String,
    column: ColumnKey,
    ordinal: Ordinal,
    set: fn(&mut R, Ordinal),
}

impl<R> Mutator<R> {
    #[must_use]
    pub const fn name(&self) -> &MethodName {
        &self.name
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub const fn column(&self) -> &ColumnKey {
        &self.column
    }

    /// Ordinal written by this mutator.
    #[must_use]
    pub const fn ordinal(&self) -> Ordinal {
        self.ordinal
    }
}

impl<R: Persist> Mutator<R> {
    /// Unconditional write + persist. The host's result is returned as-is;
    /// on failure the in-memory field keeps the written ordinal.
    pub fn call(&self, record: &mut R) -> Result<R::Output, R::Error> {
        (self.set)(record, self.ordinal);

        let result = record.persist_field(&self.column);

        let event = if result.is_ok() {
            AccessorEvent::Mutation {
                attribute: &self.attribute,
                ordinal: self.ordinal,
            }
        } else {
            AccessorEvent::MutationFailed {
                attribute: &self.attribute,
                ordinal: self.ordinal,
            }
        };
        sink::record(event);

        result
    }
}

impl<R> Clone for Mutator<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            attribute: self.attribute.clone(),
            column: self.column.clone(),
            ordinal: self.ordinal,
            set: self.set,
        }
    }
}

impl<R> fmt::Debug for Mutator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator")
            .field("name", &self.name)
            .field("attribute", &self.attribute)
            .field("column", &self.column)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

/// Build one mutator per label, in definition order.
#[must_use]
pub fn build_mutators<R, S: AsRef<str>>(
    module: &EnumModule,
    labels: &[S],
    field: &Field<R>,
) -> Vec<Mutator<R>> {
    let column = module.column();

    labels
        .iter()
        .filter_map(|label| {
            let label = label.as_ref();
            let ordinal = module.const_get(demodulize(label))?;

            Some(Mutator {
                name: MethodName::new(method_base_name(label), MethodKind::Mutator),
                attribute: module.attribute().to_string(),
                column: column.clone(),
                ordinal,
                set: field.setter(),
            })
        })
        .collect()
}
