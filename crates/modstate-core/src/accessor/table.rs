use crate::{
    accessor::{MethodKind, MethodName, Mutator, Predicate, build_mutators, build_predicates},
    model::Field,
    module::EnumModule,
    obs::{AccessorEvent, sink},
    traits::Persist,
};
use std::collections::BTreeMap;

///
/// EnumAccessors
///
/// Closed accessor table for one attribute: its constant namespace plus the
/// generated predicates and mutators keyed by base name. When two labels
/// share a base name the later one wins.
///

#[derive(Debug)]
pub struct EnumAccessors<R> {
    module: EnumModule,
    predicates: BTreeMap<String, Predicate<R>>,
    mutators: BTreeMap<String, Mutator<R>>,
}

impl<R> EnumAccessors<R> {
    /// Assemble a table from separately built parts, in definition order.
    #[must_use]
    pub fn from_parts(
        module: EnumModule,
        predicates: Vec<Predicate<R>>,
        mutators: Vec<Mutator<R>>,
    ) -> Self {
        let predicates = predicates
            .into_iter()
            .map(|p| (p.name().base().to_string(), p))
            .collect();
        let mutators = mutators
            .into_iter()
            .map(|m| (m.name().base().to_string(), m))
            .collect();

        Self {
            module,
            predicates,
            mutators,
        }
    }

    #[must_use]
    pub const fn module(&self) -> &EnumModule {
        &self.module
    }

    #[must_use]
    pub fn predicate(&self, base: &str) -> Option<&Predicate<R>> {
        self.predicates.get(base)
    }

    #[must_use]
    pub fn mutator(&self, base: &str) -> Option<&Mutator<R>> {
        self.mutators.get(base)
    }

    pub fn predicates(&self) -> impl Iterator<Item = &Predicate<R>> {
        self.predicates.values()
    }

    pub fn mutators(&self) -> impl Iterator<Item = &Mutator<R>> {
        self.mutators.values()
    }

    /// Call the `<base>?` predicate; `None` if no such method was generated.
    #[must_use]
    pub fn is(&self, record: &R, base: &str) -> Option<bool> {
        self.predicate(base).map(|p| p.call(record))
    }

    /// Every generated method name, sorted.
    #[must_use]
    pub fn method_names(&self) -> Vec<MethodName> {
        let mut names: Vec<_> = self
            .predicates
            .keys()
            .map(|base| MethodName::new(base.clone(), MethodKind::Predicate))
            .chain(
                self.mutators
                    .keys()
                    .map(|base| MethodName::new(base.clone(), MethodKind::Mutator)),
            )
            .collect();
        names.sort();

        names
    }

    /// Number of generated methods (predicates + mutators).
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len() + self.mutators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.mutators.is_empty()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        EnumModule,
        BTreeMap<String, Predicate<R>>,
        BTreeMap<String, Mutator<R>>,
    ) {
        (self.module, self.predicates, self.mutators)
    }
}

impl<R: Persist> EnumAccessors<R> {
    /// Call the `<base>!` mutator; `None` if no such method was generated.
    pub fn set(&self, record: &mut R, base: &str) -> Option<Result<R::Output, R::Error>> {
        self.mutator(base).map(|m| m.call(record))
    }
}

/// Generate the constant namespace, predicates and mutators for one
/// attribute. Never fails; an empty label list yields an empty table.
#[must_use]
pub fn define_enum<R, S: AsRef<str>>(
    attribute: &str,
    labels: &[S],
    field: Field<R>,
) -> EnumAccessors<R> {
    let module = EnumModule::build(attribute, labels);
    let predicates = build_predicates(&module, labels, &field);
    let mutators = build_mutators(&module, labels, &field);
    let accessors = EnumAccessors::from_parts(module, predicates, mutators);

    sink::record(AccessorEvent::Defined {
        attribute,
        constants: accessors.module().len(),
        methods: accessors.len(),
    });

    accessors
}
