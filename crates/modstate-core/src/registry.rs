use crate::{
    accessor::{EnumAccessors, MethodKind, MethodName, Mutator, Predicate, define_enum},
    model::Field,
    module::EnumModule,
    traits::Persist,
};
use std::collections::{BTreeMap, btree_map::Entry};

///
/// EnumRegistry
///
/// Accessor tables for one host record type. Constant namespaces are keyed
/// by attribute; generated methods share one flat table, so a method name
/// generated again (by any attribute) replaces the earlier binding.
///

#[derive(Debug)]
pub struct EnumRegistry<R> {
    modules: BTreeMap<String, EnumModule>,
    predicates: BTreeMap<String, Predicate<R>>,
    mutators: BTreeMap<String, Mutator<R>>,
}

impl<R> EnumRegistry<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
            predicates: BTreeMap::new(),
            mutators: BTreeMap::new(),
        }
    }

    /// Generate and register accessors for `attribute`.
    ///
    /// Running it again for the same attribute replaces the namespace and
    /// every method it generates; nothing is stacked.
    pub fn define_enum<S: AsRef<str>>(
        &mut self,
        attribute: &str,
        labels: &[S],
        field: Field<R>,
    ) -> &EnumModule {
        self.register(define_enum(attribute, labels, field))
    }

    /// Register a table built elsewhere (e.g. from the split builders).
    pub fn register(&mut self, accessors: EnumAccessors<R>) -> &EnumModule {
        let (module, predicates, mutators) = accessors.into_parts();

        self.predicates.extend(predicates);
        self.mutators.extend(mutators);

        match self.modules.entry(module.attribute().to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(module);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(module),
        }
    }

    #[must_use]
    pub fn module(&self, attribute: &str) -> Option<&EnumModule> {
        self.modules.get(attribute)
    }

    pub fn modules(&self) -> impl Iterator<Item = &EnumModule> {
        self.modules.values()
    }

    #[must_use]
    pub fn predicate(&self, base: &str) -> Option<&Predicate<R>> {
        self.predicates.get(base)
    }

    #[must_use]
    pub fn mutator(&self, base: &str) -> Option<&Mutator<R>> {
        self.mutators.get(base)
    }

    /// Call the `<base>?` predicate; `None` if no such method exists.
    #[must_use]
    pub fn is(&self, record: &R, base: &str) -> Option<bool> {
        self.predicate(base).map(|p| p.call(record))
    }

    /// Whether a full method name (`case_study?`, `case_study!`) exists.
    #[must_use]
    pub fn responds_to(&self, name: &str) -> bool {
        MethodName::parse(name).is_some_and(|name| match name.kind() {
            MethodKind::Predicate => self.predicates.contains_key(name.base()),
            MethodKind::Mutator => self.mutators.contains_key(name.base()),
        })
    }

    /// Every registered method name, sorted.
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
}

impl<R: Persist> EnumRegistry<R> {
    /// Call the `<base>!` mutator; `None` if no such method exists.
    pub fn set(&self, record: &mut R, base: &str) -> Option<Result<R::Output, R::Error>> {
        self.mutator(base).map(|m| m.call(record))
    }
}

impl<R> Default for EnumRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
