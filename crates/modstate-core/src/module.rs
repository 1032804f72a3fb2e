use crate::{
    inflect::demodulize,
    model::{ColumnKey, Ordinal},
};
use std::collections::BTreeMap;

///
/// EnumModule
///
/// Constant namespace generated for one attribute: each label's final path
/// segment bound to its ordinal. A repeated label rebinds the constant to the
/// later position; `names` still lists every occurrence in order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumModule {
    attribute: String,
    names: Vec<String>,
    constants: BTreeMap<String, Ordinal>,
}

impl EnumModule {
    /// Bind every label to its zero-based position.
    #[must_use]
    pub fn build<S: AsRef<str>>(attribute: &str, labels: &[S]) -> Self {
        let mut names = Vec::with_capacity(labels.len());
        let mut constants = BTreeMap::new();

        for (index, label) in labels.iter().enumerate() {
            let name = demodulize(label.as_ref()).to_string();
            constants.insert(name.clone(), Ordinal::from_index(index));
            names.push(name);
        }

        Self {
            attribute: attribute.to_string(),
            names,
            constants,
        }
    }

    /// Attribute name as supplied to the generator.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub fn column(&self) -> ColumnKey {
        ColumnKey::for_attribute(&self.attribute)
    }

    /// Look up a constant by label. Namespaced labels resolve by their final
    /// segment, the same way they were bound.
    #[must_use]
    pub fn const_get(&self, label: &str) -> Option<Ordinal> {
        self.constants.get(demodulize(label)).copied()
    }

    /// Labels in definition order, as their final path segment.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Bound constants ordered by ordinal.
    #[must_use]
    pub fn constants(&self) -> Vec<(&str, Ordinal)> {
        let mut constants: Vec<_> = self
            .constants
            .iter()
            .map(|(name, ordinal)| (name.as_str(), *ordinal))
            .collect();
        constants.sort_by_key(|(_, ordinal)| *ordinal);

        constants
    }

    /// Label currently bound to `ordinal`, if any.
    #[must_use]
    pub fn label_for(&self, ordinal: Ordinal) -> Option<&str> {
        self.constants
            .iter()
            .find(|(_, bound)| **bound == ordinal)
            .map(|(name, _)| name.as_str())
    }

    /// Number of distinct constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

///
/// TESTS
///
