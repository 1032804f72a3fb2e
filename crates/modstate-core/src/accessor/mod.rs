//! Generated accessors: one predicate and one mutator per label.
//!
//! Generation is an explicit build step. It returns plain bindings keyed by
//! their generated method name, and the host registers them once.

mod mutator;
mod predicate;
mod table;

pub use mutator::{Mutator, build_mutators};
pub use predicate::{Predicate, build_predicates};
pub use table::{EnumAccessors, define_enum};

use std::fmt;

///
/// MethodKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MethodKind {
    Predicate,
    Mutator,
}

impl MethodKind {
    /// Marker appended to the base name (`?` or `!`).
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Predicate => '?',
            Self::Mutator => '!',
        }
    }
}

///
/// MethodName
///
/// Generated method name: the label's base name plus its kind marker.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MethodName {
    base: String,
    kind: MethodKind,
}

impl MethodName {
    #[must_use]
    pub const fn new(base: String, kind: MethodKind) -> Self {
        Self { base, kind }
    }

    /// Parse a full method name such as `case_study?` or `case_study!`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let (kind, base) = if let Some(base) = name.strip_suffix(MethodKind::Predicate.marker()) {
            (MethodKind::Predicate, base)
        } else {
            (MethodKind::Mutator, name.strip_suffix(MethodKind::Mutator.marker())?)
        };

        Some(Self::new(base.to_string(), kind))
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub const fn kind(&self) -> MethodKind {
        self.kind
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.kind.marker())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_name_renders_marker() {
        let predicate = MethodName::new("case_study".to_string(), MethodKind::Predicate);
        let mutator = MethodName::new("case_study".to_string(), MethodKind::Mutator);

        assert_eq!(predicate.to_string(), "case_study?");
        assert_eq!(mutator.to_string(), "case_study!");
    }

    #[test]
    fn parse_requires_marker() {
        let parsed = MethodName::parse("peer_reviewed?").unwrap();
        assert_eq!(parsed.base(), "peer_reviewed");
        assert_eq!(parsed.kind(), MethodKind::Predicate);

        assert_eq!(
            MethodName::parse("peer_reviewed!").map(|name| name.kind()),
            Some(MethodKind::Mutator)
        );
        assert_eq!(MethodName::parse("peer_reviewed"), None);
    }
}
