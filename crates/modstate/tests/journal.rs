//! End-to-end: a host type wires its enum fields once and calls the
//! generated accessors through the registry.
use modstate::{core::obs, prelude::*};
use std::sync::LazyLock;

#[derive(Clone, Debug, PartialEq, Eq)]
enum StoreError {
    ReadOnly,
}

#[derive(Debug, Default)]
struct Submission {
    category: Option<u32>,
    read_only: bool,
    writes: u32,
}

impl Persist for Submission {
    type Output = u32;
    type Error = StoreError;

    fn persist_field(&mut self, column: &ColumnKey) -> Result<u32, StoreError> {
        assert_eq!(column.as_str(), "category");
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.writes += 1;

        Ok(self.writes)
    }
}

static ACCESSORS: LazyLock<EnumRegistry<Submission>> = LazyLock::new(|| {
    let mut registry = EnumRegistry::new();
    registry.define_enum(
        "Category",
        &["PeerReviewed", "NonPeerReviewed", "CaseStudy"],
        Field::new(
            |s: &Submission| s.category.map(Ordinal::new),
            |s: &mut Submission, ordinal: Ordinal| s.category = Some(ordinal.get()),
        ),
    );

    registry
});

impl Submission {
    fn is(&self, name: &str) -> bool {
        ACCESSORS.is(self, name).unwrap_or(false)
    }

    fn set(&mut self, name: &str) -> Result<u32, StoreError> {
        ACCESSORS
            .set(self, name)
            .unwrap_or_else(|| panic!("no mutator {name}!"))
    }
}

#[test]
fn host_methods_round_trip() {
    let mut submission = Submission {
        category: Some(1),
        ..Submission::default()
    };

    assert!(!submission.is("peer_reviewed"));
    assert!(submission.is("non_peer_reviewed"));
    assert!(!submission.is("case_study"));

    assert_eq!(submission.set("case_study"), Ok(1));
    assert!(submission.is("case_study"));
    assert_eq!(submission.category, Some(2));
}

#[test]
fn constant_namespace_is_reachable() {
    let module = ACCESSORS.module("Category").unwrap();

    assert_eq!(module.const_get("PeerReviewed"), Some(Ordinal::new(0)));
    assert_eq!(module.names(), ["PeerReviewed", "NonPeerReviewed", "CaseStudy"]);
}

#[test]
fn redefinition_replaces_instead_of_stacking() {
    let field = Field::new(
        |s: &Submission| s.category.map(Ordinal::new),
        |s: &mut Submission, ordinal: Ordinal| s.category = Some(ordinal.get()),
    );
    let labels = ["PeerReviewed", "NonPeerReviewed", "CaseStudy"];
    let mut registry = EnumRegistry::new();

    registry.define_enum("Category", &labels, field);
    let once = registry.method_names();
    registry.define_enum("Category", &labels, field);

    assert_eq!(registry.method_names(), once);
    assert_eq!(registry.modules().count(), 1);

    let mut submission = Submission::default();
    assert_eq!(registry.set(&mut submission, "case_study"), Some(Ok(1)));
    assert_eq!(submission.writes, 1);
}

#[test]
fn redefinition_with_new_labels_replaces_namespace() {
    let field = Field::new(
        |s: &Submission| s.category.map(Ordinal::new),
        |s: &mut Submission, ordinal: Ordinal| s.category = Some(ordinal.get()),
    );
    let mut registry = EnumRegistry::new();

    registry.define_enum(
        "Category",
        &["PeerReviewed", "NonPeerReviewed", "CaseStudy"],
        field,
    );
    registry.define_enum("Category", &["Draft", "Published"], field);

    let module = registry.module("Category").unwrap();
    assert_eq!(module.names(), ["Draft", "Published"]);
    assert_eq!(module.const_get("CaseStudy"), None);
    assert_eq!(module.const_get("Published"), Some(Ordinal::new(1)));
    assert_eq!(registry.modules().count(), 1);

    // methods the new labels no longer generate stay registered
    assert!(registry.responds_to("draft!"));
    assert!(registry.responds_to("case_study?"));
    assert!(registry.responds_to("case_study!"));
    assert_eq!(registry.method_names().len(), 10);

    let mut submission = Submission::default();
    assert_eq!(registry.set(&mut submission, "draft"), Some(Ok(1)));
    assert_eq!(submission.category, Some(0));
    assert_eq!(registry.is(&submission, "draft"), Some(true));
    assert_eq!(registry.is(&submission, "peer_reviewed"), Some(true));

    // a leftover binding keeps the ordinal it was generated with
    assert_eq!(registry.set(&mut submission, "case_study"), Some(Ok(2)));
    assert_eq!(submission.category, Some(2));
}

#[test]
fn store_failure_reaches_caller() {
    let mut submission = Submission {
        read_only: true,
        ..Submission::default()
    };

    obs::event_reset();
    assert_eq!(submission.set("peer_reviewed"), Err(StoreError::ReadOnly));
    assert_eq!(obs::event_report().ops.mutation_failures, 1);
}

#[cfg(feature = "config")]
#[test]
fn config_feature_defines_the_same_accessors() {
    let config = EnumConfig::from_toml_str(
        "[[enum]]\nattribute = \"Category\"\nlabels = [\"PeerReviewed\", \"NonPeerReviewed\", \"CaseStudy\"]\n",
    )
    .unwrap();
    let module = config.definition("Category").unwrap().module();

    assert_eq!(Some(&module), ACCESSORS.module("Category"));
    assert!(!modstate::VERSION.is_empty());
}
