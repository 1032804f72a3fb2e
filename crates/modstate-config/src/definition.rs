use crate::{error::ConfigError, validate::validate_config};
use modstate_core::{
    accessor::{EnumAccessors, define_enum},
    model::Field,
    module::EnumModule,
    registry::EnumRegistry,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

///
/// EnumDefinition
///
/// One attribute and its ordered labels. Order is significant: a label's
/// position is its ordinal.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumDefinition {
    pub attribute: String,

    #[serde(default)]
    pub labels: Vec<String>,
}

impl EnumDefinition {
    pub fn new<S: Into<String>>(
        attribute: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Constant namespace only, without accessors.
    #[must_use]
    pub fn module(&self) -> EnumModule {
        EnumModule::build(&self.attribute, &self.labels)
    }

    /// Generate the accessor table for a host record type.
    #[must_use]
    pub fn define<R>(&self, field: Field<R>) -> EnumAccessors<R> {
        define_enum(&self.attribute, &self.labels, field)
    }

    /// Generate and register into a host registry.
    pub fn register<'a, R>(
        &self,
        registry: &'a mut EnumRegistry<R>,
        field: Field<R>,
    ) -> &'a EnumModule {
        registry.define_enum(&self.attribute, &self.labels, field)
    }
}

///
/// EnumConfig
///
/// A set of definitions. In strict mode attributes and labels must be
/// PascalCase and labels must be unique within a definition; attributes must
/// always map to distinct columns.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumConfig {
    #[serde(default)]
    pub strict: bool,

    #[serde(default, rename = "enum")]
    pub enums: Vec<EnumDefinition>,
}

impl EnumConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let violations = validate_config(self);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }

    #[must_use]
    pub fn definition(&self, attribute: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|def| def.attribute == attribute)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY: &str = r#"
        strict = true

        [[enum]]
        attribute = "Category"
        labels = ["PeerReviewed", "NonPeerReviewed", "CaseStudy"]

        [[enum]]
        attribute = "Access"
        labels = ["Open", "Embargoed"]
    "#;

    #[test]
    fn parses_definitions_in_order() {
        let config = EnumConfig::from_toml_str(CATEGORY).unwrap();

        assert!(config.strict);
        assert_eq!(config.enums.len(), 2);

        let category = config.definition("Category").unwrap();
        assert_eq!(
            category,
            &EnumDefinition::new("Category", ["PeerReviewed", "NonPeerReviewed", "CaseStudy"])
        );
        assert!(config.definition("Stage").is_none());
    }

    #[test]
    fn module_binds_positions() {
        let config = EnumConfig::from_toml_str(CATEGORY).unwrap();
        let module = config.definition("Access").unwrap().module();

        assert_eq!(module.const_get("Embargoed").map(u32::from), Some(1));
        assert_eq!(module.column().as_str(), "access");
    }

    #[test]
    fn missing_labels_default_to_empty() {
        let config = EnumConfig::from_toml_str("[[enum]]\nattribute = \"Stage\"\n").unwrap();

        assert!(!config.strict);
        assert!(config.enums[0].labels.is_empty());
        assert!(config.enums[0].module().is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EnumConfig::from_toml_str("[[enum]\nattribute = ").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = EnumConfig::from_toml_str("[[enum]]\nattribute = 3\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
