use crate::definition::{EnumConfig, EnumDefinition};
use convert_case::{Case, Casing};
use modstate_core::inflect::demodulize;
use std::collections::BTreeSet;

/// Collect every violation in the config; empty means valid.
pub(crate) fn validate_config(config: &EnumConfig) -> Vec<String> {
    let mut errs = Vec::new();
    let mut columns = BTreeSet::new();

    for def in &config.enums {
        if def.attribute.is_empty() {
            errs.push("attribute name must not be empty".to_string());
            continue;
        }

        // generated mutators write to the lowercased attribute
        if !columns.insert(def.attribute.to_lowercase()) {
            errs.push(format!(
                "attribute '{}' maps to column '{}' already used by another definition",
                def.attribute,
                def.attribute.to_lowercase()
            ));
        }

        if config.strict {
            validate_strict(def, &mut errs);
        }
    }

    errs
}

fn validate_strict(def: &EnumDefinition, errs: &mut Vec<String>) {
    let attribute = &def.attribute;

    if !is_pascal(attribute) {
        errs.push(format!("attribute '{attribute}' must be PascalCase"));
    }

    let mut seen = BTreeSet::new();
    for label in &def.labels {
        let segment = demodulize(label);

        if segment.is_empty() {
            errs.push(format!("{attribute}: label '{label}' has no name segment"));
            continue;
        }
        if !is_pascal(segment) {
            errs.push(format!("{attribute}: label '{label}' must be PascalCase"));
        }
        if !seen.insert(segment) {
            errs.push(format!("{attribute}: label '{segment}' is defined more than once"));
        }
    }
}

fn is_pascal(ident: &str) -> bool {
    ident.to_case(Case::Pascal) == ident
}

///
/// TESTS
///
