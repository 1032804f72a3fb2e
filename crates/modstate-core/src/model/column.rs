use std::fmt;

///
/// ColumnKey
///
/// Persisted field driven by one enum attribute: the attribute name folded
/// to lowercase (not snake-cased). Displays with a leading `:` field marker.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ColumnKey(String);

impl ColumnKey {
    #[must_use]
    pub fn for_attribute(attribute: &str) -> Self {
        Self(attribute.to_lowercase())
    }

    /// Bare field name, without the marker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_without_snake_casing() {
        let column = ColumnKey::for_attribute("ReviewCategory");

        assert_eq!(column.as_str(), "reviewcategory");
        assert_eq!(column.to_string(), ":reviewcategory");
    }

    #[test]
    fn lowercase_attribute_is_unchanged() {
        assert_eq!(ColumnKey::for_attribute("state").as_str(), "state");
    }
}
