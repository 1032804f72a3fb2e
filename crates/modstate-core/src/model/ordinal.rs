use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

///
/// Ordinal
///
/// Zero-based position of a label in its enum definition.
/// Assigned once at generation time and never reassigned.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Ordinal(u32);

impl Ordinal {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Ordinal for the label at `index` in a definition.
    ///
    /// Positions past `u32::MAX` saturate to `u32::MAX`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_preserves_position() {
        assert_eq!(Ordinal::from_index(0).get(), 0);
        assert_eq!(Ordinal::from_index(2), Ordinal::new(2));
    }

    #[test]
    fn from_index_saturates_instead_of_wrapping() {
        let max = usize::try_from(u32::MAX).unwrap();

        assert_eq!(Ordinal::from_index(max).get(), u32::MAX);
        assert_eq!(Ordinal::from_index(usize::MAX).get(), u32::MAX);
    }

    #[test]
    fn displays_and_serializes_as_plain_integer() {
        let ordinal = Ordinal::new(7);

        assert_eq!(ordinal.to_string(), "7");
        assert_eq!(serde_json::to_string(&ordinal).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Ordinal>("3").unwrap(), Ordinal::new(3));
        assert_eq!(u32::from(Ordinal::from(5u32)), 5);
    }
}
