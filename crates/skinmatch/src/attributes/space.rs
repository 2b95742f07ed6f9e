//! Attribute spaces: the closed set of names a catalog can be tagged with.

use std::collections::HashMap;

use serde::Serialize;

use super::validation::validate_attribute_name;
use crate::bits::{MASK_WIDTH, Mask};
use crate::error::ConfigurationError;

/// An ordered, immutable mapping from attribute name to a single bit.
///
/// The i-th name passed to [`AttributeSpace::define`] owns bit `1 << i`.
/// Zero is never an attribute; it only appears as the empty query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct AttributeSpace {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl AttributeSpace {
    /// Build a space from names in definition order.
    ///
    /// Any distinct strings are accepted. Fails on more than [`MASK_WIDTH`]
    /// names or on a repeated name.
    pub fn define<I, S>(names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_names(names.into_iter().map(Into::into).collect())
    }

    /// Like [`AttributeSpace::define`], but every name must also follow the
    /// catalog naming rule (see [`validate_attribute_name`]).
    pub fn define_validated<I, S>(names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for name in &names {
            validate_attribute_name(name).map_err(|e| ConfigurationError::InvalidName {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        }
        Self::from_names(names)
    }

    fn from_names(names: Vec<String>) -> Result<Self, ConfigurationError> {
        if names.len() > MASK_WIDTH {
            return Err(ConfigurationError::TooManyAttributes {
                count: names.len(),
                max: MASK_WIDTH,
            });
        }

        let mut positions = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), position).is_some() {
                return Err(ConfigurationError::DuplicateName(name.clone()));
            }
        }

        Ok(Self { names, positions })
    }

    /// The bit owned by `name`, if it is part of this space.
    pub fn bit(&self, name: &str) -> Option<Mask> {
        self.positions.get(name).map(|&position| 1 << position)
    }

    /// The name owning a single-bit value. Multi-bit masks return `None`.
    pub fn name_of(&self, bit: Mask) -> Option<&str> {
        if bit.count_ones() != 1 {
            return None;
        }
        self.names
            .get(bit.trailing_zeros() as usize)
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// `(name, bit)` pairs in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Mask)> {
        self.names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.as_str(), 1 << position))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Every bit of the space set at once.
    pub fn full_mask(&self) -> Mask {
        match self.names.len() {
            0 => 0,
            n if n >= MASK_WIDTH => Mask::MAX,
            n => (1 << n) - 1,
        }
    }
}

impl From<AttributeSpace> for Vec<String> {
    fn from(space: AttributeSpace) -> Self {
        space.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skin() -> AttributeSpace {
        AttributeSpace::define(["ACNE", "DULL", "DRY", "OILY"]).unwrap()
    }

    #[test]
    fn assigns_bits_in_definition_order() {
        let space = skin();
        assert_eq!(space.bit("ACNE"), Some(1));
        assert_eq!(space.bit("DULL"), Some(2));
        assert_eq!(space.bit("DRY"), Some(4));
        assert_eq!(space.bit("OILY"), Some(8));
        assert_eq!(space.bit("SENSITIVE"), None);
        assert_eq!(space.len(), 4);
    }

    #[test]
    fn bits_are_distinct_single_bits() {
        let space = skin();
        let mut seen = 0;
        for (_, bit) in space.entries() {
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
        assert_eq!(seen, space.full_mask());
    }

    #[test]
    fn name_of_is_inverse_of_bit() {
        let space = skin();
        assert_eq!(space.name_of(4), Some("DRY"));
        assert_eq!(space.name_of(0), None);
        assert_eq!(space.name_of(0b11), None);
        assert_eq!(space.name_of(1 << 10), None);
    }

    #[test]
    fn rejects_duplicates() {
        let err = AttributeSpace::define(["ACNE", "DRY", "ACNE"]).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateName("ACNE".into()));
    }

    #[test]
    fn rejects_more_than_mask_width() {
        let names: Vec<String> = (0..33).map(|i| format!("A{i}")).collect();
        let err = AttributeSpace::define(names).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::TooManyAttributes { count: 33, max: 32 }
        );
    }

    #[test]
    fn accepts_exactly_mask_width() {
        let names: Vec<String> = (0..32).map(|i| format!("A{i}")).collect();
        let space = AttributeSpace::define(names).unwrap();
        assert_eq!(space.bit("A31"), Some(1 << 31));
        assert_eq!(space.full_mask(), Mask::MAX);
    }

    #[test]
    fn define_accepts_arbitrary_distinct_strings() {
        let space = AttributeSpace::define(["VITAMIN C", "5HTP", "AHA/BHA", ""]).unwrap();
        assert_eq!(space.len(), 4);
        assert_eq!(space.bit("VITAMIN C"), Some(0b0001));
        assert_eq!(space.bit("5HTP"), Some(0b0010));
        assert_eq!(space.bit("AHA/BHA"), Some(0b0100));
        assert_eq!(space.bit(""), Some(0b1000));
    }

    #[test]
    fn validated_define_rejects_invalid_names() {
        let err = AttributeSpace::define_validated(["ACNE", "DARK SPOTS"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidName { ref name, .. } if name == "DARK SPOTS"
        ));
    }

    #[test]
    fn empty_space_is_allowed() {
        let space = AttributeSpace::define(Vec::<String>::new()).unwrap();
        assert!(space.is_empty());
        assert_eq!(space.full_mask(), 0);
    }

    #[test]
    fn serializes_as_name_list() {
        let json = serde_json::to_string(&skin()).unwrap();
        assert_eq!(json, r#"["ACNE","DULL","DRY","OILY"]"#);
    }
}
