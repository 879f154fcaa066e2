//! Damage type tags and the attack payload seen by damage observers.

use std::collections::BTreeSet;

use bevy::prelude::Entity;
use serde::{Deserialize, Serialize};

/// Ordered set of damage type names.
///
/// A `BTreeSet` keeps iteration order identical on every replica.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DamageTypes(BTreeSet<String>);

impl DamageTypes {
    /// Whether the set holds `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Whether the two sets share at least one type.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.0.iter().any(|name| other.0.contains(name))
    }

    /// Whether no type is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the type names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DamageTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A damage instance as delivered to the damaged entity.
///
/// `damage` is the post-modifier value; negative values heal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack<'a> {
    /// Entity credited with the damage. Equals the owner for self-damage.
    pub attacker: Entity,
    /// Amount removed from health.
    pub damage: i32,
    /// Types the damage is tagged with.
    pub types: &'a DamageTypes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::shared(&["Fire", "Explosion"], &["Explosion"], true)]
    #[case::disjoint(&["Fire"], &["Frost"], false)]
    #[case::empty_left(&[], &["Frost"], false)]
    #[case::empty_both(&[], &[], false)]
    fn intersection(#[case] left: &[&str], #[case] right: &[&str], #[case] expected: bool) {
        let a: DamageTypes = left.iter().copied().collect();
        let b: DamageTypes = right.iter().copied().collect();
        assert_eq!(a.intersects(&b), expected);
        assert_eq!(b.intersects(&a), expected);
    }

    #[rstest]
    fn default_set_is_empty() {
        assert!(DamageTypes::default().is_empty());
        let types: DamageTypes = ["Fire"].into_iter().collect();
        assert!(!types.is_empty());
    }

    #[rstest]
    fn iteration_is_sorted_and_deduplicated() {
        let types: DamageTypes = ["Frost", "Fire", "Frost"].into_iter().collect();
        assert_eq!(types.iter().collect::<Vec<_>>(), vec!["Fire", "Frost"]);
    }

    #[rstest]
    fn serialises_as_plain_array() {
        let types: DamageTypes = ["Fire"].into_iter().collect();
        let json = serde_json::to_string(&types).expect("serialise");
        assert_eq!(json, r#"["Fire"]"#);
    }
}
