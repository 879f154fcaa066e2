//! Condition grant bookkeeping shared by all entities.

use std::num::NonZeroU32;

use bevy::prelude::{Entity, Resource};
use hashbrown::HashMap;
use log::{debug, warn};

use crate::temperature::{ConditionRegistry, ConditionToken};

/// Ledger of named conditions granted to entities.
///
/// Tokens are issued from a monotonically increasing counter so identical
/// grant sequences produce identical tokens on every replica.
#[derive(Resource, Debug)]
pub struct ConditionLedger {
    next_id: NonZeroU32,
    granted: HashMap<NonZeroU32, (Entity, String)>,
}

impl Default for ConditionLedger {
    fn default() -> Self {
        Self {
            next_id: NonZeroU32::MIN,
            granted: HashMap::new(),
        }
    }
}

impl ConditionLedger {
    /// Grant `condition` to `entity`.
    pub fn grant(&mut self, entity: Entity, condition: &str) -> ConditionToken {
        let id = self.next_free_id();
        self.granted.insert(id, (entity, condition.to_owned()));
        debug!("condition {condition} granted to {entity:?} as {id}");
        ConditionToken::new(id)
    }

    /// Revoke a grant. Returns `false` if the token was unknown.
    pub fn revoke(&mut self, token: ConditionToken) -> bool {
        let removed = self.granted.remove(&token.id());
        if let Some((entity, condition)) = &removed {
            debug!("condition {condition} revoked from {entity:?}");
        } else {
            warn!("revoke of unknown condition token {}", token.id());
        }
        removed.is_some()
    }

    /// Revoke every grant held by `entity`. Returns how many were released.
    pub fn revoke_all(&mut self, entity: Entity) -> usize {
        let before = self.granted.len();
        self.granted.retain(|_, (owner, _)| *owner != entity);
        let released = before - self.granted.len();
        if released > 0 {
            debug!("released {released} condition(s) held by {entity:?}");
        }
        released
    }

    /// Number of live grants of `condition` on `entity`.
    #[must_use]
    pub fn grant_count(&self, entity: Entity, condition: &str) -> usize {
        self.granted
            .values()
            .filter(|(owner, name)| *owner == entity && name == condition)
            .count()
    }

    /// Whether `entity` holds at least one grant of `condition`.
    #[must_use]
    pub fn is_granted(&self, entity: Entity, condition: &str) -> bool {
        self.grant_count(entity, condition) > 0
    }

    // After wrapping, ids still held by live grants are skipped.
    fn next_free_id(&mut self) -> NonZeroU32 {
        loop {
            let id = self.next_id;
            self.next_id = id.checked_add(1).unwrap_or(NonZeroU32::MIN);
            if !self.granted.contains_key(&id) {
                return id;
            }
        }
    }

    /// Registry view scoped to one entity.
    pub fn for_entity(&mut self, entity: Entity) -> EntityConditions<'_> {
        EntityConditions {
            ledger: self,
            entity,
        }
    }
}

/// [`ConditionRegistry`] for a single entity backed by a [`ConditionLedger`].
#[derive(Debug)]
pub struct EntityConditions<'a> {
    ledger: &'a mut ConditionLedger,
    entity: Entity,
}

impl ConditionRegistry for EntityConditions<'_> {
    fn grant(&mut self, condition: &str) -> ConditionToken {
        self.ledger.grant(self.entity, condition)
    }

    fn revoke(&mut self, token: ConditionToken) {
        self.ledger.revoke(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::World;
    use rstest::rstest;

    #[rstest]
    fn grants_are_scoped_per_entity() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut ledger = ConditionLedger::default();

        let token = ledger.grant(a, "overheated");
        assert!(ledger.is_granted(a, "overheated"));
        assert!(!ledger.is_granted(b, "overheated"));

        assert!(ledger.revoke(token));
        assert!(!ledger.is_granted(a, "overheated"));
    }

    #[rstest]
    fn tokens_are_issued_in_sequence() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut ledger = ConditionLedger::default();
        let first = ledger.grant(entity, "x");
        let second = ledger.grant(entity, "x");
        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
        assert_eq!(ledger.grant_count(entity, "x"), 2);
    }

    #[rstest]
    fn wrapped_ids_skip_live_grants() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut ledger = ConditionLedger::default();
        let first = ledger.grant(entity, "x");
        ledger.next_id = NonZeroU32::MAX;

        let last = ledger.grant(entity, "x");
        let wrapped = ledger.grant(entity, "x");

        assert_eq!(last.id(), NonZeroU32::MAX);
        assert_eq!(wrapped.id().get(), 2);
        assert_eq!(ledger.grant_count(entity, "x"), 3);
        assert!(ledger.revoke(first));
        assert_eq!(ledger.grant_count(entity, "x"), 2);
    }

    #[rstest]
    fn revoke_all_releases_only_the_owner() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut ledger = ConditionLedger::default();
        ledger.grant(a, "x");
        ledger.grant(a, "y");
        ledger.grant(b, "x");

        assert_eq!(ledger.revoke_all(a), 2);
        assert!(!ledger.is_granted(a, "x"));
        assert!(!ledger.is_granted(a, "y"));
        assert!(ledger.is_granted(b, "x"));
        assert_eq!(ledger.revoke_all(a), 0);
    }

    #[rstest]
    fn unknown_token_is_reported() {
        let mut ledger = ConditionLedger::default();
        assert!(!ledger.revoke(ConditionToken::new(NonZeroU32::MIN)));
    }

    #[rstest]
    fn entity_view_implements_registry() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut ledger = ConditionLedger::default();
        let token = ledger.for_entity(entity).grant("chilled");
        assert!(ledger.is_granted(entity, "chilled"));
        ledger.for_entity(entity).revoke(token);
        assert!(!ledger.is_granted(entity, "chilled"));
    }
}
