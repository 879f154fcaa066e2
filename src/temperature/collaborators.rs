//! Contracts the attribute needs from its host.

use std::num::NonZeroU32;

use super::DamageTypes;

/// Source of the owner's maximum health, read once at attachment.
pub trait HealthProvider {
    /// Maximum primary health of the owning entity.
    fn max_health(&self) -> i32;
}

/// Receiver for damage the attribute inflicts on its own owner.
#[cfg_attr(test, mockall::automock)]
pub trait DamageSink {
    /// Deliver `amount` damage tagged with `types` to the owner.
    fn apply_self_damage(&mut self, amount: i32, types: &DamageTypes);
}

/// Opaque proof that a condition was granted.
///
/// Tokens are not `Clone`. Exactly one holder may revoke a grant, and
/// revoking consumes the token.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ConditionToken(NonZeroU32);

impl ConditionToken {
    /// Wrap a registry-issued identifier.
    #[must_use]
    pub const fn new(id: NonZeroU32) -> Self {
        Self(id)
    }

    /// Registry-issued identifier.
    #[must_use]
    pub const fn id(&self) -> NonZeroU32 {
        self.0
    }
}

/// Grant/revoke bookkeeping for named conditions on the owner.
#[cfg_attr(test, mockall::automock)]
pub trait ConditionRegistry {
    /// Grant `condition` and return the token that revokes it.
    fn grant(&mut self, condition: &str) -> ConditionToken;
    /// Revoke a previously granted condition.
    fn revoke(&mut self, token: ConditionToken);
}
