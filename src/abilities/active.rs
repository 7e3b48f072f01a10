//! Per-entity holder for running abilities.
//!
//! The component owns every live [`AbilityInstance`] of its entity. Instances
//! are dropped when they finish, when [`ActiveAbilities::clear`] is called, or
//! when the host removes the entity (and with it this component).

use bevy::prelude::*;

use super::{AbilityCooldownTracker, AbilityEffect, AbilityInstance};
use crate::creature::Creature;
use crate::error::AbilityError;
use crate::registry::AbilityRegistry;

/// Effect emitted by one of the entity's abilities during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedEffect {
    pub identifier: &'static str,
    pub effect: AbilityEffect,
}

#[derive(Component, Debug, Default)]
pub struct ActiveAbilities {
    instances: Vec<AbilityInstance>,
    cooldowns: AbilityCooldownTracker,
}

impl ActiveAbilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `identifier` could start right now
    pub fn can_start(&self, identifier: &'static str) -> Result<(), AbilityError> {
        if self.is_active(identifier) {
            return Err(AbilityError::AlreadyActive { identifier });
        }
        if !self.cooldowns.is_ready(identifier) {
            return Err(AbilityError::OnCooldown {
                identifier,
                remaining: self.cooldowns.remaining(identifier),
            });
        }
        Ok(())
    }

    /// Take ownership of an instance created for `owner`
    pub fn start(&mut self, owner: Entity, instance: AbilityInstance) -> Result<(), AbilityError> {
        if instance.owner() != owner {
            return Err(AbilityError::ForeignInstance {
                identifier: instance.identifier(),
            });
        }
        self.can_start(instance.identifier())?;
        self.instances.push(instance);
        Ok(())
    }

    /// Look `identifier` up in the registry, instantiate it for `creature`
    /// and start it.
    pub fn start_from_registry<T: Creature>(
        &mut self,
        registry: &AbilityRegistry,
        owner: Entity,
        creature: &T,
        identifier: &str,
    ) -> Result<(), AbilityError> {
        let entry = registry
            .lookup(identifier)
            .ok_or_else(|| AbilityError::UnknownAbility {
                identifier: identifier.to_string(),
            })?;
        self.can_start(entry.identifier())?;
        let instance = entry.instantiate(owner, creature)?;
        self.start(owner, instance)
    }

    /// Advance cooldowns and every running instance. Finished instances are
    /// released and their cooldowns start.
    pub fn tick(&mut self, delta: f32) -> Vec<EmittedEffect> {
        self.cooldowns.tick(delta);

        let mut emitted = Vec::new();
        for instance in &mut self.instances {
            let identifier = instance.identifier();
            let tick = instance.tick(delta);
            emitted.extend(
                tick.effects
                    .into_iter()
                    .map(|effect| EmittedEffect { identifier, effect }),
            );
        }

        let cooldowns = &mut self.cooldowns;
        self.instances.retain(|instance| {
            if instance.is_finished() {
                cooldowns.start(instance.identifier(), instance.cooldown_secs());
                false
            } else {
                true
            }
        });

        emitted
    }

    /// Interrupt every interruptible instance; they are released on the next tick
    pub fn interrupt_all(&mut self) -> usize {
        self.instances
            .iter_mut()
            .map(|instance| instance.interrupt())
            .filter(|interrupted| *interrupted)
            .count()
    }

    /// Release every instance and forget all cooldowns
    pub fn clear(&mut self) {
        self.instances.clear();
        self.cooldowns.clear();
    }

    pub fn is_active(&self, identifier: &str) -> bool {
        self.instances
            .iter()
            .any(|instance| instance.identifier() == identifier)
    }

    pub fn remaining_cooldown(&self, identifier: &str) -> f32 {
        self.cooldowns.remaining(identifier)
    }

    /// True when neither instances nor cooldowns need ticking
    pub fn is_idle(&self) -> bool {
        self.instances.is_empty() && self.cooldowns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityInstance> {
        self.instances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityPhase;
    use crate::constants::*;
    use crate::creatures::{self, cindervane, cindervane::Cindervane, stegonaut};

    fn owner() -> Entity {
        Entity::from_raw(7)
    }

    #[test]
    fn test_start_and_finish_releases_instance() {
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();
        active
            .start(owner(), cindervane::BITE.create(owner(), &creature))
            .unwrap();
        assert_eq!(active.len(), 1);
        assert!(active.is_active("cindervane_bite"));

        let effects = active.tick(10.0);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].identifier, "cindervane_bite");
        assert!(active.is_empty());
        assert!(active.remaining_cooldown("cindervane_bite") > 0.0);
    }

    #[test]
    fn test_rejects_foreign_instance() {
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();
        let instance = cindervane::ROAR.create(Entity::from_raw(99), &creature);
        let err = active.start(owner(), instance).unwrap_err();
        assert_eq!(
            err,
            AbilityError::ForeignInstance {
                identifier: "cindervane_roar"
            }
        );
        assert!(active.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_active() {
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();
        active
            .start(owner(), cindervane::ROAR.create(owner(), &creature))
            .unwrap();
        let err = active
            .start(owner(), cindervane::ROAR.create(owner(), &creature))
            .unwrap_err();
        assert!(matches!(err, AbilityError::AlreadyActive { .. }));
    }

    #[test]
    fn test_rejects_while_on_cooldown() {
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();
        active
            .start(owner(), cindervane::ROAR.create(owner(), &creature))
            .unwrap();
        active.tick(100.0);

        let err = active
            .start(owner(), cindervane::ROAR.create(owner(), &creature))
            .unwrap_err();
        match err {
            AbilityError::OnCooldown { remaining, .. } => {
                assert!((remaining - ROAR_COOLDOWN).abs() < 0.01)
            }
            other => panic!("expected cooldown error, got {other:?}"),
        }

        active.tick(ROAR_COOLDOWN);
        assert!(active
            .start(owner(), cindervane::ROAR.create(owner(), &creature))
            .is_ok());
    }

    #[test]
    fn test_interrupt_all_spares_death() {
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();
        active
            .start(owner(), cindervane::BITE.create(owner(), &creature))
            .unwrap();
        active
            .start(owner(), cindervane::DIE.create(owner(), &creature))
            .unwrap();

        assert_eq!(active.interrupt_all(), 1);
        let effects = active.tick(0.0);
        assert!(effects.is_empty());
        assert_eq!(active.len(), 1);
        assert_eq!(active.iter().next().unwrap().identifier(), "cindervane_die");
        assert_eq!(active.iter().next().unwrap().phase(), AbilityPhase::Active);
    }

    #[test]
    fn test_start_from_registry() {
        let registry = creatures::default_registry().unwrap();
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();

        active
            .start_from_registry(&registry, owner(), &creature, "cindervane_fire_body")
            .unwrap();
        assert!(active.is_active("cindervane_fire_body"));

        let unknown = active
            .start_from_registry(&registry, owner(), &creature, "cindervane_sneeze")
            .unwrap_err();
        assert!(matches!(unknown, AbilityError::UnknownAbility { .. }));

        let foreign = active
            .start_from_registry(&registry, owner(), &creature, stegonaut::TAIL_SWIPE.identifier())
            .unwrap_err();
        assert!(matches!(foreign, AbilityError::OwnerMismatch { .. }));
    }

    #[test]
    fn test_clear_releases_everything() {
        let creature = Cindervane::default();
        let mut active = ActiveAbilities::new();
        active
            .start(owner(), cindervane::BITE.create(owner(), &creature))
            .unwrap();
        active.tick(10.0);
        active
            .start(owner(), cindervane::ROAR.create(owner(), &creature))
            .unwrap();
        active.clear();
        assert!(active.is_idle());
    }
}
