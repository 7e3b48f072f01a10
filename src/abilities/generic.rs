//! Abilities shared by every dragon.
//!
//! Each type is generic over the owning creature. A creature table
//! registers e.g. `HurtAbility::<Stegonaut>::create` under its own
//! identifier; the behaviour is the same, the tuning comes from the owner's
//! stats at creation time.

use std::fmt;
use std::marker::PhantomData;

use super::{Ability, AbilityEffect, AbilityTimeline};
use crate::constants::*;
use crate::creature::{Creature, CreatureKind};

/// Owner marker that keeps the ability `Send + Sync` for any creature type
type Owner<T> = PhantomData<fn() -> T>;

/// Melee bite in front of the owner
pub struct BiteAbility<T> {
    timeline: AbilityTimeline,
    damage: f32,
    reach: f32,
    cooldown: f32,
    _owner: Owner<T>,
}

impl<T: Creature> BiteAbility<T> {
    pub fn create(creature: &T) -> Box<dyn Ability> {
        let stats = creature.stats();
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(BITE_TIMELINE),
            damage: stats.bite_damage,
            reach: stats.bite_reach,
            cooldown: stats.scaled_cooldown(BITE_COOLDOWN),
            _owner: PhantomData,
        })
    }
}

impl<T: Creature> Ability for BiteAbility<T> {
    fn name(&self) -> &'static str {
        "bite"
    }

    fn timeline(&self) -> &AbilityTimeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut AbilityTimeline {
        &mut self.timeline
    }

    fn cooldown_secs(&self) -> f32 {
        self.cooldown
    }

    fn on_active(&mut self, effects: &mut Vec<AbilityEffect>) {
        effects.push(AbilityEffect::Damage {
            amount: self.damage,
            reach: self.reach,
        });
    }
}

/// Area roar that scares nearby creatures
pub struct RoarAbility<T> {
    timeline: AbilityTimeline,
    radius: f32,
    fear_secs: f32,
    cooldown: f32,
    _owner: Owner<T>,
}

impl<T: Creature> RoarAbility<T> {
    pub fn create(creature: &T) -> Box<dyn Ability> {
        let stats = creature.stats();
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(ROAR_TIMELINE),
            radius: stats.roar_radius,
            fear_secs: stats.roar_fear_secs,
            cooldown: stats.scaled_cooldown(ROAR_COOLDOWN),
            _owner: PhantomData,
        })
    }
}

impl<T: Creature> Ability for RoarAbility<T> {
    fn name(&self) -> &'static str {
        "roar"
    }

    fn timeline(&self) -> &AbilityTimeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut AbilityTimeline {
        &mut self.timeline
    }

    fn cooldown_secs(&self) -> f32 {
        self.cooldown
    }

    fn on_active(&mut self, effects: &mut Vec<AbilityEffect>) {
        effects.push(AbilityEffect::Fear {
            radius: self.radius,
            duration: self.fear_secs,
        });
    }
}

/// Flinch played when the owner takes damage
pub struct HurtAbility<T> {
    timeline: AbilityTimeline,
    _owner: Owner<T>,
}

impl<T: Creature> HurtAbility<T> {
    pub fn create(creature: &T) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::new(0.0, creature.stats().hurt_secs, 0.0),
            _owner: PhantomData,
        })
    }

    pub fn owner_kind(&self) -> CreatureKind {
        T::KIND
    }
}

impl<T: Creature> Ability for HurtAbility<T> {
    fn name(&self) -> &'static str {
        "hurt"
    }

    fn timeline(&self) -> &AbilityTimeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut AbilityTimeline {
        &mut self.timeline
    }
}

/// Death animation; asks the host to despawn the owner when it ends
pub struct DieAbility<T> {
    timeline: AbilityTimeline,
    _owner: Owner<T>,
}

impl<T: Creature> DieAbility<T> {
    pub fn create(creature: &T) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::new(0.0, creature.stats().death_secs, 0.0),
            _owner: PhantomData,
        })
    }

    pub fn owner_kind(&self) -> CreatureKind {
        T::KIND
    }
}

impl<T: Creature> Ability for DieAbility<T> {
    fn name(&self) -> &'static str {
        "die"
    }

    fn timeline(&self) -> &AbilityTimeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut AbilityTimeline {
        &mut self.timeline
    }

    // Nothing cancels a death
    fn is_interruptible(&self) -> bool {
        false
    }

    fn on_finished(&mut self, effects: &mut Vec<AbilityEffect>) {
        effects.push(AbilityEffect::Despawn);
    }
}

macro_rules! impl_owner_debug {
    ($($ability:ident),* $(,)?) => {
        $(
            impl<T: Creature> fmt::Debug for $ability<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($ability))
                        .field("owner", &T::KIND)
                        .field("timeline", &self.timeline)
                        .finish()
                }
            }
        )*
    };
}

impl_owner_debug!(BiteAbility, RoarAbility, HurtAbility, DieAbility);
