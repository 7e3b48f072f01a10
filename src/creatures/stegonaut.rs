//! Stegonaut: armoured, plated ground dragon. Fights with its spiked tail.

use bevy::prelude::*;

use crate::abilities::{
    Ability, AbilityEffect, AbilityTimeline, ActiveAbilities, BiteAbility, DieAbility, HurtAbility,
};
use crate::constants::*;
use crate::creature::{Creature, CreatureKind, CreatureStats};
use crate::error::RegistryError;
use crate::registry::{AbilityRegistryBuilder, AbilityType};

#[derive(Component, Debug, Clone, PartialEq)]
#[require(ActiveAbilities)]
pub struct Stegonaut {
    pub stats: CreatureStats,
}

impl Default for Stegonaut {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for Stegonaut {
    const KIND: CreatureKind = CreatureKind::Stegonaut;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<Stegonaut> =
    AbilityType::new("stegonaut_bite", BiteAbility::<Stegonaut>::create);
pub const TAIL_SWIPE: AbilityType<Stegonaut> =
    AbilityType::new("stegonaut_tail_swipe", TailSwipeAbility::create);
pub const HURT: AbilityType<Stegonaut> =
    AbilityType::new("stegonaut_hurt", HurtAbility::<Stegonaut>::create);
pub const DIE: AbilityType<Stegonaut> =
    AbilityType::new("stegonaut_die", DieAbility::<Stegonaut>::create);

pub fn descriptors() -> [AbilityType<Stegonaut>; 4] {
    [BITE, TAIL_SWIPE, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StegonautAbilities {
    pub bite: AbilityType<Stegonaut>,
    pub tail_swipe: AbilityType<Stegonaut>,
    pub hurt: AbilityType<Stegonaut>,
    pub die: AbilityType<Stegonaut>,
}

pub fn register(builder: &mut AbilityRegistryBuilder) -> Result<StegonautAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(StegonautAbilities {
        bite: BITE,
        tail_swipe: TAIL_SWIPE,
        hurt: HURT,
        die: DIE,
    })
}

/// Wide tail sweep: hits like a bite and throws targets back
#[derive(Debug)]
pub struct TailSwipeAbility {
    timeline: AbilityTimeline,
    damage: f32,
    reach: f32,
    cooldown: f32,
}

impl TailSwipeAbility {
    pub fn create(stegonaut: &Stegonaut) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(TAIL_SWIPE_TIMELINE),
            damage: stegonaut.stats.bite_damage,
            reach: stegonaut.stats.bite_reach * 1.5,
            cooldown: stegonaut.stats.scaled_cooldown(TAIL_SWIPE_COOLDOWN),
        })
    }
}

impl Ability for TailSwipeAbility {
    fn name(&self) -> &'static str {
        "tail_swipe"
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
        effects.push(AbilityEffect::Knockback {
            force: TAIL_SWIPE_FORCE,
            radius: self.reach,
        });
    }
}
