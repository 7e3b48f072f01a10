//! Rift Drake: steps through short-lived rifts to close distance.

use bevy::prelude::*;

use crate::abilities::{
    Ability, AbilityEffect, AbilityTimeline, ActiveAbilities, BiteAbility, DieAbility, HurtAbility,
    RoarAbility,
};
use crate::constants::*;
use crate::creature::{Creature, CreatureKind, CreatureStats};
use crate::error::RegistryError;
use crate::registry::{AbilityRegistryBuilder, AbilityType};

#[derive(Component, Debug, Clone, PartialEq)]
#[require(ActiveAbilities)]
pub struct RiftDrake {
    pub stats: CreatureStats,
}

impl Default for RiftDrake {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for RiftDrake {
    const KIND: CreatureKind = CreatureKind::RiftDrake;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<RiftDrake> =
    AbilityType::new("rift_drake_bite", BiteAbility::<RiftDrake>::create);
pub const ROAR: AbilityType<RiftDrake> =
    AbilityType::new("rift_drake_roar", RoarAbility::<RiftDrake>::create);
pub const RIFT_STEP: AbilityType<RiftDrake> =
    AbilityType::new("rift_drake_rift_step", RiftStepAbility::create);
pub const HURT: AbilityType<RiftDrake> =
    AbilityType::new("rift_drake_hurt", HurtAbility::<RiftDrake>::create);
pub const DIE: AbilityType<RiftDrake> =
    AbilityType::new("rift_drake_die", DieAbility::<RiftDrake>::create);

pub fn descriptors() -> [AbilityType<RiftDrake>; 5] {
    [BITE, ROAR, RIFT_STEP, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiftDrakeAbilities {
    pub bite: AbilityType<RiftDrake>,
    pub roar: AbilityType<RiftDrake>,
    pub rift_step: AbilityType<RiftDrake>,
    pub hurt: AbilityType<RiftDrake>,
    pub die: AbilityType<RiftDrake>,
}

pub fn register(builder: &mut AbilityRegistryBuilder) -> Result<RiftDrakeAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(RiftDrakeAbilities {
        bite: BITE,
        roar: ROAR,
        rift_step: RIFT_STEP,
        hurt: HURT,
        die: DIE,
    })
}

/// Short blink forward through a rift. Cannot be cancelled once the rift opens.
#[derive(Debug)]
pub struct RiftStepAbility {
    timeline: AbilityTimeline,
    cooldown: f32,
}

impl RiftStepAbility {
    pub fn create(drake: &RiftDrake) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(RIFT_STEP_TIMELINE),
            cooldown: drake.stats.scaled_cooldown(RIFT_STEP_COOLDOWN),
        })
    }
}

impl Ability for RiftStepAbility {
    fn name(&self) -> &'static str {
        "rift_step"
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

    fn is_interruptible(&self) -> bool {
        self.timeline.elapsed() < RIFT_STEP_TIMELINE.0
    }

    fn on_active(&mut self, effects: &mut Vec<AbilityEffect>) {
        effects.push(AbilityEffect::Displacement {
            distance: RIFT_STEP_DISTANCE,
        });
    }
}
