//! Nulljaw: a void-touched dragon that silences whatever stands near it.

use bevy::prelude::*;

use crate::abilities::{
    Ability, AbilityEffect, AbilityTimeline, ActiveAbilities, BiteAbility, DieAbility, HurtAbility,
    RoarAbility, StatusKind,
};
use crate::constants::*;
use crate::creature::{Creature, CreatureKind, CreatureStats};
use crate::error::RegistryError;
use crate::registry::{AbilityRegistryBuilder, AbilityType};

#[derive(Component, Debug, Clone, PartialEq)]
#[require(ActiveAbilities)]
pub struct Nulljaw {
    pub stats: CreatureStats,
}

impl Default for Nulljaw {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for Nulljaw {
    const KIND: CreatureKind = CreatureKind::Nulljaw;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<Nulljaw> =
    AbilityType::new("nulljaw_bite", BiteAbility::<Nulljaw>::create);
pub const ROAR: AbilityType<Nulljaw> =
    AbilityType::new("nulljaw_roar", RoarAbility::<Nulljaw>::create);
pub const NULL_PULSE: AbilityType<Nulljaw> =
    AbilityType::new("nulljaw_null_pulse", NullPulseAbility::create);
pub const HURT: AbilityType<Nulljaw> =
    AbilityType::new("nulljaw_hurt", HurtAbility::<Nulljaw>::create);
pub const DIE: AbilityType<Nulljaw> =
    AbilityType::new("nulljaw_die", DieAbility::<Nulljaw>::create);

pub fn descriptors() -> [AbilityType<Nulljaw>; 5] {
    [BITE, ROAR, NULL_PULSE, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NulljawAbilities {
    pub bite: AbilityType<Nulljaw>,
    pub roar: AbilityType<Nulljaw>,
    pub null_pulse: AbilityType<Nulljaw>,
    pub hurt: AbilityType<Nulljaw>,
    pub die: AbilityType<Nulljaw>,
}

pub fn register(builder: &mut AbilityRegistryBuilder) -> Result<NulljawAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(NulljawAbilities {
        bite: BITE,
        roar: ROAR,
        null_pulse: NULL_PULSE,
        hurt: HURT,
        die: DIE,
    })
}

/// Pulse of null energy; silences everything inside the radius
#[derive(Debug)]
pub struct NullPulseAbility {
    timeline: AbilityTimeline,
    cooldown: f32,
}

impl NullPulseAbility {
    pub fn create(nulljaw: &Nulljaw) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(NULL_PULSE_TIMELINE),
            cooldown: nulljaw.stats.scaled_cooldown(NULL_PULSE_COOLDOWN),
        })
    }
}

impl Ability for NullPulseAbility {
    fn name(&self) -> &'static str {
        "null_pulse"
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
        effects.push(AbilityEffect::ApplyStatus {
            status: StatusKind::Silenced,
            radius: NULL_PULSE_RADIUS,
            duration: NULL_PULSE_SILENCE_SECS,
        });
    }
}
