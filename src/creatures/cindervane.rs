//! Cindervane: a fire drake whose scales ignite while it is enraged.

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
pub struct Cindervane {
    pub stats: CreatureStats,
}

impl Default for Cindervane {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for Cindervane {
    const KIND: CreatureKind = CreatureKind::Cindervane;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<Cindervane> =
    AbilityType::new("cindervane_bite", BiteAbility::<Cindervane>::create);
pub const ROAR: AbilityType<Cindervane> =
    AbilityType::new("cindervane_roar", RoarAbility::<Cindervane>::create);
pub const FIRE_BODY: AbilityType<Cindervane> =
    AbilityType::new("cindervane_fire_body", FireBodyAbility::create);
pub const HURT: AbilityType<Cindervane> =
    AbilityType::new("cindervane_hurt", HurtAbility::<Cindervane>::create);
pub const DIE: AbilityType<Cindervane> =
    AbilityType::new("cindervane_die", DieAbility::<Cindervane>::create);

pub fn descriptors() -> [AbilityType<Cindervane>; 5] {
    [BITE, ROAR, FIRE_BODY, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CindervaneAbilities {
    pub bite: AbilityType<Cindervane>,
    pub roar: AbilityType<Cindervane>,
    pub fire_body: AbilityType<Cindervane>,
    pub hurt: AbilityType<Cindervane>,
    pub die: AbilityType<Cindervane>,
}

pub fn register(builder: &mut AbilityRegistryBuilder) -> Result<CindervaneAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(CindervaneAbilities {
        bite: BITE,
        roar: ROAR,
        fire_body: FIRE_BODY,
        hurt: HURT,
        die: DIE,
    })
}

/// Sets the body alight: everything touching the Cindervane starts burning.
///
/// The burn is reported once when the flames catch; the long active window
/// is the visible blaze.
#[derive(Debug)]
pub struct FireBodyAbility {
    timeline: AbilityTimeline,
    cooldown: f32,
}

impl FireBodyAbility {
    pub fn create(cindervane: &Cindervane) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(FIRE_BODY_TIMELINE),
            cooldown: cindervane.stats.scaled_cooldown(FIRE_BODY_COOLDOWN),
        })
    }
}

impl Ability for FireBodyAbility {
    fn name(&self) -> &'static str {
        "fire_body"
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
        false
    }

    fn on_active(&mut self, effects: &mut Vec<AbilityEffect>) {
        effects.push(AbilityEffect::ApplyStatus {
            status: StatusKind::Burning,
            radius: FIRE_BODY_RADIUS,
            duration: FIRE_BODY_BURN_SECS,
        });
    }
}
