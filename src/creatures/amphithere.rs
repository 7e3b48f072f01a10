//! Amphithere: feathered, legless serpent-dragon that fights on the wing.

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
pub struct Amphithere {
    pub stats: CreatureStats,
}

impl Default for Amphithere {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for Amphithere {
    const KIND: CreatureKind = CreatureKind::Amphithere;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<Amphithere> =
    AbilityType::new("amphithere_bite", BiteAbility::<Amphithere>::create);
pub const ROAR: AbilityType<Amphithere> =
    AbilityType::new("amphithere_roar", RoarAbility::<Amphithere>::create);
pub const WING_GUST: AbilityType<Amphithere> =
    AbilityType::new("amphithere_wing_gust", WingGustAbility::create);
pub const HURT: AbilityType<Amphithere> =
    AbilityType::new("amphithere_hurt", HurtAbility::<Amphithere>::create);
pub const DIE: AbilityType<Amphithere> =
    AbilityType::new("amphithere_die", DieAbility::<Amphithere>::create);

pub fn descriptors() -> [AbilityType<Amphithere>; 5] {
    [BITE, ROAR, WING_GUST, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmphithereAbilities {
    pub bite: AbilityType<Amphithere>,
    pub roar: AbilityType<Amphithere>,
    pub wing_gust: AbilityType<Amphithere>,
    pub hurt: AbilityType<Amphithere>,
    pub die: AbilityType<Amphithere>,
}

pub fn register(builder: &mut AbilityRegistryBuilder) -> Result<AmphithereAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(AmphithereAbilities {
        bite: BITE,
        roar: ROAR,
        wing_gust: WING_GUST,
        hurt: HURT,
        die: DIE,
    })
}

/// One heavy wingbeat that shoves everything nearby away
#[derive(Debug)]
pub struct WingGustAbility {
    timeline: AbilityTimeline,
    cooldown: f32,
}

impl WingGustAbility {
    pub fn create(amphithere: &Amphithere) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(WING_GUST_TIMELINE),
            cooldown: amphithere.stats.scaled_cooldown(WING_GUST_COOLDOWN),
        })
    }
}

impl Ability for WingGustAbility {
    fn name(&self) -> &'static str {
        "wing_gust"
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
        effects.push(AbilityEffect::Knockback {
            force: WING_GUST_FORCE,
            radius: WING_GUST_RADIUS,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_table() {
        let mut builder = AbilityRegistryBuilder::new();
        let handles = register(&mut builder).unwrap();
        assert_eq!(builder.len(), descriptors().len());
        assert_eq!(handles.wing_gust.action(), "wing_gust");
    }

    #[test]
    fn test_wing_gust_knocks_back() {
        let mut gust = WingGustAbility::create(&Amphithere::default());
        let tick = gust.tick(10.0);
        assert_eq!(
            tick.effects,
            vec![AbilityEffect::Knockback {
                force: WING_GUST_FORCE,
                radius: WING_GUST_RADIUS,
            }]
        );
        assert_eq!(gust.cooldown_secs(), WING_GUST_COOLDOWN);
    }
}
