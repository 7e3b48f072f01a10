//! Raevyx: raptor-like sky dragon that strikes from a steep dive.

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
pub struct Raevyx {
    pub stats: CreatureStats,
}

impl Default for Raevyx {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for Raevyx {
    const KIND: CreatureKind = CreatureKind::Raevyx;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<Raevyx> =
    AbilityType::new("raevyx_bite", BiteAbility::<Raevyx>::create);
pub const ROAR: AbilityType<Raevyx> =
    AbilityType::new("raevyx_roar", RoarAbility::<Raevyx>::create);
pub const DIVE: AbilityType<Raevyx> = AbilityType::new("raevyx_dive", DiveAbility::create);
pub const HURT: AbilityType<Raevyx> =
    AbilityType::new("raevyx_hurt", HurtAbility::<Raevyx>::create);
pub const DIE: AbilityType<Raevyx> = AbilityType::new("raevyx_die", DieAbility::<Raevyx>::create);

pub fn descriptors() -> [AbilityType<Raevyx>; 5] {
    [BITE, ROAR, DIVE, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaevyxAbilities {
    pub bite: AbilityType<Raevyx>,
    pub roar: AbilityType<Raevyx>,
    pub dive: AbilityType<Raevyx>,
    pub hurt: AbilityType<Raevyx>,
    pub die: AbilityType<Raevyx>,
}

pub fn register(builder: &mut AbilityRegistryBuilder) -> Result<RaevyxAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(RaevyxAbilities {
        bite: BITE,
        roar: ROAR,
        dive: DIVE,
        hurt: HURT,
        die: DIE,
    })
}

/// Dive onto a target: moves the Raevyx and lands a doubled bite
#[derive(Debug)]
pub struct DiveAbility {
    timeline: AbilityTimeline,
    damage: f32,
    reach: f32,
    cooldown: f32,
}

impl DiveAbility {
    pub fn create(raevyx: &Raevyx) -> Box<dyn Ability> {
        Box::new(Self {
            timeline: AbilityTimeline::from_secs(DIVE_TIMELINE),
            damage: raevyx.stats.bite_damage * DIVE_DAMAGE_MULT,
            reach: raevyx.stats.bite_reach,
            cooldown: raevyx.stats.scaled_cooldown(DIVE_COOLDOWN),
        })
    }
}

impl Ability for DiveAbility {
    fn name(&self) -> &'static str {
        "dive"
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
        effects.push(AbilityEffect::Displacement {
            distance: DIVE_DISTANCE,
        });
        effects.push(AbilityEffect::Damage {
            amount: self.damage,
            reach: self.reach,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_table() {
        let mut builder = AbilityRegistryBuilder::new();
        register(&mut builder).unwrap();
        assert_eq!(builder.len(), 5);
    }

    #[test]
    fn test_dive_doubles_bite() {
        let raevyx = Raevyx::default();
        let mut dive = DiveAbility::create(&raevyx);
        let effects = dive.tick(10.0).effects;
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[1],
            AbilityEffect::Damage {
                amount: raevyx.stats.bite_damage * DIVE_DAMAGE_MULT,
                reach: raevyx.stats.bite_reach,
            }
        );
        assert!((dive.cooldown_secs() - DIVE_COOLDOWN * 0.9).abs() < 1e-5);
    }
}
