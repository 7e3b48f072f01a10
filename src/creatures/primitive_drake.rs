//! Primitive Drake: the small ancestral drake. Shared abilities only.

use bevy::prelude::*;

use crate::abilities::{ActiveAbilities, BiteAbility, DieAbility, HurtAbility, RoarAbility};
use crate::creature::{Creature, CreatureKind, CreatureStats};
use crate::error::RegistryError;
use crate::registry::{AbilityRegistryBuilder, AbilityType};

#[derive(Component, Debug, Clone, PartialEq)]
#[require(ActiveAbilities)]
pub struct PrimitiveDrake {
    pub stats: CreatureStats,
}

impl Default for PrimitiveDrake {
    fn default() -> Self {
        Self::with_stats(Self::KIND.default_stats())
    }
}

impl Creature for PrimitiveDrake {
    const KIND: CreatureKind = CreatureKind::PrimitiveDrake;

    fn with_stats(stats: CreatureStats) -> Self {
        Self { stats }
    }

    fn stats(&self) -> &CreatureStats {
        &self.stats
    }
}

pub const BITE: AbilityType<PrimitiveDrake> =
    AbilityType::new("primitive_drake_bite", BiteAbility::<PrimitiveDrake>::create);
pub const ROAR: AbilityType<PrimitiveDrake> =
    AbilityType::new("primitive_drake_roar", RoarAbility::<PrimitiveDrake>::create);
pub const HURT: AbilityType<PrimitiveDrake> =
    AbilityType::new("primitive_drake_hurt", HurtAbility::<PrimitiveDrake>::create);
pub const DIE: AbilityType<PrimitiveDrake> =
    AbilityType::new("primitive_drake_die", DieAbility::<PrimitiveDrake>::create);

pub fn descriptors() -> [AbilityType<PrimitiveDrake>; 4] {
    [BITE, ROAR, HURT, DIE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveDrakeAbilities {
    pub bite: AbilityType<PrimitiveDrake>,
    pub roar: AbilityType<PrimitiveDrake>,
    pub hurt: AbilityType<PrimitiveDrake>,
    pub die: AbilityType<PrimitiveDrake>,
}

pub fn register(
    builder: &mut AbilityRegistryBuilder,
) -> Result<PrimitiveDrakeAbilities, RegistryError> {
    builder.register_batch(&descriptors())?;
    Ok(PrimitiveDrakeAbilities {
        bite: BITE,
        roar: ROAR,
        hurt: HURT,
        die: DIE,
    })
}
