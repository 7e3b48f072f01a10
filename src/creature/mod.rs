//! Creature kinds and the owner side of the ability system.
//!
//! Every dragon type is a bevy [`Component`] implementing [`Creature`].
//! Ability descriptors are generic over that component type, so a
//! descriptor can only ever be instantiated against the creature it was
//! registered for.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// The seven dragon types shipped by the mod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    Amphithere,
    Cindervane,
    Nulljaw,
    PrimitiveDrake,
    RiftDrake,
    Stegonaut,
    Raevyx,
}

impl CreatureKind {
    /// Identifier prefix used by every ability this creature owns
    pub fn as_str(&self) -> &'static str {
        match self {
            CreatureKind::Amphithere => "amphithere",
            CreatureKind::Cindervane => "cindervane",
            CreatureKind::Nulljaw => "nulljaw",
            CreatureKind::PrimitiveDrake => "primitive_drake",
            CreatureKind::RiftDrake => "rift_drake",
            CreatureKind::Stegonaut => "stegonaut",
            CreatureKind::Raevyx => "raevyx",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CreatureKind::Amphithere => "Amphithere",
            CreatureKind::Cindervane => "Cindervane",
            CreatureKind::Nulljaw => "Nulljaw",
            CreatureKind::PrimitiveDrake => "Primitive Drake",
            CreatureKind::RiftDrake => "Rift Drake",
            CreatureKind::Stegonaut => "Stegonaut",
            CreatureKind::Raevyx => "Raevyx",
        }
    }

    pub fn all() -> [CreatureKind; 7] {
        [
            CreatureKind::Amphithere,
            CreatureKind::Cindervane,
            CreatureKind::Nulljaw,
            CreatureKind::PrimitiveDrake,
            CreatureKind::RiftDrake,
            CreatureKind::Stegonaut,
            CreatureKind::Raevyx,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.as_str() == name)
    }

    /// Built-in tuning for this kind
    pub fn default_stats(&self) -> CreatureStats {
        let base = CreatureStats::default();
        match self {
            CreatureKind::Amphithere => CreatureStats {
                bite_damage: 6.0,
                roar_radius: 12.0,
                ..base
            },
            CreatureKind::Cindervane => CreatureStats {
                bite_damage: 9.0,
                bite_reach: 3.5,
                roar_radius: 20.0,
                death_secs: 3.0,
                ..base
            },
            CreatureKind::Nulljaw => CreatureStats {
                bite_damage: 12.0,
                roar_fear_secs: 4.0,
                ..base
            },
            CreatureKind::PrimitiveDrake => CreatureStats {
                bite_damage: 5.0,
                bite_reach: 2.0,
                roar_radius: 10.0,
                ..base
            },
            CreatureKind::RiftDrake => CreatureStats {
                bite_damage: 8.0,
                ability_cooldown_scale: 0.8,
                ..base
            },
            CreatureKind::Stegonaut => CreatureStats {
                bite_damage: 7.0,
                bite_reach: 2.5,
                hurt_secs: 0.35,
                death_secs: 3.5,
                ..base
            },
            CreatureKind::Raevyx => CreatureStats {
                bite_damage: 10.0,
                roar_radius: 18.0,
                ability_cooldown_scale: 0.9,
                ..base
            },
        }
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tuning values read by ability factories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureStats {
    pub bite_damage: f32,
    /// Bite reach in blocks
    pub bite_reach: f32,
    pub roar_radius: f32,
    pub roar_fear_secs: f32,
    pub hurt_secs: f32,
    pub death_secs: f32,
    /// Multiplier applied to every cooldown of this creature
    pub ability_cooldown_scale: f32,
}

impl Default for CreatureStats {
    fn default() -> Self {
        Self {
            bite_damage: DEFAULT_BITE_DAMAGE,
            bite_reach: DEFAULT_BITE_REACH,
            roar_radius: DEFAULT_ROAR_RADIUS,
            roar_fear_secs: DEFAULT_ROAR_FEAR_SECS,
            hurt_secs: DEFAULT_HURT_SECS,
            death_secs: DEFAULT_DEATH_SECS,
            ability_cooldown_scale: 1.0,
        }
    }
}

impl CreatureStats {
    /// (field name, value) pairs, used for validation
    pub fn fields(&self) -> [(&'static str, f32); 7] {
        [
            ("bite_damage", self.bite_damage),
            ("bite_reach", self.bite_reach),
            ("roar_radius", self.roar_radius),
            ("roar_fear_secs", self.roar_fear_secs),
            ("hurt_secs", self.hurt_secs),
            ("death_secs", self.death_secs),
            ("ability_cooldown_scale", self.ability_cooldown_scale),
        ]
    }

    pub fn scaled_cooldown(&self, base: f32) -> f32 {
        base * self.ability_cooldown_scale
    }
}

/// A creature component that can own abilities.
///
/// `KIND` ties the Rust type to its runtime tag; two types must never share
/// a kind.
pub trait Creature: Component + Sized {
    const KIND: CreatureKind;

    fn with_stats(stats: CreatureStats) -> Self;

    fn stats(&self) -> &CreatureStats;
}
