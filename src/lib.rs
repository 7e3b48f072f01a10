//! Dragon Core - Ability Library
//!
//! This crate provides the ability logic for the dragon content mod:
//! - Ability registry (identifier → typed descriptor → per-entity instance)
//! - Creature kinds and tuning stats
//! - Shared generic abilities (bite, roar, hurt, die) and creature specials
//! - Per-creature ability tables (Amphithere, Cindervane, Nulljaw,
//!   Primitive Drake, Rift Drake, Stegonaut, Raevyx)
//! - Per-entity ability lifecycle and cooldowns
//! - Bevy plugin for host integration
//!
//! Rendering, models, particles and animation files belong to the host.

pub mod abilities;
pub mod config;
pub mod constants;
pub mod creature;
pub mod creatures;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod registry;

pub use abilities::{Ability, AbilityEffect, AbilityInstance, AbilityPhase, ActiveAbilities};
pub use creature::{Creature, CreatureKind, CreatureStats};
pub use error::{AbilityError, ConfigError, RegistryError};
pub use plugin::DragonAbilitiesPlugin;
pub use registry::{AbilityEntry, AbilityRegistry, AbilityRegistryBuilder, AbilityType};
