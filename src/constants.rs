//! Centralized tuning constants for the dragon ability core.
//!
//! Per-creature overrides live in [`crate::creature::CreatureKind::default_stats`]
//! and in the mod config; these are the shared baselines.

// =====================================================
// Creature stat defaults
// =====================================================

pub const DEFAULT_BITE_DAMAGE: f32 = 6.0;

/// Reach in blocks
pub const DEFAULT_BITE_REACH: f32 = 3.0;

pub const DEFAULT_ROAR_RADIUS: f32 = 16.0;

pub const DEFAULT_ROAR_FEAR_SECS: f32 = 3.0;

pub const DEFAULT_HURT_SECS: f32 = 0.5;

pub const DEFAULT_DEATH_SECS: f32 = 2.5;

// =====================================================
// Ability timelines (wind-up, active, recovery) in seconds
// =====================================================

pub const BITE_TIMELINE: (f32, f32, f32) = (0.35, 0.15, 0.4);

pub const ROAR_TIMELINE: (f32, f32, f32) = (0.6, 1.2, 0.5);

pub const WING_GUST_TIMELINE: (f32, f32, f32) = (0.5, 0.3, 0.6);

pub const FIRE_BODY_TIMELINE: (f32, f32, f32) = (0.8, 6.0, 0.8);

pub const NULL_PULSE_TIMELINE: (f32, f32, f32) = (1.0, 0.2, 0.8);

pub const RIFT_STEP_TIMELINE: (f32, f32, f32) = (0.4, 0.1, 0.3);

pub const TAIL_SWIPE_TIMELINE: (f32, f32, f32) = (0.45, 0.2, 0.55);

pub const DIVE_TIMELINE: (f32, f32, f32) = (0.7, 0.6, 0.9);

// =====================================================
// Cooldowns in seconds (before creature scaling)
// =====================================================

pub const BITE_COOLDOWN: f32 = 1.0;

pub const ROAR_COOLDOWN: f32 = 15.0;

pub const WING_GUST_COOLDOWN: f32 = 8.0;

pub const FIRE_BODY_COOLDOWN: f32 = 25.0;

pub const NULL_PULSE_COOLDOWN: f32 = 12.0;

pub const RIFT_STEP_COOLDOWN: f32 = 6.0;

pub const TAIL_SWIPE_COOLDOWN: f32 = 4.0;

pub const DIVE_COOLDOWN: f32 = 10.0;

// =====================================================
// Special ability magnitudes
// =====================================================

/// Fire body burn applied per contact
pub const FIRE_BODY_BURN_SECS: f32 = 4.0;

pub const FIRE_BODY_RADIUS: f32 = 2.5;

pub const WING_GUST_FORCE: f32 = 1.8;

pub const WING_GUST_RADIUS: f32 = 6.0;

pub const NULL_PULSE_RADIUS: f32 = 8.0;

pub const NULL_PULSE_SILENCE_SECS: f32 = 5.0;

pub const RIFT_STEP_DISTANCE: f32 = 12.0;

pub const TAIL_SWIPE_FORCE: f32 = 2.4;

/// Dive damage as a multiple of bite damage
pub const DIVE_DAMAGE_MULT: f32 = 2.0;

pub const DIVE_DISTANCE: f32 = 20.0;
