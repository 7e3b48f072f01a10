//! Creature Abilities
//!
//! An ability instance is the runtime half of an ability: created by a
//! registered factory for one specific entity, advanced every tick through
//! its timeline, and dropped once it finishes.
//!
//! Timeline phases:
//! 1. WindUp: animation anticipation, no gameplay effect yet
//! 2. Active: the ability's effects are emitted on entry
//! 3. Recovery: animation follow-through
//! 4. Finished: the owner releases the instance and starts its cooldown
//!
//! Effects are *reported*, never applied: the host decides what a
//! `Damage` or `Despawn` means in its world.

use bevy::prelude::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::creature::CreatureKind;

pub mod active;
pub mod cooldown;
pub mod generic;

pub use active::{ActiveAbilities, EmittedEffect};
pub use cooldown::AbilityCooldownTracker;
pub use generic::{BiteAbility, DieAbility, HurtAbility, RoarAbility};

/// Where an ability currently is in its timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbilityPhase {
    WindUp,
    Active,
    Recovery,
    Finished,
}

/// Status effects a dragon can inflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Fire: damage over time
    Burning,
    /// Null: target cannot use abilities
    Silenced,
}

/// What an ability reports when it fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Deal damage to whatever is within reach in front of the owner
    Damage { amount: f32, reach: f32 },
    /// Make nearby creatures flee
    Fear { radius: f32, duration: f32 },
    /// Push everything around the owner away
    Knockback { force: f32, radius: f32 },
    /// Apply a status to everything within radius
    ApplyStatus {
        status: StatusKind,
        radius: f32,
        duration: f32,
    },
    /// Move the owner forward
    Displacement { distance: f32 },
    /// Owner should be removed from the world
    Despawn,
}

/// Outcome of advancing an [`AbilityTimeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub phase: AbilityPhase,
    /// True on the first advance that reaches the active window
    pub entered_active: bool,
    /// True on the first advance that reaches the end (never after interrupt)
    pub finished_now: bool,
}

/// Wind-up / active / recovery durations plus elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityTimeline {
    wind_up: f32,
    active: f32,
    recovery: f32,
    elapsed: f32,
    fired: bool,
    completed: bool,
    interrupted: bool,
}

impl AbilityTimeline {
    pub fn new(wind_up: f32, active: f32, recovery: f32) -> Self {
        Self {
            wind_up: sanitize(wind_up),
            active: sanitize(active),
            recovery: sanitize(recovery),
            elapsed: 0.0,
            fired: false,
            completed: false,
            interrupted: false,
        }
    }

    pub fn from_secs((wind_up, active, recovery): (f32, f32, f32)) -> Self {
        Self::new(wind_up, active, recovery)
    }

    pub fn total(&self) -> f32 {
        self.wind_up + self.active + self.recovery
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn phase(&self) -> AbilityPhase {
        if self.interrupted || self.completed {
            AbilityPhase::Finished
        } else if self.elapsed < self.wind_up {
            AbilityPhase::WindUp
        } else if self.elapsed < self.wind_up + self.active {
            AbilityPhase::Active
        } else if self.elapsed < self.total() {
            AbilityPhase::Recovery
        } else {
            AbilityPhase::Finished
        }
    }

    /// Advance by `delta` seconds. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, delta: f32) -> TimelineStep {
        if self.interrupted || self.completed {
            return TimelineStep {
                phase: AbilityPhase::Finished,
                entered_active: false,
                finished_now: false,
            };
        }

        self.elapsed += sanitize(delta);

        let entered_active = !self.fired && self.elapsed >= self.wind_up;
        if entered_active {
            self.fired = true;
        }

        let finished_now = self.elapsed >= self.total();
        if finished_now {
            self.completed = true;
        }

        TimelineStep {
            phase: self.phase(),
            entered_active,
            finished_now,
        }
    }

    /// Cut the timeline short. Returns false if it had already finished.
    pub fn interrupt(&mut self) -> bool {
        if self.phase() == AbilityPhase::Finished {
            return false;
        }
        self.interrupted = true;
        true
    }
}

fn sanitize(secs: f32) -> f32 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}

/// Result of one [`Ability::tick`]
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityTick {
    pub phase: AbilityPhase,
    pub effects: Vec<AbilityEffect>,
}

/// Behaviour of a running ability.
///
/// Implementors hold their own [`AbilityTimeline`] and push effects from the
/// `on_active` / `on_finished` hooks; the provided `tick` drives both.
pub trait Ability: Send + Sync + fmt::Debug {
    /// Short behaviour name shared by every owner ("bite", "hurt", ...)
    fn name(&self) -> &'static str;

    fn timeline(&self) -> &AbilityTimeline;

    fn timeline_mut(&mut self) -> &mut AbilityTimeline;

    /// Cooldown started once the instance finishes
    fn cooldown_secs(&self) -> f32 {
        0.0
    }

    fn is_interruptible(&self) -> bool {
        true
    }

    fn on_active(&mut self, _effects: &mut Vec<AbilityEffect>) {}

    fn on_finished(&mut self, _effects: &mut Vec<AbilityEffect>) {}

    fn phase(&self) -> AbilityPhase {
        self.timeline().phase()
    }

    fn tick(&mut self, delta: f32) -> AbilityTick {
        let step = self.timeline_mut().advance(delta);
        let mut effects = Vec::new();
        if step.entered_active {
            self.on_active(&mut effects);
        }
        if step.finished_now {
            self.on_finished(&mut effects);
        }
        AbilityTick {
            phase: step.phase,
            effects,
        }
    }

    /// Returns true if the ability was running and is now stopped
    fn interrupt(&mut self) -> bool {
        self.is_interruptible() && self.timeline_mut().interrupt()
    }
}

/// An ability bound to the entity it was created for
#[derive(Debug)]
pub struct AbilityInstance {
    identifier: &'static str,
    owner: Entity,
    owner_kind: CreatureKind,
    behavior: Box<dyn Ability>,
}

impl AbilityInstance {
    pub(crate) fn new(
        identifier: &'static str,
        owner: Entity,
        owner_kind: CreatureKind,
        behavior: Box<dyn Ability>,
    ) -> Self {
        Self {
            identifier,
            owner,
            owner_kind,
            behavior,
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn owner(&self) -> Entity {
        self.owner
    }

    pub fn owner_kind(&self) -> CreatureKind {
        self.owner_kind
    }

    pub fn behavior(&self) -> &dyn Ability {
        self.behavior.as_ref()
    }

    pub fn phase(&self) -> AbilityPhase {
        self.behavior.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == AbilityPhase::Finished
    }

    pub fn cooldown_secs(&self) -> f32 {
        self.behavior.cooldown_secs()
    }

    pub fn tick(&mut self, delta: f32) -> AbilityTick {
        self.behavior.tick(delta)
    }

    pub fn interrupt(&mut self) -> bool {
        self.behavior.interrupt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_phases_in_order() {
        let mut timeline = AbilityTimeline::new(1.0, 1.0, 1.0);
        assert_eq!(timeline.phase(), AbilityPhase::WindUp);

        let step = timeline.advance(0.5);
        assert_eq!(step.phase, AbilityPhase::WindUp);
        assert!(!step.entered_active);

        let step = timeline.advance(0.6);
        assert_eq!(step.phase, AbilityPhase::Active);
        assert!(step.entered_active);

        let step = timeline.advance(1.0);
        assert_eq!(step.phase, AbilityPhase::Recovery);
        assert!(!step.entered_active);

        let step = timeline.advance(1.0);
        assert_eq!(step.phase, AbilityPhase::Finished);
        assert!(step.finished_now);

        // Finished is sticky and reported once
        let step = timeline.advance(1.0);
        assert_eq!(step.phase, AbilityPhase::Finished);
        assert!(!step.finished_now);
    }

    #[test]
    fn test_timeline_large_step_fires_both_edges() {
        let mut timeline = AbilityTimeline::new(0.2, 0.2, 0.2);
        let step = timeline.advance(10.0);
        assert!(step.entered_active);
        assert!(step.finished_now);
        assert_eq!(step.phase, AbilityPhase::Finished);
    }

    #[test]
    fn test_zero_length_timeline_finishes_on_first_tick() {
        let mut timeline = AbilityTimeline::new(0.0, 0.0, 0.0);
        let step = timeline.advance(0.0);
        assert!(step.entered_active);
        assert!(step.finished_now);
    }

    #[test]
    fn test_bad_deltas_are_ignored() {
        let mut timeline = AbilityTimeline::new(1.0, 1.0, 1.0);
        timeline.advance(-5.0);
        timeline.advance(f32::NAN);
        timeline.advance(f32::INFINITY);
        assert_eq!(timeline.elapsed(), 0.0);
        assert_eq!(timeline.phase(), AbilityPhase::WindUp);
    }

    #[test]
    fn test_negative_durations_clamped() {
        let timeline = AbilityTimeline::new(-1.0, 2.0, -3.0);
        assert_eq!(timeline.total(), 2.0);
        assert_eq!(timeline.phase(), AbilityPhase::Active);
    }

    #[test]
    fn test_interrupt_suppresses_finish() {
        let mut timeline = AbilityTimeline::new(1.0, 1.0, 1.0);
        assert!(timeline.interrupt());
        assert!(timeline.is_interrupted());
        assert_eq!(timeline.phase(), AbilityPhase::Finished);

        let step = timeline.advance(5.0);
        assert!(!step.entered_active);
        assert!(!step.finished_now);
        assert!(!timeline.interrupt());
    }

    #[test]
    fn test_effect_json_is_tagged() {
        let effect = AbilityEffect::Fear {
            radius: 16.0,
            duration: 3.0,
        };
        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("\"type\":\"fear\""));

        let status = AbilityEffect::ApplyStatus {
            status: StatusKind::Burning,
            radius: 1.0,
            duration: 2.0,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"burning\""));
    }
}
