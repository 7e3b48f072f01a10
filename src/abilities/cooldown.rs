//! Per-entity cooldown bookkeeping, keyed by ability identifier.

use std::collections::HashMap;

/// Runtime state for tracking cooldowns
#[derive(Debug, Clone, Default)]
pub struct AbilityCooldownTracker {
    /// ability identifier → remaining cooldown seconds
    cooldowns: HashMap<&'static str, f32>,
}

impl AbilityCooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if ability is off cooldown
    pub fn is_ready(&self, identifier: &str) -> bool {
        self.cooldowns.get(identifier).is_none_or(|cd| *cd <= 0.0)
    }

    /// Start cooldown for an ability. Non-positive durations are ignored.
    pub fn start(&mut self, identifier: &'static str, secs: f32) {
        if secs.is_finite() && secs > 0.0 {
            self.cooldowns.insert(identifier, secs);
        }
    }

    /// Tick all cooldowns by delta time, forgetting the expired ones
    pub fn tick(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        for cd in self.cooldowns.values_mut() {
            *cd = (*cd - delta).max(0.0);
        }
        self.cooldowns.retain(|_, cd| *cd > 0.0);
    }

    /// Get remaining cooldown for an ability
    pub fn remaining(&self, identifier: &str) -> f32 {
        self.cooldowns.get(identifier).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.cooldowns.is_empty()
    }

    pub fn clear(&mut self) {
        self.cooldowns.clear();
    }
}
