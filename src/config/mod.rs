//! Mod configuration.
//!
//! Loaded from `config/dragons.ron` (or `.json`) by the host at startup.
//! Every field is optional; creatures missing from the file keep their
//! built-in tuning.
//!
//! ```ron
//! (
//!     logging: (default_level: debug),
//!     creatures: {
//!         cindervane: (bite_damage: 11.0, roar_radius: 24.0),
//!     },
//! )
//! ```

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::creature::{Creature, CreatureKind, CreatureStats};
use crate::error::ConfigError;
use crate::logging::TracingConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    pub logging: TracingConfig,
    /// Per-kind stat overrides; absent fields fall back to the kind's defaults
    pub creatures: BTreeMap<CreatureKind, StatsOverride>,
}

/// Partial [`CreatureStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsOverride {
    pub bite_damage: Option<f32>,
    pub bite_reach: Option<f32>,
    pub roar_radius: Option<f32>,
    pub roar_fear_secs: Option<f32>,
    pub hurt_secs: Option<f32>,
    pub death_secs: Option<f32>,
    pub ability_cooldown_scale: Option<f32>,
}

impl StatsOverride {
    pub fn apply(&self, base: CreatureStats) -> CreatureStats {
        CreatureStats {
            bite_damage: self.bite_damage.unwrap_or(base.bite_damage),
            bite_reach: self.bite_reach.unwrap_or(base.bite_reach),
            roar_radius: self.roar_radius.unwrap_or(base.roar_radius),
            roar_fear_secs: self.roar_fear_secs.unwrap_or(base.roar_fear_secs),
            hurt_secs: self.hurt_secs.unwrap_or(base.hurt_secs),
            death_secs: self.death_secs.unwrap_or(base.death_secs),
            ability_cooldown_scale: self
                .ability_cooldown_scale
                .unwrap_or(base.ability_cooldown_scale),
        }
    }
}

impl ModConfig {
    /// Load and validate a `.ron` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron(&content)?,
            Some("json") => Self::from_json(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::info!(path = %path.display(), overrides = config.creatures.len(), "loaded mod config");
        Ok(config)
    }

    /// Parse RON; optional fields may be written bare (`bite_damage: 9.0`)
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite stats
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in self.creatures.keys() {
            for (field, value) in self.stats_for(*kind).fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidValue { kind: *kind, field, value });
                }
            }
        }
        Ok(())
    }

    /// Effective stats for `kind`
    pub fn stats_for(&self, kind: CreatureKind) -> CreatureStats {
        let base = kind.default_stats();
        match self.creatures.get(&kind) {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    /// Build a creature component with this config's tuning
    pub fn creature<T: Creature>(&self) -> T {
        T::with_stats(self.stats_for(T::KIND))
    }
}
