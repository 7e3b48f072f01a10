//! Error types for the ability core.
//!
//! Registry errors surface at load time and should abort plugin startup.
//! Ability errors surface at runtime and are expected: a creature asking to
//! bite while its bite is cooling down is not a bug.

use std::path::PathBuf;

use thiserror::Error;

use crate::creature::CreatureKind;

/// Failures while populating an [`AbilityRegistryBuilder`](crate::registry::AbilityRegistryBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Another descriptor already claimed this identifier
    #[error("duplicate ability identifier `{identifier}` (registered by {existing}, attempted by {attempted})")]
    DuplicateIdentifier {
        identifier: &'static str,
        existing: CreatureKind,
        attempted: CreatureKind,
    },
    /// Identifier does not follow the `<creature>_<action>` convention
    #[error("invalid ability identifier `{identifier}`: {reason}")]
    InvalidIdentifier {
        identifier: &'static str,
        reason: &'static str,
    },
}

/// Failures while creating or running ability instances
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AbilityError {
    #[error("ability `{identifier}` belongs to {expected}, not {actual}")]
    OwnerMismatch {
        identifier: &'static str,
        expected: CreatureKind,
        actual: CreatureKind,
    },
    #[error("ability `{identifier}` is bound to another entity")]
    ForeignInstance { identifier: &'static str },
    #[error("ability `{identifier}` is already active")]
    AlreadyActive { identifier: &'static str },
    #[error("ability `{identifier}` is on cooldown ({remaining:.2}s left)")]
    OnCooldown {
        identifier: &'static str,
        remaining: f32,
    },
    #[error("unknown ability `{identifier}`")]
    UnknownAbility { identifier: String },
    #[error("entity has no ActiveAbilities holder to run `{identifier}`")]
    MissingHolder { identifier: String },
}

/// Failures while loading a [`ModConfig`](crate::config::ModConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid RON config: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("unsupported config format for {0} (expected .ron or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("{kind}: `{field}` must be finite and non-negative (got {value})")]
    InvalidValue {
        kind: CreatureKind,
        field: &'static str,
        value: f32,
    },
}
