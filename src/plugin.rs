//! Bevy integration.
//!
//! `DragonAbilitiesPlugin` installs the sealed [`AbilityRegistry`] as a
//! resource and runs two stages every `Update`:
//! 1. dispatch: one system per creature type turns [`AbilityRequest`]s into
//!    instances on the requesting entity's [`ActiveAbilities`]
//! 2. advance: every holder ticks; emitted effects become
//!    [`AbilityEffectEvent`]s for the host to apply
//!
//! The clock is the host's: add `MinimalPlugins` (or at least `TimePlugin`)
//! so `Res<Time>` advances.

use bevy::prelude::*;

use crate::abilities::{AbilityEffect, ActiveAbilities};
use crate::creature::Creature;
use crate::creatures::{
    Amphithere, Cindervane, Nulljaw, PrimitiveDrake, Raevyx, RiftDrake, Stegonaut,
};
use crate::error::{AbilityError, RegistryError};
use crate::registry::AbilityRegistry;

pub struct DragonAbilitiesPlugin {
    registry: AbilityRegistry,
}

impl DragonAbilitiesPlugin {
    pub fn new(registry: AbilityRegistry) -> Self {
        Self { registry }
    }

    /// Plugin over every built-in creature table
    pub fn try_default() -> Result<Self, RegistryError> {
        Ok(Self::new(crate::creatures::default_registry()?))
    }
}

impl Plugin for DragonAbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.registry.clone())
            .add_event::<AbilityRequest>()
            .add_event::<AbilityRejected>()
            .add_event::<AbilityEffectEvent>()
            .add_systems(
                Update,
                (
                    dispatch_requests::<Amphithere>,
                    dispatch_requests::<Cindervane>,
                    dispatch_requests::<Nulljaw>,
                    dispatch_requests::<PrimitiveDrake>,
                    dispatch_requests::<RiftDrake>,
                    dispatch_requests::<Stegonaut>,
                    dispatch_requests::<Raevyx>,
                    advance_active_abilities,
                )
                    .chain(),
            );
    }
}

/// Ask an entity to start the ability registered under `identifier`
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AbilityRequest {
    pub entity: Entity,
    pub identifier: String,
}

impl AbilityRequest {
    pub fn new(entity: Entity, identifier: impl Into<String>) -> Self {
        Self {
            entity,
            identifier: identifier.into(),
        }
    }
}

/// A request that could not be honoured
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AbilityRejected {
    pub entity: Entity,
    pub error: AbilityError,
}

/// Effect reported by a running ability
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AbilityEffectEvent {
    pub entity: Entity,
    pub identifier: &'static str,
    pub effect: AbilityEffect,
}

/// Start requested abilities on entities carrying creature `T`.
///
/// Requests for entities of another creature type are left to that type's
/// dispatcher. Creature components require [`ActiveAbilities`], so a missing
/// holder means the host removed it; the request is rejected.
fn dispatch_requests<T: Creature>(
    registry: Res<AbilityRegistry>,
    mut requests: EventReader<AbilityRequest>,
    mut creatures: Query<(&T, Option<&mut ActiveAbilities>)>,
    mut rejected: EventWriter<AbilityRejected>,
) {
    for request in requests.read() {
        let Ok((creature, active)) = creatures.get_mut(request.entity) else {
            continue;
        };
        let result = match active {
            Some(mut active) => active.start_from_registry(
                &registry,
                request.entity,
                creature,
                &request.identifier,
            ),
            None => Err(AbilityError::MissingHolder {
                identifier: request.identifier.clone(),
            }),
        };
        match result {
            Ok(()) => {
                tracing::debug!(
                    entity = ?request.entity,
                    identifier = %request.identifier,
                    owner = %T::KIND,
                    "ability started"
                );
            }
            Err(error) => {
                tracing::warn!(
                    entity = ?request.entity,
                    identifier = %request.identifier,
                    %error,
                    "ability request rejected"
                );
                rejected.send(AbilityRejected {
                    entity: request.entity,
                    error,
                });
            }
        }
    }
}

fn advance_active_abilities(
    time: Res<Time>,
    mut holders: Query<(Entity, &mut ActiveAbilities)>,
    mut effects: EventWriter<AbilityEffectEvent>,
) {
    let delta = time.delta_secs();
    for (entity, mut active) in &mut holders {
        if active.is_idle() {
            continue;
        }
        for emitted in active.tick(delta) {
            effects.send(AbilityEffectEvent {
                entity,
                identifier: emitted.identifier,
                effect: emitted.effect,
            });
        }
    }
}
