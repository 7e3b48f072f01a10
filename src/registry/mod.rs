//! Ability Registry
//!
//! Maps ability identifiers to typed descriptors. Population happens on an
//! [`AbilityRegistryBuilder`] during plugin startup; [`AbilityRegistryBuilder::seal`]
//! turns it into an immutable [`AbilityRegistry`] that generic dispatch code
//! reads by identifier.
//!
//! Duplicate identifiers are rejected, never overwritten: one creature's
//! table must not silently shadow another's.

use bevy::prelude::*;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::abilities::{Ability, AbilityInstance};
use crate::creature::{Creature, CreatureKind};
use crate::error::{AbilityError, RegistryError};

pub mod listing;

pub use listing::AbilityListing;

/// Builds a fresh ability for one creature
pub type AbilityFactory<T> = fn(&T) -> Box<dyn Ability>;

/// Descriptor binding an identifier, an owner type and a factory.
///
/// Descriptors are plain `Copy` data, so creature modules declare them as
/// `const` handles and register them explicitly.
pub struct AbilityType<T> {
    identifier: &'static str,
    factory: AbilityFactory<T>,
}

impl<T: Creature> AbilityType<T> {
    pub const fn new(identifier: &'static str, factory: AbilityFactory<T>) -> Self {
        Self {
            identifier,
            factory,
        }
    }

    pub const fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn owner_kind(&self) -> CreatureKind {
        T::KIND
    }

    pub fn factory(&self) -> AbilityFactory<T> {
        self.factory
    }

    /// Part of the identifier after the `<creature>_` prefix
    pub fn action(&self) -> &'static str {
        listing::action_of(self.identifier, T::KIND)
    }

    /// Run the factory and bind the result to `owner`
    pub fn create(&self, owner: Entity, creature: &T) -> AbilityInstance {
        AbilityInstance::new(self.identifier, owner, T::KIND, (self.factory)(creature))
    }
}

impl<T> Clone for AbilityType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AbilityType<T> {}

impl<T> PartialEq for AbilityType<T> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.factory as usize == other.factory as usize
    }
}

impl<T> Eq for AbilityType<T> {}

impl<T: Creature> fmt::Debug for AbilityType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbilityType")
            .field("identifier", &self.identifier)
            .field("owner", &T::KIND)
            .finish_non_exhaustive()
    }
}

/// Type-erased registry record
#[derive(Clone)]
pub struct AbilityEntry {
    identifier: &'static str,
    owner_kind: CreatureKind,
    descriptor: Arc<dyn Any + Send + Sync>,
}

impl AbilityEntry {
    fn new<T: Creature>(ability: AbilityType<T>) -> Self {
        Self {
            identifier: ability.identifier,
            owner_kind: T::KIND,
            descriptor: Arc::new(ability),
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn owner_kind(&self) -> CreatureKind {
        self.owner_kind
    }

    /// The typed descriptor, if `T` is the registered owner
    pub fn downcast<T: Creature>(&self) -> Option<AbilityType<T>> {
        self.descriptor.downcast_ref::<AbilityType<T>>().copied()
    }

    /// Create an instance for `creature`, bound to `owner`
    pub fn instantiate<T: Creature>(
        &self,
        owner: Entity,
        creature: &T,
    ) -> Result<AbilityInstance, AbilityError> {
        let ability = self
            .downcast::<T>()
            .ok_or(AbilityError::OwnerMismatch {
                identifier: self.identifier,
                expected: self.owner_kind,
                actual: T::KIND,
            })?;
        Ok(ability.create(owner, creature))
    }

    pub fn listing(&self) -> AbilityListing {
        AbilityListing::new(self.identifier, self.owner_kind)
    }
}

impl fmt::Debug for AbilityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbilityEntry")
            .field("identifier", &self.identifier)
            .field("owner", &self.owner_kind)
            .finish_non_exhaustive()
    }
}

/// Entries in registration order plus an identifier index
#[derive(Debug, Clone, Default)]
struct AbilityTable {
    entries: Vec<AbilityEntry>,
    index: HashMap<&'static str, usize>,
}

impl AbilityTable {
    fn get(&self, identifier: &str) -> Option<&AbilityEntry> {
        self.index.get(identifier).map(|&i| &self.entries[i])
    }

    fn insert(&mut self, entry: AbilityEntry) {
        self.index.insert(entry.identifier, self.entries.len());
        self.entries.push(entry);
    }
}

/// Registration phase of the registry
#[derive(Debug, Default)]
pub struct AbilityRegistryBuilder {
    table: AbilityTable,
}

impl AbilityRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one descriptor and hand it back
    pub fn register<T: Creature>(
        &mut self,
        ability: AbilityType<T>,
    ) -> Result<AbilityType<T>, RegistryError> {
        self.check(&ability)?;
        self.insert(ability);
        Ok(ability)
    }

    /// Register a whole creature table. Nothing is inserted unless every
    /// descriptor in the batch is valid and unclaimed.
    pub fn register_batch<T: Creature>(
        &mut self,
        batch: &[AbilityType<T>],
    ) -> Result<(), RegistryError> {
        for (i, ability) in batch.iter().enumerate() {
            self.check(ability)?;
            if batch[..i]
                .iter()
                .any(|earlier| earlier.identifier == ability.identifier)
            {
                return Err(duplicate::<T>(ability.identifier, T::KIND));
            }
        }
        for ability in batch {
            self.insert(*ability);
        }
        Ok(())
    }

    pub fn lookup(&self, identifier: &str) -> Option<&AbilityEntry> {
        self.table.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// End the registration phase
    pub fn seal(self) -> AbilityRegistry {
        tracing::info!(abilities = self.len(), "ability registry sealed");
        AbilityRegistry { table: self.table }
    }

    fn check<T: Creature>(&self, ability: &AbilityType<T>) -> Result<(), RegistryError> {
        validate_identifier(ability.identifier, T::KIND)?;
        if let Some(existing) = self.table.get(ability.identifier) {
            return Err(duplicate::<T>(ability.identifier, existing.owner_kind));
        }
        Ok(())
    }

    fn insert<T: Creature>(&mut self, ability: AbilityType<T>) {
        tracing::debug!(
            identifier = ability.identifier,
            owner = %T::KIND,
            "registered ability"
        );
        self.table.insert(AbilityEntry::new(ability));
    }
}

fn duplicate<T: Creature>(identifier: &'static str, existing: CreatureKind) -> RegistryError {
    tracing::warn!(
        identifier,
        existing = %existing,
        attempted = %T::KIND,
        "rejected duplicate ability identifier"
    );
    RegistryError::DuplicateIdentifier {
        identifier,
        existing,
        attempted: T::KIND,
    }
}

/// Check the `<creature>_<action>` convention
pub fn validate_identifier(
    identifier: &'static str,
    owner: CreatureKind,
) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidIdentifier { identifier, reason };

    if identifier.is_empty() {
        return Err(invalid("identifier is empty"));
    }
    if !identifier
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        return Err(invalid("only lowercase letters, digits and '_' are allowed"));
    }
    match identifier
        .strip_prefix(owner.as_str())
        .and_then(|rest| rest.strip_prefix('_'))
    {
        None => Err(invalid("must start with the owning creature's name")),
        Some("") => Err(invalid("missing action after the creature prefix")),
        Some(_) => Ok(()),
    }
}

/// Sealed, read-only ability table
#[derive(Resource, Debug, Clone)]
pub struct AbilityRegistry {
    table: AbilityTable,
}

impl AbilityRegistry {
    /// Start a new registration phase
    pub fn builder() -> AbilityRegistryBuilder {
        AbilityRegistryBuilder::new()
    }

    /// Entry for `identifier`; unknown identifiers are simply absent
    pub fn lookup(&self, identifier: &str) -> Option<&AbilityEntry> {
        self.table.get(identifier)
    }

    /// Typed descriptor for `identifier` if it belongs to `T`
    pub fn lookup_as<T: Creature>(&self, identifier: &str) -> Option<AbilityType<T>> {
        self.lookup(identifier).and_then(AbilityEntry::downcast::<T>)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.table.index.contains_key(identifier)
    }

    /// Every entry, once, in registration order
    pub fn all(&self) -> impl Iterator<Item = &AbilityEntry> + '_ {
        self.table.entries.iter()
    }

    pub fn by_owner(&self, kind: CreatureKind) -> impl Iterator<Item = &AbilityEntry> + '_ {
        self.all().filter(move |entry| entry.owner_kind == kind)
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    pub fn listing(&self) -> Vec<AbilityListing> {
        self.all().map(AbilityEntry::listing).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.listing())
    }
}

impl<'a> IntoIterator for &'a AbilityRegistry {
    type Item = &'a AbilityEntry;
    type IntoIter = std::slice::Iter<'a, AbilityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{BiteAbility, HurtAbility};
    use crate::creatures::cindervane::Cindervane;
    use crate::creatures::stegonaut::Stegonaut;

    const CINDERVANE_BITE: AbilityType<Cindervane> =
        AbilityType::new("cindervane_bite", BiteAbility::<Cindervane>::create);
    const CINDERVANE_HURT: AbilityType<Cindervane> =
        AbilityType::new("cindervane_hurt", HurtAbility::<Cindervane>::create);
    const STEGONAUT_HURT: AbilityType<Stegonaut> =
        AbilityType::new("stegonaut_hurt", HurtAbility::<Stegonaut>::create);

    #[test]
    fn test_register_returns_same_descriptor() {
        let mut builder = AbilityRegistryBuilder::new();
        let handle = builder.register(CINDERVANE_BITE).unwrap();
        assert_eq!(handle, CINDERVANE_BITE);

        let registry = builder.seal();
        let found = registry.lookup_as::<Cindervane>("cindervane_bite").unwrap();
        assert_eq!(found, CINDERVANE_BITE);
        assert_eq!(
            found.factory() as usize,
            BiteAbility::<Cindervane>::create as AbilityFactory<Cindervane> as usize
        );
    }

    #[test]
    fn test_unknown_lookup_is_absent() {
        let mut builder = AbilityRegistryBuilder::new();
        builder.register(CINDERVANE_BITE).unwrap();
        let registry = builder.seal();
        assert!(registry.lookup("cindervane_roar").is_none());
        assert!(!registry.contains("cindervane_roar"));
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_duplicate_rejected_and_table_unchanged() {
        let mut builder = AbilityRegistryBuilder::new();
        builder.register(CINDERVANE_BITE).unwrap();

        let imposter: AbilityType<Cindervane> =
            AbilityType::new("cindervane_bite", HurtAbility::<Cindervane>::create);
        let err = builder.register(imposter).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateIdentifier {
                identifier: "cindervane_bite",
                existing: CreatureKind::Cindervane,
                attempted: CreatureKind::Cindervane,
            }
        );
        assert_eq!(builder.len(), 1);
        assert_eq!(
            builder.lookup("cindervane_bite").unwrap().downcast::<Cindervane>(),
            Some(CINDERVANE_BITE)
        );
    }

    /// Collects formatted log output written on the current thread
    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn warnings_during(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_duplicates_warn_in_table_and_in_batch() {
        let against_table = warnings_during(|| {
            let mut builder = AbilityRegistryBuilder::new();
            builder.register(CINDERVANE_BITE).unwrap();
            assert!(builder.register(CINDERVANE_BITE).is_err());
        });
        assert!(against_table.contains("rejected duplicate ability identifier"));
        assert!(against_table.contains("cindervane_bite"));

        let within_batch = warnings_during(|| {
            let mut builder = AbilityRegistryBuilder::new();
            assert!(builder
                .register_batch(&[CINDERVANE_HURT, CINDERVANE_HURT])
                .is_err());
        });
        assert!(within_batch.contains("rejected duplicate ability identifier"));
        assert!(within_batch.contains("cindervane_hurt"));
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let mut builder = AbilityRegistryBuilder::new();
        builder.register(CINDERVANE_HURT).unwrap();

        let batch = [CINDERVANE_BITE, CINDERVANE_HURT];
        assert!(builder.register_batch(&batch).is_err());
        assert_eq!(builder.len(), 1);
        assert!(builder.lookup("cindervane_bite").is_none());

        let repeated = [CINDERVANE_BITE, CINDERVANE_BITE];
        assert!(matches!(
            builder.register_batch(&repeated),
            Err(RegistryError::DuplicateIdentifier { .. })
        ));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_shared_generic_under_two_owners() {
        let mut builder = AbilityRegistryBuilder::new();
        builder.register(CINDERVANE_HURT).unwrap();
        builder.register(STEGONAUT_HURT).unwrap();
        let registry = builder.seal();

        let a = registry.lookup("cindervane_hurt").unwrap();
        let b = registry.lookup("stegonaut_hurt").unwrap();
        assert_eq!(a.owner_kind(), CreatureKind::Cindervane);
        assert_eq!(b.owner_kind(), CreatureKind::Stegonaut);

        let owner = Entity::from_raw(1);
        let ia = a.instantiate(owner, &Cindervane::default()).unwrap();
        let ib = b.instantiate(owner, &Stegonaut::default()).unwrap();
        assert_eq!(ia.behavior().name(), "hurt");
        assert_eq!(ib.behavior().name(), "hurt");
        assert_ne!(ia.owner_kind(), ib.owner_kind());
    }

    #[test]
    fn test_wrong_owner_type() {
        let mut builder = AbilityRegistryBuilder::new();
        builder.register(CINDERVANE_BITE).unwrap();
        let registry = builder.seal();

        assert!(registry.lookup_as::<Stegonaut>("cindervane_bite").is_none());
        let err = registry
            .lookup("cindervane_bite")
            .unwrap()
            .instantiate(Entity::from_raw(3), &Stegonaut::default())
            .unwrap_err();
        assert_eq!(
            err,
            AbilityError::OwnerMismatch {
                identifier: "cindervane_bite",
                expected: CreatureKind::Cindervane,
                actual: CreatureKind::Stegonaut,
            }
        );
    }

    #[test]
    fn test_all_is_restartable_and_ordered() {
        let mut builder = AbilityRegistryBuilder::new();
        builder.register(CINDERVANE_HURT).unwrap();
        builder.register(STEGONAUT_HURT).unwrap();
        builder.register(CINDERVANE_BITE).unwrap();
        let registry = builder.seal();

        let first: Vec<_> = registry.all().map(AbilityEntry::identifier).collect();
        let second: Vec<_> = registry.all().map(AbilityEntry::identifier).collect();
        assert_eq!(first, vec!["cindervane_hurt", "stegonaut_hurt", "cindervane_bite"]);
        assert_eq!(first, second);
        assert_eq!(registry.by_owner(CreatureKind::Cindervane).count(), 2);
        assert_eq!((&registry).into_iter().count(), 3);
    }

    #[test]
    fn test_identifier_validation() {
        let kind = CreatureKind::RiftDrake;
        assert!(validate_identifier("rift_drake_bite", kind).is_ok());
        assert!(validate_identifier("rift_drake_rift_step", kind).is_ok());

        for bad in ["", "rift_drake", "rift_drake_", "Rift_Drake_bite", "rift-drake-bite", "cindervane_bite", "rift_drakebite"] {
            assert!(
                matches!(
                    validate_identifier(bad, kind),
                    Err(RegistryError::InvalidIdentifier { .. })
                ),
                "`{bad}` should be rejected"
            );
        }
    }

    #[test]
    fn test_action_suffix() {
        assert_eq!(CINDERVANE_BITE.action(), "bite");
        assert_eq!(CINDERVANE_BITE.owner_kind(), CreatureKind::Cindervane);
    }
}
