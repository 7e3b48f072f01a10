//! Per-creature ability tables.
//!
//! Each module declares its descriptors as `const` handles and registers
//! them in one pass. Registration order below is the order the registry
//! enumerates them in.

use crate::error::RegistryError;
use crate::registry::{AbilityRegistry, AbilityRegistryBuilder};

pub mod amphithere;
pub mod cindervane;
pub mod nulljaw;
pub mod primitive_drake;
pub mod raevyx;
pub mod rift_drake;
pub mod stegonaut;

pub use amphithere::Amphithere;
pub use cindervane::Cindervane;
pub use nulljaw::Nulljaw;
pub use primitive_drake::PrimitiveDrake;
pub use raevyx::Raevyx;
pub use rift_drake::RiftDrake;
pub use stegonaut::Stegonaut;

/// Register every creature table
pub fn register_all(builder: &mut AbilityRegistryBuilder) -> Result<(), RegistryError> {
    amphithere::register(builder)?;
    cindervane::register(builder)?;
    nulljaw::register(builder)?;
    primitive_drake::register(builder)?;
    rift_drake::register(builder)?;
    stegonaut::register(builder)?;
    raevyx::register(builder)?;
    Ok(())
}

/// Sealed registry holding every dragon ability
pub fn default_registry() -> Result<AbilityRegistry, RegistryError> {
    let mut builder = AbilityRegistry::builder();
    register_all(&mut builder)?;
    Ok(builder.seal())
}

/// Number of descriptors across all tables
pub fn descriptor_count() -> usize {
    amphithere::descriptors().len()
        + cindervane::descriptors().len()
        + nulljaw::descriptors().len()
        + primitive_drake::descriptors().len()
        + rift_drake::descriptors().len()
        + stegonaut::descriptors().len()
        + raevyx::descriptors().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::CreatureKind;

    #[test]
    fn test_default_registry_holds_every_table() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), descriptor_count());
        assert_eq!(registry.len(), 33);
        for kind in CreatureKind::all() {
            assert!(registry.by_owner(kind).count() >= 4, "{kind} table too small");
            assert!(registry.contains(&format!("{}_hurt", kind.as_str())));
            assert!(registry.contains(&format!("{}_die", kind.as_str())));
        }
    }

    #[test]
    fn test_register_all_twice_fails_on_first_table() {
        let mut builder = AbilityRegistry::builder();
        register_all(&mut builder).unwrap();
        let err = register_all(&mut builder).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateIdentifier {
                identifier: "amphithere_bite",
                ..
            }
        ));
        assert_eq!(builder.len(), descriptor_count());
    }
}
