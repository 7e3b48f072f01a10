//! Serializable view of registry entries, for diagnostics and host tooling.

use serde::{Deserialize, Serialize};

use crate::creature::CreatureKind;

/// Strip the `<creature>_` prefix; identifiers without it are returned as-is
pub fn action_of(identifier: &str, owner: CreatureKind) -> &str {
    identifier
        .strip_prefix(owner.as_str())
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(identifier)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityListing {
    pub identifier: String,
    pub owner: CreatureKind,
    /// Identifier without the creature prefix ("bite", "fire_body", ...)
    pub action: String,
}

impl AbilityListing {
    pub fn new(identifier: &str, owner: CreatureKind) -> Self {
        Self {
            identifier: identifier.to_string(),
            owner,
            action: action_of(identifier, owner).to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_split() {
        let listing = AbilityListing::new("primitive_drake_roar", CreatureKind::PrimitiveDrake);
        assert_eq!(listing.action, "roar");
        assert_eq!(listing.owner, CreatureKind::PrimitiveDrake);
    }

    #[test]
    fn test_listing_json() {
        let listing = AbilityListing::new("cindervane_fire_body", CreatureKind::Cindervane);
        let json = listing.to_json().unwrap();
        assert!(json.contains("\"owner\":\"cindervane\""));
        assert!(json.contains("\"action\":\"fire_body\""));
        assert_eq!(AbilityListing::from_json(&json).unwrap(), listing);
    }

    #[test]
    fn test_from_json_reports_bad_owner() {
        let json = r#"{"identifier":"wyvern_bite","owner":"wyvern","action":"bite"}"#;
        let err = AbilityListing::from_json(json).unwrap_err();
        assert!(err.is_data());
    }
}
