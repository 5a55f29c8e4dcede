use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of an entity or aggregate root.
///
/// Both customers and products are keyed by an `EntityId` in their
/// repositories. The nil id (all zero bits) is a legal value meaning
/// "not assigned yet"; it is never treated as an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero identifier.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Returns true for the all-zero identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Creates an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..64).map(|_| EntityId::new()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn default_is_nil() {
        let id = EntityId::default();
        assert!(id.is_nil());
        assert_eq!(id, EntityId::nil());
        assert!(!EntityId::new().is_nil());
    }

    #[test]
    fn display_matches_hyphenated_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(EntityId::from(uuid).to_string(), uuid.to_string());
    }

    #[test]
    fn serializes_as_bare_uuid_string() {
        let id = EntityId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
