//! Character role registry.
//!
//! Roles live outside the catalog; scripts reference them by loosely
//! formatted identifiers. [`RoleId`] canonicalizes those identifiers so
//! "Fortune Teller", "fortune_teller" and "fortuneteller" all name the
//! same role.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn canonicalize(raw: String) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '-' | '_'))
        .collect()
}

/// Canonical identifier of a character role.
///
/// Construction sanitizes the raw identifier: lowercased, with spaces,
/// apostrophes, hyphens and underscores stripped.
#[nutype(
    sanitize(with = canonicalize),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct RoleId(String);

/// A registered character role with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    /// Display form, e.g. "Fortune Teller". This is the string the
    /// character search index matches against.
    pub name: String,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RoleId::new(id.into()),
            name: name.into(),
        }
    }
}

/// Lookup seam for resolving canonical role ids.
///
/// The search engine depends on this trait rather than on a concrete
/// registry so tests can substitute their own resolver.
pub trait RoleLookup {
    fn role(&self, id: &RoleId) -> Option<&Role>;
}

/// In-memory role registry backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<RoleId, Role>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a role, replacing any previous entry with the same id.
    pub fn insert(&mut self, role: Role) {
        self.roles.insert(role.id.clone(), role);
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleLookup for RoleRegistry {
    fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.get(id)
    }
}

impl FromIterator<Role> for RoleRegistry {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut registry = Self::new();
        for role in iter {
            registry.insert(role);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_id_canonicalization() {
        assert_eq!(RoleId::new("Fortune Teller").as_str(), "fortuneteller");
        assert_eq!(RoleId::new("Al-Hadikhia").as_str(), "alhadikhia");
        assert_eq!(RoleId::new("widow's_web").as_str(), "widowsweb");
        assert_eq!(RoleId::new("imp").as_str(), "imp");
    }

    #[test]
    fn test_equivalent_spellings_collide() {
        assert_eq!(
            RoleId::new("Fortune Teller"),
            RoleId::new("fortune_teller")
        );
    }

    #[test]
    fn test_registry_lookup_by_any_spelling() {
        let registry: RoleRegistry =
            [Role::new("Fortune Teller", "Fortune Teller")].into_iter().collect();

        let found = registry.role(&RoleId::new("fortuneteller"));

        assert_eq!(found.map(|r| r.name.as_str()), Some("Fortune Teller"));
    }

    #[test]
    fn test_registry_miss_is_none() {
        let registry = RoleRegistry::new();

        assert!(registry.role(&RoleId::new("imp")).is_none());
    }
}
