//! Character-name resolution adapter.

use grimoire_core::{RoleId, RoleLookup, Script};

/// Display names of a script's characters, in authored order.
///
/// Identifiers with no registered role are dropped silently; a character
/// may legitimately have no searchable name.
pub(crate) fn character_list(script: &Script, roles: &dyn RoleLookup) -> Vec<String> {
    let mut names = Vec::with_capacity(script.characters.len());
    for raw in &script.characters {
        if let Some(role) = roles.role(&RoleId::new(raw.clone())) {
            names.push(role.name.clone());
        }
    }
    names
}
