//! Grimoire catalog domain model.
//!
//! Holds the [`Script`] entity and the role registry used to resolve
//! character identifiers to display names. The search crate consumes
//! these types; it never touches role data except through [`RoleLookup`].

pub mod model;
pub mod roles;

pub use model::Script;
pub use roles::{Role, RoleId, RoleLookup, RoleRegistry};
