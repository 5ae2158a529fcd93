//! Symbolic [names](Name) for components and the per-node [NameRegistry] resolving them.
//!
//! Names are for human and tool facing lookup only; uniqueness of components is carried by
//! their [Id](crate::identity::Id).

mod name;
mod name_registry;

pub use name::*;
pub use name_registry::*;
