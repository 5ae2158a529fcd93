//! The building blocks shared by every [Component](crate::tree::Component):
//! the [BaseComponent] lifecycle contract, [Payload] hooks, [type tags](TypeTag)
//! and the per-type live instance [Counter].

pub mod counter;
pub mod type_tag;
mod state;
mod payload;
mod base_component;

pub use state::*;
pub use payload::*;
pub use type_tag::{Tagged, TypeTag};
pub use counter::{Counted, Counter};
pub use base_component::*;
pub use component_tree_derive::Tagged;
