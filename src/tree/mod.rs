//! [Components](Component) form an owning tree: every node carries a payload, owns a bounded
//! list of children and names some of them in its registry.
//!
//! An external driver builds the root, calls `init()` once and then `update()` every tick;
//! both walk the children in insertion order.

mod component;
mod tree_macros;

pub use component::*;
