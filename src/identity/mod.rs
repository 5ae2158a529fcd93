//! [Ids](Id) name individual [components](crate::tree::Component).
//!
//! An [Id] is allocated outside of the tree and only *held* by the component it names.
//! Whoever hands ids out must outlive every component holding one of them, and must not
//! release an id before the component carrying it has been destroyed.
//! [IdAllocator] is a reference allocator honouring that contract.

mod id;
mod id_allocator;

pub use id::*;
pub use id_allocator::*;
