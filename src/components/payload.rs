use crate::components::Tagged;
use crate::error::InitError;
use crate::identity::Id;

/// The capability carried by a [Component](crate::tree::Component).
///
/// Both hooks are optional. A payload that fails in [init_pro](Payload::init_pro) leaves its
/// node [failed](crate::components::State::Failed) and none of its children are initialized.
pub trait Payload: Tagged + Send + Sync {
	/// Type specific initialization, run before any child is initialized.
	fn init_pro(&mut self, _id: Id) -> Result<(), InitError> {
		Ok(())
	}

	/// Type specific update logic, run before the children are updated.
	///
	/// Failures are the payload's own business: absorb them or record them, the tree
	/// does not observe them.
	fn update(&mut self, _id: Id) {}
}

impl Payload for () {}
