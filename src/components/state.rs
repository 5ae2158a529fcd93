/// Where a component is in its lifecycle.
///
/// `Constructed -> Ready` or `Constructed -> Failed` through `init()`. A failed component stays
/// failed until the driver explicitly calls `init()` again.
#[derive(Default, Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum State {
	#[default]
	Constructed,
	Ready,
	Failed,
}
