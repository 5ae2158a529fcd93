/// Build a [Component](crate::tree::Component) with ids taken from an
/// [IdAllocator](crate::identity::IdAllocator), optionally adding named children.
///
/// Evaluates to a [ComponentResult](crate::error::ComponentResult). Child expressions are
/// evaluated inside the builder, so nested `tree!(..)?` calls propagate their errors.
///
/// ```ignore
/// let root = tree!(ids, Scene, capacity = 4, [
///     "camera" => tree!(ids, Camera)?,
///     "lights" => tree!(ids, (), [
///         "sun" => tree!(ids, Light)?,
///     ])?,
/// ])?;
/// ```
#[macro_export]
macro_rules! tree {
	($ids: expr, $payload: expr, capacity = $n: expr $(, [$($name: expr => $child: expr),* $(,)?])?) => {
		(|| -> $crate::error::ComponentResult<_> {
			#[allow(unused_mut)]
			let mut node = $crate::tree::Component::<_, { $n }>::new($ids.allocate(), $payload);
			$($(node.add_named_child($name, $child)?;)*)?
			Ok(node)
		})()
	};

	($ids: expr, $payload: expr $(, [$($name: expr => $child: expr),* $(,)?])?) => {
		$crate::tree!($ids, $payload, capacity = $crate::tree::DEFAULT_CAPACITY $(, [$($name => $child),*])?)
	};
}
