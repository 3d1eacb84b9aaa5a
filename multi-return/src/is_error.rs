//! Error presence

/// Types that may carry an error.
///
/// Lets callers check whether an outcome failed, regardless of its type,
/// before trusting any of its values.
pub trait IsError {
	/// Returns if this outcome carries an error
	fn is_error(&self) -> bool;
}

impl<T, E> IsError for Result<T, E> {
	fn is_error(&self) -> bool {
		self.is_err()
	}
}

impl<T> IsError for &T
where
	T: ?Sized + IsError,
{
	fn is_error(&self) -> bool {
		(**self).is_error()
	}
}
