//! Pairs with a carried error

// Imports
use {
	crate::{IsError, canonical, template::DisplayOpt},
	std::{
		fmt,
		hash::{Hash, Hasher},
		sync::Arc,
	},
};

/// Pair result elements
#[derive(Clone)]
struct PairResultSlots<L, R, E> {
	left:  Option<L>,
	right: Option<R>,
	err:   Option<E>,
}

/// An immutable pair with an error.
///
/// Two pair results are equal only if their errors are also equal. Pair results
/// aren't ordered.
pub struct PairResult<L, R, E> {
	/// Elements
	slots: Arc<PairResultSlots<L, R, E>>,
}

impl<L, R, E> PairResult<L, R, E> {
	/// Returns the left element
	#[must_use]
	pub fn left(&self) -> Option<&L> {
		self.slots.left.as_ref()
	}

	/// Returns the right element
	#[must_use]
	pub fn right(&self) -> Option<&R> {
		self.slots.right.as_ref()
	}

	/// Returns the error
	#[must_use]
	pub fn err(&self) -> Option<&E> {
		self.slots.err.as_ref()
	}

	/// Returns if `lhs` and `rhs` are the same instance
	#[must_use]
	pub fn ptr_eq(lhs: &Self, rhs: &Self) -> bool {
		Arc::ptr_eq(&lhs.slots, &rhs.slots)
	}

	/// Returns the hash code of this pair result.
	///
	/// This is the xor of the hash of each element and the error.
	#[must_use]
	pub fn hash_code(&self) -> u64
	where
		L: Hash,
		R: Hash,
		E: Hash,
	{
		crate::hash_of(self.left()) ^ crate::hash_of(self.right()) ^ crate::hash_of(self.err())
	}

	/// Splits this pair result into its elements and error.
	///
	/// Elements are only cloned if the pair result is shared.
	#[must_use]
	pub fn into_parts(self) -> (Option<L>, Option<R>, Option<E>)
	where
		L: Clone,
		R: Clone,
		E: Clone,
	{
		let PairResultSlots { left, right, err } = Arc::unwrap_or_clone(self.slots);
		(left, right, err)
	}
}

impl<L, R, E> PairResult<L, R, E>
where
	L: Send + Sync + 'static,
	R: Send + Sync + 'static,
	E: Send + Sync + 'static,
{
	/// Returns the pair result of absent elements without an error.
	///
	/// This is always the same instance.
	#[must_use]
	pub fn null() -> Self {
		Self {
			slots: canonical::get_or_create(|| PairResultSlots {
				left:  None,
				right: None,
				err:   None,
			}),
		}
	}

	/// Creates a pair result.
	///
	/// If the elements and error are all absent, returns [`PairResult::null`].
	#[must_use]
	pub fn of(left: Option<L>, right: Option<R>, err: Option<E>) -> Self {
		match left.is_none() && right.is_none() && err.is_none() {
			true => Self::null(),
			false => Self {
				slots: Arc::new(PairResultSlots { left, right, err }),
			},
		}
	}

	/// Creates a pair result with only the left element
	#[must_use]
	pub fn of_left(left: L) -> Self {
		Self::of(Some(left), None, None)
	}

	/// Creates a pair result with only the right element
	#[must_use]
	pub fn of_right(right: R) -> Self {
		Self::of(None, Some(right), None)
	}

	/// Creates a pair result with only an error
	#[must_use]
	pub fn of_err(err: E) -> Self {
		Self::of(None, None, Some(err))
	}
}

impl<L, R, E> IsError for PairResult<L, R, E> {
	fn is_error(&self) -> bool {
		self.slots.err.is_some()
	}
}

impl<L, R, E> Clone for PairResult<L, R, E> {
	fn clone(&self) -> Self {
		Self {
			slots: Arc::clone(&self.slots),
		}
	}
}

impl<L, R, E> PartialEq for PairResult<L, R, E>
where
	L: PartialEq,
	R: PartialEq,
	E: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.left() == other.left() && self.right() == other.right() && self.err() == other.err()
	}
}

impl<L: Eq, R: Eq, E: Eq> Eq for PairResult<L, R, E> {}

impl<L: Hash, R: Hash, E: Hash> Hash for PairResult<L, R, E> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.hash_code());
	}
}

impl<L, R, E> fmt::Display for PairResult<L, R, E>
where
	L: fmt::Display,
	R: fmt::Display,
	E: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({},{})", DisplayOpt(self.left()), DisplayOpt(self.right()))?;
		if let Some(err) = self.err() {
			write!(f, " with error: {err}")?;
		}

		Ok(())
	}
}

impl<L, R, E> fmt::Debug for PairResult<L, R, E>
where
	L: fmt::Debug,
	R: fmt::Debug,
	E: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PairResult")
			.field("left", &self.left())
			.field("right", &self.right())
			.field("err", &self.err())
			.finish()
	}
}
