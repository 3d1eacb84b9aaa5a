//! Lexicographic comparison chains

// Imports
use std::cmp::Ordering;

/// Lexicographic comparison over several optional slots.
///
/// Each [`append`](Self::append) compares one pair of slots, but only while every
/// previous comparison was equal. The first non-equal comparison decides the result.
///
/// Absent slots sort before present ones, and two absent slots are equal.
///
/// ```
/// # use {multi_return::CmpChain, std::cmp::Ordering};
/// let ordering = CmpChain::new()
/// 	.append(Some(&"A"), Some(&"A"))
/// 	.append(None, Some(&"B"))
/// 	.finish();
/// assert_eq!(ordering, Ordering::Less);
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[must_use]
pub struct CmpChain {
	/// Ordering so far
	ordering: Ordering,
}

impl CmpChain {
	/// Creates a new, equal, comparison chain
	pub const fn new() -> Self {
		Self {
			ordering: Ordering::Equal,
		}
	}

	/// Appends a comparison between `lhs` and `rhs`
	pub fn append<T>(self, lhs: Option<&T>, rhs: Option<&T>) -> Self
	where
		T: ?Sized + Ord,
	{
		match self.ordering {
			Ordering::Equal => Self {
				ordering: cmp_opt(lhs, rhs),
			},
			_ => self,
		}
	}

	/// Returns the ordering of this chain
	pub const fn finish(self) -> Ordering {
		self.ordering
	}
}

impl Default for CmpChain {
	fn default() -> Self {
		Self::new()
	}
}

/// Compares two optional values, with `None` sorting first
#[must_use]
pub fn cmp_opt<T>(lhs: Option<&T>, rhs: Option<&T>) -> Ordering
where
	T: ?Sized + Ord,
{
	match (lhs, rhs) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(lhs), Some(rhs)) => lhs.cmp(rhs),
	}
}
