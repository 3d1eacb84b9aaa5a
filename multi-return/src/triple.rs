//! Triples

// Imports
use {
	crate::{
		CmpChain,
		Slot,
		TemplateError,
		TupleError,
		canonical,
		template::{self, DisplayOpt},
	},
	duplicate::duplicate_item,
	std::{
		cmp::Ordering,
		fmt,
		hash::{Hash, Hasher},
		sync::Arc,
	},
};

/// Triple-like type.
///
/// Refers to its elements as `left`, `middle` and `right`.
#[sealed::sealed]
pub trait TripleLike {
	/// Left type
	type Left;

	/// Middle type
	type Middle;

	/// Right type
	type Right;

	/// Returns the left element
	fn left(&self) -> Option<&Self::Left>;

	/// Returns the middle element
	fn middle(&self) -> Option<&Self::Middle>;

	/// Returns the right element
	fn right(&self) -> Option<&Self::Right>;

	/// Checks if this triple has the same elements as `other`
	fn equals<T>(&self, other: &T) -> bool
	where
		T: ?Sized + TripleLike<Left = Self::Left, Middle = Self::Middle, Right = Self::Right>,
		Self::Left: PartialEq,
		Self::Middle: PartialEq,
		Self::Right: PartialEq,
	{
		self.left() == other.left() && self.middle() == other.middle() && self.right() == other.right()
	}

	/// Compares this triple with `other`, left element first, then middle, then right.
	fn compare<T>(&self, other: &T) -> Ordering
	where
		T: ?Sized + TripleLike<Left = Self::Left, Middle = Self::Middle, Right = Self::Right>,
		Self::Left: Ord,
		Self::Middle: Ord,
		Self::Right: Ord,
	{
		CmpChain::new()
			.append(self.left(), other.left())
			.append(self.middle(), other.middle())
			.append(self.right(), other.right())
			.finish()
	}

	/// Returns the hash code of this triple.
	///
	/// Like [`PairLike::hash_code`](crate::PairLike::hash_code), this is the xor of
	/// the hash of each element.
	fn hash_code(&self) -> u64
	where
		Self::Left: Hash,
		Self::Middle: Hash,
		Self::Right: Hash,
	{
		crate::hash_of(self.left()) ^ crate::hash_of(self.middle()) ^ crate::hash_of(self.right())
	}

	/// Formats this triple with a template.
	///
	/// Slot `{1}` is the left element, `{2}` the middle element and `{3}` the right element.
	fn format(&self, template: &str) -> Result<String, TemplateError>
	where
		Self::Left: fmt::Display,
		Self::Middle: fmt::Display,
		Self::Right: fmt::Display,
	{
		template::render(template, &[
			&DisplayOpt(self.left()),
			&DisplayOpt(self.middle()),
			&DisplayOpt(self.right()),
		])
	}
}

/// Triple elements
#[derive(Clone)]
struct TripleSlots<L, M, R> {
	left:   Option<L>,
	middle: Option<M>,
	right:  Option<R>,
}

/// An immutable triple.
///
/// Cloning a triple shares its elements instead of cloning them.
pub struct Triple<L, M, R> {
	/// Elements
	slots: Arc<TripleSlots<L, M, R>>,
}

impl<L, M, R> Triple<L, M, R> {
	/// Creates a new triple, without checking for the canonical instance
	fn from_slots(left: Option<L>, middle: Option<M>, right: Option<R>) -> Self {
		Self {
			slots: Arc::new(TripleSlots { left, middle, right }),
		}
	}

	/// Creates a triple where all elements must be present
	pub fn of_non_null(left: Option<L>, middle: Option<M>, right: Option<R>) -> Result<Self, TupleError> {
		let (left, middle, right) = self::require_all(left, middle, right)?;
		Ok(Self::from_slots(Some(left), Some(middle), Some(right)))
	}

	/// Returns if `lhs` and `rhs` are the same instance
	#[must_use]
	pub fn ptr_eq(lhs: &Self, rhs: &Self) -> bool {
		Arc::ptr_eq(&lhs.slots, &rhs.slots)
	}

	/// Converts this triple into a tuple of its elements.
	///
	/// Elements are only cloned if the triple is shared.
	#[must_use]
	pub fn into_tuple(self) -> (Option<L>, Option<M>, Option<R>)
	where
		L: Clone,
		M: Clone,
		R: Clone,
	{
		let TripleSlots { left, middle, right } = Arc::unwrap_or_clone(self.slots);
		(left, middle, right)
	}
}

impl<L, M, R> Triple<L, M, R>
where
	L: Send + Sync + 'static,
	M: Send + Sync + 'static,
	R: Send + Sync + 'static,
{
	/// Returns the triple of absent elements.
	///
	/// This is always the same instance.
	#[must_use]
	pub fn null() -> Self {
		Self {
			slots: canonical::get_or_create(|| TripleSlots {
				left:   None,
				middle: None,
				right:  None,
			}),
		}
	}

	/// Creates a triple.
	///
	/// If all elements are absent, returns [`Triple::null`].
	#[must_use]
	pub fn of(left: Option<L>, middle: Option<M>, right: Option<R>) -> Self {
		match left.is_none() && middle.is_none() && right.is_none() {
			true => Self::null(),
			false => Self::from_slots(left, middle, right),
		}
	}

	/// Creates a triple with only the left element
	#[must_use]
	pub fn of_left(left: L) -> Self {
		Self::of(Some(left), None, None)
	}

	/// Creates a triple with only the middle element
	#[must_use]
	pub fn of_middle(middle: M) -> Self {
		Self::of(None, Some(middle), None)
	}

	/// Creates a triple with only the right element
	#[must_use]
	pub fn of_right(right: R) -> Self {
		Self::of(None, None, Some(right))
	}
}

#[sealed::sealed]
impl<L, M, R> TripleLike for Triple<L, M, R> {
	type Left = L;
	type Middle = M;
	type Right = R;

	fn left(&self) -> Option<&L> {
		self.slots.left.as_ref()
	}

	fn middle(&self) -> Option<&M> {
		self.slots.middle.as_ref()
	}

	fn right(&self) -> Option<&R> {
		self.slots.right.as_ref()
	}
}

impl<L, M, R> Clone for Triple<L, M, R> {
	fn clone(&self) -> Self {
		Self {
			slots: Arc::clone(&self.slots),
		}
	}
}

impl<L, M, R> From<(L, M, R)> for Triple<L, M, R> {
	fn from((left, middle, right): (L, M, R)) -> Self {
		Self::from_slots(Some(left), Some(middle), Some(right))
	}
}

impl<L, M, R> From<MutTriple<L, M, R>> for Triple<L, M, R>
where
	L: Send + Sync + 'static,
	M: Send + Sync + 'static,
	R: Send + Sync + 'static,
{
	fn from(triple: MutTriple<L, M, R>) -> Self {
		Self::of(triple.left, triple.middle, triple.right)
	}
}

/// A mutable triple.
pub struct MutTriple<L, M, R> {
	/// Left element
	left: Option<L>,

	/// Middle element
	middle: Option<M>,

	/// Right element
	right: Option<R>,
}

impl<L, M, R> MutTriple<L, M, R> {
	/// Creates a triple of absent elements
	#[must_use]
	pub const fn new() -> Self {
		Self {
			left:   None,
			middle: None,
			right:  None,
		}
	}

	/// Creates a triple
	#[must_use]
	pub const fn of(left: Option<L>, middle: Option<M>, right: Option<R>) -> Self {
		Self { left, middle, right }
	}

	/// Creates a triple with only the left element
	#[must_use]
	pub const fn of_left(left: L) -> Self {
		Self::of(Some(left), None, None)
	}

	/// Creates a triple with only the middle element
	#[must_use]
	pub const fn of_middle(middle: M) -> Self {
		Self::of(None, Some(middle), None)
	}

	/// Creates a triple with only the right element
	#[must_use]
	pub const fn of_right(right: R) -> Self {
		Self::of(None, None, Some(right))
	}

	/// Creates a triple where all elements must be present
	pub fn of_non_null(left: Option<L>, middle: Option<M>, right: Option<R>) -> Result<Self, TupleError> {
		let (left, middle, right) = self::require_all(left, middle, right)?;
		Ok(Self::of(Some(left), Some(middle), Some(right)))
	}

	/// Sets the left element
	pub fn set_left(&mut self, left: impl Into<Option<L>>) {
		self.left = left.into();
	}

	/// Sets the middle element
	pub fn set_middle(&mut self, middle: impl Into<Option<M>>) {
		self.middle = middle.into();
	}

	/// Sets the right element
	pub fn set_right(&mut self, right: impl Into<Option<R>>) {
		self.right = right.into();
	}

	/// Converts this triple into a tuple of its elements
	#[must_use]
	pub fn into_tuple(self) -> (Option<L>, Option<M>, Option<R>) {
		(self.left, self.middle, self.right)
	}
}

#[sealed::sealed]
impl<L, M, R> TripleLike for MutTriple<L, M, R> {
	type Left = L;
	type Middle = M;
	type Right = R;

	fn left(&self) -> Option<&L> {
		self.left.as_ref()
	}

	fn middle(&self) -> Option<&M> {
		self.middle.as_ref()
	}

	fn right(&self) -> Option<&R> {
		self.right.as_ref()
	}
}

impl<L, M, R> Default for MutTriple<L, M, R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<L: Clone, M: Clone, R: Clone> Clone for MutTriple<L, M, R> {
	fn clone(&self) -> Self {
		Self {
			left:   self.left.clone(),
			middle: self.middle.clone(),
			right:  self.right.clone(),
		}
	}
}

impl<L, M, R> From<(L, M, R)> for MutTriple<L, M, R> {
	fn from((left, middle, right): (L, M, R)) -> Self {
		Self::of(Some(left), Some(middle), Some(right))
	}
}

impl<L: Clone, M: Clone, R: Clone> From<Triple<L, M, R>> for MutTriple<L, M, R> {
	fn from(triple: Triple<L, M, R>) -> Self {
		let (left, middle, right) = triple.into_tuple();
		Self::of(left, middle, right)
	}
}

/// Requires all elements to be present, returning the first absent one otherwise
fn require_all<L, M, R>(left: Option<L>, middle: Option<M>, right: Option<R>) -> Result<(L, M, R), TupleError> {
	match (left, middle, right) {
		(Some(left), Some(middle), Some(right)) => Ok((left, middle, right)),
		(None, ..) => Err(TupleError::absent(Slot::Left)),
		(_, None, _) => Err(TupleError::absent(Slot::Middle)),
		(.., None) => Err(TupleError::absent(Slot::Right)),
	}
}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L, M, R, T> PartialEq<T> for Ty<L, M, R>
where
	T: TripleLike<Left = L, Middle = M, Right = R>,
	L: PartialEq,
	M: PartialEq,
	R: PartialEq,
{
	fn eq(&self, other: &T) -> bool {
		self.equals(other)
	}
}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L: Eq, M: Eq, R: Eq> Eq for Ty<L, M, R> {}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L, M, R, T> PartialOrd<T> for Ty<L, M, R>
where
	T: TripleLike<Left = L, Middle = M, Right = R>,
	L: Ord,
	M: Ord,
	R: Ord,
{
	fn partial_cmp(&self, other: &T) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L: Ord, M: Ord, R: Ord> Ord for Ty<L, M, R> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L: Hash, M: Hash, R: Hash> Hash for Ty<L, M, R> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.hash_code());
	}
}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L, M, R> fmt::Display for Ty<L, M, R>
where
	L: fmt::Display,
	M: fmt::Display,
	R: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(&format!(
			"({},{},{})",
			DisplayOpt(self.left()),
			DisplayOpt(self.middle()),
			DisplayOpt(self.right())
		))
	}
}

#[duplicate_item(
	Ty          name;
	[Triple]    ["Triple"];
	[MutTriple] ["MutTriple"];
)]
impl<L, M, R> fmt::Debug for Ty<L, M, R>
where
	L: fmt::Debug,
	M: fmt::Debug,
	R: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct(name)
			.field("left", &self.left())
			.field("middle", &self.middle())
			.field("right", &self.right())
			.finish()
	}
}
