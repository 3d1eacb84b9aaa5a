//! Pairs
//!
//! A pair holds a left and a right value, either of which may be absent.
//!
//! [`Pair`] is immutable and cheap to clone, while [`MutPair`] may be changed
//! in place. Both implement [`PairLike`], which defines equality, hashing,
//! ordering and formatting for every pair, so the two are interchangeable
//! wherever a pair is compared.

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

/// Pair-like type.
///
/// Refers to its elements as `left` and `right`. When treated as a key-value
/// entry, `left` is the key and `right` the value.
#[sealed::sealed]
pub trait PairLike {
	/// Left type
	type Left;

	/// Right type
	type Right;

	/// Returns the left element
	fn left(&self) -> Option<&Self::Left>;

	/// Returns the right element
	fn right(&self) -> Option<&Self::Right>;

	/// Returns the key of this pair, the left element
	fn key(&self) -> Option<&Self::Left> {
		self.left()
	}

	/// Returns the value of this pair, the right element
	fn value(&self) -> Option<&Self::Right> {
		self.right()
	}

	/// Sets the value of this pair, the right element.
	///
	/// Returns the previous value.
	///
	/// # Errors
	/// Returns [`TupleError::Unsupported`] if this pair is immutable.
	fn set_value(&mut self, value: Option<Self::Right>) -> Result<Option<Self::Right>, TupleError>;

	/// Checks if this pair has the same elements as `other`
	fn equals<P>(&self, other: &P) -> bool
	where
		P: ?Sized + PairLike<Left = Self::Left, Right = Self::Right>,
		Self::Left: PartialEq,
		Self::Right: PartialEq,
	{
		self.left() == other.left() && self.right() == other.right()
	}

	/// Compares this pair with `other`, left element first.
	fn compare<P>(&self, other: &P) -> Ordering
	where
		P: ?Sized + PairLike<Left = Self::Left, Right = Self::Right>,
		Self::Left: Ord,
		Self::Right: Ord,
	{
		CmpChain::new()
			.append(self.left(), other.left())
			.append(self.right(), other.right())
			.finish()
	}

	/// Returns the hash code of this pair.
	///
	/// This is the xor of the hash of each element, with absent elements hashing to `0`.
	/// As xor is commutative, a pair and its swapped pair have the same hash code.
	fn hash_code(&self) -> u64
	where
		Self::Left: Hash,
		Self::Right: Hash,
	{
		crate::hash_of(self.left()) ^ crate::hash_of(self.right())
	}

	/// Formats this pair with a template.
	///
	/// Slot `{1}` is the left element, `{2}` the right element.
	/// See the [`template`] module for the syntax.
	fn format(&self, template: &str) -> Result<String, TemplateError>
	where
		Self::Left: fmt::Display,
		Self::Right: fmt::Display,
	{
		template::render(template, &[&DisplayOpt(self.left()), &DisplayOpt(self.right())])
	}
}

/// Key-Value pair
pub trait KeyValue: Into<(Self::Key, Self::Value)> + From<(Self::Key, Self::Value)> {
	/// Key
	type Key;

	/// Value
	type Value;
}

impl<K, V> KeyValue for (K, V) {
	type Key = K;
	type Value = V;
}

/// Pair elements
#[derive(Clone)]
struct PairSlots<L, R> {
	left:  Option<L>,
	right: Option<R>,
}

/// An immutable pair.
///
/// Cloning a pair shares its elements instead of cloning them.
pub struct Pair<L, R> {
	/// Elements
	slots: Arc<PairSlots<L, R>>,
}

impl<L, R> Pair<L, R> {
	/// Creates a new pair, without checking for the canonical instance
	fn from_slots(left: Option<L>, right: Option<R>) -> Self {
		Self {
			slots: Arc::new(PairSlots { left, right }),
		}
	}

	/// Creates a pair where both elements must be present
	pub fn of_non_null(left: Option<L>, right: Option<R>) -> Result<Self, TupleError> {
		match (left, right) {
			(Some(left), Some(right)) => Ok(Self::from_slots(Some(left), Some(right))),
			(None, _) => Err(TupleError::absent(Slot::Left)),
			(_, None) => Err(TupleError::absent(Slot::Right)),
		}
	}

	/// Returns if `lhs` and `rhs` are the same instance
	#[must_use]
	pub fn ptr_eq(lhs: &Self, rhs: &Self) -> bool {
		Arc::ptr_eq(&lhs.slots, &rhs.slots)
	}

	/// Converts this pair into a tuple of its elements.
	///
	/// Elements are only cloned if the pair is shared.
	#[must_use]
	pub fn into_tuple(self) -> (Option<L>, Option<R>)
	where
		L: Clone,
		R: Clone,
	{
		let PairSlots { left, right } = Arc::unwrap_or_clone(self.slots);
		(left, right)
	}
}

impl<L, R> Pair<L, R>
where
	L: Send + Sync + 'static,
	R: Send + Sync + 'static,
{
	/// Returns the pair of absent elements.
	///
	/// This is always the same instance.
	#[must_use]
	pub fn null() -> Self {
		Self {
			slots: canonical::get_or_create(|| PairSlots { left: None, right: None }),
		}
	}

	/// Creates a pair.
	///
	/// If both elements are absent, returns [`Pair::null`].
	#[must_use]
	pub fn of(left: Option<L>, right: Option<R>) -> Self {
		match left.is_none() && right.is_none() {
			true => Self::null(),
			false => Self::from_slots(left, right),
		}
	}

	/// Creates a pair with only the left element
	#[must_use]
	pub fn of_left(left: L) -> Self {
		Self::of(Some(left), None)
	}

	/// Creates a pair with only the right element
	#[must_use]
	pub fn of_right(right: R) -> Self {
		Self::of(None, Some(right))
	}

	/// Creates a pair from a key-value entry.
	///
	/// If there is no entry, returns [`Pair::null`].
	#[must_use]
	pub fn from_entry<E>(entry: Option<E>) -> Self
	where
		E: KeyValue<Key = L, Value = R>,
	{
		match entry {
			Some(entry) => {
				let (left, right): (L, R) = entry.into();
				Self::from_slots(Some(left), Some(right))
			},
			None => Self::null(),
		}
	}
}

#[sealed::sealed]
impl<L, R> PairLike for Pair<L, R> {
	type Left = L;
	type Right = R;

	fn left(&self) -> Option<&L> {
		self.slots.left.as_ref()
	}

	fn right(&self) -> Option<&R> {
		self.slots.right.as_ref()
	}

	fn set_value(&mut self, _value: Option<R>) -> Result<Option<R>, TupleError> {
		Err(TupleError::Unsupported {
			op: "set the value",
			ty: "Pair",
		})
	}
}

impl<L, R> Clone for Pair<L, R> {
	fn clone(&self) -> Self {
		Self {
			slots: Arc::clone(&self.slots),
		}
	}
}

impl<L, R> From<(L, R)> for Pair<L, R> {
	fn from((left, right): (L, R)) -> Self {
		Self::from_slots(Some(left), Some(right))
	}
}

impl<L, R> From<MutPair<L, R>> for Pair<L, R>
where
	L: Send + Sync + 'static,
	R: Send + Sync + 'static,
{
	fn from(pair: MutPair<L, R>) -> Self {
		Self::of(pair.left, pair.right)
	}
}

/// A mutable pair.
pub struct MutPair<L, R> {
	/// Left element
	left: Option<L>,

	/// Right element
	right: Option<R>,
}

impl<L, R> MutPair<L, R> {
	/// Creates a pair of absent elements
	#[must_use]
	pub const fn new() -> Self {
		Self { left: None, right: None }
	}

	/// Creates a pair
	#[must_use]
	pub const fn of(left: Option<L>, right: Option<R>) -> Self {
		Self { left, right }
	}

	/// Creates a pair with only the left element
	#[must_use]
	pub const fn of_left(left: L) -> Self {
		Self::of(Some(left), None)
	}

	/// Creates a pair with only the right element
	#[must_use]
	pub const fn of_right(right: R) -> Self {
		Self::of(None, Some(right))
	}

	/// Creates a pair from a key-value entry.
	///
	/// If there is no entry, both elements are absent.
	#[must_use]
	pub fn from_entry<E>(entry: Option<E>) -> Self
	where
		E: KeyValue<Key = L, Value = R>,
	{
		match entry {
			Some(entry) => {
				let (left, right): (L, R) = entry.into();
				Self::of(Some(left), Some(right))
			},
			None => Self::new(),
		}
	}

	/// Creates a pair where both elements must be present
	pub fn of_non_null(left: Option<L>, right: Option<R>) -> Result<Self, TupleError> {
		match (left, right) {
			(Some(left), Some(right)) => Ok(Self::of(Some(left), Some(right))),
			(None, _) => Err(TupleError::absent(Slot::Left)),
			(_, None) => Err(TupleError::absent(Slot::Right)),
		}
	}

	/// Sets the left element
	pub fn set_left(&mut self, left: impl Into<Option<L>>) {
		self.left = left.into();
	}

	/// Sets the right element
	pub fn set_right(&mut self, right: impl Into<Option<R>>) {
		self.right = right.into();
	}

	/// Converts this pair into a tuple of its elements
	#[must_use]
	pub fn into_tuple(self) -> (Option<L>, Option<R>) {
		(self.left, self.right)
	}
}

#[sealed::sealed]
impl<L, R> PairLike for MutPair<L, R> {
	type Left = L;
	type Right = R;

	fn left(&self) -> Option<&L> {
		self.left.as_ref()
	}

	fn right(&self) -> Option<&R> {
		self.right.as_ref()
	}

	fn set_value(&mut self, value: Option<R>) -> Result<Option<R>, TupleError> {
		Ok(std::mem::replace(&mut self.right, value))
	}
}

impl<L, R> Default for MutPair<L, R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<L: Clone, R: Clone> Clone for MutPair<L, R> {
	fn clone(&self) -> Self {
		Self {
			left:  self.left.clone(),
			right: self.right.clone(),
		}
	}
}

impl<L, R> From<(L, R)> for MutPair<L, R> {
	fn from((left, right): (L, R)) -> Self {
		Self::of(Some(left), Some(right))
	}
}

impl<L: Clone, R: Clone> From<Pair<L, R>> for MutPair<L, R> {
	fn from(pair: Pair<L, R>) -> Self {
		let (left, right) = pair.into_tuple();
		Self::of(left, right)
	}
}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L, R, P> PartialEq<P> for Ty<L, R>
where
	P: PairLike<Left = L, Right = R>,
	L: PartialEq,
	R: PartialEq,
{
	fn eq(&self, other: &P) -> bool {
		self.equals(other)
	}
}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L: Eq, R: Eq> Eq for Ty<L, R> {}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L, R, P> PartialOrd<P> for Ty<L, R>
where
	P: PairLike<Left = L, Right = R>,
	L: Ord,
	R: Ord,
{
	fn partial_cmp(&self, other: &P) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L: Ord, R: Ord> Ord for Ty<L, R> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L: Hash, R: Hash> Hash for Ty<L, R> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.hash_code());
	}
}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L, R> fmt::Display for Ty<L, R>
where
	L: fmt::Display,
	R: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(&format!("({},{})", DisplayOpt(self.left()), DisplayOpt(self.right())))
	}
}

#[duplicate_item(
	Ty      name;
	[Pair]    ["Pair"];
	[MutPair] ["MutPair"];
)]
impl<L, R> fmt::Debug for Ty<L, R>
where
	L: fmt::Debug,
	R: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct(name)
			.field("left", &self.left())
			.field("right", &self.right())
			.finish()
	}
}
