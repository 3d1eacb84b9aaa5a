//! Multi-value returns
//!
//! Value types for returning several values from a function: pairs and triples,
//! in immutable ([`Pair`], [`Triple`]) and mutable ([`MutPair`], [`MutTriple`])
//! variants, and results carrying a failure alongside (or instead of) a value
//! ([`Result`], [`PairResult`]).
//!
//! Immutable and mutable variants share one equality, hashing and ordering contract
//! through [`PairLike`] and [`TripleLike`], so a [`Pair`] and a [`MutPair`] holding
//! the same values are interchangeable as map keys and set elements.
//!
//! Absent slots are represented by `None`. Immutable variants whose slots are all
//! absent are a single canonical instance per type.

// Modules
mod canonical;
pub mod cmp_chain;
pub mod error;
pub mod is_error;
pub mod pair;
pub mod pair_result;
pub mod result;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod template;
pub mod triple;

// Exports
pub use self::{
	cmp_chain::CmpChain,
	error::{Slot, TemplateError, TupleError},
	is_error::IsError,
	pair::{KeyValue, MutPair, Pair, PairLike},
	pair_result::PairResult,
	result::Result,
	triple::{MutTriple, Triple, TripleLike},
};

// Imports
use std::hash::{DefaultHasher, Hash, Hasher};

/// Calculates the hash of an optional value.
///
/// Absent values hash to `0`.
fn hash_of<T>(value: Option<&T>) -> u64
where
	T: ?Sized + Hash,
{
	value.map_or(0, |value| {
		let mut state = DefaultHasher::new();
		value.hash(&mut state);
		state.finish()
	})
}
