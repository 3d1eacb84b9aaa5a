//! `serde` support
//!
//! Pairs, triples and pair results are serialized as structs with a field per
//! present slot (`left`, `middle`, `right` and `err`). Absent slots are left
//! out, so a present slot serializing as `null` stays present.
//!
//! Results are serialized as their state, see [`Result`](crate::Result).

// Imports
use {
	crate::{MutPair, MutTriple, Pair, PairLike, PairResult, Triple, TripleLike},
	duplicate::duplicate_item,
	serde::{Deserialize, Deserializer, Serialize, Serializer},
};

/// Serialized form of a pair
#[derive(Serialize)]
#[serde(rename = "Pair")]
struct PairRef<'a, L, R> {
	#[serde(skip_serializing_if = "Option::is_none")]
	left: Option<&'a L>,

	#[serde(skip_serializing_if = "Option::is_none")]
	right: Option<&'a R>,
}

/// Deserialized form of a pair
#[derive(Deserialize)]
#[serde(rename = "Pair", deny_unknown_fields)]
#[serde(bound(deserialize = "L: Deserialize<'de>, R: Deserialize<'de>"))]
struct PairOwned<L, R> {
	#[serde(default, deserialize_with = "present")]
	left: Option<L>,

	#[serde(default, deserialize_with = "present")]
	right: Option<R>,
}

/// Serialized form of a triple
#[derive(Serialize)]
#[serde(rename = "Triple")]
struct TripleRef<'a, L, M, R> {
	#[serde(skip_serializing_if = "Option::is_none")]
	left: Option<&'a L>,

	#[serde(skip_serializing_if = "Option::is_none")]
	middle: Option<&'a M>,

	#[serde(skip_serializing_if = "Option::is_none")]
	right: Option<&'a R>,
}

/// Deserialized form of a triple
#[derive(Deserialize)]
#[serde(rename = "Triple", deny_unknown_fields)]
#[serde(bound(deserialize = "L: Deserialize<'de>, M: Deserialize<'de>, R: Deserialize<'de>"))]
struct TripleOwned<L, M, R> {
	#[serde(default, deserialize_with = "present")]
	left: Option<L>,

	#[serde(default, deserialize_with = "present")]
	middle: Option<M>,

	#[serde(default, deserialize_with = "present")]
	right: Option<R>,
}

/// Serialized form of a pair result
#[derive(Serialize)]
#[serde(rename = "PairResult")]
struct PairResultRef<'a, L, R, E> {
	#[serde(skip_serializing_if = "Option::is_none")]
	left: Option<&'a L>,

	#[serde(skip_serializing_if = "Option::is_none")]
	right: Option<&'a R>,

	#[serde(skip_serializing_if = "Option::is_none")]
	err: Option<&'a E>,
}

/// Deserialized form of a pair result
#[derive(Deserialize)]
#[serde(rename = "PairResult", deny_unknown_fields)]
#[serde(bound(deserialize = "L: Deserialize<'de>, R: Deserialize<'de>, E: Deserialize<'de>"))]
struct PairResultOwned<L, R, E> {
	#[serde(default, deserialize_with = "present")]
	left: Option<L>,

	#[serde(default, deserialize_with = "present")]
	right: Option<R>,

	#[serde(default, deserialize_with = "present")]
	err: Option<E>,
}

/// Deserializes a field that is present, even if it's `null`.
///
/// Missing fields are handled by `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

#[duplicate_item(
	Ty;
	[Pair];
	[MutPair];
)]
impl<L, R> Serialize for Ty<L, R>
where
	L: Serialize,
	R: Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		PairRef {
			left:  self.left(),
			right: self.right(),
		}
		.serialize(serializer)
	}
}

#[duplicate_item(
	Ty;
	[Triple];
	[MutTriple];
)]
impl<L, M, R> Serialize for Ty<L, M, R>
where
	L: Serialize,
	M: Serialize,
	R: Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		TripleRef {
			left:   self.left(),
			middle: self.middle(),
			right:  self.right(),
		}
		.serialize(serializer)
	}
}

impl<L, R, E> Serialize for PairResult<L, R, E>
where
	L: Serialize,
	R: Serialize,
	E: Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		PairResultRef {
			left:  self.left(),
			right: self.right(),
			err:   self.err(),
		}
		.serialize(serializer)
	}
}

impl<'de, L, R> Deserialize<'de> for Pair<L, R>
where
	L: Deserialize<'de> + Send + Sync + 'static,
	R: Deserialize<'de> + Send + Sync + 'static,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let PairOwned { left, right } = PairOwned::deserialize(deserializer)?;
		Ok(Self::of(left, right))
	}
}

impl<'de, L, R> Deserialize<'de> for MutPair<L, R>
where
	L: Deserialize<'de>,
	R: Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let PairOwned { left, right } = PairOwned::deserialize(deserializer)?;
		Ok(Self::of(left, right))
	}
}

impl<'de, L, M, R> Deserialize<'de> for Triple<L, M, R>
where
	L: Deserialize<'de> + Send + Sync + 'static,
	M: Deserialize<'de> + Send + Sync + 'static,
	R: Deserialize<'de> + Send + Sync + 'static,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let TripleOwned { left, middle, right } = TripleOwned::deserialize(deserializer)?;
		Ok(Self::of(left, middle, right))
	}
}

impl<'de, L, M, R> Deserialize<'de> for MutTriple<L, M, R>
where
	L: Deserialize<'de>,
	M: Deserialize<'de>,
	R: Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let TripleOwned { left, middle, right } = TripleOwned::deserialize(deserializer)?;
		Ok(Self::of(left, middle, right))
	}
}

impl<'de, L, R, E> Deserialize<'de> for PairResult<L, R, E>
where
	L: Deserialize<'de> + Send + Sync + 'static,
	R: Deserialize<'de> + Send + Sync + 'static,
	E: Deserialize<'de> + Send + Sync + 'static,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let PairResultOwned { left, right, err } = PairResultOwned::deserialize(deserializer)?;
		Ok(Self::of(left, right, err))
	}
}
