//! Errors

/// A positional slot
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
#[derive(derive_more::Display)]
pub enum Slot {
	/// Left
	#[display("left")]
	Left,

	/// Middle
	#[display("middle")]
	Middle,

	/// Right
	#[display("right")]
	Right,
}

/// Error for operations on pairs and triples
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
pub enum TupleError {
	/// A slot that must be present was absent
	#[error("The {slot} slot must not be absent")]
	AbsentSlot {
		/// The first absent slot
		slot: Slot,
	},

	/// Operation isn't supported by this type
	#[error("Cannot {op} on an immutable `{ty}`")]
	Unsupported {
		/// Operation
		op: &'static str,

		/// Type name
		ty: &'static str,
	},
}

/// Error for [`template::render`](crate::template::render)
#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
pub enum TemplateError {
	/// Referenced a slot that doesn't exist
	#[error("Slot {slot} does not exist, only {slots} slots are available")]
	UnknownSlot {
		/// Referenced slot (1-based)
		slot: usize,

		/// Number of available slots
		slots: usize,
	},

	/// Slot index wasn't a number
	#[error("Invalid slot index {index:?}")]
	InvalidSlot {
		/// Index, as written
		index: String,
	},

	/// Format spec was invalid
	#[error("Invalid format spec {spec:?}")]
	InvalidSpec {
		/// Spec, as written
		spec: String,
	},

	/// A `{` was never closed
	#[error("Unterminated placeholder starting at byte {pos}")]
	Unterminated {
		/// Position of the `{`
		pos: usize,
	},

	/// Found a `}` without a matching `{`
	#[error("Unmatched `}}` at byte {pos}")]
	UnmatchedClose {
		/// Position of the `}`
		pos: usize,
	},
}

impl TupleError {
	/// Creates an error for an absent `slot`
	pub(crate) fn absent(slot: Slot) -> Self {
		tracing::trace!(%slot, "Rejected absent slot");
		Self::AbsentSlot { slot }
	}
}
