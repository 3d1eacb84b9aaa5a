//! Results with a carried error
//!
//! A [`Result`] holds the value a function computed, the error it failed with,
//! or both, for functions that report a partial value alongside their failure.
//!
//! Unlike [`std::result::Result`], the error here is plain data: nothing forces
//! the caller to handle it, they're expected to check [`IsError::is_error`]
//! before trusting [`Result::ok`].

// Imports
use {
	crate::{IsError, template::DisplayOpt},
	std::fmt,
};

/// Result state
#[derive(PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum State<T, E> {
	/// Only a value
	Ok(T),

	/// Only an error
	Err(E),

	/// A value and an error
	Both(T, E),
}

/// A value, an error, or both.
///
/// With the `serde` feature, results are serialized as their state, one of
/// `{"Ok": value}`, `{"Err": error}` or `{"Both": [value, error]}`.
#[derive(PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Result<T, E> {
	/// State
	state: State<T, E>,
}

impl<T, E> Result<T, E> {
	/// Creates a result without an error
	#[must_use]
	pub const fn of_ok(ok: T) -> Self {
		Self { state: State::Ok(ok) }
	}

	/// Creates a result with only an error
	#[must_use]
	pub const fn of_err(err: E) -> Self {
		Self { state: State::Err(err) }
	}

	/// Creates a result with both a value and an error.
	///
	/// The result is considered failed, see [`IsError::is_error`].
	#[must_use]
	pub const fn create(ok: T, err: E) -> Self {
		Self {
			state: State::Both(ok, err),
		}
	}

	/// Returns the value
	#[must_use]
	pub const fn ok(&self) -> Option<&T> {
		match &self.state {
			State::Ok(ok) | State::Both(ok, _) => Some(ok),
			State::Err(_) => None,
		}
	}

	/// Returns the error
	#[must_use]
	pub const fn err(&self) -> Option<&E> {
		match &self.state {
			State::Err(err) | State::Both(_, err) => Some(err),
			State::Ok(_) => None,
		}
	}

	/// Maps the value of this result
	#[must_use]
	pub fn map<U, F>(self, f: F) -> Result<U, E>
	where
		F: FnOnce(T) -> U,
	{
		let state = match self.state {
			State::Ok(ok) => State::Ok(f(ok)),
			State::Err(err) => State::Err(err),
			State::Both(ok, err) => State::Both(f(ok), err),
		};

		Result { state }
	}

	/// Maps the error of this result
	#[must_use]
	pub fn map_err<E2, F>(self, f: F) -> Result<T, E2>
	where
		F: FnOnce(E) -> E2,
	{
		let state = match self.state {
			State::Ok(ok) => State::Ok(ok),
			State::Err(err) => State::Err(f(err)),
			State::Both(ok, err) => State::Both(ok, f(err)),
		};

		Result { state }
	}

	/// Splits this result into its value and error
	#[must_use]
	pub fn into_parts(self) -> (Option<T>, Option<E>) {
		match self.state {
			State::Ok(ok) => (Some(ok), None),
			State::Err(err) => (None, Some(err)),
			State::Both(ok, err) => (Some(ok), Some(err)),
		}
	}

	/// Converts this result into a [`std::result::Result`].
	///
	/// If this result has an error, any value alongside it is dropped.
	pub fn into_std(self) -> std::result::Result<T, E> {
		match self.state {
			State::Ok(ok) => Ok(ok),
			State::Err(err) | State::Both(_, err) => Err(err),
		}
	}
}

impl<T, E> IsError for Result<T, E> {
	fn is_error(&self) -> bool {
		self.err().is_some()
	}
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
	fn from(res: std::result::Result<T, E>) -> Self {
		match res {
			Ok(ok) => Self::of_ok(ok),
			Err(err) => Self::of_err(err),
		}
	}
}

impl<T, E> fmt::Display for Result<T, E>
where
	T: fmt::Display,
	E: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Result({})", DisplayOpt(self.ok()))?;
		match self.err() {
			Some(err) => write!(f, " with error: {err}"),
			None => f.write_str(" without error"),
		}
	}
}

impl<T, E> fmt::Debug for Result<T, E>
where
	T: fmt::Debug,
	E: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Result")
			.field("ok", &self.ok())
			.field("err", &self.err())
			.finish()
	}
}
