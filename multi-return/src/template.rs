//! Positional templates
//!
//! Templates are plain text with placeholders referring to the slots of a value:
//!
//! - `{1}`, `{2}`, ...: The slot at that (1-based) position.
//! - `{}`: The slot after the previous implicit placeholder, starting at the first.
//! - `{{` and `}}`: A literal `{` or `}`.
//!
//! Placeholders may be followed by a format spec, `{1:>10}`, with an optional fill
//! character, an alignment (`<`, `^` or `>`) and a width.
//!
//! For pairs, slot `1` is the left slot and `2` the right slot. For triples, `1` is
//! left, `2` middle and `3` right, the same order they're displayed in.

// Imports
use {
	crate::TemplateError,
	std::{fmt, iter::Peekable, str::CharIndices},
};

/// Renders `template` with `args` as the slots.
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> Result<String, TemplateError> {
	let mut output = String::with_capacity(template.len());
	let mut chars = template.char_indices().peekable();
	let mut next_implicit = 1;

	while let Some((pos, ch)) = chars.next() {
		match ch {
			'{' => {
				// Check for an escaped `{`
				if chars.next_if(|&(_, ch)| ch == '{').is_some() {
					output.push('{');
					continue;
				}

				let placeholder = self::read_placeholder(template, pos, &mut chars)?;
				let slot = match placeholder.index {
					"" => {
						let slot = next_implicit;
						next_implicit += 1;
						slot
					},
					index => index.parse::<usize>().map_err(|_| TemplateError::InvalidSlot {
						index: index.to_owned(),
					})?,
				};

				let arg = slot
					.checked_sub(1)
					.and_then(|idx| args.get(idx))
					.ok_or(TemplateError::UnknownSlot {
						slot,
						slots: args.len(),
					})?;

				let spec = Spec::parse(placeholder.spec)?;
				spec.write(&mut output, *arg);
			},
			'}' => match chars.next_if(|&(_, ch)| ch == '}') {
				Some(_) => output.push('}'),
				None => return Err(TemplateError::UnmatchedClose { pos }),
			},
			_ => output.push(ch),
		}
	}

	Ok(output)
}

/// A placeholder, without the braces
struct Placeholder<'a> {
	/// Slot index
	index: &'a str,

	/// Format spec
	spec: &'a str,
}

/// Reads a placeholder, after its opening `{` at `start`
fn read_placeholder<'a>(
	template: &'a str,
	start: usize,
	chars: &mut Peekable<CharIndices<'a>>,
) -> Result<Placeholder<'a>, TemplateError> {
	let end = chars
		.find(|&(_, ch)| ch == '}')
		.map(|(end, _)| end)
		.ok_or(TemplateError::Unterminated { pos: start })?;

	let inner = &template[start + 1..end];
	let (index, spec) = inner.split_once(':').unwrap_or((inner, ""));

	Ok(Placeholder {
		index: index.trim(),
		spec,
	})
}

/// Alignment
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Align {
	Left,
	Center,
	Right,
}

impl Align {
	/// Parses an alignment character
	const fn from_char(ch: char) -> Option<Self> {
		match ch {
			'<' => Some(Self::Left),
			'^' => Some(Self::Center),
			'>' => Some(Self::Right),
			_ => None,
		}
	}
}

/// Format spec
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
struct Spec {
	fill:  char,
	align: Align,
	width: usize,
}

impl Spec {
	/// Parses a format spec
	fn parse(spec: &str) -> Result<Self, TemplateError> {
		let invalid = || TemplateError::InvalidSpec { spec: spec.to_owned() };

		// Get the fill and alignment, if any
		let mut chars = spec.chars();
		let (fill, align, rest) = match (chars.next(), chars.next().and_then(Align::from_char)) {
			(Some(fill), Some(align)) => (fill, Some(align), chars.as_str()),
			(Some(ch), _) => match Align::from_char(ch) {
				Some(align) => (' ', Some(align), &spec[ch.len_utf8()..]),
				None => (' ', None, spec),
			},
			(None, _) => (' ', None, spec),
		};

		let width = match rest {
			"" => 0,
			width => width.parse().map_err(|_| invalid())?,
		};

		Ok(Self {
			fill,
			align: align.unwrap_or(Align::Left),
			width,
		})
	}

	/// Writes `arg` into `output` with this spec
	fn write(self, output: &mut String, arg: &dyn fmt::Display) {
		let value = arg.to_string();
		let padding = self.width.saturating_sub(value.chars().count());
		let (before, after) = match self.align {
			Align::Left => (0, padding),
			Align::Center => (padding / 2, padding - padding / 2),
			Align::Right => (padding, 0),
		};

		output.extend(std::iter::repeat_n(self.fill, before));
		output.push_str(&value);
		output.extend(std::iter::repeat_n(self.fill, after));
	}
}

/// Displays an optional value, with `null` for absent values
pub(crate) struct DisplayOpt<'a, T: ?Sized>(pub Option<&'a T>);

impl<T> fmt::Display for DisplayOpt<'_, T>
where
	T: ?Sized + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(value) => value.fmt(f),
			None => f.write_str("null"),
		}
	}
}
