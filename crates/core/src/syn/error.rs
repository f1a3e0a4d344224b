use crate::syn::common::Location;
use std::fmt;

/// A rendered syntax error: the message plus source snippets pointing at
/// the offending text.
#[derive(Clone, Debug)]
pub struct RenderedError {
	pub text: String,
	pub snippets: Vec<Snippet>,
}

impl fmt::Display for RenderedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.text)?;
		for snippet in self.snippets.iter() {
			writeln!(f, "{snippet}")?;
		}
		Ok(())
	}
}

/// A piece of the source code with a location.
#[derive(Clone, Debug)]
pub struct Snippet {
	/// The source line the error is on, leading whitespace trimmed.
	source: String,
	/// The location of the snippet in the original source code.
	location: Location,
	/// The offset, in chars, into the snippet where the location is.
	offset: usize,
	/// The amount of characters that are part of the area pointed to.
	length: usize,
}

impl Snippet {
	/// Cut the snippet for a byte range out of the given source.
	pub fn from_source_range(source: &str, offset: usize, length: usize) -> Self {
		let location = Location::of_offset(source, offset);
		let line = source.split('\n').nth(location.line - 1).unwrap_or_default();
		let trimmed = line.trim_start();
		let leading = line.chars().count() - trimmed.chars().count();
		Snippet {
			source: trimmed.trim_end().to_owned(),
			offset: (location.column - 1).saturating_sub(leading),
			length: length.max(1),
			location,
		}
	}
}

impl fmt::Display for Snippet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let spacing = self.location.line.to_string().len();
		writeln!(f, "{:>spacing$} |", "")?;
		writeln!(f, "{:>spacing$} | {}", self.location.line, self.source)?;
		write!(f, "{:>spacing$} | ", "")?;
		for _ in 0..self.offset {
			f.write_str(" ")?;
		}
		for _ in 0..self.length {
			f.write_str("^")?;
		}
		Ok(())
	}
}
