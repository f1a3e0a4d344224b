/// A human readable location inside a string.
///
/// Locations are 1 indexed, the first character on the first line being on
/// line 1 column 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Location {
	pub line: usize,
	/// In chars.
	pub column: usize,
}

impl Location {
	/// Returns the location of a byte offset in the given source.
	pub fn of_offset(source: &str, offset: usize) -> Self {
		let mut bytes_prior = 0;
		for (line_idx, line) in source.split('\n').enumerate() {
			// +1 for the '\n'
			let bytes_so_far = bytes_prior + line.len() + 1;
			if bytes_so_far > offset {
				let line_offset = offset - bytes_prior;
				let column = line
					.char_indices()
					.take_while(|(idx, _)| *idx < line_offset)
					.count();
				return Location {
					line: line_idx + 1,
					column: column + 1,
				};
			}
			bytes_prior = bytes_so_far;
		}
		// Past the end of the source: point after the last line.
		Location {
			line: source.split('\n').count(),
			column: source.split('\n').last().map(|l| l.chars().count()).unwrap_or(0) + 1,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn locations_are_one_indexed() {
		let source = "abc\ndef";
		assert_eq!(Location::of_offset(source, 0), Location { line: 1, column: 1 });
		assert_eq!(Location::of_offset(source, 4), Location { line: 2, column: 1 });
		assert_eq!(Location::of_offset(source, 6), Location { line: 2, column: 3 });
	}
}
