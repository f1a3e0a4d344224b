use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// A string value.
///
/// Strings are plain byte text: no escape interpretation happens anywhere,
/// so what was between the quotes in the source is exactly what is stored.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Strand(pub String);

impl From<String> for Strand {
	fn from(s: String) -> Self {
		Strand(s)
	}
}

impl From<&str> for Strand {
	fn from(s: &str) -> Self {
		Strand(String::from(s))
	}
}

impl Deref for Strand {
	type Target = String;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Strand {
	pub fn as_str(&self) -> &str {
		self.0.as_str()
	}

	pub fn to_raw(self) -> String {
		self.0
	}
}

impl Display for Strand {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
