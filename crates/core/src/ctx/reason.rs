use std::fmt;

/// The reason why a context stopped being valid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Reason {
	Timedout,
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Reason::Timedout => write!(f, "context timed out"),
		}
	}
}
