use crate::rite::kind::Kind;
use crate::rite::value::Value;
use std::fmt::{self, Display, Formatter};

/// A typed parameter or class field definition, with an optional default
/// literal.
#[derive(Clone, Debug)]
pub struct Param {
	pub kind: Kind,
	pub name: String,
	pub default: Option<Value>,
}

impl Param {
	pub fn new(kind: Kind, name: impl Into<String>, default: Option<Value>) -> Self {
		Param {
			kind,
			name: name.into(),
			default,
		}
	}

	/// Whether a caller must supply this parameter.
	pub fn is_required(&self) -> bool {
		self.default.is_none()
	}
}

impl Display for Param {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} {}", self.kind, self.name)?;
		if let Some(default) = &self.default {
			write!(f, " = {}", default.repr())?;
		}
		Ok(())
	}
}
