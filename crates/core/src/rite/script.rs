use crate::rite::statements::Statement;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// A parsed script: a sequence of statements.
#[derive(Clone, Debug, Default)]
pub struct Script(pub Vec<Statement>);

impl Deref for Script {
	type Target = Vec<Statement>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Script {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		for (i, stmt) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str("\n")?;
			}
			Display::fmt(stmt, f)?;
		}
		Ok(())
	}
}
