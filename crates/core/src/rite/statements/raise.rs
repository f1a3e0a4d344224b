use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use std::fmt::{self, Display, Formatter};

/// A `raise expr` statement. Always errors immediately.
#[derive(Clone, Debug)]
pub struct RaiseStatement {
	pub line: u32,
	pub what: Expression,
}

impl RaiseStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		let value = self.what.compute(ctx, itp, env)?;
		Err(Error::Thrown(value))
	}
}

impl Display for RaiseStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "raise {}", self.what)
	}
}
