use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use std::fmt::{self, Display, Formatter};

/// A `say(expr)` statement, writing the textual form as one output line.
#[derive(Clone, Debug)]
pub struct SayStatement {
	pub line: u32,
	pub what: Expression,
}

impl SayStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		let value = self.what.compute(ctx, itp, env)?;
		itp.say(&value.to_string());
		Ok(())
	}
}

impl Display for SayStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "say({})", self.what)
	}
}
