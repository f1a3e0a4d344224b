use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use crate::rite::value::Value;
use std::fmt::{self, Display, Formatter};

/// A `return [expr]` statement. Always errors immediately with the return
/// signal, which the enclosing call intercepts.
#[derive(Clone, Debug)]
pub struct OutputStatement {
	pub line: u32,
	pub what: Option<Expression>,
}

impl OutputStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		let value = match &self.what {
			Some(expr) => expr.compute(ctx, itp, env)?,
			None => Value::Null,
		};
		Err(Error::Return(value))
	}
}

impl Display for OutputStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match &self.what {
			Some(what) => write!(f, "return {what}"),
			None => f.write_str("return"),
		}
	}
}
