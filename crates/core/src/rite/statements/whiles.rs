use crate::ctx::Context;
use crate::env::{Env, Environment};
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use crate::rite::statements::{fmt_body, Statement};
use std::fmt::{self, Display, Formatter};

/// A `while cond do … [finally …] endwhile` loop.
///
/// The `finally` block runs exactly once, after the condition turns falsy.
/// A propagating signal (error, raise, return, timeout) leaves the loop
/// without running it.
#[derive(Clone, Debug)]
pub struct WhileStatement {
	pub line: u32,
	pub cond: Expression,
	pub body: Vec<Statement>,
	pub finally: Vec<Statement>,
}

impl WhileStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		loop {
			let cond = self.cond.compute(ctx, itp, env)?;
			if !cond.is_truthy() {
				break;
			}
			ctx.check(self.line)?;
			itp.execute_block(ctx, &self.body, &Environment::child(env))?;
		}
		if !self.finally.is_empty() {
			itp.execute_block(ctx, &self.finally, &Environment::child(env))?;
		}
		Ok(())
	}
}

impl Display for WhileStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "while {} do", self.cond)?;
		fmt_body(f, &self.body)?;
		if !self.finally.is_empty() {
			f.write_str(" finally")?;
			fmt_body(f, &self.finally)?;
		}
		f.write_str(" endwhile")
	}
}
