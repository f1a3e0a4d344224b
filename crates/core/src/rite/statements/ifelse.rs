use crate::ctx::Context;
use crate::env::{Env, Environment};
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use crate::rite::statements::{fmt_body, Statement};
use std::fmt::{self, Display, Formatter};

/// An `if cond then … [else …] endif` statement.
#[derive(Clone, Debug)]
pub struct IfelseStatement {
	pub line: u32,
	pub cond: Expression,
	pub then: Vec<Statement>,
	pub otherwise: Vec<Statement>,
}

impl IfelseStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		ctx.check(self.line)?;
		let cond = self.cond.compute(ctx, itp, env)?;
		if cond.is_truthy() {
			itp.execute_block(ctx, &self.then, &Environment::child(env))
		} else if !self.otherwise.is_empty() {
			itp.execute_block(ctx, &self.otherwise, &Environment::child(env))
		} else {
			Ok(())
		}
	}
}

impl Display for IfelseStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "if {} then", self.cond)?;
		fmt_body(f, &self.then)?;
		if !self.otherwise.is_empty() {
			f.write_str(" else")?;
			fmt_body(f, &self.otherwise)?;
		}
		f.write_str(" endif")
	}
}
