use crate::cnf;
use crate::ctx::Context;
use crate::env::{Env, Environment};
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use crate::rite::statements::{fmt_body, Statement};
use std::fmt::{self, Display, Formatter};

/// An `await cond then … endawait` statement.
///
/// The condition is polled cooperatively: between evaluations the thread
/// yields to the host for a short sleep, and every poll re-checks the
/// deadline, so a timed-out script stops waiting promptly.
#[derive(Clone, Debug)]
pub struct AwaitStatement {
	pub line: u32,
	pub cond: Expression,
	pub then: Vec<Statement>,
}

impl AwaitStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		while !self.cond.compute(ctx, itp, env)?.is_truthy() {
			ctx.check(self.line)?;
			std::thread::sleep(cnf::AWAIT_POLL_INTERVAL);
		}
		itp.execute_block(ctx, &self.then, &Environment::child(env))
	}
}

impl Display for AwaitStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "await {} then", self.cond)?;
		fmt_body(f, &self.then)?;
		f.write_str(" endawait")
	}
}
