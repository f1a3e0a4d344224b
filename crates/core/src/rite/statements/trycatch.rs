use crate::ctx::Context;
use crate::env::{Env, Environment};
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::statements::{fmt_body, Statement};
use crate::rite::value::Value;
use std::fmt::{self, Display, Formatter};

/// A `try … catch name … [finally …] endtry` statement.
///
/// The catch branch receives raised values as-is, and host runtime errors
/// wrapped into an exception whose payload is the error message. Return
/// signals and deadline timeouts are not catchable, but the finally branch
/// still runs before they continue upward. A raise out of the catch branch
/// is likewise deferred until finally completes.
#[derive(Clone, Debug)]
pub struct TryStatement {
	pub line: u32,
	pub body: Vec<Statement>,
	pub var: String,
	pub catch: Vec<Statement>,
	pub finally: Vec<Statement>,
}

impl TryStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		let pending = match itp.execute_block(ctx, &self.body, &Environment::child(env)) {
			Ok(()) => None,
			Err(e @ Error::Return(_)) => Some(e),
			Err(e) if e.is_timeout() => Some(e),
			Err(Error::Thrown(payload)) => self.run_catch(ctx, itp, env, payload),
			Err(e) => {
				let payload = Value::Exception(Box::new(Value::from(e.message())));
				self.run_catch(ctx, itp, env, payload)
			}
		};
		if !self.finally.is_empty() {
			// After a timeout the deadline has already fired, but the
			// cleanup branch still runs, against a deadline-free context.
			let fctx = match pending.as_ref().map(Error::is_timeout).unwrap_or(false) {
				true => Context::background(),
				false => ctx.clone(),
			};
			itp.execute_block(&fctx, &self.finally, &Environment::child(env))?;
		}
		match pending {
			Some(e) => Err(e),
			None => Ok(()),
		}
	}

	/// Run the catch branch with the caught value bound in a fresh scope,
	/// returning any error the branch itself raised.
	fn run_catch(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
		caught: Value,
	) -> Option<Error> {
		let scope = Environment::child(env);
		scope.define(&self.var, caught);
		itp.execute_block(ctx, &self.catch, &scope).err()
	}
}

impl Display for TryStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("try")?;
		fmt_body(f, &self.body)?;
		write!(f, " catch {}", self.var)?;
		fmt_body(f, &self.catch)?;
		if !self.finally.is_empty() {
			f.write_str(" finally")?;
			fmt_body(f, &self.finally)?;
		}
		f.write_str(" endtry")
	}
}
