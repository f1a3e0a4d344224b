pub mod awaits;
pub mod declare;
pub mod define;
pub mod ifelse;
pub mod ins;
pub mod output;
pub mod raise;
pub mod say;
pub mod trycatch;
pub mod whiles;

pub use awaits::AwaitStatement;
pub use declare::DeclareStatement;
pub use define::DefineStatement;
pub use ifelse::IfelseStatement;
pub use ins::InsStatement;
pub use output::OutputStatement;
pub use raise::RaiseStatement;
pub use say::SayStatement;
pub use trycatch::TryStatement;
pub use whiles::WhileStatement;

use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::expression::Expression;
use std::fmt::{self, Display, Formatter};

/// A single statement of a script.
#[derive(Clone, Debug)]
pub enum Statement {
	Await(AwaitStatement),
	Declare(DeclareStatement),
	Define(DefineStatement),
	Ifelse(IfelseStatement),
	Ins(InsStatement),
	Output(OutputStatement),
	Raise(RaiseStatement),
	Say(SayStatement),
	Try(TryStatement),
	While(WhileStatement),
	/// A bare expression evaluated for its effects.
	Value(Expression),
}

impl Statement {
	/// The source line this statement starts on.
	pub fn line(&self) -> u32 {
		match self {
			Self::Await(v) => v.line,
			Self::Declare(v) => v.line,
			Self::Define(v) => v.line,
			Self::Ifelse(v) => v.line,
			Self::Ins(v) => v.line,
			Self::Output(v) => v.line,
			Self::Raise(v) => v.line,
			Self::Say(v) => v.line,
			Self::Try(v) => v.line,
			Self::While(v) => v.line,
			Self::Value(v) => v.line,
		}
	}

	/// Process this statement.
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		match self {
			Self::Await(v) => v.compute(ctx, itp, env),
			Self::Declare(v) => v.compute(ctx, itp, env),
			Self::Define(v) => v.compute(ctx, itp, env),
			Self::Ifelse(v) => v.compute(ctx, itp, env),
			Self::Ins(v) => v.compute(ctx, itp, env),
			Self::Output(v) => v.compute(ctx, itp, env),
			Self::Raise(v) => v.compute(ctx, itp, env),
			Self::Say(v) => v.compute(ctx, itp, env),
			Self::Try(v) => v.compute(ctx, itp, env),
			Self::While(v) => v.compute(ctx, itp, env),
			Self::Value(v) => v.compute(ctx, itp, env).map(|_| ()),
		}
	}
}

impl Display for Statement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Await(v) => Display::fmt(v, f),
			Self::Declare(v) => Display::fmt(v, f),
			Self::Define(v) => Display::fmt(v, f),
			Self::Ifelse(v) => Display::fmt(v, f),
			Self::Ins(v) => Display::fmt(v, f),
			Self::Output(v) => Display::fmt(v, f),
			Self::Raise(v) => Display::fmt(v, f),
			Self::Say(v) => Display::fmt(v, f),
			Self::Try(v) => Display::fmt(v, f),
			Self::While(v) => Display::fmt(v, f),
			Self::Value(v) => Display::fmt(v, f),
		}
	}
}

/// Format a block body on a single line, statements space-separated.
pub(crate) fn fmt_body(f: &mut Formatter, body: &[Statement]) -> fmt::Result {
	for stmt in body {
		write!(f, " {stmt}")?;
	}
	Ok(())
}
