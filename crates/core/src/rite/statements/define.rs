use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::function::Function;
use crate::rite::param::Param;
use crate::rite::statements::{fmt_body, Statement};
use crate::rite::value::Value;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// A `def name(params) do … enddef` function definition.
#[derive(Clone, Debug)]
pub struct DefineStatement {
	pub line: u32,
	pub name: String,
	pub params: Vec<Param>,
	pub body: Vec<Statement>,
}

impl DefineStatement {
	/// Build the [`Function`] value this definition describes, capturing
	/// the given environment as its closure.
	pub(crate) fn to_function(&self, env: &Env) -> Rc<Function> {
		Rc::new(Function {
			name: self.name.clone(),
			params: self.params.clone(),
			body: self.body.clone(),
			closure: env.clone(),
		})
	}

	pub(crate) fn compute(
		&self,
		_ctx: &Context,
		_itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		env.define(&self.name, Value::Function(self.to_function(env)));
		Ok(())
	}
}

impl Display for DefineStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "def {}(", self.name)?;
		for (i, param) in self.params.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(param, f)?;
		}
		f.write_str(") do")?;
		fmt_body(f, &self.body)?;
		f.write_str(" enddef")
	}
}
