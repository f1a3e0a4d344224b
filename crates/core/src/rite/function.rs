use crate::ctx::Context;
use crate::env::{Env, Environment};
use crate::err::Error;
use crate::exe::{CallFrame, Interpreter};
use crate::rite::class::Instance;
use crate::rite::param::Param;
use crate::rite::statements::Statement;
use crate::rite::value::Value;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// A user-defined function: a parameter list, a body, and the environment
/// captured at its definition.
pub struct Function {
	pub name: String,
	pub params: Vec<Param>,
	pub body: Vec<Statement>,
	pub closure: Env,
}

impl Function {
	/// Invoke this function with already-evaluated arguments.
	///
	/// For a bound method `this` is the owning instance: the call frame is
	/// then parented on the instance's field environment, so method bodies
	/// resolve bare field names, and `this` itself is defined in the frame.
	/// Plain functions parent the frame on the captured closure.
	pub(crate) fn call(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		this: Option<&Rc<Instance>>,
		args: Vec<Value>,
		line: u32,
	) -> Result<Value, Error> {
		tracing::debug!(name = %self.name, args = args.len(), "calling function");
		let parent = match this {
			Some(instance) => instance.env.clone(),
			None => self.closure.clone(),
		};
		let frame = Environment::child(&parent);
		if let Some(instance) = this {
			frame.define("this", Value::Instance(instance.clone()));
		}
		// Bind arguments by position, with defaults filling the tail.
		let required = self.params.iter().filter(|p| p.is_required()).count();
		if args.len() < required {
			return Err(Error::TooFewArguments {
				name: self.name.clone(),
				min: required,
				got: args.len(),
			});
		}
		if args.len() > self.params.len() {
			return Err(Error::TooManyArguments {
				name: self.name.clone(),
				max: self.params.len(),
				got: args.len(),
			});
		}
		for (i, param) in self.params.iter().enumerate() {
			let value = match args.get(i) {
				Some(v) => v.clone(),
				// The parser guarantees a default exists past `required`.
				None => param.default.as_ref().map(Value::clone_value).unwrap_or(Value::Null),
			};
			if !param.kind.allows(&value) {
				return Err(Error::ParameterType {
					name: self.name.clone(),
					index: i + 1,
					param: param.name.clone(),
					expected: param.kind.to_string(),
					found: value.type_name().to_owned(),
				});
			}
			frame.define(&param.name, value);
		}
		itp.call_stack.push(CallFrame {
			name: self.name.clone(),
			line,
		});
		match itp.execute_block(ctx, &self.body, &frame) {
			Ok(()) => {
				itp.call_stack.pop();
				Ok(Value::Null)
			}
			Err(Error::Return(value)) => {
				itp.call_stack.pop();
				Ok(value)
			}
			// The frame stays on the stack for the post-mortem trace.
			Err(e) => Err(e),
		}
	}
}

impl Display for Function {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "<function {}>", self.name)
	}
}

impl fmt::Debug for Function {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		// The closure can point back at the frame holding this function.
		f.debug_struct("Function")
			.field("name", &self.name)
			.field("params", &self.params.len())
			.finish()
	}
}
