use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::class::Class;
use crate::rite::param::Param;
use crate::rite::statements::DefineStatement;
use crate::rite::value::Value;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// An `ins Name(fields) contains def … endins` class definition.
#[derive(Clone, Debug)]
pub struct InsStatement {
	pub line: u32,
	pub name: String,
	pub fields: Vec<Param>,
	pub methods: Vec<DefineStatement>,
}

impl InsStatement {
	pub(crate) fn compute(
		&self,
		_ctx: &Context,
		_itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		let mut methods = HashMap::with_capacity(self.methods.len());
		for method in &self.methods {
			methods.insert(method.name.clone(), method.to_function(env));
		}
		let class = Class {
			name: self.name.clone(),
			fields: self.fields.clone(),
			methods,
			closure: env.clone(),
		};
		env.define(&self.name, Value::Class(Rc::new(class)));
		Ok(())
	}
}

impl Display for InsStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "ins {}", self.name)?;
		if !self.fields.is_empty() {
			f.write_str("(")?;
			for (i, field) in self.fields.iter().enumerate() {
				if i > 0 {
					f.write_str(", ")?;
				}
				Display::fmt(field, f)?;
			}
			f.write_str(")")?;
		}
		f.write_str(" contains")?;
		for method in &self.methods {
			write!(f, " {method}")?;
		}
		f.write_str(" endins")
	}
}
