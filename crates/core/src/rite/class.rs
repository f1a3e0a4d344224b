use crate::env::{Env, Environment};
use crate::err::Error;
use crate::rite::function::Function;
use crate::rite::param::Param;
use crate::rite::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A class: typed field definitions, a method table, and the environment
/// the class was defined in.
pub struct Class {
	pub name: String,
	pub fields: Vec<Param>,
	pub methods: HashMap<String, Rc<Function>>,
	pub closure: Env,
}

impl fmt::Debug for Class {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Class")
			.field("name", &self.name)
			.field("fields", &self.fields.len())
			.field("methods", &self.methods.len())
			.finish()
	}
}

/// A class instance, owning its field environment.
///
/// The field environment is parented on the class closure, so a method
/// body climbing the chain sees fields first, then whatever was visible
/// where the class was defined.
pub struct Instance {
	pub class: Rc<Class>,
	pub env: Env,
}

impl Instance {
	/// Create an instance, initialising every declared field from its
	/// default, or null when none was given.
	pub fn new(class: Rc<Class>) -> Rc<Instance> {
		let env = Environment::child(&class.closure);
		for field in &class.fields {
			let value = field.default.as_ref().map(Value::clone_value).unwrap_or(Value::Null);
			env.define(&field.name, value);
		}
		Rc::new(Instance {
			class,
			env,
		})
	}

	/// Resolve a field, then a method. A found method comes back bound to
	/// this instance.
	pub fn get(self: &Rc<Self>, name: &str) -> Result<Value, Error> {
		if let Some(value) = self.env.get(name) {
			return Ok(value);
		}
		if let Some(method) = self.class.methods.get(name) {
			return Ok(Value::Bound(BoundMethod {
				instance: self.clone(),
				method: method.clone(),
			}));
		}
		Err(Error::UndefinedField(name.to_owned()))
	}

	/// Assign a declared field, checking the value against its type.
	pub fn set(&self, name: &str, value: Value) -> Result<(), Error> {
		let field = self
			.class
			.fields
			.iter()
			.find(|f| f.name == name)
			.ok_or_else(|| Error::UndeclaredField(name.to_owned()))?;
		if !field.kind.allows(&value) {
			return Err(Error::FieldType {
				field: name.to_owned(),
				expected: field.kind.to_string(),
				found: value.type_name().to_owned(),
			});
		}
		self.env.define(name, value);
		Ok(())
	}
}

impl fmt::Debug for Instance {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Instance").field("class", &self.class.name).finish()
	}
}

/// A method paired with the instance it was resolved on.
#[derive(Clone, Debug)]
pub struct BoundMethod {
	pub instance: Rc<Instance>,
	pub method: Rc<Function>,
}
