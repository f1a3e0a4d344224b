use crate::err::Error;
use crate::rite::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A shared handle to a lexical scope frame.
pub type Env = Rc<Environment>;

/// A single frame in the lexical scope chain.
///
/// Frames are created on function and method entry, on block entry for
/// `if`/`while`/`await`/`try`, and for the field storage of every class
/// instance. Name cells live in the frame that defined them; closures and
/// instances keep their frame alive by holding a shared handle to it.
pub struct Environment {
	// An optional parent frame.
	parent: Option<Env>,
	// The name cells bound in this frame.
	values: RefCell<HashMap<String, Value>>,
}

impl Environment {
	/// Create a new root environment without a parent.
	pub fn root() -> Env {
		Rc::new(Environment {
			parent: None,
			values: RefCell::new(HashMap::new()),
		})
	}

	/// Create a new child frame enclosed in the given parent.
	pub fn child(parent: &Env) -> Env {
		Rc::new(Environment {
			parent: Some(parent.clone()),
			values: RefCell::new(HashMap::new()),
		})
	}

	/// Unconditionally bind a name in this frame, shadowing any outer cell.
	pub fn define(&self, name: impl Into<String>, value: Value) {
		let name = name.into();
		tracing::trace!(%name, "defining variable");
		self.values.borrow_mut().insert(name, value);
	}

	/// Update the innermost existing cell for a name.
	///
	/// Fails when no frame along the chain binds the name.
	pub fn assign(&self, name: &str, value: Value) -> Result<(), Error> {
		if self.values.borrow().contains_key(name) {
			tracing::trace!(%name, "assigning variable");
			self.values.borrow_mut().insert(name.to_owned(), value);
			return Ok(());
		}
		match &self.parent {
			Some(parent) => parent.assign(name, value),
			None => Err(Error::UndefinedVariable(name.to_owned())),
		}
	}

	/// Resolve a name along the scope chain.
	pub fn get(&self, name: &str) -> Option<Value> {
		if let Some(v) = self.values.borrow().get(name) {
			return Some(v.clone());
		}
		match &self.parent {
			Some(parent) => parent.get(name),
			None => None,
		}
	}

	/// The type tag of the value a name resolves to.
	pub fn type_of(&self, name: &str) -> Option<&'static str> {
		self.get(name).map(|v| v.type_name())
	}
}

impl fmt::Debug for Environment {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		// Avoid following values: closures can point back to this frame.
		let keys: Vec<String> = self.values.borrow().keys().cloned().collect();
		f.debug_struct("Environment")
			.field("names", &keys)
			.field("parent", &self.parent.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn define_shadows_outer_binding() {
		let root = Environment::root();
		root.define("x", Value::from(1));
		let inner = Environment::child(&root);
		inner.define("x", Value::from(2));
		assert_eq!(inner.get("x"), Some(Value::from(2)));
		assert_eq!(root.get("x"), Some(Value::from(1)));
	}

	#[test]
	fn assign_updates_the_innermost_cell() {
		let root = Environment::root();
		root.define("x", Value::from(1));
		let inner = Environment::child(&root);
		inner.assign("x", Value::from(5)).unwrap();
		assert_eq!(root.get("x"), Some(Value::from(5)));
	}

	#[test]
	fn assign_fails_on_unbound_names() {
		let root = Environment::root();
		let err = root.assign("nope", Value::Null).unwrap_err();
		assert!(matches!(err, Error::UndefinedVariable(n) if n == "nope"));
	}

	#[test]
	fn type_queries_use_the_value_tags() {
		let root = Environment::root();
		root.define("n", Value::from(1));
		root.define("s", Value::from("x"));
		assert_eq!(root.type_of("n"), Some("dec"));
		assert_eq!(root.type_of("s"), Some("str"));
		assert_eq!(root.type_of("missing"), None);
	}

	#[test]
	fn get_resolves_along_the_chain() {
		let root = Environment::root();
		root.define("x", Value::from(7));
		let a = Environment::child(&root);
		let b = Environment::child(&a);
		assert_eq!(b.get("x"), Some(Value::from(7)));
		assert_eq!(b.get("y"), None);
	}
}
