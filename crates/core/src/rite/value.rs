use crate::err::Error;
use crate::rite::bytes::Binary;
use crate::rite::class::{BoundMethod, Class, Instance};
use crate::rite::function::Function;
use crate::rite::list::List;
use crate::rite::number::BigDecimal;
use crate::rite::strand::Strand;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::time::Instant;

/// A native callable value.
#[derive(Clone, Debug)]
pub enum Native {
	/// A built-in function dispatched by name through [`crate::fnc::run`].
	Builtin(&'static str),
	/// A countdown timer closure: truthy once the deadline has passed.
	Timer(Instant),
}

impl Native {
	pub fn name(&self) -> &'static str {
		match self {
			Native::Builtin(name) => name,
			Native::Timer(_) => "timer",
		}
	}
}

/// A runtime value.
///
/// Values are shared handles: cloning is cheap and structural mutation is
/// only possible through list element slots and instance field cells.
#[derive(Clone, Debug)]
pub enum Value {
	Null,
	Number(BigDecimal),
	Strand(Strand),
	Binary(Binary),
	List(List),
	Function(Rc<Function>),
	Bound(BoundMethod),
	Native(Native),
	Class(Rc<Class>),
	Instance(Rc<Instance>),
	Exception(Box<Value>),
}

impl Default for Value {
	fn default() -> Self {
		Value::Null
	}
}

impl From<BigDecimal> for Value {
	fn from(v: BigDecimal) -> Self {
		Value::Number(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(v.into())
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(v.into())
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Number(BigDecimal::from(v as i64))
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Strand(v.into())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Strand(v.into())
	}
}

impl From<Binary> for Value {
	fn from(v: Binary) -> Self {
		Value::Binary(v)
	}
}

impl From<List> for Value {
	fn from(v: List) -> Self {
		Value::List(v)
	}
}

impl Value {
	// -----------------------------------
	// Simple value detection
	// -----------------------------------

	/// Every value has a truthiness, used by `if`, `while`, and `await`.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Null => false,
			Value::Number(v) => !v.is_zero(),
			Value::Strand(v) => !v.is_empty(),
			Value::Binary(v) => v.is_truthy(),
			Value::List(v) => !v.is_empty(),
			_ => true,
		}
	}

	/// The type tag reported by `get_type` style queries.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Number(_) => "dec",
			Value::Strand(_) => "str",
			Value::Binary(_) => "bin",
			Value::List(_) => "list",
			Value::Exception(_) => "exception",
			Value::Class(_) => "class",
			Value::Instance(_) => "instance",
			Value::Function(_) | Value::Bound(_) | Value::Native(_) => "function",
			Value::Null => "unknown",
		}
	}

	// -----------------------------------
	// Conversion of values
	// -----------------------------------

	/// The self-describing diagnostic form of this value.
	pub fn repr(&self) -> String {
		match self {
			Value::Null => String::from("<NullObject>"),
			Value::Strand(v) => format!("'{v}'"),
			Value::Function(v) => format!("<FuncObject '{}'>", v.name),
			Value::Exception(v) => format!("<ExceptionObject payload={}>", v.repr()),
			v => v.to_string(),
		}
	}

	/// A structural clone of this value.
	///
	/// Numbers, strings, and binaries copy their data. Lists copy the
	/// element slots one level deep, so the new list is independent while
	/// its elements stay shared. Instances produce a fresh instance of the
	/// same class.
	pub fn clone_value(&self) -> Value {
		match self {
			Value::List(v) => Value::List(List::new(v.to_vec())),
			Value::Instance(v) => Value::Instance(Instance::new(v.class.clone())),
			Value::Exception(v) => Value::Exception(Box::new(v.clone_value())),
			v => v.clone(),
		}
	}

	// -----------------------------------
	// Equality and ordering
	// -----------------------------------

	/// Semantic equality across types.
	///
	/// Numbers and binaries equate by numeric value; lists compare
	/// element-wise; exceptions compare by payload. Everything else is
	/// equal only within its own variant, and callables, classes, and
	/// instances are never equal.
	pub fn equal(&self, other: &Value) -> bool {
		match (self, other) {
			(Value::Null, Value::Null) => true,
			(Value::Number(a), Value::Number(b)) => a == b,
			(Value::Number(a), Value::Binary(b)) => *a == b.to_decimal(),
			(Value::Binary(a), Value::Number(b)) => a.to_decimal() == *b,
			(Value::Binary(a), Value::Binary(b)) => a == b,
			(Value::Strand(a), Value::Strand(b)) => a == b,
			(Value::List(a), Value::List(b)) => a.equal(b),
			(Value::Exception(a), Value::Exception(b)) => a.equal(b),
			(Value::Class(a), Value::Class(b)) => a.name == b.name,
			_ => false,
		}
	}

	/// Ordering is defined for number pairs and string pairs only.
	pub fn try_lt(&self, other: &Value) -> Result<bool, Error> {
		match (self, other) {
			(Value::Number(a), Value::Number(b)) => Ok(a < b),
			(Value::Strand(a), Value::Strand(b)) => Ok(a < b),
			(a, b) => Err(Error::TryCmp(a.to_string(), b.to_string())),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.equal(other)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Number(v) => Display::fmt(v, f),
			Value::Strand(v) => Display::fmt(v, f),
			Value::Binary(v) => Display::fmt(v, f),
			Value::List(v) => Display::fmt(v, f),
			Value::Function(v) => write!(f, "<function {}>", v.name),
			Value::Bound(v) => {
				write!(f, "<bound method {}.{}>", v.instance.class.name, v.method.name)
			}
			Value::Native(v) => write!(f, "<native function {}>", v.name()),
			Value::Class(v) => write!(f, "<class {}>", v.name),
			Value::Instance(v) => write!(f, "<{} instance>", v.class.name),
			Value::Exception(v) => write!(f, "<Exception: {v}>"),
		}
	}
}

// -----------------------------------
// Fallible operators
// -----------------------------------

pub trait TryAdd<Rhs = Self> {
	type Output;
	fn try_add(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TrySub<Rhs = Self> {
	type Output;
	fn try_sub(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryMul<Rhs = Self> {
	type Output;
	fn try_mul(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryDiv<Rhs = Self> {
	type Output;
	fn try_div(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryPow<Rhs = Self> {
	type Output;
	fn try_pow(self, rhs: Rhs) -> Result<Self::Output, Error>;
}

pub trait TryNeg {
	type Output;
	fn try_neg(self) -> Result<Self::Output, Error>;
}

impl TryAdd for Value {
	type Output = Self;
	fn try_add(self, other: Self) -> Result<Self, Error> {
		Ok(match (self, other) {
			(Value::Number(l), Value::Number(r)) => Value::Number(l + r),
			(Value::Number(l), Value::Binary(r)) => Value::Number(&l + &r.to_decimal()),
			(Value::Number(l), Value::Strand(r)) => Value::Strand(format!("{l}{r}").into()),
			(Value::Binary(l), Value::Number(r)) => Value::Number(&l.to_decimal() + &r),
			(Value::Binary(l), Value::Strand(r)) => Value::Strand(format!("{l}{r}").into()),
			(Value::Strand(l), Value::Number(r)) => Value::Strand(format!("{l}{r}").into()),
			(Value::Strand(l), Value::Strand(r)) => Value::Strand(format!("{l}{r}").into()),
			(Value::Strand(l), Value::Binary(r)) => Value::Strand(format!("{l}{r}").into()),
			(Value::List(l), Value::List(r)) => Value::List(l.concat(&r)),
			(l, r) => return Err(Error::TryAdd(l.to_string(), r.to_string())),
		})
	}
}

impl TrySub for Value {
	type Output = Self;
	fn try_sub(self, other: Self) -> Result<Self, Error> {
		match (self, other) {
			(Value::Number(l), Value::Number(r)) => Ok(Value::Number(l - r)),
			(l, r) => Err(Error::TrySub(l.to_string(), r.to_string())),
		}
	}
}

impl TryMul for Value {
	type Output = Self;
	fn try_mul(self, other: Self) -> Result<Self, Error> {
		match (self, other) {
			(Value::Number(l), Value::Number(r)) => Ok(Value::Number(l * r)),
			(Value::List(l), Value::Number(r)) => Ok(Value::List(l.repeat(r.to_i64()?))),
			(l, r) => Err(Error::TryMul(l.to_string(), r.to_string())),
		}
	}
}

impl TryDiv for Value {
	type Output = Self;
	fn try_div(self, other: Self) -> Result<Self, Error> {
		match (self, other) {
			(Value::Number(l), Value::Number(r)) => Ok(Value::Number(l.try_div(&r)?)),
			(l, r) => Err(Error::TryDiv(l.to_string(), r.to_string())),
		}
	}
}

impl TryPow for Value {
	type Output = Self;
	fn try_pow(self, other: Self) -> Result<Self, Error> {
		match (self, other) {
			(Value::Number(l), Value::Number(r)) => Ok(Value::Number(l.try_pow(&r)?)),
			(l, r) => Err(Error::TryPow(l.to_string(), r.to_string())),
		}
	}
}

impl TryNeg for Value {
	type Output = Self;
	fn try_neg(self) -> Result<Self, Error> {
		match self {
			Value::Number(v) => Ok(Value::Number(-v)),
			v => Err(Error::TryNeg(v.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn num(s: &str) -> Value {
		Value::Number(s.parse().unwrap())
	}

	#[test]
	fn number_plus_binary_is_numeric() {
		let b = Value::Binary(Binary::from_hex("0x10").unwrap());
		assert_eq!(num("1").try_add(b).unwrap(), num("17"));
	}

	#[test]
	fn number_plus_string_concatenates_textual_forms() {
		let out = num("1.5").try_add(Value::from("s")).unwrap();
		assert_eq!(out, Value::from("1.5s"));
	}

	#[test]
	fn binary_plus_binary_is_an_error() {
		let a = Value::Binary(Binary::from_hex("0x01").unwrap());
		let b = Value::Binary(Binary::from_hex("0x02").unwrap());
		assert!(matches!(a.try_add(b), Err(Error::TryAdd(..))));
	}

	#[test]
	fn number_plus_list_is_an_error() {
		let l = Value::List(List::new(vec![num("1")]));
		assert!(matches!(num("3").try_add(l), Err(Error::TryAdd(..))));
	}

	#[test]
	fn string_concatenation_is_polymorphic_on_the_right() {
		let out = Value::from("v=").try_add(num("2")).unwrap();
		assert_eq!(out, Value::from("v=2"));
		let out = Value::from("b=")
			.try_add(Value::Binary(Binary::from_hex("0x0a").unwrap()))
			.unwrap();
		assert_eq!(out, Value::from("b=0x0a"));
	}

	#[test]
	fn list_concatenation_builds_a_new_list() {
		let a = List::new(vec![num("1")]);
		let b = List::new(vec![num("2")]);
		let out = Value::List(a.clone()).try_add(Value::List(b)).unwrap();
		assert_eq!(out.to_string(), "[1, 2]");
		// The source list is untouched.
		assert_eq!(a.len(), 1);
	}

	#[test]
	fn list_repetition_clamps_and_clones() {
		let l = List::new(vec![num("1"), num("2")]);
		let out = Value::List(l.clone()).try_mul(num("2")).unwrap();
		assert_eq!(out.to_string(), "[1, 2, 1, 2]");
		let none = Value::List(l).try_mul(num("-3")).unwrap();
		assert_eq!(none.to_string(), "[]");
	}

	#[test]
	fn subtraction_rejects_strings() {
		assert!(matches!(
			Value::from("a").try_sub(Value::from("b")),
			Err(Error::TrySub(..))
		));
	}

	#[test]
	fn binary_equates_to_its_numeric_value() {
		let b = Value::Binary(Binary::from_hex("0xff").unwrap());
		assert!(b.equal(&num("255")));
		assert!(num("255").equal(&b));
		assert!(!b.equal(&num("256")));
	}

	#[test]
	fn nulls_are_equal_and_falsy() {
		assert!(Value::Null.equal(&Value::Null));
		assert!(!Value::Null.is_truthy());
	}

	#[test]
	fn ordering_is_defined_for_numbers_and_strings_only() {
		assert!(num("1").try_lt(&num("2")).unwrap());
		assert!(Value::from("a").try_lt(&Value::from("b")).unwrap());
		assert!(matches!(num("1").try_lt(&Value::from("a")), Err(Error::TryCmp(..))));
	}

	#[test]
	fn exception_display_and_repr() {
		let e = Value::Exception(Box::new(Value::from("boom")));
		assert_eq!(e.to_string(), "<Exception: boom>");
		assert_eq!(e.repr(), "<ExceptionObject payload='boom'>");
	}
}
