use crate::rite::value::Value;
use thiserror::Error;

/// Every failure the engine can produce while executing a script.
///
/// Control flow also travels through this enum: a `return` statement raises
/// [`Error::Return`] and a `raise` statement raises [`Error::Thrown`], and
/// both are intercepted by the evaluator rather than reported. Everything
/// else is a genuine runtime error, usually wrapped in [`Error::At`] so the
/// offending source line travels with it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// A `return` statement travelling up to the enclosing call.
	#[error("The 'return' statement can only be used inside a function")]
	Return(Value),

	/// A value raised by a `raise` statement, looking for a `try` block.
	#[error("An uncaught exception was raised")]
	Thrown(Value),

	/// A runtime error tagged with the source line it occurred on.
	#[error("line {line}: {source}")]
	At {
		line: u32,
		source: Box<Error>,
	},

	/// The cooperative deadline armed before execution was exceeded.
	#[error("Execution timed out ({0}ms)")]
	Timeout(u64),

	/// There was a problem resolving a variable name.
	#[error("Undefined variable '{0}'")]
	UndefinedVariable(String),

	/// There was a problem resolving a field or method on an instance.
	#[error("Undefined property '{0}'")]
	UndefinedField(String),

	/// An assignment to a field the class never declared.
	#[error("Cannot set undeclared field '{0}'")]
	UndeclaredField(String),

	/// The underlying values are not additionable.
	#[error("Cannot perform addition with '{0}' and '{1}'")]
	TryAdd(String, String),

	/// The underlying values are not subtractable.
	#[error("Cannot perform subtraction with '{0}' and '{1}'")]
	TrySub(String, String),

	/// The underlying values are not multiplicable.
	#[error("Cannot perform multiplication with '{0}' and '{1}'")]
	TryMul(String, String),

	/// The underlying values are not divisible.
	#[error("Cannot perform division with '{0}' and '{1}'")]
	TryDiv(String, String),

	/// The underlying values cannot be raised to a power.
	#[error("Cannot raise the value '{0}' to the power '{1}'")]
	TryPow(String, String),

	/// The underlying value cannot be negated.
	#[error("Cannot negate the value '{0}'")]
	TryNeg(String),

	/// The underlying values cannot be ordered.
	#[error("Cannot compare the values '{0}' and '{1}'")]
	TryCmp(String, String),

	#[error("Division by zero")]
	DivisionByZero,

	#[error("The exponent must be an integer, but found {0}")]
	NonIntegerExponent(String),

	#[error("Cannot take an even root of the negative number {0}")]
	EvenRootOfNegative(String),

	#[error("The root degree must be positive, but found {0}")]
	NonPositiveRoot(String),

	/// A number did not fit in the widest machine integer.
	#[error("The number {0} does not fit in a machine integer")]
	Overflow(String),

	/// A string failed to coerce into a number.
	#[error("Cannot convert the string '{0}' to a number")]
	NonNumericString(String),

	#[error("Invalid number literal '{0}'")]
	InvalidNumber(String),

	#[error("Invalid hex literal '{0}', expected '0x' followed by hex digits")]
	InvalidHex(String),

	/// Unable to convert a value into the expected type.
	#[error("Cannot convert '{from}' into a {into}")]
	ConvertTo {
		from: String,
		into: &'static str,
	},

	#[error("List index {index} is out of range for a list of length {len}")]
	IndexOutOfRange {
		index: i64,
		len: usize,
	},

	#[error("Invalid list index '{0}'")]
	InvalidIndex(String),

	/// Subscripting was attempted on a value that is not a list.
	#[error("The value '{0}' cannot be indexed")]
	InvalidSubscript(String),

	/// Member access was attempted on a value that is not an instance.
	#[error("Only instances have fields and methods, but found '{0}'")]
	InvalidMember(String),

	/// A call was attempted on a value that is not callable.
	#[error("Can only call functions and methods, but found '{0}'")]
	NotCallable(String),

	/// Too few arguments for a user function.
	#[error("Function '{name}' requires at least {min} arguments, but received {got}")]
	TooFewArguments {
		name: String,
		min: usize,
		got: usize,
	},

	/// Too many arguments for a user function.
	#[error("Function '{name}' accepts at most {max} arguments, but received {got}")]
	TooManyArguments {
		name: String,
		max: usize,
		got: usize,
	},

	/// An argument did not match the declared parameter type.
	#[error("Parameter {index} '{param}' of function '{name}' expects a value of type '{expected}', but found '{found}'")]
	ParameterType {
		name: String,
		index: usize,
		param: String,
		expected: String,
		found: String,
	},

	/// A field assignment did not match the declared field type.
	#[error("Field '{field}' expects a value of type '{expected}', but found '{found}'")]
	FieldType {
		field: String,
		expected: String,
		found: String,
	},

	/// The arguments of a native function were invalid.
	#[error("Incorrect arguments for function {name}(). {message}")]
	InvalidArguments {
		name: String,
		message: String,
	},

	/// The requested native function does not exist.
	#[error("There was a problem running the {name}() function. {message}")]
	InvalidFunction {
		name: String,
		message: String,
	},
}

impl Error {
	/// Whether this error is a control flow signal rather than a failure.
	pub fn is_signal(&self) -> bool {
		matches!(self, Error::Return(_) | Error::Thrown(_))
	}

	/// Whether this error carries, or is, a deadline timeout.
	pub fn is_timeout(&self) -> bool {
		match self {
			Error::Timeout(_) => true,
			Error::At {
				source,
				..
			} => source.is_timeout(),
			_ => false,
		}
	}

	/// Tag this error with the source line it occurred on.
	///
	/// Control flow signals and already-located errors pass through
	/// untouched, so the innermost location wins.
	pub fn at_line(self, line: u32) -> Error {
		match self {
			e @ (Error::Return(_) | Error::Thrown(_) | Error::At { .. }) => e,
			e => Error::At {
				line,
				source: Box::new(e),
			},
		}
	}

	/// The bare message of this error, without any line information.
	pub fn message(&self) -> String {
		match self {
			Error::At {
				source,
				..
			} => source.message(),
			e => e.to_string(),
		}
	}
}
