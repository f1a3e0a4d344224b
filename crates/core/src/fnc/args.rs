use crate::err::Error;
use crate::rite::list::List;
use crate::rite::number::BigDecimal;
use crate::rite::value::Value;

/// Conversion of a single native-call argument.
pub trait FromArg: Sized {
	fn from_arg(arg: Value) -> Result<Self, Error>;
}

impl FromArg for Value {
	fn from_arg(arg: Value) -> Result<Self, Error> {
		Ok(arg)
	}
}

impl FromArg for BigDecimal {
	fn from_arg(arg: Value) -> Result<Self, Error> {
		match arg {
			Value::Number(n) => Ok(n),
			v => Err(Error::ConvertTo {
				from: v.repr(),
				into: "number",
			}),
		}
	}
}

impl FromArg for List {
	fn from_arg(arg: Value) -> Result<Self, Error> {
		match arg {
			Value::List(l) => Ok(l),
			v => Err(Error::ConvertTo {
				from: v.repr(),
				into: "list",
			}),
		}
	}
}

/// Conversion of a whole native-call argument list, including the arity
/// check. Implemented over small tuples, with `Option` marking a trailing
/// optional argument and `Vec<Value>` accepting anything.
pub trait FromArgs: Sized {
	fn from_args(name: &str, args: Vec<Value>) -> Result<Self, Error>;
}

impl FromArgs for Vec<Value> {
	fn from_args(_name: &str, args: Vec<Value>) -> Result<Self, Error> {
		Ok(args)
	}
}

fn exact(name: &str, args: &[Value], want: usize) -> Result<(), Error> {
	if args.len() != want {
		return Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: format!("The function expects {want} argument(s)."),
		});
	}
	Ok(())
}

fn convert<T: FromArg>(name: &str, position: usize, arg: Value) -> Result<T, Error> {
	T::from_arg(arg).map_err(|e| Error::InvalidArguments {
		name: name.to_owned(),
		message: format!("Argument {position} was the wrong type. {e}"),
	})
}

impl<A: FromArg> FromArgs for (A,) {
	fn from_args(name: &str, args: Vec<Value>) -> Result<Self, Error> {
		exact(name, &args, 1)?;
		let mut args = args.into_iter();
		// Arity was checked above.
		let a = convert(name, 1, args.next().unwrap_or_default())?;
		Ok((a,))
	}
}

impl<A: FromArg, B: FromArg> FromArgs for (A, B) {
	fn from_args(name: &str, args: Vec<Value>) -> Result<Self, Error> {
		exact(name, &args, 2)?;
		let mut args = args.into_iter();
		let a = convert(name, 1, args.next().unwrap_or_default())?;
		let b = convert(name, 2, args.next().unwrap_or_default())?;
		Ok((a, b))
	}
}

impl<A: FromArg, B: FromArg> FromArgs for (A, Option<B>) {
	fn from_args(name: &str, args: Vec<Value>) -> Result<Self, Error> {
		if args.is_empty() || args.len() > 2 {
			return Err(Error::InvalidArguments {
				name: name.to_owned(),
				message: String::from("The function expects 1 or 2 arguments."),
			});
		}
		let mut args = args.into_iter();
		let a = convert(name, 1, args.next().unwrap_or_default())?;
		let b = match args.next() {
			Some(v) => Some(convert(name, 2, v)?),
			None => None,
		};
		Ok((a, b))
	}
}
