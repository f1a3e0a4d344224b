//! Executes the built-in native functions. Every native callable the
//! interpreter predefines is dispatched by name from this module.

use crate::err::Error;
use crate::rite::value::Value;

pub mod args;
pub mod class;
pub mod hash;
pub mod list;
pub mod math;
pub mod operate;
pub mod time;

/// The names the interpreter predefines as native callables.
pub const NAMES: &[&str] = &[
	"Exception",
	"abs",
	"cos",
	"countdown",
	"hash",
	"log",
	"max",
	"min",
	"new",
	"rt",
	"setify",
	"sin",
	"sort",
	"tan",
];

/// Each function is specified by its name (a string literal) followed by
/// its path. Arguments are converted through [`args::FromArgs`] before the
/// call, so arity and type failures carry the function name.
macro_rules! dispatch {
	($name: ident, $args: ident, $($function_name: literal => $($function_path: ident)::+,)+) => {
		{
			match $name {
				$($function_name => {
					let args = args::FromArgs::from_args($name, $args)?;
					$($function_path)::+(args)
				},)+
				_ => {
					return Err(Error::InvalidFunction {
						name: String::from($name),
						message: String::from("No such builtin function."),
					})
				}
			}
		}
	};
}

/// Attempts to run any native function.
pub fn run(name: &str, args: Vec<Value>) -> Result<Value, Error> {
	dispatch!(
		name,
		args,
		"Exception" => class::exception,
		"abs" => math::abs,
		"cos" => math::cos,
		"countdown" => time::countdown,
		"hash" => hash::hash,
		"log" => math::log,
		"max" => list::max,
		"min" => list::min,
		"new" => class::new,
		"rt" => math::rt,
		"setify" => list::setify,
		"sin" => math::sin,
		"sort" => list::sort,
		"tan" => math::tan,
	)
}
