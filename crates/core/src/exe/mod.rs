//! Executes parsed scripts: owns the global scope, the call stack used for
//! post-mortem diagnostics, and the input/output streams.

use crate::ctx::Context;
use crate::env::{Env, Environment};
use crate::err::Error;
use crate::fnc;
use crate::rite::bytes::Binary;
use crate::rite::expression::{Expression, ExpressionKind};
use crate::rite::number::BigDecimal;
use crate::rite::script::Script;
use crate::rite::statements::Statement;
use crate::rite::value::{Native, Value};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// One entry of the diagnostic call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
	pub name: String,
	pub line: u32,
}

enum Output {
	Stdout,
	Buffer(Vec<u8>),
}

enum Input {
	Stdin,
	Lines(VecDeque<String>),
}

/// The tree-walking evaluator.
///
/// Execution is strictly single-threaded and eager. All interpreter state
/// lives here rather than in globals: the global environment with the
/// native functions predefined, the call stack, and the streams `say` and
/// `ask` talk to.
pub struct Interpreter {
	pub globals: Env,
	pub(crate) call_stack: Vec<CallFrame>,
	out: Output,
	input: Input,
}

impl Default for Interpreter {
	fn default() -> Self {
		Self::new()
	}
}

impl Interpreter {
	/// Create an interpreter talking to the standard streams.
	pub fn new() -> Self {
		let globals = Environment::root();
		for name in fnc::NAMES {
			globals.define(*name, Value::Native(Native::Builtin(name)));
		}
		Interpreter {
			globals,
			call_stack: Vec::new(),
			out: Output::Stdout,
			input: Input::Stdin,
		}
	}

	/// Create an interpreter that captures output instead of printing it.
	pub fn capture() -> Self {
		Interpreter {
			out: Output::Buffer(Vec::new()),
			input: Input::Lines(VecDeque::new()),
			..Self::new()
		}
	}

	/// Queue lines for `ask` to read, when input is not the terminal.
	pub fn feed_input(&mut self, lines: impl IntoIterator<Item = String>) {
		match &mut self.input {
			Input::Lines(queue) => queue.extend(lines),
			Input::Stdin => self.input = Input::Lines(lines.into_iter().collect()),
		}
	}

	/// Drain and return everything written so far to a capturing output.
	pub fn take_output(&mut self) -> String {
		match &mut self.out {
			Output::Buffer(buffer) => String::from_utf8_lossy(&std::mem::take(buffer)).into_owned(),
			Output::Stdout => String::new(),
		}
	}

	/// Execute a whole script in the global scope.
	///
	/// An uncaught error is reported to the diagnostic stream together
	/// with the call stack, which is then cleared; the error is also
	/// returned so embedders can inspect it.
	pub fn interpret(&mut self, ctx: &Context, script: &Script) -> Result<(), Error> {
		tracing::debug!(statements = script.len(), "interpreting script");
		let globals = self.globals.clone();
		for stmt in script.iter() {
			let result = ctx.check(stmt.line()).and_then(|_| stmt.compute(ctx, self, &globals));
			if let Err(e) = result {
				self.report(&e);
				return Err(e);
			}
		}
		Ok(())
	}

	/// Execute statements sequentially in the given environment, checking
	/// the deadline between statements.
	pub(crate) fn execute_block(
		&mut self,
		ctx: &Context,
		stmts: &[Statement],
		env: &Env,
	) -> Result<(), Error> {
		for stmt in stmts {
			ctx.check(stmt.line())?;
			stmt.compute(ctx, self, env)?;
		}
		Ok(())
	}

	/// The `swap(a, b)` special form: rebind two variables with each
	/// other's values, coercing each incoming value to the target's
	/// current type and falling back to an identity clone when the
	/// coercion fails.
	pub(crate) fn swap(
		&mut self,
		env: &Env,
		args: &[Expression],
		line: u32,
	) -> Result<Value, Error> {
		let names = match args {
			[a, b] => match (&a.kind, &b.kind) {
				(ExpressionKind::Ident(a), ExpressionKind::Ident(b)) => (a.clone(), b.clone()),
				_ => {
					return Err(Error::InvalidArguments {
						name: String::from("swap"),
						message: String::from("The arguments must be variable names."),
					}
					.at_line(line))
				}
			},
			_ => {
				return Err(Error::InvalidArguments {
					name: String::from("swap"),
					message: String::from("The special form expects exactly 2 arguments."),
				}
				.at_line(line))
			}
		};
		let (n1, n2) = names;
		let v1 = env.get(&n1).ok_or_else(|| Error::UndefinedVariable(n1.clone()).at_line(line))?;
		let v2 = env.get(&n2).ok_or_else(|| Error::UndefinedVariable(n2.clone()).at_line(line))?;
		let new1 = coerce_swapped(v1.type_name(), &v2);
		let new2 = coerce_swapped(v2.type_name(), &v1);
		env.assign(&n1, new1).map_err(|e| e.at_line(line))?;
		env.assign(&n2, new2).map_err(|e| e.at_line(line))?;
		Ok(Value::Null)
	}

	/// Write one line of program output.
	pub(crate) fn say(&mut self, text: &str) {
		match &mut self.out {
			Output::Stdout => println!("{text}"),
			Output::Buffer(buffer) => {
				buffer.extend_from_slice(text.as_bytes());
				buffer.push(b'\n');
			}
		}
	}

	/// Print a prompt without a newline and read one input line.
	pub(crate) fn ask(&mut self, prompt: &str) -> String {
		match &mut self.out {
			Output::Stdout => {
				print!("{prompt}");
				let _ = std::io::stdout().flush();
			}
			Output::Buffer(buffer) => buffer.extend_from_slice(prompt.as_bytes()),
		}
		match &mut self.input {
			Input::Stdin => {
				let mut line = String::new();
				let _ = std::io::stdin().lock().read_line(&mut line);
				line.trim_end_matches(['\n', '\r']).to_owned()
			}
			Input::Lines(queue) => queue.pop_front().unwrap_or_default(),
		}
	}

	/// Report an uncaught error with the call stack, then clear the stack.
	fn report(&mut self, error: &Error) {
		match error {
			Error::Thrown(value) => eprintln!("[uncaught exception] {}", value.repr()),
			e => eprintln!("[runtime error] {e}"),
		}
		if !self.call_stack.is_empty() {
			eprintln!("Stack trace:");
			for frame in self.call_stack.iter().rev() {
				eprintln!("  in {} (line {})", frame.name, frame.line);
			}
		}
		self.call_stack.clear();
	}
}

/// The swap coercion table, keyed on the target's current type tag.
fn coerce_swapped(target: &str, incoming: &Value) -> Value {
	match target {
		"dec" => incoming
			.to_string()
			.parse::<BigDecimal>()
			.map(Value::from)
			.unwrap_or_else(|_| incoming.clone_value()),
		"str" => Value::Strand(incoming.to_string().into()),
		"bin" => Binary::from_hex(&incoming.to_string())
			.map(Value::from)
			.unwrap_or_else(|_| incoming.clone_value()),
		_ => incoming.clone_value(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::syn;

	#[test]
	fn swap_coercion_table() {
		assert_eq!(coerce_swapped("dec", &Value::from("12")), Value::from(12));
		assert_eq!(coerce_swapped("str", &Value::from(3)), Value::from("3"));
		assert_eq!(coerce_swapped("bin", &Value::from("0x0f")).to_string(), "0x0f");
		// Failed coercions fall back to an identity clone.
		assert_eq!(coerce_swapped("dec", &Value::from("x")), Value::from("x"));
		assert_eq!(coerce_swapped("list", &Value::from(1)), Value::from(1));
	}

	#[test]
	fn output_capture_round_trips() {
		let script = syn::parse("say('a') say('b')").unwrap();
		let mut interpreter = Interpreter::capture();
		interpreter.interpret(&Context::background(), &script).unwrap();
		assert_eq!(interpreter.take_output(), "a\nb\n");
	}

	#[test]
	fn interpret_clears_the_call_stack_after_reporting() {
		let script = syn::parse("def f() do say(1/0) enddef f()").unwrap();
		let mut interpreter = Interpreter::capture();
		assert!(interpreter.interpret(&Context::background(), &script).is_err());
		assert!(interpreter.call_stack.is_empty());
	}

	#[test]
	fn natives_are_predefined_in_the_globals() {
		let interpreter = Interpreter::new();
		for name in fnc::NAMES {
			assert!(interpreter.globals.get(name).is_some(), "{name} is missing");
		}
		assert!(interpreter.globals.get("swap").is_none());
	}
}
