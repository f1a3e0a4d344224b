use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::{CallFrame, Interpreter};
use crate::fnc;
use crate::rite::list::List;
use crate::rite::operator::Operator;
use crate::rite::value::{Native, Value};
use std::fmt::{self, Display, Formatter};
use std::time::Instant;

/// An expression node, tagged with its source line.
#[derive(Clone, Debug)]
pub struct Expression {
	pub line: u32,
	pub kind: ExpressionKind,
}

#[derive(Clone, Debug)]
pub enum ExpressionKind {
	/// A number, string, hex, or null literal.
	Literal(Value),
	/// A `[a, b, c]` list literal.
	List(Vec<Expression>),
	/// A variable reference.
	Ident(String),
	Unary {
		o: Operator,
		v: Box<Expression>,
	},
	Binary {
		l: Box<Expression>,
		o: Operator,
		r: Box<Expression>,
	},
	/// An assignment to a variable, list slot, or instance field.
	Assign {
		target: Box<Expression>,
		value: Box<Expression>,
	},
	Call {
		what: Box<Expression>,
		args: Vec<Expression>,
	},
	Index {
		what: Box<Expression>,
		index: Box<Expression>,
	},
	Field {
		what: Box<Expression>,
		name: String,
	},
	/// An `ask(prompt)` input expression.
	Ask(Box<Expression>),
}

impl Expression {
	pub fn new(line: u32, kind: ExpressionKind) -> Self {
		Expression {
			line,
			kind,
		}
	}

	/// Process this expression, returning a computed value.
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<Value, Error> {
		match &self.kind {
			ExpressionKind::Literal(v) => Ok(v.clone()),
			ExpressionKind::List(items) => {
				let mut out = Vec::with_capacity(items.len());
				for item in items {
					out.push(item.compute(ctx, itp, env)?);
				}
				Ok(Value::List(List::new(out)))
			}
			ExpressionKind::Ident(name) => match env.get(name) {
				Some(v) => Ok(v),
				None => Err(Error::UndefinedVariable(name.clone()).at_line(self.line)),
			},
			ExpressionKind::Unary {
				o,
				v,
			} => {
				let operand = v.compute(ctx, itp, env)?;
				match o {
					Operator::Neg => fnc::operate::neg(operand),
					o => Err(Error::TryNeg(o.to_string())),
				}
				.map_err(|e| e.at_line(self.line))
			}
			ExpressionKind::Binary {
				l,
				o,
				r,
			} => {
				let l = l.compute(ctx, itp, env)?;
				let r = r.compute(ctx, itp, env)?;
				match o {
					Operator::Add => fnc::operate::add(l, r),
					Operator::Sub => fnc::operate::sub(l, r),
					Operator::Mul => fnc::operate::mul(l, r),
					Operator::Div => fnc::operate::div(l, r),
					Operator::Pow => fnc::operate::pow(l, r),
					Operator::Equal => fnc::operate::equal(&l, &r),
					Operator::NotEqual => fnc::operate::not_equal(&l, &r),
					Operator::LessThan => fnc::operate::less_than(&l, &r),
					Operator::LessThanOrEqual => fnc::operate::less_than_or_equal(&l, &r),
					Operator::MoreThan => fnc::operate::more_than(&l, &r),
					Operator::MoreThanOrEqual => fnc::operate::more_than_or_equal(&l, &r),
					Operator::Neg => Err(Error::TryNeg(o.to_string())),
				}
				.map_err(|e| e.at_line(self.line))
			}
			ExpressionKind::Assign {
				target,
				value,
			} => {
				let value = value.compute(ctx, itp, env)?;
				self.assign(ctx, itp, env, target, value.clone())?;
				Ok(value)
			}
			ExpressionKind::Call {
				what,
				args,
			} => self.call(ctx, itp, env, what, args),
			ExpressionKind::Index {
				what,
				index,
			} => {
				let what = what.compute(ctx, itp, env)?;
				let index = index.compute(ctx, itp, env)?;
				match (what, index) {
					(Value::List(list), Value::Number(i)) => {
						list.get(&i).map_err(|e| e.at_line(self.line))
					}
					(Value::List(_), i) => Err(Error::InvalidIndex(i.repr()).at_line(self.line)),
					(v, _) => Err(Error::InvalidSubscript(v.repr()).at_line(self.line)),
				}
			}
			ExpressionKind::Field {
				what,
				name,
			} => {
				let what = what.compute(ctx, itp, env)?;
				match what {
					Value::Instance(instance) => {
						instance.get(name).map_err(|e| e.at_line(self.line))
					}
					v => Err(Error::InvalidMember(v.repr()).at_line(self.line)),
				}
			}
			ExpressionKind::Ask(prompt) => {
				let prompt = prompt.compute(ctx, itp, env)?;
				Ok(Value::Strand(itp.ask(&prompt.to_string()).into()))
			}
		}
	}

	/// Store a computed value into an assignment target.
	fn assign(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
		target: &Expression,
		value: Value,
	) -> Result<(), Error> {
		match &target.kind {
			ExpressionKind::Ident(name) => {
				env.assign(name, value).map_err(|e| e.at_line(self.line))
			}
			ExpressionKind::Index {
				what,
				index,
			} => {
				let what = what.compute(ctx, itp, env)?;
				let index = index.compute(ctx, itp, env)?;
				match (what, index) {
					(Value::List(list), Value::Number(i)) => {
						list.set(&i, value).map_err(|e| e.at_line(self.line))
					}
					(Value::List(_), i) => Err(Error::InvalidIndex(i.repr()).at_line(self.line)),
					(v, _) => Err(Error::InvalidSubscript(v.repr()).at_line(self.line)),
				}
			}
			ExpressionKind::Field {
				what,
				name,
			} => {
				let what = what.compute(ctx, itp, env)?;
				match what {
					Value::Instance(instance) => {
						instance.set(name, value).map_err(|e| e.at_line(self.line))
					}
					v => Err(Error::InvalidMember(v.repr()).at_line(self.line)),
				}
			}
			// The parser only accepts the three targets above.
			_ => Err(Error::NotCallable(target.to_string()).at_line(self.line)),
		}
	}

	/// Process a call expression.
	fn call(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
		what: &Expression,
		args: &[Expression],
	) -> Result<Value, Error> {
		ctx.check(self.line)?;
		// `swap` is a special form: its arguments are names, not values.
		if let ExpressionKind::Ident(name) = &what.kind {
			if name == "swap" {
				return itp.swap(env, args, self.line);
			}
		}
		let callee = what.compute(ctx, itp, env)?;
		let mut values = Vec::with_capacity(args.len());
		for arg in args {
			values.push(arg.compute(ctx, itp, env)?);
		}
		match callee {
			Value::Native(native) => {
				itp.call_stack.push(CallFrame {
					name: native.name().to_owned(),
					line: self.line,
				});
				let result = match &native {
					Native::Builtin(name) => fnc::run(name, values),
					Native::Timer(end) => match values.is_empty() {
						true => Ok(Value::from(Instant::now() >= *end)),
						false => Err(Error::InvalidArguments {
							name: String::from("timer"),
							message: String::from("The timer function takes no arguments."),
						}),
					},
				};
				itp.call_stack.pop();
				result.map_err(|e| e.at_line(self.line))
			}
			Value::Function(function) => function
				.call(ctx, itp, None, values, self.line)
				.map_err(|e| e.at_line(self.line)),
			Value::Bound(bound) => bound
				.method
				.call(ctx, itp, Some(&bound.instance), values, self.line)
				.map_err(|e| e.at_line(self.line)),
			v => Err(Error::NotCallable(v.repr()).at_line(self.line)),
		}
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match &self.kind {
			ExpressionKind::Literal(v) => f.write_str(&v.repr()),
			ExpressionKind::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(item, f)?;
				}
				f.write_str("]")
			}
			ExpressionKind::Ident(name) => f.write_str(name),
			ExpressionKind::Unary {
				o,
				v,
			} => write!(f, "{o}{v}"),
			ExpressionKind::Binary {
				l,
				o,
				r,
			} => write!(f, "{l} {o} {r}"),
			ExpressionKind::Assign {
				target,
				value,
			} => write!(f, "{target} = {value}"),
			ExpressionKind::Call {
				what,
				args,
			} => {
				write!(f, "{what}(")?;
				for (i, arg) in args.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(arg, f)?;
				}
				f.write_str(")")
			}
			ExpressionKind::Index {
				what,
				index,
			} => write!(f, "{what}[{index}]"),
			ExpressionKind::Field {
				what,
				name,
			} => write!(f, "{what}.{name}"),
			ExpressionKind::Ask(prompt) => write!(f, "ask({prompt})"),
		}
	}
}
