use crate::ctx::Context;
use crate::env::Env;
use crate::err::Error;
use crate::exe::Interpreter;
use crate::rite::bytes::Binary;
use crate::rite::expression::Expression;
use crate::rite::kind::Kind;
use crate::rite::list::List;
use crate::rite::number::BigDecimal;
use crate::rite::value::Value;
use std::fmt::{self, Display, Formatter};

/// A typed variable declaration: `dec x = 1`, `list xs`, and friends.
///
/// The declared type coerces the initial value once, at declaration time.
/// Later assignments to the name are not re-checked.
#[derive(Clone, Debug)]
pub struct DeclareStatement {
	pub line: u32,
	pub kind: Kind,
	pub name: String,
	pub what: Option<Expression>,
}

impl DeclareStatement {
	pub(crate) fn compute(
		&self,
		ctx: &Context,
		itp: &mut Interpreter,
		env: &Env,
	) -> Result<(), Error> {
		let value = match &self.what {
			Some(expr) => expr.compute(ctx, itp, env)?,
			None => Value::Null,
		};
		let value = self.coerce(value).map_err(|e| e.at_line(self.line))?;
		env.define(&self.name, value);
		Ok(())
	}

	/// Apply the declaration-time coercion table for the declared type.
	fn coerce(&self, value: Value) -> Result<Value, Error> {
		Ok(match self.kind {
			Kind::Dec => match value {
				Value::Strand(s) => match s.parse::<BigDecimal>() {
					Ok(n) => Value::Number(n),
					Err(_) => return Err(Error::NonNumericString(s.to_raw())),
				},
				Value::Binary(b) => Value::Number(b.to_decimal()),
				Value::Null => Value::from(0),
				v => v,
			},
			Kind::Str => Value::Strand(value.to_string().into()),
			Kind::Bin => match value {
				Value::Strand(s) => Value::Binary(Binary::from_hex(&s)?),
				Value::Null => Value::Binary(Binary(vec![0])),
				v => v,
			},
			Kind::List => match value {
				v @ Value::List(_) => v,
				Value::Null => Value::List(List::new(Vec::new())),
				v => {
					return Err(Error::ConvertTo {
						from: v.repr(),
						into: "list",
					})
				}
			},
			Kind::Any => value,
		})
	}
}

impl Display for DeclareStatement {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{} {}", self.kind, self.name)?;
		if let Some(what) = &self.what {
			write!(f, " = {what}")?;
		}
		Ok(())
	}
}
