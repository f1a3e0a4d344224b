use std::fmt::{self, Display, Formatter};

/// A unary or binary operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
	/// `-` (unary)
	Neg,
	/// `+`
	Add,
	/// `-`
	Sub,
	/// `*`
	Mul,
	/// `/`
	Div,
	/// `^`
	Pow,
	/// `==`
	Equal,
	/// `!=`
	NotEqual,
	/// `<`
	LessThan,
	/// `<=`
	LessThanOrEqual,
	/// `>`
	MoreThan,
	/// `>=`
	MoreThanOrEqual,
}

impl Operator {
	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Neg => "-",
			Operator::Add => "+",
			Operator::Sub => "-",
			Operator::Mul => "*",
			Operator::Div => "/",
			Operator::Pow => "^",
			Operator::Equal => "==",
			Operator::NotEqual => "!=",
			Operator::LessThan => "<",
			Operator::LessThanOrEqual => "<=",
			Operator::MoreThan => ">",
			Operator::MoreThanOrEqual => ">=",
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
