use crate::cnf;
use crate::rite::bytes::Binary;
use crate::rite::expression::{Expression, ExpressionKind};
use crate::rite::number::BigDecimal;
use crate::rite::operator::Operator;
use crate::rite::value::Value;
use crate::syn::parser::mac::{expected, unexpected};
use crate::syn::parser::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::syn::token::{t, TokenKind};

impl Parser<'_> {
	/// Parse a full expression.
	///
	/// Precedence, lowest to highest: assignment (right-associative),
	/// equality, comparison, additive, multiplicative, power
	/// (left-associative), unary minus, then call/subscript/member chains.
	pub(super) fn parse_expr(&mut self) -> ParseResult<Expression> {
		self.enter(Self::parse_assignment)
	}

	fn parse_assignment(&mut self) -> ParseResult<Expression> {
		let expr = self.parse_equality()?;
		if self.eat(t!("=")) {
			let span = self.last_span();
			if !matches!(
				expr.kind,
				ExpressionKind::Ident(_) | ExpressionKind::Index { .. } | ExpressionKind::Field { .. }
			) {
				return Err(ParseError::new(ParseErrorKind::InvalidAssignmentTarget, span));
			}
			// Right-associative.
			let value = self.parse_assignment()?;
			return Ok(Expression::new(span.line, ExpressionKind::Assign {
				target: Box::new(expr),
				value: Box::new(value),
			}));
		}
		Ok(expr)
	}

	fn parse_equality(&mut self) -> ParseResult<Expression> {
		let mut expr = self.parse_comparison()?;
		loop {
			let o = match self.peek_kind() {
				t!("==") => Operator::Equal,
				t!("!=") => Operator::NotEqual,
				_ => return Ok(expr),
			};
			let line = self.pop_peek().span.line;
			let r = self.parse_comparison()?;
			expr = Expression::new(line, ExpressionKind::Binary {
				l: Box::new(expr),
				o,
				r: Box::new(r),
			});
		}
	}

	fn parse_comparison(&mut self) -> ParseResult<Expression> {
		let mut expr = self.parse_additive()?;
		loop {
			let o = match self.peek_kind() {
				t!("<") => Operator::LessThan,
				t!("<=") => Operator::LessThanOrEqual,
				t!(">") => Operator::MoreThan,
				t!(">=") => Operator::MoreThanOrEqual,
				_ => return Ok(expr),
			};
			let line = self.pop_peek().span.line;
			let r = self.parse_additive()?;
			expr = Expression::new(line, ExpressionKind::Binary {
				l: Box::new(expr),
				o,
				r: Box::new(r),
			});
		}
	}

	fn parse_additive(&mut self) -> ParseResult<Expression> {
		let mut expr = self.parse_multiplicative()?;
		loop {
			let o = match self.peek_kind() {
				t!("+") => Operator::Add,
				t!("-") => Operator::Sub,
				_ => return Ok(expr),
			};
			let line = self.pop_peek().span.line;
			let r = self.parse_multiplicative()?;
			expr = Expression::new(line, ExpressionKind::Binary {
				l: Box::new(expr),
				o,
				r: Box::new(r),
			});
		}
	}

	fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
		let mut expr = self.parse_power()?;
		loop {
			let o = match self.peek_kind() {
				t!("*") => Operator::Mul,
				t!("/") => Operator::Div,
				_ => return Ok(expr),
			};
			let line = self.pop_peek().span.line;
			let r = self.parse_power()?;
			expr = Expression::new(line, ExpressionKind::Binary {
				l: Box::new(expr),
				o,
				r: Box::new(r),
			});
		}
	}

	fn parse_power(&mut self) -> ParseResult<Expression> {
		let mut expr = self.parse_unary()?;
		while self.peek_kind() == t!("^") {
			let line = self.pop_peek().span.line;
			let r = self.parse_unary()?;
			expr = Expression::new(line, ExpressionKind::Binary {
				l: Box::new(expr),
				o: Operator::Pow,
				r: Box::new(r),
			});
		}
		Ok(expr)
	}

	fn parse_unary(&mut self) -> ParseResult<Expression> {
		if self.peek_kind() == t!("-") {
			let line = self.pop_peek().span.line;
			let v = self.parse_unary()?;
			return Ok(Expression::new(line, ExpressionKind::Unary {
				o: Operator::Neg,
				v: Box::new(v),
			}));
		}
		self.parse_postfix()
	}

	/// Parse a primary expression followed by any chain of calls,
	/// subscripts, and member accesses.
	fn parse_postfix(&mut self) -> ParseResult<Expression> {
		let mut expr = self.parse_primary()?;
		loop {
			match self.peek_kind() {
				t!("(") => {
					let line = self.pop_peek().span.line;
					let args = self.parse_arguments()?;
					expected!(self, t!(")"));
					expr = Expression::new(line, ExpressionKind::Call {
						what: Box::new(expr),
						args,
					});
				}
				t!("[") => {
					let line = self.pop_peek().span.line;
					let index = self.parse_expr()?;
					expected!(self, t!("]"));
					expr = Expression::new(line, ExpressionKind::Index {
						what: Box::new(expr),
						index: Box::new(index),
					});
				}
				t!(".") => {
					self.pop_peek();
					let name = expected!(self, TokenKind::Identifier);
					expr = Expression::new(name.span.line, ExpressionKind::Field {
						what: Box::new(expr),
						name: self.token_text(name).to_owned(),
					});
				}
				_ => return Ok(expr),
			}
		}
	}

	fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
		let mut args = Vec::new();
		if self.peek_kind() == t!(")") {
			return Ok(args);
		}
		loop {
			if args.len() >= cnf::MAX_PARAMS {
				return Err(ParseError::new(ParseErrorKind::TooManyArguments, self.last_span()));
			}
			args.push(self.parse_expr()?);
			if !self.eat(t!(",")) {
				return Ok(args);
			}
		}
	}

	fn parse_primary(&mut self) -> ParseResult<Expression> {
		let token = self.next();
		let line = token.span.line;
		match token.kind {
			TokenKind::Number => {
				let text = self.token_text(token);
				let number = text.parse::<BigDecimal>().map_err(|_| {
					ParseError::new(ParseErrorKind::InvalidNumber(text.to_owned()), token.span)
				})?;
				Ok(Expression::new(line, ExpressionKind::Literal(Value::Number(number))))
			}
			TokenKind::Hex => {
				let text = self.token_text(token);
				let binary = Binary::from_hex(text).map_err(|_| {
					ParseError::new(ParseErrorKind::InvalidHex(text.to_owned()), token.span)
				})?;
				Ok(Expression::new(line, ExpressionKind::Literal(Value::Binary(binary))))
			}
			TokenKind::Strand => {
				let text = self.token_text(token);
				let content = &text[1..text.len() - 1];
				Ok(Expression::new(line, ExpressionKind::Literal(Value::from(content))))
			}
			t!("nul") => Ok(Expression::new(line, ExpressionKind::Literal(Value::Null))),
			TokenKind::Identifier => {
				let name = self.token_text(token).to_owned();
				Ok(Expression::new(line, ExpressionKind::Ident(name)))
			}
			t!("ask") => {
				expected!(self, t!("("));
				let prompt = self.parse_expr()?;
				expected!(self, t!(")"));
				Ok(Expression::new(line, ExpressionKind::Ask(Box::new(prompt))))
			}
			t!("[") => {
				let mut items = Vec::new();
				if self.peek_kind() != t!("]") {
					loop {
						items.push(self.parse_expr()?);
						if !self.eat(t!(",")) {
							break;
						}
					}
				}
				expected!(self, t!("]"));
				Ok(Expression::new(line, ExpressionKind::List(items)))
			}
			t!("(") => {
				let expr = self.parse_expr()?;
				expected!(self, t!(")"));
				Ok(expr)
			}
			x => unexpected!(self, x, "an expression"),
		}
	}
}
