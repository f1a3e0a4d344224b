use crate::cnf;
use crate::rite::bytes::Binary;
use crate::rite::kind::Kind;
use crate::rite::list::List;
use crate::rite::number::BigDecimal;
use crate::rite::param::Param;
use crate::rite::statements::{
	AwaitStatement, DeclareStatement, DefineStatement, IfelseStatement, InsStatement,
	OutputStatement, RaiseStatement, SayStatement, Statement, TryStatement, WhileStatement,
};
use crate::rite::value::Value;
use crate::syn::parser::mac::{expected, unexpected};
use crate::syn::parser::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::syn::token::{t, TokenKind};

impl Parser<'_> {
	/// Parse a single statement, including declarations.
	pub(super) fn parse_declaration(&mut self) -> ParseResult<Statement> {
		self.enter(|parser| match parser.peek_kind() {
			t!("dec") => parser.parse_declare(Kind::Dec),
			t!("str") => parser.parse_declare(Kind::Str),
			t!("bin") => parser.parse_declare(Kind::Bin),
			t!("list") => parser.parse_declare(Kind::List),
			t!("def") => parser.parse_define().map(Statement::Define),
			t!("ins") => parser.parse_ins(),
			_ => parser.parse_statement(),
		})
	}

	fn parse_statement(&mut self) -> ParseResult<Statement> {
		match self.peek_kind() {
			t!("if") => self.parse_if(),
			t!("while") => self.parse_while(),
			t!("await") => self.parse_await(),
			t!("say") => self.parse_say(),
			t!("return") => self.parse_return(),
			t!("try") => self.parse_try(),
			t!("raise") => self.parse_raise(),
			_ => Ok(Statement::Value(self.parse_expr()?)),
		}
	}

	/// Parse statements up to, but not including, one of the given end
	/// tokens. The caller consumes the closer itself.
	fn parse_block(&mut self, ends: &[TokenKind]) -> ParseResult<Vec<Statement>> {
		let mut statements = Vec::new();
		loop {
			let kind = self.peek_kind();
			if kind == TokenKind::Eof || ends.contains(&kind) {
				return Ok(statements);
			}
			statements.push(self.parse_declaration()?);
		}
	}

	/// Parse a `type IDENT [= expr]` variable declaration, the keyword not
	/// yet consumed.
	fn parse_declare(&mut self, kind: Kind) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let name = expected!(self, TokenKind::Identifier);
		let name = self.token_text(name).to_owned();
		let what = match self.eat(t!("=")) {
			true => Some(self.parse_expr()?),
			false => None,
		};
		Ok(Statement::Declare(DeclareStatement {
			line,
			kind,
			name,
			what,
		}))
	}

	/// Parse a `def IDENT(PARAMS) do … enddef` definition, the `def` not
	/// yet consumed. Also used for methods inside a class body.
	fn parse_define(&mut self) -> ParseResult<DefineStatement> {
		let line = self.pop_peek().span.line;
		let name = expected!(self, TokenKind::Identifier);
		let name = self.token_text(name).to_owned();
		expected!(self, t!("("));
		let params = self.parse_params()?;
		expected!(self, t!(")"));
		expected!(self, t!("do"));
		let body = self.parse_block(&[t!("enddef")])?;
		expected!(self, t!("enddef"));
		Ok(DefineStatement {
			line,
			name,
			params,
			body,
		})
	}

	fn parse_params(&mut self) -> ParseResult<Vec<Param>> {
		let mut params = Vec::new();
		if self.peek_kind() == t!(")") {
			return Ok(params);
		}
		loop {
			if params.len() >= cnf::MAX_PARAMS {
				return Err(ParseError::new(ParseErrorKind::TooManyParameters, self.last_span()));
			}
			params.push(self.parse_param()?);
			if !self.eat(t!(",")) {
				return Ok(params);
			}
		}
	}

	/// Parse one `type IDENT [= LITERAL]` parameter or field entry.
	fn parse_param(&mut self) -> ParseResult<Param> {
		let kind = match self.peek_kind() {
			t!("dec") => Kind::Dec,
			t!("str") => Kind::Str,
			t!("bin") => Kind::Bin,
			t!("list") => Kind::List,
			t!("any") => Kind::Any,
			x => unexpected!(self, x, "a parameter type (dec, str, bin, list, any)"),
		};
		self.pop_peek();
		let name = expected!(self, TokenKind::Identifier);
		let name = self.token_text(name).to_owned();
		let default = match self.eat(t!("=")) {
			true => Some(self.parse_default()?),
			false => None,
		};
		Ok(Param::new(kind, name, default))
	}

	/// Default values must be literals: a number, string, hex, `nul`, or
	/// the empty list.
	fn parse_default(&mut self) -> ParseResult<Value> {
		let token = self.peek();
		match token.kind {
			TokenKind::Number => {
				self.pop_peek();
				let text = self.token_text(token);
				text.parse::<BigDecimal>().map(Value::Number).map_err(|_| {
					ParseError::new(ParseErrorKind::InvalidNumber(text.to_owned()), token.span)
				})
			}
			TokenKind::Strand => {
				self.pop_peek();
				let text = self.token_text(token);
				Ok(Value::from(&text[1..text.len() - 1]))
			}
			TokenKind::Hex => {
				self.pop_peek();
				let text = self.token_text(token);
				Binary::from_hex(text).map(Value::Binary).map_err(|_| {
					ParseError::new(ParseErrorKind::InvalidHex(text.to_owned()), token.span)
				})
			}
			t!("nul") => {
				self.pop_peek();
				Ok(Value::Null)
			}
			t!("[") => {
				self.pop_peek();
				match self.eat(t!("]")) {
					true => Ok(Value::List(List::new(Vec::new()))),
					false => {
						Err(ParseError::new(ParseErrorKind::InvalidListDefault, self.last_span()))
					}
				}
			}
			_ => Err(ParseError::new(ParseErrorKind::InvalidDefault, token.span)),
		}
	}

	/// Parse an `ins IDENT[(FIELDS)] contains (def …)* endins` class
	/// definition, the `ins` not yet consumed.
	fn parse_ins(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let name = expected!(self, TokenKind::Identifier);
		let name = self.token_text(name).to_owned();
		let fields = match self.eat(t!("(")) {
			true => {
				let fields = self.parse_params()?;
				expected!(self, t!(")"));
				fields
			}
			false => Vec::new(),
		};
		expected!(self, t!("contains"));
		let mut methods = Vec::new();
		loop {
			match self.peek_kind() {
				t!("def") => methods.push(self.parse_define()?),
				t!("endins") | TokenKind::Eof => break,
				_ => {
					return Err(ParseError::new(ParseErrorKind::OnlyMethods, self.peek().span))
				}
			}
		}
		expected!(self, t!("endins"));
		Ok(Statement::Ins(InsStatement {
			line,
			name,
			fields,
			methods,
		}))
	}

	fn parse_if(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let cond = self.parse_expr()?;
		expected!(self, t!("then"));
		let then = self.parse_block(&[t!("else"), t!("endif")])?;
		let otherwise = match self.eat(t!("else")) {
			true => self.parse_block(&[t!("endif")])?,
			false => Vec::new(),
		};
		expected!(self, t!("endif"));
		Ok(Statement::Ifelse(IfelseStatement {
			line,
			cond,
			then,
			otherwise,
		}))
	}

	fn parse_while(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let cond = self.parse_expr()?;
		expected!(self, t!("do"));
		let body = self.parse_block(&[t!("finally"), t!("endwhile")])?;
		let finally = match self.eat(t!("finally")) {
			true => self.parse_block(&[t!("endwhile")])?,
			false => Vec::new(),
		};
		expected!(self, t!("endwhile"));
		Ok(Statement::While(WhileStatement {
			line,
			cond,
			body,
			finally,
		}))
	}

	fn parse_await(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let cond = self.parse_expr()?;
		expected!(self, t!("then"));
		let then = self.parse_block(&[t!("endawait")])?;
		expected!(self, t!("endawait"));
		Ok(Statement::Await(AwaitStatement {
			line,
			cond,
			then,
		}))
	}

	fn parse_try(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let body = self.parse_block(&[t!("catch")])?;
		expected!(self, t!("catch"));
		let var = expected!(self, TokenKind::Identifier);
		let var = self.token_text(var).to_owned();
		let catch = self.parse_block(&[t!("finally"), t!("endtry")])?;
		let finally = match self.eat(t!("finally")) {
			true => self.parse_block(&[t!("endtry")])?,
			false => Vec::new(),
		};
		expected!(self, t!("endtry"));
		Ok(Statement::Try(TryStatement {
			line,
			body,
			var,
			catch,
			finally,
		}))
	}

	fn parse_raise(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let what = self.parse_expr()?;
		Ok(Statement::Raise(RaiseStatement {
			line,
			what,
		}))
	}

	fn parse_say(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		expected!(self, t!("("));
		let what = self.parse_expr()?;
		expected!(self, t!(")"));
		Ok(Statement::Say(SayStatement {
			line,
			what,
		}))
	}

	/// Parse a `return [expr]` statement. A bare `return` is recognized
	/// when the next token closes a block.
	fn parse_return(&mut self) -> ParseResult<Statement> {
		let line = self.pop_peek().span.line;
		let what = match self.peek_kind() {
			t!("enddef") | t!("endif") | t!("endwhile") | t!("endtry") => None,
			_ => Some(self.parse_expr()?),
		};
		Ok(Statement::Output(OutputStatement {
			line,
			what,
		}))
	}
}
