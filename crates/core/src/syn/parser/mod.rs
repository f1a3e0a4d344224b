//! The PyRite parser.
//!
//! A straightforward recursive descent parser: most functions peek a token
//! from the lexer and pick a path based on what is next. A few common
//! patterns have helpers:
//! - When only one token can be next, use the [`mac::expected`] macro.
//! - When a limited set of tokens can be next, match the token kind and
//!   put the [`mac::unexpected`] macro in the catch-all arm.
//! - When a single token is optionally next, [`Parser::eat`] consumes it
//!   and reports whether it did.
//!
//! The parser recovers at statement boundaries: a failed statement is
//! reported, the token stream is skipped forward to something that looks
//! like the start of a statement, and parsing continues, so one pass can
//! report several errors. Any error prevents execution.

mod error;
mod expr;
pub(crate) mod mac;
mod stmt;

pub use error::{ParseError, ParseErrorKind};

use crate::cnf;
use crate::rite::script::Script;
use crate::syn::lexer::Lexer;
use crate::syn::token::{t, Span, Token, TokenKind};
use std::collections::VecDeque;

/// The result returned by most parser functions.
pub type ParseResult<T> = Result<T, ParseError>;

/// The PyRite parser.
pub struct Parser<'a> {
	source: &'a str,
	lexer: Lexer<'a>,
	last_span: Span,
	token_buffer: VecDeque<Token>,
	depth: usize,
}

impl<'a> Parser<'a> {
	/// Create a new parser over the given source.
	pub fn new(source: &'a str) -> Self {
		Parser {
			source,
			lexer: Lexer::new(source.as_bytes()),
			last_span: Span::empty(),
			token_buffer: VecDeque::new(),
			depth: cnf::MAX_PARSE_DEPTH,
		}
	}

	/// Returns the next token and advances the parser one token forward.
	pub(super) fn next(&mut self) -> Token {
		let token = self.token_buffer.pop_front().unwrap_or_else(|| self.lexer.next_token());
		self.last_span = token.span;
		token
	}

	/// Returns the next token without consuming it.
	pub(super) fn peek(&mut self) -> Token {
		match self.token_buffer.front() {
			Some(token) => *token,
			None => {
				let token = self.lexer.next_token();
				self.token_buffer.push_back(token);
				token
			}
		}
	}

	/// Return the token kind of the next token without consuming it.
	pub(super) fn peek_kind(&mut self) -> TokenKind {
		self.peek().kind
	}

	/// Consume the current peeked value and advance the parser.
	///
	/// Should only be called after peeking a value.
	pub(super) fn pop_peek(&mut self) -> Token {
		let token = self.token_buffer.pop_front().unwrap_or_else(|| self.lexer.next_token());
		self.last_span = token.span;
		token
	}

	/// Eat the next token if it is of the given kind. Returns whether a
	/// token was eaten.
	pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
		if self.peek().kind == kind {
			self.pop_peek();
			true
		} else {
			false
		}
	}

	/// The span of the last consumed token.
	pub(super) fn last_span(&self) -> Span {
		self.last_span
	}

	/// The source text a token covers.
	pub(super) fn token_text(&self, token: Token) -> &'a str {
		let start = token.span.offset as usize;
		let end = start + token.span.len as usize;
		self.source.get(start..end).unwrap_or_default()
	}

	/// Take the pending lexer error after an `Invalid` token.
	pub(super) fn take_lexer_error(&mut self) -> crate::syn::lexer::Error {
		self.lexer
			.error
			.take()
			.unwrap_or(crate::syn::lexer::Error::UnexpectedCharacter('\u{fffd}'))
	}

	/// Run a nested production, guarding against runaway recursion.
	pub(super) fn enter<T>(
		&mut self,
		f: impl FnOnce(&mut Self) -> ParseResult<T>,
	) -> ParseResult<T> {
		if self.depth == 0 {
			return Err(ParseError::new(ParseErrorKind::ExceededDepthLimit, self.last_span));
		}
		self.depth -= 1;
		let result = f(self);
		self.depth += 1;
		result
	}

	/// Parse a full script.
	///
	/// This is the primary entry point of the parser. Parsing stops at the
	/// end of the source or at a top-level `halt`/`run` token, and returns
	/// the statements together with every error recovered along the way.
	pub fn parse_script(&mut self) -> (Script, Vec<ParseError>) {
		let mut statements = Vec::new();
		let mut errors = Vec::new();
		loop {
			match self.peek_kind() {
				TokenKind::Eof | t!("halt") | t!("run") => break,
				_ => match self.parse_declaration() {
					Ok(stmt) => statements.push(stmt),
					Err(e) => {
						errors.push(e);
						self.synchronize();
					}
				},
			}
		}
		(Script(statements), errors)
	}

	/// Skip forward to the next plausible statement start.
	fn synchronize(&mut self) {
		self.next();
		loop {
			match self.peek_kind() {
				TokenKind::Eof
				| t!("dec")
				| t!("str")
				| t!("bin")
				| t!("list")
				| t!("if")
				| t!("while")
				| t!("def")
				| t!("ins")
				| t!("say")
				| t!("return")
				| t!("try") => return,
				_ => {
					self.next();
				}
			}
		}
	}
}
