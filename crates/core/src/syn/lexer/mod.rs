use thiserror::Error;

mod byte;
mod ident;
mod keywords;
mod number;
mod reader;
mod strand;

pub use reader::BytesReader;

use crate::syn::token::{Span, Token, TokenKind};

/// An error returned by the lexer when an invalid token is encountered.
///
/// Can be retrieved from the `Lexer::error` field whenever it returned a
/// [`TokenKind::Invalid`] token.
#[derive(Error, Debug)]
pub enum Error {
	#[error("Lexer encountered unexpected character {0:?}")]
	UnexpectedCharacter(char),
	#[error("Unterminated string literal")]
	UnterminatedString,
}

/// The PyRite lexer.
///
/// Takes a slice of bytes and turns it into tokens lazily: every call to
/// [`Lexer::next_token`] lexes one token, always returning one, with
/// invalid input surfacing as a [`TokenKind::Invalid`] token whose cause
/// is left in the `error` field. Whitespace and `#…#` comments are skipped
/// outright, counting lines as they pass.
pub struct Lexer<'a> {
	/// The reader for reading the source bytes.
	pub reader: BytesReader<'a>,
	/// One past the last byte of the previous token.
	last_offset: u32,
	/// The current 1-indexed line.
	line: u32,
	/// The line the token being lexed started on.
	start_line: u32,
	/// The error of the last `Invalid` token.
	pub error: Option<Error>,
}

impl<'a> Lexer<'a> {
	/// Create a new lexer.
	///
	/// # Panic
	/// This function will panic if the source is longer than `u32::MAX`.
	pub fn new(source: &'a [u8]) -> Lexer<'a> {
		let reader = BytesReader::new(source);
		assert!(reader.len() <= u32::MAX as usize, "source code exceeded maximum size");
		Lexer {
			reader,
			last_offset: 0,
			line: 1,
			start_line: 1,
			error: None,
		}
	}

	/// Returns the next token, driving the lexer forward.
	///
	/// If the lexer is at the end of the source it will always return the
	/// Eof token.
	pub fn next_token(&mut self) -> Token {
		self.skip_whitespace();
		self.last_offset = self.reader.offset() as u32;
		self.start_line = self.line;
		let Some(byte) = self.reader.next() else {
			return self.finish_token(TokenKind::Eof);
		};
		self.lex_byte(byte)
	}

	/// Builds a token from a TokenKind, attaching the current span.
	fn finish_token(&mut self, kind: TokenKind) -> Token {
		let offset = self.reader.offset() as u32;
		let span = Span {
			offset: self.last_offset,
			len: offset - self.last_offset,
			line: self.start_line,
		};
		self.last_offset = offset;
		Token {
			kind,
			span,
		}
	}

	/// Return an invalid token, leaving its cause on the lexer.
	fn invalid_token(&mut self, error: Error) -> Token {
		self.error = Some(error);
		self.finish_token(TokenKind::Invalid)
	}

	/// Checks if the next byte is the given byte; if it is it consumes the
	/// byte and returns true.
	fn eat(&mut self, byte: u8) -> bool {
		if self.reader.peek() == Some(byte) {
			self.reader.next();
			true
		} else {
			false
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::syn::token::{t, Keyword};

	fn kinds(source: &str) -> Vec<TokenKind> {
		let mut lexer = Lexer::new(source.as_bytes());
		let mut out = Vec::new();
		loop {
			let token = lexer.next_token();
			if token.is_eof() {
				break;
			}
			out.push(token.kind);
		}
		out
	}

	#[test]
	fn keywords_and_identifiers() {
		assert_eq!(
			kinds("dec xs endwhile"),
			vec![t!("dec"), TokenKind::Identifier, t!("endwhile")]
		);
		// Case matters: `DEC` is an identifier.
		assert_eq!(kinds("DEC"), vec![TokenKind::Identifier]);
	}

	#[test]
	fn numbers_and_hex() {
		assert_eq!(kinds("1 2.5 0x1f 0x"), vec![
			TokenKind::Number,
			TokenKind::Number,
			TokenKind::Hex,
			TokenKind::Hex,
		]);
		// A dot without a following digit stays a member access.
		assert_eq!(kinds("1.foo"), vec![
			TokenKind::Number,
			TokenKind::Dot,
			TokenKind::Identifier,
		]);
	}

	#[test]
	fn operators() {
		assert_eq!(kinds("= == != < <= > >= + - * / ^"), vec![
			t!("="),
			t!("=="),
			t!("!="),
			t!("<"),
			t!("<="),
			t!(">"),
			t!(">="),
			t!("+"),
			t!("-"),
			t!("*"),
			t!("/"),
			t!("^"),
		]);
	}

	#[test]
	fn comments_are_skipped_and_count_lines() {
		let mut lexer = Lexer::new("# a comment\nstill going #\nsay".as_bytes());
		let token = lexer.next_token();
		assert_eq!(token.kind, TokenKind::Keyword(Keyword::Say));
		assert_eq!(token.span.line, 3);
	}

	#[test]
	fn strings_keep_their_line_and_reject_eof() {
		assert_eq!(kinds("'abc' \"d'e\""), vec![TokenKind::Strand, TokenKind::Strand]);
		let mut lexer = Lexer::new("'oops".as_bytes());
		assert_eq!(lexer.next_token().kind, TokenKind::Invalid);
		assert!(matches!(lexer.error, Some(Error::UnterminatedString)));
	}

	#[test]
	fn stray_characters_are_invalid() {
		let mut lexer = Lexer::new("@".as_bytes());
		assert_eq!(lexer.next_token().kind, TokenKind::Invalid);
		assert!(matches!(lexer.error, Some(Error::UnexpectedCharacter('@'))));
		// A bare `!` is not a token either.
		let mut lexer = Lexer::new("!".as_bytes());
		assert_eq!(lexer.next_token().kind, TokenKind::Invalid);
	}

	#[test]
	fn line_numbers_are_carried_on_tokens() {
		let mut lexer = Lexer::new("say\nask".as_bytes());
		assert_eq!(lexer.next_token().span.line, 1);
		assert_eq!(lexer.next_token().span.line, 2);
	}
}
