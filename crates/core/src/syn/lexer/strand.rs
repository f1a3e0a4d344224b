use crate::syn::lexer::{Error, Lexer};
use crate::syn::token::{Token, TokenKind};

impl Lexer<'_> {
	/// Lex a string literal delimited by the given quote byte.
	///
	/// No escape sequences exist: every byte up to the closing quote is
	/// part of the string, newlines included.
	pub(super) fn lex_strand(&mut self, quote: u8) -> Token {
		loop {
			match self.reader.next() {
				None => return self.invalid_token(Error::UnterminatedString),
				Some(b'\n') => self.line += 1,
				Some(x) if x == quote => return self.finish_token(TokenKind::Strand),
				Some(_) => {}
			}
		}
	}
}
