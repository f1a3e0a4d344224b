use crate::syn::lexer::keywords::KEYWORDS;
use crate::syn::lexer::Lexer;
use crate::syn::token::{Token, TokenKind};

fn is_identifier_continue(x: u8) -> bool {
	matches!(x, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
}

impl Lexer<'_> {
	/// Lex an identifier in the form of `[a-zA-Z_][a-zA-Z0-9_]*`.
	///
	/// The start byte was already consumed. When finished, the text is
	/// matched against the keyword table; identifiers carry no value of
	/// their own, the parser reads the text back from the span.
	pub(super) fn lex_ident(&mut self) -> Token {
		while let Some(x) = self.reader.peek() {
			if !is_identifier_continue(x) {
				break;
			}
			self.reader.next();
		}
		let text = &self.reader.full()[self.last_offset as usize..self.reader.offset()];
		// The bytes were all checked to be ascii identifier characters.
		let text = std::str::from_utf8(text).unwrap_or_default();
		match KEYWORDS.get(text) {
			Some(keyword) => self.finish_token(TokenKind::Keyword(*keyword)),
			None => self.finish_token(TokenKind::Identifier),
		}
	}
}
