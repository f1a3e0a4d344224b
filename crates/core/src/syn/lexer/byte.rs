use crate::syn::lexer::{Error, Lexer};
use crate::syn::token::{t, Token};

impl Lexer<'_> {
	/// Eat whitespace and `#…#` comments, counting newlines as they pass.
	pub(super) fn skip_whitespace(&mut self) {
		loop {
			match self.reader.peek() {
				Some(b' ' | b'\r' | b'\t') => {
					self.reader.next();
				}
				Some(b'\n') => {
					self.line += 1;
					self.reader.next();
				}
				Some(b'#') => {
					self.reader.next();
					self.eat_comment();
				}
				_ => return,
			}
		}
	}

	/// Eat a comment up to and including the closing `#`. An unterminated
	/// comment silently runs to the end of the source.
	fn eat_comment(&mut self) {
		loop {
			match self.reader.next() {
				Some(b'#') | None => return,
				Some(b'\n') => self.line += 1,
				Some(_) => {}
			}
		}
	}

	/// Lex the next token, starting from the given byte.
	pub(super) fn lex_byte(&mut self, byte: u8) -> Token {
		let kind = match byte {
			b'(' => t!("("),
			b')' => t!(")"),
			b'[' => t!("["),
			b']' => t!("]"),
			b',' => t!(","),
			b'.' => t!("."),
			b'+' => t!("+"),
			b'-' => t!("-"),
			b'*' => t!("*"),
			b'/' => t!("/"),
			b'^' => t!("^"),
			b'=' => match self.eat(b'=') {
				true => t!("=="),
				false => t!("="),
			},
			b'!' => match self.eat(b'=') {
				true => t!("!="),
				false => return self.invalid_token(Error::UnexpectedCharacter('!')),
			},
			b'<' => match self.eat(b'=') {
				true => t!("<="),
				false => t!("<"),
			},
			b'>' => match self.eat(b'=') {
				true => t!(">="),
				false => t!(">"),
			},
			b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.lex_ident(),
			b'0'..=b'9' => return self.lex_number(byte),
			quote @ (b'"' | b'\'') => return self.lex_strand(quote),
			x => return self.invalid_token(Error::UnexpectedCharacter(x as char)),
		};
		self.finish_token(kind)
	}
}
