/// A macro for requiring a certain token to be next, returning an error
/// otherwise.
macro_rules! expected {
	($parser:expr, $($kind:tt)*) => {{
		let token = $parser.next();
		match token.kind {
			$($kind)* => token,
			$crate::syn::token::TokenKind::Invalid => {
				let error = $parser.take_lexer_error();
				return Err($crate::syn::parser::ParseError::new(
					$crate::syn::parser::ParseErrorKind::InvalidToken(error),
					token.span,
				));
			}
			x => {
				let expected = $($kind)*.as_str();
				let kind = if let $crate::syn::token::TokenKind::Eof = x {
					$crate::syn::parser::ParseErrorKind::UnexpectedEof {
						expected,
					}
				} else {
					$crate::syn::parser::ParseErrorKind::Unexpected {
						found: x.as_str(),
						expected,
					}
				};
				return Err($crate::syn::parser::ParseError::new(kind, token.span));
			}
		}
	}};
}

/// A macro for indicating that the parser encountered a token which it
/// didn't expect.
macro_rules! unexpected {
	($parser:expr, $found:expr, $expected:expr) => {
		match $found {
			$crate::syn::token::TokenKind::Invalid => {
				let error = $parser.take_lexer_error();
				return Err($crate::syn::parser::ParseError::new(
					$crate::syn::parser::ParseErrorKind::InvalidToken(error),
					$parser.last_span(),
				));
			}
			$crate::syn::token::TokenKind::Eof => {
				return Err($crate::syn::parser::ParseError::new(
					$crate::syn::parser::ParseErrorKind::UnexpectedEof {
						expected: $expected,
					},
					$parser.last_span(),
				));
			}
			x => {
				return Err($crate::syn::parser::ParseError::new(
					$crate::syn::parser::ParseErrorKind::Unexpected {
						found: x.as_str(),
						expected: $expected,
					},
					$parser.last_span(),
				));
			}
		}
	};
}

pub(super) use expected;
pub(super) use unexpected;
