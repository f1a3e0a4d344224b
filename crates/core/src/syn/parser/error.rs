use crate::syn::error::{RenderedError, Snippet};
use crate::syn::token::Span;
use std::fmt;

/// The way in which a parse failed.
#[derive(Debug)]
pub enum ParseErrorKind {
	/// The parser encountered an unexpected token.
	Unexpected {
		found: &'static str,
		expected: &'static str,
	},
	/// The parser encountered the end of source where it expected more.
	UnexpectedEof {
		expected: &'static str,
	},
	/// The lexer produced an invalid token.
	InvalidToken(crate::syn::lexer::Error),
	/// A number literal failed to parse.
	InvalidNumber(String),
	/// A hex literal failed to parse.
	InvalidHex(String),
	/// Assignment to something that is not a variable, list element, or
	/// field.
	InvalidAssignmentTarget,
	/// A default parameter value must be a literal.
	InvalidDefault,
	/// Only the empty list `[]` is accepted as a list default.
	InvalidListDefault,
	/// More than the maximum number of parameters.
	TooManyParameters,
	/// More than the maximum number of call arguments.
	TooManyArguments,
	/// A class body may only contain method definitions.
	OnlyMethods,
	/// The source nests deeper than the parser accepts.
	ExceededDepthLimit,
}

impl fmt::Display for ParseErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unexpected {
				found,
				expected,
			} => write!(f, "Unexpected token {found}, expected {expected}"),
			Self::UnexpectedEof {
				expected,
			} => write!(f, "Unexpected end of file, expected {expected}"),
			Self::InvalidToken(e) => write!(f, "{e}"),
			Self::InvalidNumber(s) => write!(f, "Invalid number literal '{s}'"),
			Self::InvalidHex(s) => write!(f, "Invalid hex literal '{s}'"),
			Self::InvalidAssignmentTarget => {
				f.write_str("Assignment targets must be a variable, list element, or field")
			}
			Self::InvalidDefault => f.write_str(
				"Default parameter values must be literals (a number, string, hex, nul, or [])",
			),
			Self::InvalidListDefault => {
				f.write_str("Only the empty list [] is supported as a default parameter value")
			}
			Self::TooManyParameters => f.write_str("Functions cannot have more than 255 parameters"),
			Self::TooManyArguments => f.write_str("Calls cannot have more than 255 arguments"),
			Self::OnlyMethods => {
				f.write_str("Only method definitions (def) are allowed inside a class body")
			}
			Self::ExceededDepthLimit => f.write_str("The source nests too deeply"),
		}
	}
}

/// A parsing error with the span it occurred at.
#[derive(Debug)]
pub struct ParseError {
	pub kind: ParseErrorKind,
	pub span: Span,
}

impl ParseError {
	pub fn new(kind: ParseErrorKind, span: Span) -> Self {
		ParseError {
			kind,
			span,
		}
	}

	/// The 1-indexed line this error points at.
	pub fn line(&self) -> u32 {
		self.span.line
	}

	/// Render this error against the source it came from.
	pub fn render_on(&self, source: &str) -> RenderedError {
		let snippet =
			Snippet::from_source_range(source, self.span.offset as usize, self.span.len as usize);
		RenderedError {
			text: format!("Parse error: {}", self.kind),
			snippets: vec![snippet],
		}
	}
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "line {}: {}", self.span.line, self.kind)
	}
}
