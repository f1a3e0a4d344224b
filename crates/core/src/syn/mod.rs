//! Module containing the implementation of the PyRite tokens, lexer, and
//! parser.

pub mod common;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

use crate::rite::script::Script;
use parser::{ParseError, Parser};

/// Parse source text into a script.
///
/// All recoverable errors are collected in one pass; any error prevents
/// execution, so a non-empty error list means no script.
pub fn parse(input: &str) -> Result<Script, Vec<ParseError>> {
	tracing::debug!(bytes = input.len(), "parsing source");
	let mut parser = Parser::new(input);
	let (script, errors) = parser.parse_script();
	match errors.is_empty() {
		true => Ok(script),
		false => Err(errors),
	}
}

#[cfg(test)]
mod test {
	use super::parser::ParseErrorKind;
	use super::*;
	use crate::rite::expression::ExpressionKind;
	use crate::rite::operator::Operator;
	use crate::rite::statements::Statement;

	#[test]
	fn declarations_round_trip_through_display() {
		let script = parse("dec x = 2 str s list xs = [1, 2]").unwrap();
		let rendered = format!("{script}");
		assert_eq!(rendered, "dec x = 2\nstr s\nlist xs = [1, 2]");
	}

	#[test]
	fn power_binds_tighter_than_multiplication() {
		let script = parse("2 * 3 ^ 2").unwrap();
		let Statement::Value(expr) = &script[0] else {
			panic!("expected an expression statement");
		};
		let ExpressionKind::Binary {
			o: Operator::Mul,
			r,
			..
		} = &expr.kind
		else {
			panic!("expected the multiplication on top, got {expr}");
		};
		assert!(matches!(
			r.kind,
			ExpressionKind::Binary {
				o: Operator::Pow,
				..
			}
		));
	}

	#[test]
	fn power_is_left_associative() {
		let script = parse("2 ^ 3 ^ 2").unwrap();
		let Statement::Value(expr) = &script[0] else {
			panic!("expected an expression statement");
		};
		let ExpressionKind::Binary {
			o: Operator::Pow,
			l,
			..
		} = &expr.kind
		else {
			panic!("expected a power on top");
		};
		assert!(matches!(
			l.kind,
			ExpressionKind::Binary {
				o: Operator::Pow,
				..
			}
		));
	}

	#[test]
	fn assignment_is_right_associative_and_validated() {
		let script = parse("a = b = 1").unwrap();
		assert_eq!(format!("{script}"), "a = b = 1");
		let errors = parse("1 = 2").unwrap_err();
		assert!(matches!(errors[0].kind, ParseErrorKind::InvalidAssignmentTarget));
	}

	#[test]
	fn member_and_subscript_chains() {
		let script = parse("p.x = xs[0].y").unwrap();
		assert_eq!(format!("{script}"), "p.x = xs[0].y");
	}

	#[test]
	fn blocks_parse_and_round_trip() {
		let source = "if x > 1 then say(x) else say(0) endif";
		let script = parse(source).unwrap();
		assert_eq!(format!("{script}"), source);
		let source = "while n < 10 do n = n + 1 finally say(n) endwhile";
		let script = parse(source).unwrap();
		assert_eq!(format!("{script}"), source);
		let source = "try raise Exception('x') catch e say(e) finally say(1) endtry";
		let script = parse(source).unwrap();
		assert_eq!(format!("{script}"), source);
		let source = "await done() then say(1) endawait";
		let script = parse(source).unwrap();
		assert_eq!(format!("{script}"), source);
	}

	#[test]
	fn functions_and_classes_round_trip() {
		let source = "def f(dec a, dec b = 2) do return a + b enddef";
		let script = parse(source).unwrap();
		assert_eq!(format!("{script}"), source);
		let source = "ins Point(dec x = 0, dec y = 0) contains def mag() do return x * x + y * y enddef endins";
		let script = parse(source).unwrap();
		assert_eq!(format!("{script}"), source);
	}

	#[test]
	fn bare_return_before_a_block_closer() {
		let script = parse("def f() do return enddef").unwrap();
		assert_eq!(format!("{script}"), "def f() do return enddef");
	}

	#[test]
	fn class_bodies_only_accept_methods() {
		let errors = parse("ins C contains dec x = 1 endins").unwrap_err();
		assert!(matches!(errors[0].kind, ParseErrorKind::OnlyMethods));
	}

	#[test]
	fn multiple_errors_in_one_pass() {
		let errors = parse("dec = 3\nsay(").unwrap_err();
		assert_eq!(errors.len(), 2);
		assert_eq!(errors[0].line(), 1);
		assert_eq!(errors[1].line(), 2);
	}

	#[test]
	fn unterminated_strings_become_syntax_errors() {
		let errors = parse("say('abc)").unwrap_err();
		assert!(matches!(errors[0].kind, ParseErrorKind::InvalidToken(_)));
	}

	#[test]
	fn reserved_keywords_are_rejected() {
		assert!(parse("tense t").is_err());
		assert!(parse("mark spot").is_err());
		assert!(parse("jump spot").is_err());
	}

	#[test]
	fn parsing_stops_at_a_top_level_run_token() {
		let script = parse("dec x = 1 run()").unwrap();
		assert_eq!(script.len(), 1);
	}

	#[test]
	fn default_values_must_be_literals() {
		let errors = parse("def f(dec a = 1 + 2) do enddef").unwrap_err();
		assert!(!errors.is_empty());
		let errors = parse("def f(list a = [1]) do enddef").unwrap_err();
		assert!(matches!(errors[0].kind, ParseErrorKind::InvalidListDefault));
	}

	#[test]
	fn errors_render_with_a_snippet() {
		let errors = parse("dec x = @").unwrap_err();
		let rendered = errors[0].render_on("dec x = @").to_string();
		assert!(rendered.contains("dec x = @"), "{rendered}");
		assert!(rendered.contains('^'), "{rendered}");
	}
}
