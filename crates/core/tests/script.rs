//! End-to-end scripts executed through the full pipeline: lexer, parser,
//! and evaluator, with output captured.

use pyrite_core::ctx::Context;
use pyrite_core::err::Error;
use pyrite_core::exe::Interpreter;
use pyrite_core::rite::BigDecimal;
use pyrite_core::syn;
use std::time::{Duration, Instant};

/// Run a script to completion and collect its output lines.
fn run(source: &str) -> Vec<String> {
	let script = syn::parse(source).expect("script should parse");
	let mut interpreter = Interpreter::capture();
	interpreter.interpret(&Context::background(), &script).expect("script should run");
	interpreter.take_output().lines().map(str::to_owned).collect()
}

/// Run a script expected to fail, returning its output and the error.
fn run_err(source: &str) -> (Vec<String>, Error) {
	let script = syn::parse(source).expect("script should parse");
	let mut interpreter = Interpreter::capture();
	let err = interpreter
		.interpret(&Context::background(), &script)
		.expect_err("script should fail");
	(interpreter.take_output().lines().map(str::to_owned).collect(), err)
}

#[test]
fn power_and_addition() {
	// S1
	let out = run("dec x = 2 dec y = 3 say(x^y+1)");
	assert_eq!(out, ["9"]);
}

#[test]
fn sort_and_setify() {
	// S2
	let out = run("list xs = [3,1,2] say(sort(xs)) say(setify([1,1,2,3,2]))");
	assert_eq!(out, ["[1, 2, 3]", "[1, 2, 3]"]);
}

#[test]
fn raise_and_catch() {
	// S3
	let out = run("try raise Exception('boom') catch e say(e) endtry");
	assert_eq!(out, ["<Exception: boom>"]);
}

#[test]
fn classes_fields_and_methods() {
	// S4
	let out = run("ins Point(dec x = 0, dec y = 0) contains \
	               def mag() do return (x*x + y*y) enddef endins \
	               dec p = new(Point) p.x = 3 p.y = 4 say(p.mag())");
	assert_eq!(out, ["25"]);
}

#[test]
fn square_root_precision() {
	// S5: |v*v - 2| < 10^-45
	let out = run("say(rt(2))");
	let v: BigDecimal = out[0].parse().unwrap();
	let two: BigDecimal = "2".parse().unwrap();
	let residue = (&(&v * &v) - &two).abs();
	let bound: BigDecimal = format!("0.{}1", "0".repeat(44)).parse().unwrap();
	assert!(residue < bound, "residue {residue}");
}

#[test]
fn swap_exchanges_typed_variables() {
	// S6
	let out = run("dec a = 1 dec b = 2 swap(a,b) say(a) say(b)");
	assert_eq!(out, ["2", "1"]);
}

#[test]
fn swap_falls_back_to_identity_clones() {
	let out = run("dec a = 1 str s = 'x' swap(a,s) say(a) say(s)");
	assert_eq!(out, ["x", "1"]);
}

#[test]
fn closures_observe_later_assignments() {
	// Lexical scope: the closure captures the defining environment.
	let out = run("dec x = 1 def get() do return x enddef x = 2 say(get())");
	assert_eq!(out, ["2"]);
}

#[test]
fn finally_runs_on_fall_through() {
	let out = run("try say('body') catch e say('caught') finally say('fin') endtry");
	assert_eq!(out, ["body", "fin"]);
}

#[test]
fn finally_runs_on_return() {
	let out = run("def f() do try return 7 catch e say('caught') finally say('fin') endtry enddef say(f())");
	assert_eq!(out, ["fin", "7"]);
}

#[test]
fn finally_runs_before_a_rethrow_from_catch() {
	let (out, err) = run_err(
		"try raise Exception('first') catch e raise Exception('second') finally say('fin') endtry",
	);
	assert_eq!(out, ["fin"]);
	match err {
		Error::Thrown(v) => assert_eq!(v.to_string(), "<Exception: second>"),
		e => panic!("unexpected error {e}"),
	}
}

#[test_log::test]
fn finally_runs_on_timeout_and_timeouts_are_uncatchable() {
	let source = "try while 1 do endwhile catch e say('caught') finally say('fin') endtry";
	let script = syn::parse(source).unwrap();
	let mut interpreter = Interpreter::capture();
	let err = interpreter
		.interpret(&Context::with_timeout(Duration::from_millis(10)), &script)
		.expect_err("should time out");
	assert!(err.is_timeout());
	let out = interpreter.take_output();
	assert_eq!(out.lines().collect::<Vec<_>>(), ["fin"]);
}

#[test_log::test]
fn the_deadline_stops_an_infinite_loop() {
	let script = syn::parse("while 1 do endwhile").unwrap();
	let mut interpreter = Interpreter::capture();
	let started = Instant::now();
	let err = interpreter
		.interpret(&Context::with_timeout(Duration::from_millis(10)), &script)
		.expect_err("should time out");
	assert!(err.is_timeout());
	assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn methods_mutate_their_instance_through_this() {
	let out = run("ins Counter(dec n = 0) contains \
	               def bump() do this.n = this.n + 1 enddef endins \
	               dec c = new(Counter) c.bump() c.bump() say(c.n)");
	assert_eq!(out, ["2"]);
}

#[test]
fn fields_shadow_methods_with_the_same_name() {
	let out = run("ins C(dec v = 1) contains def v() do return 99 enddef endins \
	               dec c = new(C) say(c.v)");
	assert_eq!(out, ["1"]);
}

#[test]
fn arity_and_defaults() {
	// (dec a, dec b = 2) accepts 1 or 2 arguments.
	let source = "def f(dec a, dec b = 2) do return a + b enddef";
	assert_eq!(run(&format!("{source} say(f(1))")), ["3"]);
	assert_eq!(run(&format!("{source} say(f(1, 5))")), ["6"]);
	let (_, err) = run_err(&format!("{source} f()"));
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::TooFewArguments { .. })));
	let (_, err) = run_err(&format!("{source} f(1, 2, 3)"));
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::TooManyArguments { .. })));
	let (_, err) = run_err(&format!("{source} f('s')"));
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::ParameterType { .. })));
}

#[test]
fn any_parameters_accept_every_type() {
	let source = "def id(any v) do return v enddef";
	assert_eq!(run(&format!("{source} say(id('s'))")), ["s"]);
	assert_eq!(run(&format!("{source} say(id(1))")), ["1"]);
	assert_eq!(run(&format!("{source} say(id([1, 2]))")), ["[1, 2]"]);
	assert_eq!(run(&format!("{source} say(id(nul))")), ["null"]);
}

#[test]
fn runtime_errors_become_catchable_exceptions() {
	let out = run("try say(1/0) catch e say(e) endtry");
	assert_eq!(out, ["<Exception: Division by zero>"]);
}

#[test]
fn uncaught_raises_carry_their_payload() {
	let (_, err) = run_err("raise 42");
	match err {
		Error::Thrown(v) => assert_eq!(v.to_string(), "42"),
		e => panic!("unexpected error {e}"),
	}
}

#[test]
fn declaration_coercions() {
	assert_eq!(run("dec n = '42' say(n + 1)"), ["43"]);
	assert_eq!(run("dec n = 0xff say(n)"), ["255"]);
	assert_eq!(run("dec n = nul say(n)"), ["0"]);
	assert_eq!(run("str s = 12.5 say(s + '!')"), ["12.5!"]);
	assert_eq!(run("bin b = '0x0a' say(b)"), ["0x0a"]);
	assert_eq!(run("bin b = nul say(b)"), ["0x00"]);
	assert_eq!(run("list xs = nul say(xs)"), ["[]"]);
	let (_, err) = run_err("dec n = 'nope'");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::NonNumericString(_))));
	let (_, err) = run_err("list xs = 5");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::ConvertTo { .. })));
}

#[test]
fn list_mutation_and_negative_indices() {
	assert_eq!(run("list xs = [1,2,3] xs[0] = 9 say(xs)"), ["[9, 2, 3]"]);
	assert_eq!(run("list xs = [1,2,3] say(xs[-1])"), ["3"]);
	let (_, err) = run_err("list xs = [1] say(xs[3])");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::IndexOutOfRange { .. })));
}

#[test]
fn list_aliases_share_storage() {
	let out = run("list xs = [1] list ys = xs ys[0] = 5 say(xs)");
	assert_eq!(out, ["[5]"]);
}

#[test]
fn binary_arithmetic_goes_through_numbers() {
	assert_eq!(run("say(0x0a + 1)"), ["11"]);
	assert_eq!(run("say(0x0a == 10)"), ["1"]);
	let (_, err) = run_err("say(0x01 + 0x02)");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::TryAdd(..))));
}

#[test]
fn division_keeps_fifty_fractional_digits() {
	assert_eq!(run("say(10/4)"), ["2.5"]);
	assert_eq!(run("say(1/3)"), [format!("0.{}", "3".repeat(50))]);
	let (_, err) = run_err("say(1/0)");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::DivisionByZero)));
}

#[test]
fn comparisons_yield_numbers() {
	assert_eq!(run("say(1 < 2) say(2 <= 2) say(3 > 4) say(1 == 1) say(1 != 1)"), [
		"1", "1", "0", "1", "0"
	]);
	assert_eq!(run("say('a' < 'b')"), ["1"]);
}

#[test]
fn while_finally_runs_once_after_the_loop() {
	let out = run("dec n = 0 while n < 3 do n = n + 1 finally say('done') endwhile say(n)");
	assert_eq!(out, ["done", "3"]);
}

#[test_log::test]
fn await_polls_until_truthy() {
	let out = run("dec t = countdown(0) await t() then say('ready') endawait");
	assert_eq!(out, ["ready"]);
}

#[test]
fn ask_reads_fed_input() {
	let script = syn::parse("str name = ask('who? ') say('hello ' + name)").unwrap();
	let mut interpreter = Interpreter::capture();
	interpreter.feed_input([String::from("luna")]);
	interpreter.interpret(&Context::background(), &script).unwrap();
	assert_eq!(interpreter.take_output(), "who? hello luna\n");
}

#[test]
fn scopes_nest_and_shadow() {
	let out = run("dec x = 1 if 1 then dec x = 2 say(x) endif say(x)");
	assert_eq!(out, ["2", "1"]);
}

#[test]
fn assignment_writes_through_to_outer_scopes() {
	let out = run("dec x = 1 if 1 then x = 5 endif say(x)");
	assert_eq!(out, ["5"]);
}

#[test]
fn undefined_names_are_reported_with_their_line() {
	let (_, err) = run_err("say(1)\nsay(missing)");
	match err {
		Error::At {
			line,
			source,
		} => {
			assert_eq!(line, 2);
			assert!(matches!(*source, Error::UndefinedVariable(_)));
		}
		e => panic!("unexpected error {e}"),
	}
}

#[test]
fn recursion_works_through_the_environment() {
	let out = run("def fact(dec n) do \
	               if n <= 1 then return 1 endif \
	               return n * fact(n - 1) \
	               enddef say(fact(20))");
	assert_eq!(out, ["2432902008176640000"]);
}

#[test]
fn bignum_survives_the_whole_pipeline() {
	let out = run("say(2^128)");
	assert_eq!(out, ["340282366920938463463374607431768211456"]);
}

#[test]
fn negative_powers_and_unary_minus() {
	assert_eq!(run("say(2^-2)"), ["0.25"]);
	assert_eq!(run("say(-3 + 1)"), ["-2"]);
	assert_eq!(run("say(0^0)"), ["1"]);
}

#[test]
fn strings_concatenate_with_numbers() {
	assert_eq!(run("say('n=' + 3.50)"), ["n=3.5"]);
	assert_eq!(run("say(1 + 'x')"), ["1x"]);
}

#[test]
fn list_repetition_clones_elements() {
	assert_eq!(run("list xs = [0] * 3 say(xs)"), ["[0, 0, 0]"]);
	assert_eq!(run("say([1, 2] * 2)"), ["[1, 2, 1, 2]"]);
	assert_eq!(run("say([1] * -1)"), ["[]"]);
}

#[test]
fn min_max_and_hash_natives() {
	assert_eq!(run("say(max([4, 9, 2])) say(min(4, 9, 2))"), ["9", "2"]);
	assert_eq!(run("say(hash('a', 0) == hash('a', 0))"), ["1"]);
	assert_eq!(run("say(abs(-4.5))"), ["4.5"]);
}

#[test]
fn exceptions_compare_by_payload() {
	assert_eq!(run("say(Exception('x') == Exception('x'))"), ["1"]);
	assert_eq!(run("say(Exception('x') == Exception('y'))"), ["0"]);
}

#[test]
fn undeclared_fields_cannot_be_set() {
	let (_, err) = run_err("ins P(dec x = 0) contains endins dec p = new(P) p.z = 1");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::UndeclaredField(_))));
	let (_, err) = run_err("ins P(dec x = 0) contains endins dec p = new(P) p.x = 'no'");
	assert!(matches!(err, Error::At { source, .. } if matches!(*source, Error::FieldType { .. })));
}
