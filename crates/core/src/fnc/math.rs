use crate::cnf;
use crate::err::Error;
use crate::rite::number::BigDecimal;
use crate::rite::value::Value;

pub fn abs((arg,): (BigDecimal,)) -> Result<Value, Error> {
	Ok(arg.abs().into())
}

/// The n-th root of a number, defaulting to the square root.
pub fn rt((arg, n): (BigDecimal, Option<BigDecimal>)) -> Result<Value, Error> {
	let n = n.unwrap_or_else(|| BigDecimal::from(2));
	Ok(arg.root(&n, cnf::DIVISION_PRECISION)?.into())
}

pub fn sin((arg,): (BigDecimal,)) -> Result<Value, Error> {
	coarse((arg.to_i64()? as f64).sin())
}

pub fn cos((arg,): (BigDecimal,)) -> Result<Value, Error> {
	coarse((arg.to_i64()? as f64).cos())
}

pub fn tan((arg,): (BigDecimal,)) -> Result<Value, Error> {
	coarse((arg.to_i64()? as f64).tan())
}

pub fn log((arg,): (BigDecimal,)) -> Result<Value, Error> {
	if arg <= BigDecimal::default() {
		return Err(Error::InvalidArguments {
			name: String::from("log"),
			message: String::from("The argument must be positive."),
		});
	}
	coarse((arg.to_i64()? as f64).ln())
}

/// Trigonometry works on the integer part of the argument and keeps six
/// fractional digits, matching the precision of the textual float form.
fn coarse(value: f64) -> Result<Value, Error> {
	let rendered = format!("{value:.6}");
	let parsed: BigDecimal = rendered.parse()?;
	Ok(parsed.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dec(s: &str) -> BigDecimal {
		s.parse().unwrap()
	}

	#[test]
	fn abs_strips_the_sign() {
		assert_eq!(abs((dec("-3.5"),)).unwrap(), Value::Number(dec("3.5")));
	}

	#[test]
	fn rt_defaults_to_the_square_root() {
		let v = match rt((dec("9"), None)).unwrap() {
			Value::Number(n) => n,
			v => panic!("unexpected {v:?}"),
		};
		assert!((&v * &v - dec("9")).abs() < dec("0.000000000000000000000000000000000000000000001"));
	}

	#[test]
	fn trig_uses_the_integer_part() {
		// sin(2.9) truncates to sin(2).
		assert_eq!(sin((dec("2.9"),)).unwrap(), sin((dec("2"),)).unwrap());
		assert_eq!(sin((dec("0"),)).unwrap(), Value::Number(dec("0")));
		assert_eq!(cos((dec("0"),)).unwrap(), Value::Number(dec("1")));
	}

	#[test]
	fn log_requires_a_positive_argument() {
		assert!(matches!(log((dec("0"),)), Err(Error::InvalidArguments { .. })));
		assert!(matches!(log((dec("-5"),)), Err(Error::InvalidArguments { .. })));
		assert_eq!(log((dec("1"),)).unwrap(), Value::Number(dec("0")));
	}
}
