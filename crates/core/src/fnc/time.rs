use crate::err::Error;
use crate::rite::number::BigDecimal;
use crate::rite::value::{Native, Value};
use std::time::{Duration, Instant};

/// Create a countdown timer.
///
/// Returns a zero-argument native callable which yields 0 until the given
/// number of seconds has elapsed, then 1. Scripts poll it with `await`.
pub fn countdown((secs,): (BigDecimal,)) -> Result<Value, Error> {
	let seconds = secs.to_i64()?.max(0) as u64;
	let end = Instant::now() + Duration::from_millis(seconds.saturating_mul(1000));
	Ok(Value::Native(Native::Timer(end)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn countdown_returns_a_timer() {
		let v = countdown((BigDecimal::from(0),)).unwrap();
		match v {
			Value::Native(Native::Timer(end)) => assert!(end <= Instant::now()),
			v => panic!("unexpected {v:?}"),
		}
	}

	#[test]
	fn negative_durations_clamp_to_now() {
		let v = countdown((BigDecimal::from(-5),)).unwrap();
		match v {
			Value::Native(Native::Timer(end)) => assert!(end <= Instant::now()),
			v => panic!("unexpected {v:?}"),
		}
	}
}
