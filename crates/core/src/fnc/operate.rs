//! Operator implementations, dispatched from expression evaluation.

use crate::err::Error;
use crate::rite::value::{TryAdd, TryDiv, TryMul, TryNeg, TryPow, TrySub, Value};

pub fn neg(a: Value) -> Result<Value, Error> {
	a.try_neg()
}

pub fn add(a: Value, b: Value) -> Result<Value, Error> {
	a.try_add(b)
}

pub fn sub(a: Value, b: Value) -> Result<Value, Error> {
	a.try_sub(b)
}

pub fn mul(a: Value, b: Value) -> Result<Value, Error> {
	a.try_mul(b)
}

pub fn div(a: Value, b: Value) -> Result<Value, Error> {
	a.try_div(b)
}

pub fn pow(a: Value, b: Value) -> Result<Value, Error> {
	a.try_pow(b)
}

pub fn equal(a: &Value, b: &Value) -> Result<Value, Error> {
	Ok(a.equal(b).into())
}

pub fn not_equal(a: &Value, b: &Value) -> Result<Value, Error> {
	Ok((!a.equal(b)).into())
}

pub fn less_than(a: &Value, b: &Value) -> Result<Value, Error> {
	Ok(a.try_lt(b)?.into())
}

pub fn less_than_or_equal(a: &Value, b: &Value) -> Result<Value, Error> {
	Ok((!b.try_lt(a)?).into())
}

pub fn more_than(a: &Value, b: &Value) -> Result<Value, Error> {
	Ok(b.try_lt(a)?.into())
}

pub fn more_than_or_equal(a: &Value, b: &Value) -> Result<Value, Error> {
	Ok((!a.try_lt(b)?).into())
}
