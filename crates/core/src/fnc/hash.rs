use crate::err::Error;
use crate::rite::number::BigDecimal;
use crate::rite::value::Value;

/// A keyed djb2 hash over the textual form of any value.
///
/// The classic `h = h * 33 + byte` walk with wrapping 64-bit arithmetic,
/// XORed with the key. The result is read back as a signed machine
/// integer, so large hashes come out negative.
pub fn hash((data, key): (Value, BigDecimal)) -> Result<Value, Error> {
	let key = key.to_i64()?;
	let mut h: u64 = 5381;
	for byte in data.to_string().bytes() {
		h = (h << 5).wrapping_add(h).wrapping_add(byte as u64);
	}
	h ^= key as u64;
	Ok(Value::from(h as i64))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hashing_is_deterministic() {
		let a = hash((Value::from("abc"), BigDecimal::from(7))).unwrap();
		let b = hash((Value::from("abc"), BigDecimal::from(7))).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn the_key_perturbs_the_hash() {
		let a = hash((Value::from("abc"), BigDecimal::from(1))).unwrap();
		let b = hash((Value::from("abc"), BigDecimal::from(2))).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn known_djb2_value() {
		// djb2("a") = 5381 * 33 + 'a' = 177670
		let v = hash((Value::from("a"), BigDecimal::from(0))).unwrap();
		assert_eq!(v, Value::from(177670));
	}
}
