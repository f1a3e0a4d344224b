use crate::cnf;
use crate::err::Error;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter, Write};
use std::ops::{self, Neg};
use std::str::FromStr;

const CHUNK_BASE: u64 = 1_000_000_000;
const CHUNK_DIGITS: usize = 9;

/// An arbitrary-precision signed decimal number.
///
/// A value is a sign, a string of decimal digits, and a scale counting the
/// digits to the right of the implicit decimal point. Every constructor
/// normalizes, so two equal values always have the same representation: no
/// leading zeros in the integer part, no trailing zeros in the fraction,
/// and zero is always the positive `("0", 0)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BigDecimal {
	negative: bool,
	digits: String,
	scale: usize,
}

impl Default for BigDecimal {
	fn default() -> Self {
		BigDecimal {
			negative: false,
			digits: String::from("0"),
			scale: 0,
		}
	}
}

macro_rules! from_prim_ints {
	($($int: ty),*) => {
		$(
			impl From<$int> for BigDecimal {
				fn from(i: $int) -> Self {
					Self::from_integer(i as i64)
				}
			}
		)*
	};
}

from_prim_ints!(i8, i16, i32, i64, isize, u8, u16, u32);

impl FromStr for BigDecimal {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (negative, rest) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s),
		};
		let (int, frac) = match rest.split_once('.') {
			Some((int, frac)) => (int, Some(frac)),
			None => (rest, None),
		};
		let valid = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
		if !valid(int) || !frac.map(valid).unwrap_or(true) {
			return Err(Error::InvalidNumber(s.to_owned()));
		}
		let mut digits = Vec::with_capacity(rest.len());
		digits.extend_from_slice(int.as_bytes());
		if let Some(frac) = frac {
			digits.extend_from_slice(frac.as_bytes());
		}
		let scale = frac.map(str::len).unwrap_or(0);
		Ok(Self::from_raw(digits, negative, scale))
	}
}

impl Display for BigDecimal {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		if self.negative {
			f.write_char('-')?;
		}
		if self.scale == 0 {
			return f.write_str(&self.digits);
		}
		let split = self.digits.len() - self.scale;
		write!(f, "{}.{}", &self.digits[..split], &self.digits[split..])
	}
}

impl BigDecimal {
	fn from_integer(i: i64) -> Self {
		BigDecimal {
			negative: i < 0,
			digits: i.unsigned_abs().to_string(),
			scale: 0,
		}
	}

	/// The normalizing constructor every operation funnels through.
	fn from_raw(mut digits: Vec<u8>, negative: bool, mut scale: usize) -> Self {
		if digits.is_empty() || digits.iter().any(|b| !b.is_ascii_digit()) {
			return Self::default();
		}
		// Strip trailing zeros from the fractional part.
		while scale > 0 && digits.last() == Some(&b'0') {
			digits.pop();
			scale -= 1;
		}
		// Guarantee at least one integer digit.
		if digits.len() < scale + 1 {
			let pad = scale + 1 - digits.len();
			digits.splice(0..0, std::iter::repeat(b'0').take(pad));
		}
		// Strip leading zeros from the integer part.
		let int_len = digits.len() - scale;
		let strip = digits[..int_len - 1].iter().take_while(|b| **b == b'0').count();
		digits.drain(..strip);
		// The canonical zero is positive with no fraction.
		if digits.iter().all(|b| *b == b'0') {
			return Self::default();
		}
		BigDecimal {
			negative,
			// The bytes were checked to be ascii digits above.
			digits: String::from_utf8(digits).unwrap_or_else(|_| String::from("0")),
			scale,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.digits == "0"
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Whether this number has no fractional part.
	pub fn is_integer(&self) -> bool {
		self.scale == 0
	}

	/// The number of digits right of the decimal point.
	pub fn scale(&self) -> usize {
		self.scale
	}

	pub fn abs(&self) -> Self {
		BigDecimal {
			negative: false,
			..self.clone()
		}
	}

	/// The integer part of this number as a machine integer.
	///
	/// The fraction is truncated. Fails when the integer part does not fit.
	pub fn to_i64(&self) -> Result<i64, Error> {
		let int = &self.digits[..self.digits.len() - self.scale];
		let mut repr = String::with_capacity(int.len() + 1);
		if self.negative {
			repr.push('-');
		}
		repr.push_str(int);
		repr.parse().map_err(|_| Error::Overflow(self.to_string()))
	}

	// -----------------------------------
	// Magnitude helpers
	// -----------------------------------

	/// Align two digit strings to a common scale by padding the fraction.
	fn align(&self, other: &Self) -> (Vec<u8>, Vec<u8>, usize) {
		let scale = self.scale.max(other.scale);
		let mut a = self.digits.clone().into_bytes();
		a.resize(a.len() + scale - self.scale, b'0');
		let mut b = other.digits.clone().into_bytes();
		b.resize(b.len() + scale - other.scale, b'0');
		(a, b, scale)
	}

	/// Compare magnitudes, ignoring both signs.
	fn cmp_abs(&self, other: &Self) -> Ordering {
		let (a, b, scale) = self.align(other);
		let int_a = a.len() - scale;
		let int_b = b.len() - scale;
		match int_a.cmp(&int_b) {
			Ordering::Equal => a.cmp(&b),
			ordering => ordering,
		}
	}

	fn add_abs(a: &[u8], b: &[u8]) -> Vec<u8> {
		let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
		let mut carry = 0u8;
		let mut i = a.len();
		let mut j = b.len();
		while i > 0 || j > 0 || carry > 0 {
			let mut sum = carry;
			if i > 0 {
				i -= 1;
				sum += a[i] - b'0';
			}
			if j > 0 {
				j -= 1;
				sum += b[j] - b'0';
			}
			out.push(sum % 10 + b'0');
			carry = sum / 10;
		}
		out.reverse();
		out
	}

	/// Subtract magnitudes. The left side must be the larger one.
	fn sub_abs(a: &[u8], b: &[u8]) -> Vec<u8> {
		let mut out = vec![b'0'; a.len()];
		let mut borrow = 0i8;
		let mut j = b.len() as isize - 1;
		for i in (0..a.len()).rev() {
			let mut diff = (a[i] - b'0') as i8 - borrow;
			if j >= 0 {
				diff -= (b[j as usize] - b'0') as i8;
				j -= 1;
			}
			if diff < 0 {
				diff += 10;
				borrow = 1;
			} else {
				borrow = 0;
			}
			out[i] = diff as u8 + b'0';
		}
		out
	}

	// -----------------------------------
	// Chunked base-10^9 representation
	// -----------------------------------

	/// Split a digit string into little-endian base-10^9 limbs.
	fn to_chunks(digits: &str) -> Vec<u32> {
		let bytes = digits.as_bytes();
		let mut out = Vec::with_capacity(bytes.len() / CHUNK_DIGITS + 1);
		let mut end = bytes.len();
		while end > 0 {
			let start = end.saturating_sub(CHUNK_DIGITS);
			let mut limb = 0u32;
			for b in &bytes[start..end] {
				limb = limb * 10 + (b - b'0') as u32;
			}
			out.push(limb);
			end = start;
		}
		if out.is_empty() {
			out.push(0);
		}
		out
	}

	fn chunks_to_digits(mut limbs: Vec<u32>) -> Vec<u8> {
		while limbs.len() > 1 && limbs.last() == Some(&0) {
			limbs.pop();
		}
		let mut out = String::with_capacity(limbs.len() * CHUNK_DIGITS);
		// The most significant limb prints without padding.
		let _ = write!(out, "{}", limbs[limbs.len() - 1]);
		for limb in limbs.iter().rev().skip(1) {
			let _ = write!(out, "{limb:09}");
		}
		out.into_bytes()
	}

	/// Multiply two limb vectors with 64-bit intermediate products.
	fn chunk_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
		if matches!(a, [0]) || matches!(b, [0]) {
			return vec![0];
		}
		let mut out = vec![0u32; a.len() + b.len()];
		for i in 0..a.len() {
			let mut carry = 0u64;
			for j in 0..b.len() {
				let p = a[i] as u64 * b[j] as u64 + out[i + j] as u64 + carry;
				out[i + j] = (p % CHUNK_BASE) as u32;
				carry = p / CHUNK_BASE;
			}
			if carry > 0 {
				out[i + b.len()] += carry as u32;
			}
		}
		while out.len() > 1 && out.last() == Some(&0) {
			out.pop();
		}
		out
	}

	// -----------------------------------
	// Fallible arithmetic
	// -----------------------------------

	/// Long division truncated at [`cnf::DIVISION_PRECISION`] fractional
	/// digits.
	pub fn try_div(&self, other: &Self) -> Result<Self, Error> {
		if other.is_zero() {
			return Err(Error::DivisionByZero);
		}
		// Aligning to a common scale turns both sides into integers.
		let (mut a, b, _) = self.align(other);
		// Extend the dividend so the quotient keeps the full precision.
		a.resize(a.len() + cnf::DIVISION_PRECISION, b'0');
		// Strip any representation zeros off the divisor.
		let strip = b.iter().take_while(|x| **x == b'0').count().min(b.len() - 1);
		let b = &b[strip..];
		let mut quotient = Vec::with_capacity(a.len());
		let mut rem: Vec<u8> = Vec::new();
		for digit in a {
			if !(rem.is_empty() && digit == b'0') {
				rem.push(digit);
			}
			let mut q = b'0';
			while cmp_digits(&rem, b) != Ordering::Less {
				let diff = Self::sub_abs(&rem, b);
				rem = diff.into_iter().skip_while(|x| *x == b'0').collect();
				q += 1;
			}
			quotient.push(q);
		}
		Ok(Self::from_raw(
			quotient,
			self.negative != other.negative,
			cnf::DIVISION_PRECISION,
		))
	}

	/// Raise this number to an integer power by repeated squaring on the
	/// chunked representation.
	pub fn try_pow(&self, exp: &Self) -> Result<Self, Error> {
		if !exp.is_integer() {
			return Err(Error::NonIntegerExponent(exp.to_string()));
		}
		let e = exp.to_i64()?;
		if e == 0 {
			return Ok(BigDecimal::from(1));
		}
		if self.is_zero() {
			return Ok(BigDecimal::default());
		}
		let k = e.unsigned_abs();
		let mut base = Self::to_chunks(&self.digits);
		let mut acc = vec![1u32];
		let mut n = k;
		while n > 0 {
			if n & 1 == 1 {
				acc = Self::chunk_mul(&acc, &base);
			}
			base = Self::chunk_mul(&base, &base);
			n >>= 1;
		}
		let scale = self
			.scale
			.checked_mul(k as usize)
			.ok_or_else(|| Error::Overflow(exp.to_string()))?;
		let negative = self.negative && k % 2 == 1;
		let result = Self::from_raw(Self::chunks_to_digits(acc), negative, scale);
		match e < 0 {
			true => BigDecimal::from(1).try_div(&result),
			false => Ok(result),
		}
	}

	/// The real n-th root of this number, by Newton iteration.
	///
	/// The sign of the result follows the radicand. Fails for even roots of
	/// negative numbers and for non-positive degrees.
	pub fn root(&self, n: &Self, precision: usize) -> Result<Self, Error> {
		if self.negative && n.to_i64()? % 2 == 0 {
			return Err(Error::EvenRootOfNegative(self.to_string()));
		}
		if *n <= BigDecimal::default() {
			return Err(Error::NonPositiveRoot(n.to_string()));
		}
		let num = self.abs();
		let mut x = num.try_div(n)?;
		if x.is_zero() {
			x = BigDecimal::from(1);
		}
		let n_minus_1 = n - &BigDecimal::from(1);
		let limit = Self::from_raw(vec![b'1'], false, precision + cnf::ROOT_GUARD_DIGITS);
		for _ in 0..cnf::ROOT_ITERATIONS {
			let x_pow_nm1 = x.try_pow(&n_minus_1)?;
			let f_x = &x.try_pow(n)? - &num;
			let f_prime = n * &x_pow_nm1;
			if f_prime.is_zero() {
				break;
			}
			let delta = f_x.try_div(&f_prime)?;
			x = &x - &delta;
			if delta.abs() < limit {
				break;
			}
		}
		if self.negative && !x.is_zero() {
			x.negative = true;
		}
		Ok(x)
	}
}

/// Compare two magnitude digit slices without leading zeros.
fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
	match a.len().cmp(&b.len()) {
		Ordering::Equal => a.cmp(b),
		ordering => ordering,
	}
}

impl<'b> ops::Add<&'b BigDecimal> for &BigDecimal {
	type Output = BigDecimal;
	fn add(self, other: &'b BigDecimal) -> BigDecimal {
		let (a, b, scale) = self.align(other);
		if self.negative == other.negative {
			return BigDecimal::from_raw(BigDecimal::add_abs(&a, &b), self.negative, scale);
		}
		match self.cmp_abs(other) {
			Ordering::Less => {
				BigDecimal::from_raw(BigDecimal::sub_abs(&b, &a), other.negative, scale)
			}
			_ => BigDecimal::from_raw(BigDecimal::sub_abs(&a, &b), self.negative, scale),
		}
	}
}

impl<'b> ops::Sub<&'b BigDecimal> for &BigDecimal {
	type Output = BigDecimal;
	fn sub(self, other: &'b BigDecimal) -> BigDecimal {
		self + &-other
	}
}

impl<'b> ops::Mul<&'b BigDecimal> for &BigDecimal {
	type Output = BigDecimal;
	fn mul(self, other: &'b BigDecimal) -> BigDecimal {
		let limbs = BigDecimal::chunk_mul(
			&BigDecimal::to_chunks(&self.digits),
			&BigDecimal::to_chunks(&other.digits),
		);
		BigDecimal::from_raw(
			BigDecimal::chunks_to_digits(limbs),
			self.negative != other.negative,
			self.scale + other.scale,
		)
	}
}

macro_rules! impl_owned_op {
	($trt:ident, $fn:ident) => {
		impl ops::$trt for BigDecimal {
			type Output = BigDecimal;
			fn $fn(self, other: BigDecimal) -> BigDecimal {
				(&self).$fn(&other)
			}
		}
	};
}

impl_owned_op!(Add, add);
impl_owned_op!(Sub, sub);
impl_owned_op!(Mul, mul);

impl Neg for &BigDecimal {
	type Output = BigDecimal;
	fn neg(self) -> BigDecimal {
		match self.is_zero() {
			true => BigDecimal::default(),
			false => BigDecimal {
				negative: !self.negative,
				..self.clone()
			},
		}
	}
}

impl Neg for BigDecimal {
	type Output = BigDecimal;
	fn neg(self) -> BigDecimal {
		-&self
	}
}

impl Ord for BigDecimal {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			(false, false) => self.cmp_abs(other),
			(true, true) => other.cmp_abs(self),
		}
	}
}

impl PartialOrd for BigDecimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dec(s: &str) -> BigDecimal {
		s.parse().unwrap()
	}

	#[test]
	fn parse_normalizes() {
		assert_eq!(dec("1.20").to_string(), "1.2");
		assert_eq!(dec("-0.0").to_string(), "0");
		assert_eq!(dec("007").to_string(), "7");
		assert_eq!(dec("0.500").to_string(), "0.5");
		assert_eq!(dec("-12.340").to_string(), "-12.34");
		assert_eq!(dec("0").to_string(), "0");
	}

	#[test]
	fn parse_rejects_malformed_input() {
		for s in ["", "-", "1.", ".5", "1.2.3", "1e5", "+1", "--2", "12a"] {
			assert!(s.parse::<BigDecimal>().is_err(), "accepted {s:?}");
		}
	}

	#[test]
	fn parse_round_trips() {
		for s in ["0", "1", "-1", "3.14159", "-0.001", "123456789123456789.000000001"] {
			assert_eq!(dec(s).to_string(), s);
			assert_eq!(dec(&dec(s).to_string()), dec(s));
		}
	}

	#[test]
	fn addition_handles_signs() {
		assert_eq!(dec("1.5") + dec("2.7"), dec("4.2"));
		assert_eq!(dec("-1.5") + dec("-2.5"), dec("-4"));
		assert_eq!(dec("5") + dec("-3"), dec("2"));
		assert_eq!(dec("3") + dec("-5"), dec("-2"));
		assert_eq!(dec("2.5") + dec("-2.5"), dec("0"));
	}

	#[test]
	fn subtraction_borrows_across_scales() {
		assert_eq!(dec("10") - dec("0.001"), dec("9.999"));
		assert_eq!(dec("1") - dec("2"), dec("-1"));
		assert_eq!(dec("-1") - dec("-1"), dec("0"));
	}

	#[test]
	fn multiplication_uses_chunks() {
		assert_eq!(dec("12") * dec("12"), dec("144"));
		assert_eq!(dec("1.5") * dec("-2"), dec("-3"));
		assert_eq!(dec("0.1") * dec("0.1"), dec("0.01"));
		assert_eq!(dec("0") * dec("123456"), dec("0"));
		// Products straddling several base-10^9 limbs.
		assert_eq!(
			dec("123456789123456789") * dec("987654321987654321"),
			dec("121932631356500531347203169112635269")
		);
	}

	#[test]
	fn division_truncates_at_fifty_digits() {
		let third = dec("1").try_div(&dec("3")).unwrap();
		assert_eq!(third.to_string(), format!("0.{}", "3".repeat(50)));
		assert!(third.scale() <= 50);
		assert_eq!(dec("10").try_div(&dec("4")).unwrap(), dec("2.5"));
		assert_eq!(dec("-9").try_div(&dec("3")).unwrap(), dec("-3"));
	}

	#[test]
	fn division_satisfies_the_truncation_bound() {
		let a = dec("355");
		let b = dec("113");
		let q = a.try_div(&b).unwrap();
		let residue = (&a - &(&q * &b)).abs();
		let bound = &b * &dec(&format!("0.{}1", "0".repeat(48)));
		assert!(residue < bound, "residue {residue} exceeds {bound}");
	}

	#[test]
	fn division_by_zero_fails() {
		assert!(matches!(dec("1").try_div(&dec("0")), Err(Error::DivisionByZero)));
	}

	#[test]
	fn tiny_quotients_truncate_to_zero() {
		let q = dec("1").try_div(&dec(&format!("1{}", "0".repeat(60)))).unwrap();
		assert_eq!(q, dec("0"));
	}

	#[test]
	fn power_follows_sign_parity() {
		assert_eq!(dec("2").try_pow(&dec("10")).unwrap(), dec("1024"));
		assert_eq!(dec("-2").try_pow(&dec("3")).unwrap(), dec("-8"));
		assert_eq!(dec("-2").try_pow(&dec("4")).unwrap(), dec("16"));
		assert_eq!(dec("9").try_pow(&dec("0")).unwrap(), dec("1"));
		assert_eq!(dec("0").try_pow(&dec("0")).unwrap(), dec("1"));
		assert_eq!(dec("0").try_pow(&dec("5")).unwrap(), dec("0"));
	}

	#[test]
	fn power_scales_the_fraction() {
		assert_eq!(dec("0.5").try_pow(&dec("3")).unwrap(), dec("0.125"));
		assert_eq!(dec("1.1").try_pow(&dec("2")).unwrap(), dec("1.21"));
	}

	#[test]
	fn negative_exponents_invert() {
		assert_eq!(dec("2").try_pow(&dec("-2")).unwrap(), dec("0.25"));
		assert_eq!(dec("10").try_pow(&dec("-3")).unwrap(), dec("0.001"));
	}

	#[test]
	fn non_integer_exponents_fail() {
		assert!(matches!(
			dec("2").try_pow(&dec("1.5")),
			Err(Error::NonIntegerExponent(_))
		));
	}

	#[test]
	fn root_converges() {
		// |root(x, n)^n - x| < x * 10^-45
		for (x, n) in [("2", "2"), ("10", "3"), ("123456.789", "5"), ("0.25", "2")] {
			let x = dec(x);
			let n = dec(n);
			let r = x.root(&n, 50).unwrap();
			let residue = (&r.try_pow(&n).unwrap() - &x).abs();
			let bound = &x * &dec(&format!("0.{}1", "0".repeat(44)));
			assert!(residue < bound, "root({x}, {n}) residue {residue}");
		}
	}

	#[test]
	fn odd_roots_of_negatives_keep_the_sign() {
		let r = dec("-8").root(&dec("3"), 50).unwrap();
		assert!(r.is_negative());
		assert!((&r.try_pow(&dec("3")).unwrap() - &dec("-8")).abs() < dec("0.00001"));
	}

	#[test]
	fn invalid_roots_fail() {
		assert!(matches!(
			dec("-4").root(&dec("2"), 50),
			Err(Error::EvenRootOfNegative(_))
		));
		assert!(matches!(dec("4").root(&dec("0"), 50), Err(Error::NonPositiveRoot(_))));
		assert!(matches!(dec("4").root(&dec("-2"), 50), Err(Error::NonPositiveRoot(_))));
	}

	#[test]
	fn machine_integer_conversion() {
		assert_eq!(dec("42").to_i64().unwrap(), 42);
		assert_eq!(dec("-42.9").to_i64().unwrap(), -42);
		assert_eq!(dec("9223372036854775807").to_i64().unwrap(), i64::MAX);
		assert!(matches!(
			dec("9223372036854775808").to_i64(),
			Err(Error::Overflow(_))
		));
	}

	#[test]
	fn total_order() {
		let mut values = vec![dec("1"), dec("-2"), dec("0"), dec("1.5"), dec("-0.5")];
		values.sort();
		let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
		assert_eq!(rendered, ["-2", "-0.5", "0", "1", "1.5"]);
		assert!(dec("0.2") < dec("0.12345678901234567890123456789012345678901234567891") + dec("0.1"));
	}
}
