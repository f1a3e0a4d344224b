use crate::err::Error;
use crate::rite::class::Instance;
use crate::rite::value::Value;

/// Wrap any value into an exception object.
pub fn exception((payload,): (Value,)) -> Result<Value, Error> {
	Ok(Value::Exception(Box::new(payload)))
}

/// Instantiate a class, initialising its fields from their defaults.
pub fn new((class,): (Value,)) -> Result<Value, Error> {
	match class {
		Value::Class(class) => Ok(Value::Instance(Instance::new(class))),
		v => Err(Error::InvalidArguments {
			name: String::from("new"),
			message: format!("The first argument must be a class, but found '{}'.", v.repr()),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exception_wraps_its_payload() {
		let e = exception((Value::from("boom"),)).unwrap();
		assert_eq!(e.to_string(), "<Exception: boom>");
	}

	#[test]
	fn new_rejects_non_classes() {
		assert!(matches!(
			new((Value::from(1),)),
			Err(Error::InvalidArguments { .. })
		));
	}
}
