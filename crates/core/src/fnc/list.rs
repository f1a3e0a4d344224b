use crate::err::Error;
use crate::rite::list::List;
use crate::rite::value::Value;
use std::cmp::Ordering;

/// Sort a copy of the list. Values that cannot be ordered against each
/// other keep their relative position.
pub fn sort((list,): (List,)) -> Result<Value, Error> {
	let mut values = list.to_vec();
	values.sort_by(|a, b| match a.try_lt(b) {
		Ok(true) => Ordering::Less,
		_ => match b.try_lt(a) {
			Ok(true) => Ordering::Greater,
			_ => Ordering::Equal,
		},
	});
	Ok(Value::List(List::new(values)))
}

/// Remove duplicates, keeping the first occurrence of each value.
pub fn setify((list,): (List,)) -> Result<Value, Error> {
	let mut unique: Vec<Value> = Vec::new();
	for value in list.to_vec() {
		if !unique.iter().any(|u| u.equal(&value)) {
			unique.push(value);
		}
	}
	Ok(Value::List(List::new(unique)))
}

pub fn max(args: Vec<Value>) -> Result<Value, Error> {
	extreme("max", args, true)
}

pub fn min(args: Vec<Value>) -> Result<Value, Error> {
	extreme("min", args, false)
}

/// The shared min/max walk: accepts either a single list or any number of
/// loose arguments.
fn extreme(name: &str, args: Vec<Value>, want_max: bool) -> Result<Value, Error> {
	if args.is_empty() {
		return Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: String::from("The function expects at least 1 argument."),
		});
	}
	let values = match args.as_slice() {
		[Value::List(list)] => list.to_vec(),
		_ => args,
	};
	let mut values = values.into_iter();
	let Some(mut extreme) = values.next() else {
		return Err(Error::InvalidArguments {
			name: name.to_owned(),
			message: String::from("Cannot pick from an empty list."),
		});
	};
	for value in values {
		let beats = match want_max {
			true => extreme.try_lt(&value),
			false => value.try_lt(&extreme),
		};
		match beats {
			Ok(true) => extreme = value,
			Ok(false) => (),
			Err(_) => {
				return Err(Error::InvalidArguments {
					name: name.to_owned(),
					message: String::from(
						"The arguments are not comparable with each other (numbers or strings).",
					),
				})
			}
		}
	}
	Ok(extreme)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn num(i: i64) -> Value {
		Value::from(i)
	}

	#[test]
	fn sort_orders_numbers() {
		let out = sort((List::new(vec![num(3), num(1), num(2)]),)).unwrap();
		assert_eq!(out.to_string(), "[1, 2, 3]");
	}

	#[test]
	fn sort_does_not_mutate_the_input() {
		let input = List::new(vec![num(2), num(1)]);
		sort((input.clone(),)).unwrap();
		assert_eq!(Value::List(input).to_string(), "[2, 1]");
	}

	#[test]
	fn setify_keeps_first_occurrences() {
		let out = setify((List::new(vec![num(1), num(1), num(2), num(3), num(2)]),)).unwrap();
		assert_eq!(out.to_string(), "[1, 2, 3]");
	}

	#[test]
	fn min_max_accept_a_list_or_loose_arguments() {
		let list = List::new(vec![num(4), num(9), num(2)]);
		assert_eq!(max(vec![Value::List(list.clone())]).unwrap(), num(9));
		assert_eq!(min(vec![Value::List(list)]).unwrap(), num(2));
		assert_eq!(max(vec![num(1), num(5), num(3)]).unwrap(), num(5));
	}

	#[test]
	fn min_max_reject_incomparable_values() {
		assert!(matches!(
			max(vec![num(1), Value::from("a")]),
			Err(Error::InvalidArguments { .. })
		));
	}

	#[test]
	fn min_max_reject_empty_input() {
		assert!(matches!(max(Vec::new()), Err(Error::InvalidArguments { .. })));
		assert!(matches!(
			min(vec![Value::List(List::new(Vec::new()))]),
			Err(Error::InvalidArguments { .. })
		));
	}
}
