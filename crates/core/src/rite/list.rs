use crate::err::Error;
use crate::rite::number::BigDecimal;
use crate::rite::value::Value;
use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// A list value: an ordered, heterogeneous sequence of values.
///
/// Lists are shared handles. Cloning a `List` clones the handle, so element
/// mutation through one alias is visible through every other, which is what
/// subscript assignment in the language relies on.
#[derive(Clone)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
	pub fn new(values: Vec<Value>) -> Self {
		List(Rc::new(RefCell::new(values)))
	}

	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	/// Copy out the element handles.
	pub fn to_vec(&self) -> Vec<Value> {
		self.0.borrow().clone()
	}

	/// Resolve an index, counting from the end when negative.
	fn locate(&self, index: &BigDecimal) -> Result<usize, Error> {
		if !index.is_integer() {
			return Err(Error::InvalidIndex(index.to_string()));
		}
		let len = self.len();
		let mut i = index.to_i64().map_err(|_| Error::InvalidIndex(index.to_string()))?;
		if i < 0 {
			i += len as i64;
		}
		match usize::try_from(i) {
			Ok(i) if i < len => Ok(i),
			_ => Err(Error::IndexOutOfRange {
				index: index.to_i64().unwrap_or_default(),
				len,
			}),
		}
	}

	pub fn get(&self, index: &BigDecimal) -> Result<Value, Error> {
		let i = self.locate(index)?;
		Ok(self.0.borrow()[i].clone())
	}

	pub fn set(&self, index: &BigDecimal, value: Value) -> Result<(), Error> {
		let i = self.locate(index)?;
		self.0.borrow_mut()[i] = value;
		Ok(())
	}

	/// A new list holding this list's elements followed by the other's.
	pub fn concat(&self, other: &List) -> List {
		let mut out = self.to_vec();
		out.extend(other.to_vec());
		List::new(out)
	}

	/// A new list repeating these elements `times` over, elements cloned.
	pub fn repeat(&self, times: i64) -> List {
		let mut out = Vec::new();
		for _ in 0..times.max(0) {
			for v in self.0.borrow().iter() {
				out.push(v.clone_value());
			}
		}
		List::new(out)
	}

	pub fn equal(&self, other: &List) -> bool {
		let a = self.0.borrow();
		let b = other.0.borrow();
		a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equal(y))
	}
}

impl PartialEq for List {
	fn eq(&self, other: &Self) -> bool {
		self.equal(other)
	}
}

impl Display for List {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("[")?;
		for (i, v) in self.0.borrow().iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			f.write_str(&v.repr())?;
		}
		f.write_str("]")
	}
}

impl fmt::Debug for List {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		// A list can contain itself, so print the length only.
		f.debug_tuple("List").field(&self.len()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn negative_indices_count_from_the_end() {
		let list = List::new(vec![Value::from(1), Value::from(2), Value::from(3)]);
		assert_eq!(list.get(&BigDecimal::from(-1)).unwrap(), Value::from(3));
		assert_eq!(list.get(&BigDecimal::from(0)).unwrap(), Value::from(1));
	}

	#[test]
	fn out_of_range_indices_fail() {
		let list = List::new(vec![Value::from(1)]);
		assert!(matches!(
			list.get(&BigDecimal::from(1)),
			Err(Error::IndexOutOfRange { .. })
		));
		assert!(matches!(
			list.get(&BigDecimal::from(-2)),
			Err(Error::IndexOutOfRange { .. })
		));
	}

	#[test]
	fn fractional_indices_fail() {
		let list = List::new(vec![Value::from(1)]);
		assert!(matches!(
			list.get(&"0.5".parse().unwrap()),
			Err(Error::InvalidIndex(_))
		));
	}

	#[test]
	fn mutation_is_visible_through_aliases() {
		let list = List::new(vec![Value::from(1)]);
		let alias = list.clone();
		list.set(&BigDecimal::from(0), Value::from(9)).unwrap();
		assert_eq!(alias.get(&BigDecimal::from(0)).unwrap(), Value::from(9));
	}

	#[test]
	fn display_uses_element_reprs() {
		let list = List::new(vec![Value::from(1), Value::from("two")]);
		assert_eq!(list.to_string(), "[1, 'two']");
	}
}
