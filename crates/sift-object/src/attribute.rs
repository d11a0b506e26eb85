// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{ObjectError, Result};
use crate::value::AttributeValue;

/// A named attribute with an ordered list of values.
///
/// Names are matched case-insensitively; the original spelling is kept for
/// display.
#[derive(Debug, Clone)]
pub struct Attribute {
	name: String,
	values: Vec<AttributeValue>,
}

impl Attribute {
	/// Creates an attribute; the name must not be blank.
	pub fn new<I, V>(name: impl Into<String>, values: I) -> Result<Self>
	where
		I: IntoIterator<Item = V>,
		V: Into<AttributeValue>,
	{
		let name = name.into();
		if name.trim().is_empty() {
			return Err(ObjectError::BlankName);
		}
		Ok(Self {
			name,
			values: values.into_iter().map(Into::into).collect(),
		})
	}

	/// Creates an attribute holding exactly one value.
	pub fn single(name: impl Into<String>, value: impl Into<AttributeValue>) -> Result<Self> {
		Self::new(name, [value.into()])
	}

	/// Creates an attribute holding no values.
	pub fn empty(name: impl Into<String>) -> Result<Self> {
		Self::new(name, Vec::<AttributeValue>::new())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn values(&self) -> &[AttributeValue] {
		&self.values
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Whether this attribute carries `name`, ignoring case.
	pub fn is(&self, name: &str) -> bool {
		fold(&self.name) == fold(name)
	}

	/// Appends a value.
	pub fn with_value(mut self, value: impl Into<AttributeValue>) -> Self {
		self.values.push(value.into());
		self
	}

	/// The only value of the attribute, `None` when it holds no values.
	pub fn single_value(&self) -> Result<Option<&AttributeValue>> {
		match self.values.as_slice() {
			[] => Ok(None),
			[value] => Ok(Some(value)),
			values => Err(ObjectError::NotSingleValue {
				name: self.name.clone(),
				count: values.len(),
			}),
		}
	}

	/// The only value as a string slice, `None` when absent or not a string.
	pub fn string_value(&self) -> Result<Option<&str>> {
		Ok(self.single_value()?.and_then(AttributeValue::as_str))
	}
}

/// Case-folds an attribute name for lookups.
pub(crate) fn fold(name: &str) -> String {
	name.to_lowercase()
}

impl PartialEq for Attribute {
	fn eq(&self, other: &Self) -> bool {
		self.is(&other.name) && self.values == other.values
	}
}

impl Eq for Attribute {}

impl Hash for Attribute {
	fn hash<H: Hasher>(&self, state: &mut H) {
		fold(&self.name).hash(state);
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}=[", self.name)?;
		for (idx, value) in self.values.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{value}")?;
		}
		f.write_str("]")
	}
}
