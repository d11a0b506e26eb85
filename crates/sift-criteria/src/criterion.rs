// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::hash::{Hash, Hasher};

use sift_filter::{Filter, FilterError};
use sift_object::{Attribute, AttributeSource, AttributeValue, ObjectError};

use crate::error::Result;
use crate::operator::Operator;

/// One `(name, value, operator)` test.
///
/// The value is checked against the operator on construction, so a built
/// criterion always evaluates.
#[derive(Debug, Clone)]
pub struct Criterion {
	name: String,
	value: AttributeValue,
	operator: Operator,
	filter: Filter,
}

impl Criterion {
	pub fn new(
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
		operator: Operator,
	) -> Result<Self> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(FilterError::from(ObjectError::BlankName).into());
		}
		let value = value.into();
		let filter = build_filter(&name, &value, operator)?;
		Ok(Self {
			name,
			value,
			operator,
			filter,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &AttributeValue {
		&self.value
	}

	pub fn operator(&self) -> Operator {
		self.operator
	}

	/// The equivalent filter. Negated operators wrap the positive filter
	/// in `Not`.
	pub fn to_filter(&self) -> &Filter {
		&self.filter
	}

	pub fn matches<S: AttributeSource + ?Sized>(&self, source: &S) -> bool {
		self.filter.accept(source)
	}
}

fn build_filter(name: &str, value: &AttributeValue, operator: Operator) -> Result<Filter> {
	let attribute = Attribute::single(name, value.clone()).map_err(FilterError::from)?;
	let filter = match operator {
		Operator::Equal => Filter::equal(attribute),
		Operator::NotEqual => Filter::not(Filter::equal(attribute)),
		Operator::LessEqual => Filter::less_than_or_equal(attribute)?,
		Operator::LessThan => Filter::less_than(attribute)?,
		Operator::GreaterThan => Filter::greater_than(attribute)?,
		Operator::GreaterEqual => Filter::greater_than_or_equal(attribute)?,
		Operator::Contains => Filter::contains(attribute, false)?,
		Operator::NotContains => Filter::not(Filter::contains(attribute, false)?),
		Operator::StartsWith => Filter::starts_with(attribute, false)?,
		Operator::NotStartsWith => Filter::not(Filter::starts_with(attribute, false)?),
		Operator::EndsWith => Filter::ends_with(attribute, false)?,
		Operator::NotEndsWith => Filter::not(Filter::ends_with(attribute, false)?),
	};
	Ok(filter)
}

// The filter is derived from the other fields.
impl PartialEq for Criterion {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.value == other.value && self.operator == other.operator
	}
}

impl Eq for Criterion {}

impl Hash for Criterion {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
		self.value.hash(state);
		self.operator.hash(state);
	}
}

impl fmt::Display for Criterion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.name, self.operator, self.value)
	}
}
