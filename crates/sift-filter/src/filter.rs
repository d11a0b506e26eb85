// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use sift_object::{Attribute, AttributeSource, AttributeValue, ObjectError, Record};
use tracing::{debug, trace};

use crate::error::{FilterError, Result};
use crate::render::ExpressionRenderer;
use crate::tag::FilterTag;

/// A predicate over an [`AttributeSource`] or a [`Record`].
///
/// Logical variants compose other filters; every other variant tests one
/// attribute. Filters are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
	And(Composite),
	Or(Composite),
	Not(Box<Filter>),
	Presence(Presence),
	Equals(Equals),
	ContainsAll(ContainsAll),
	Contains(StringFilter),
	StartsWith(StringFilter),
	EndsWith(StringFilter),
	GreaterThan(Comparison),
	GreaterThanOrEqual(Comparison),
	LessThan(Comparison),
	LessThanOrEqual(Comparison),
}

/// Which logical operator a [`Composite`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
	And,
	Or,
}

/// Ordered, non-empty children of an `And` or `Or` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
	junction: Junction,
	filters: Vec<Filter>,
}

impl Composite {
	pub(crate) fn new(junction: Junction, filters: Vec<Filter>) -> Result<Self> {
		if filters.is_empty() {
			return Err(FilterError::EmptyComposite);
		}
		Ok(Self { junction, filters })
	}

	pub fn junction(&self) -> Junction {
		self.junction
	}

	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}

	/// The first child.
	pub fn lhs(&self) -> &Filter {
		&self.filters[0]
	}

	/// The second child when there are exactly two, otherwise a composite of
	/// the same junction over every child after the first. `None` when the
	/// composite has a single child.
	pub fn rhs(&self) -> Option<Cow<'_, Filter>> {
		match self.filters.len() {
			0 | 1 => None,
			2 => Some(Cow::Borrowed(&self.filters[1])),
			_ => {
				let tail = Composite {
					junction: self.junction,
					filters: self.filters[1..].to_vec(),
				};
				Some(Cow::Owned(tail.into_filter()))
			}
		}
	}

	fn into_filter(self) -> Filter {
		match self.junction {
			Junction::And => Filter::And(self),
			Junction::Or => Filter::Or(self),
		}
	}
}

/// Matches when the named attribute is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
	name: String,
}

impl Presence {
	pub fn name(&self) -> &str {
		&self.name
	}

	fn accept<S: AttributeSource + ?Sized>(&self, source: &S) -> bool {
		source
			.get(&self.name)
			.map(|attribute| !attribute.is_empty())
			.unwrap_or(false)
	}
}

/// Matches when the target's value list equals the filter attribute's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equals {
	attribute: Attribute,
}

impl Equals {
	pub fn attribute(&self) -> &Attribute {
		&self.attribute
	}

	fn accept<S: AttributeSource + ?Sized>(&self, source: &S) -> bool {
		source
			.get(self.attribute.name())
			.map(|target| target.values() == self.attribute.values())
			.unwrap_or(false)
	}

	fn accept_record(&self, record: &Record) -> bool {
		match (self.attribute.values().first(), record.get(self.attribute.name())) {
			(Some(expected), Some(field)) => expected == field,
			_ => false,
		}
	}
}

/// Matches when the target holds every value of the filter attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAll {
	attribute: Attribute,
}

impl ContainsAll {
	pub fn attribute(&self) -> &Attribute {
		&self.attribute
	}

	fn accept<S: AttributeSource + ?Sized>(&self, source: &S) -> bool {
		source
			.get(self.attribute.name())
			.map(|target| {
				self.attribute
					.values()
					.iter()
					.all(|value| target.values().contains(value))
			})
			.unwrap_or(false)
	}

	fn accept_record(&self, record: &Record) -> bool {
		record
			.get(self.attribute.name())
			.map(|field| self.attribute.values().iter().all(|value| value == field))
			.unwrap_or(false)
	}
}

/// Substring test shared by `Contains`, `StartsWith` and `EndsWith`.
///
/// `case_ignore` is advice for visitors and translators. In-memory matching
/// is always case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringFilter {
	attribute: Attribute,
	value: String,
	case_ignore: bool,
}

impl StringFilter {
	fn new(attribute: Attribute, case_ignore: bool) -> Result<Self> {
		let value = match single(&attribute)? {
			AttributeValue::String(s) => s.clone(),
			other => {
				return Err(FilterError::NotString {
					name: attribute.name().to_string(),
					kind: other.kind(),
				})
			}
		};
		Ok(Self {
			attribute,
			value,
			case_ignore,
		})
	}

	pub fn attribute(&self) -> &Attribute {
		&self.attribute
	}

	pub fn name(&self) -> &str {
		self.attribute.name()
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn case_ignore(&self) -> bool {
		self.case_ignore
	}

	fn target<'a, S: AttributeSource + ?Sized>(&self, source: &'a S) -> Option<&'a str> {
		let attribute = source.get(self.attribute.name())?;
		match attribute.string_value() {
			Ok(value) => value,
			Err(e) => {
				debug!(error = %e, "string filter skipped multi-valued attribute");
				None
			}
		}
	}

	fn accept<S, F>(&self, source: &S, test: F) -> bool
	where
		S: AttributeSource + ?Sized,
		F: Fn(&str, &str) -> bool,
	{
		self.target(source)
			.map(|target| test(target, &self.value))
			.unwrap_or(false)
	}

	fn accept_record<F>(&self, record: &Record, test: F) -> bool
	where
		F: Fn(&str, &str) -> bool,
	{
		record
			.get(self.attribute.name())
			.and_then(AttributeValue::as_str)
			.map(|target| test(target, &self.value))
			.unwrap_or(false)
	}
}

/// Ordering test shared by the four comparison variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
	attribute: Attribute,
	value: AttributeValue,
}

impl Comparison {
	fn new(attribute: Attribute) -> Result<Self> {
		let value = single(&attribute)?.clone();
		if !value.is_comparable() {
			return Err(FilterError::NotComparable {
				name: attribute.name().to_string(),
				kind: value.kind(),
			});
		}
		Ok(Self { attribute, value })
	}

	pub fn attribute(&self) -> &Attribute {
		&self.attribute
	}

	pub fn name(&self) -> &str {
		self.attribute.name()
	}

	pub fn value(&self) -> &AttributeValue {
		&self.value
	}

	/// Orders the target's value against the filter value.
	///
	/// A missing or empty attribute orders as `Less`. `None` when the target
	/// is multi-valued or of a kind with no ordering against the filter value.
	pub fn compare<S: AttributeSource + ?Sized>(&self, source: &S) -> Option<Ordering> {
		let Some(target) = source.get(self.attribute.name()) else {
			return Some(Ordering::Less);
		};
		match target.single_value() {
			Ok(None) => Some(Ordering::Less),
			Ok(Some(value)) => value.compare(&self.value),
			Err(_) => None,
		}
	}

	fn accept<S, F>(&self, source: &S, test: F) -> bool
	where
		S: AttributeSource + ?Sized,
		F: Fn(Ordering) -> bool,
	{
		let present = source
			.get(self.attribute.name())
			.map(|attribute| !attribute.is_empty())
			.unwrap_or(false);
		if !present {
			return false;
		}
		match self.compare(source) {
			Some(ordering) => test(ordering),
			None => {
				debug!(
					attribute = self.attribute.name(),
					kind = %self.value.kind(),
					"comparison has no ordering for target value"
				);
				false
			}
		}
	}

	fn accept_record<F>(&self, record: &Record, test: F) -> bool
	where
		F: Fn(Ordering) -> bool,
	{
		record
			.get(self.attribute.name())
			.and_then(|field| field.compare(&self.value))
			.map(test)
			.unwrap_or(false)
	}
}

fn single(attribute: &Attribute) -> Result<&AttributeValue> {
	match attribute.values() {
		[value] => Ok(value),
		values => Err(FilterError::NotSingleValue {
			name: attribute.name().to_string(),
			count: values.len(),
		}),
	}
}

fn contains(target: &str, value: &str) -> bool {
	target.contains(value)
}

fn starts_with(target: &str, value: &str) -> bool {
	target.starts_with(value)
}

fn ends_with(target: &str, value: &str) -> bool {
	target.ends_with(value)
}

impl Filter {
	/// `lhs AND rhs`.
	pub fn and(lhs: Filter, rhs: Filter) -> Filter {
		Filter::And(Composite {
			junction: Junction::And,
			filters: vec![lhs, rhs],
		})
	}

	/// Conjunction of `filters`: `None` when empty, the filter itself when
	/// there is only one.
	pub fn and_all(filters: impl IntoIterator<Item = Filter>) -> Option<Filter> {
		Self::collapse(Junction::And, filters.into_iter().collect())
	}

	/// `lhs OR rhs`.
	pub fn or(lhs: Filter, rhs: Filter) -> Filter {
		Filter::Or(Composite {
			junction: Junction::Or,
			filters: vec![lhs, rhs],
		})
	}

	/// Disjunction of `filters`: `None` when empty, the filter itself when
	/// there is only one.
	pub fn or_all(filters: impl IntoIterator<Item = Filter>) -> Option<Filter> {
		Self::collapse(Junction::Or, filters.into_iter().collect())
	}

	/// A composite over exactly `filters`, even a single one.
	pub fn composite(junction: Junction, filters: Vec<Filter>) -> Result<Filter> {
		Ok(Composite::new(junction, filters)?.into_filter())
	}

	fn collapse(junction: Junction, mut filters: Vec<Filter>) -> Option<Filter> {
		match filters.len() {
			0 => None,
			1 => filters.pop(),
			_ => Some(Composite { junction, filters }.into_filter()),
		}
	}

	#[allow(clippy::should_implement_trait)]
	pub fn not(filter: Filter) -> Filter {
		Filter::Not(Box::new(filter))
	}

	pub fn presence(name: impl Into<String>) -> Result<Filter> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(ObjectError::BlankName.into());
		}
		Ok(Filter::Presence(Presence { name }))
	}

	pub fn equal(attribute: Attribute) -> Filter {
		Filter::Equals(Equals { attribute })
	}

	pub fn contains_all(attribute: Attribute) -> Filter {
		Filter::ContainsAll(ContainsAll { attribute })
	}

	pub fn contains(attribute: Attribute, case_ignore: bool) -> Result<Filter> {
		Ok(Filter::Contains(StringFilter::new(attribute, case_ignore)?))
	}

	pub fn starts_with(attribute: Attribute, case_ignore: bool) -> Result<Filter> {
		Ok(Filter::StartsWith(StringFilter::new(attribute, case_ignore)?))
	}

	pub fn ends_with(attribute: Attribute, case_ignore: bool) -> Result<Filter> {
		Ok(Filter::EndsWith(StringFilter::new(attribute, case_ignore)?))
	}

	pub fn greater_than(attribute: Attribute) -> Result<Filter> {
		Ok(Filter::GreaterThan(Comparison::new(attribute)?))
	}

	pub fn greater_than_or_equal(attribute: Attribute) -> Result<Filter> {
		Ok(Filter::GreaterThanOrEqual(Comparison::new(attribute)?))
	}

	pub fn less_than(attribute: Attribute) -> Result<Filter> {
		Ok(Filter::LessThan(Comparison::new(attribute)?))
	}

	pub fn less_than_or_equal(attribute: Attribute) -> Result<Filter> {
		Ok(Filter::LessThanOrEqual(Comparison::new(attribute)?))
	}

	pub fn tag(&self) -> FilterTag {
		match self {
			Filter::And(_) => FilterTag::And,
			Filter::Or(_) => FilterTag::Or,
			Filter::Not(_) => FilterTag::Not,
			Filter::Presence(_) => FilterTag::Presence,
			Filter::Equals(_) => FilterTag::Equal,
			Filter::ContainsAll(_) => FilterTag::ContainsAll,
			Filter::Contains(_) => FilterTag::Contains,
			Filter::StartsWith(_) => FilterTag::StartsWith,
			Filter::EndsWith(_) => FilterTag::EndsWith,
			Filter::GreaterThan(_) => FilterTag::GreaterThan,
			Filter::GreaterThanOrEqual(_) => FilterTag::GreaterOrEqual,
			Filter::LessThan(_) => FilterTag::LessThan,
			Filter::LessThanOrEqual(_) => FilterTag::LessOrEqual,
		}
	}

	/// The attribute name an attribute filter tests, `None` for logical ones.
	pub fn attribute_name(&self) -> Option<&str> {
		match self {
			Filter::And(_) | Filter::Or(_) | Filter::Not(_) => None,
			Filter::Presence(p) => Some(p.name()),
			Filter::Equals(f) => Some(f.attribute.name()),
			Filter::ContainsAll(f) => Some(f.attribute.name()),
			Filter::Contains(f) | Filter::StartsWith(f) | Filter::EndsWith(f) => Some(f.name()),
			Filter::GreaterThan(c)
			| Filter::GreaterThanOrEqual(c)
			| Filter::LessThan(c)
			| Filter::LessThanOrEqual(c) => Some(c.name()),
		}
	}

	/// Whether `source` satisfies this filter.
	///
	/// Children of `And` and `Or` are evaluated in order and evaluation stops
	/// at the first child that decides the result.
	pub fn accept<S: AttributeSource + ?Sized>(&self, source: &S) -> bool {
		let accepted = match self {
			Filter::And(composite) => composite.filters.iter().all(|f| f.accept(source)),
			Filter::Or(composite) => composite.filters.iter().any(|f| f.accept(source)),
			Filter::Not(inner) => !inner.accept(source),
			Filter::Presence(p) => p.accept(source),
			Filter::Equals(f) => f.accept(source),
			Filter::ContainsAll(f) => f.accept(source),
			Filter::Contains(f) => f.accept(source, contains),
			Filter::StartsWith(f) => f.accept(source, starts_with),
			Filter::EndsWith(f) => f.accept(source, ends_with),
			Filter::GreaterThan(c) => c.accept(source, Ordering::is_gt),
			Filter::GreaterThanOrEqual(c) => c.accept(source, Ordering::is_ge),
			Filter::LessThan(c) => c.accept(source, Ordering::is_lt),
			Filter::LessThanOrEqual(c) => c.accept(source, Ordering::is_le),
		};
		trace!(tag = %self.tag(), accepted, "filter evaluated");
		accepted
	}

	/// Whether the single-valued `record` satisfies this filter.
	pub fn accept_record(&self, record: &Record) -> bool {
		let accepted = match self {
			Filter::And(composite) => composite.filters.iter().all(|f| f.accept_record(record)),
			Filter::Or(composite) => composite.filters.iter().any(|f| f.accept_record(record)),
			Filter::Not(inner) => !inner.accept_record(record),
			Filter::Presence(p) => record.contains_key(p.name()),
			Filter::Equals(f) => f.accept_record(record),
			Filter::ContainsAll(f) => f.accept_record(record),
			Filter::Contains(f) => f.accept_record(record, contains),
			Filter::StartsWith(f) => f.accept_record(record, starts_with),
			Filter::EndsWith(f) => f.accept_record(record, ends_with),
			Filter::GreaterThan(c) => c.accept_record(record, Ordering::is_gt),
			Filter::GreaterThanOrEqual(c) => c.accept_record(record, Ordering::is_ge),
			Filter::LessThan(c) => c.accept_record(record, Ordering::is_lt),
			Filter::LessThanOrEqual(c) => c.accept_record(record, Ordering::is_le),
		};
		trace!(tag = %self.tag(), accepted, "record filter evaluated");
		accepted
	}
}

impl fmt::Display for Filter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.accept_visitor(&ExpressionRenderer, ()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sift_object::{Entity, ValueKind};

	fn user() -> Entity {
		Entity::new("user")
			.unwrap()
			.with_attribute("name", ["Alice"])
			.unwrap()
			.with_attribute("age", ["30"])
			.unwrap()
			.with_attribute("groups", ["admins", "ops", "dev"])
			.unwrap()
			.with_attribute("manager", Vec::<AttributeValue>::new())
			.unwrap()
	}

	fn attr(name: &str, value: impl Into<AttributeValue>) -> Attribute {
		Attribute::single(name, value).unwrap()
	}

	#[test]
	fn test_presence() {
		let entity = user();
		assert!(Filter::presence("name").unwrap().accept(&entity));
		assert!(Filter::presence("NAME").unwrap().accept(&entity));
		assert!(!Filter::presence("email").unwrap().accept(&entity));
		// present but empty
		assert!(!Filter::presence("manager").unwrap().accept(&entity));
	}

	#[test]
	fn test_presence_blank_name() {
		assert_eq!(
			Filter::presence(" ").unwrap_err(),
			FilterError::Object(ObjectError::BlankName)
		);
	}

	#[test]
	fn test_equals_is_list_equality() {
		let entity = user();
		assert!(Filter::equal(attr("name", "Alice")).accept(&entity));
		assert!(!Filter::equal(attr("name", "alice")).accept(&entity));

		let same_order = Attribute::new("groups", ["admins", "ops", "dev"]).unwrap();
		let other_order = Attribute::new("groups", ["ops", "admins", "dev"]).unwrap();
		let subset = Attribute::new("groups", ["admins"]).unwrap();
		assert!(Filter::equal(same_order).accept(&entity));
		assert!(!Filter::equal(other_order).accept(&entity));
		assert!(!Filter::equal(subset).accept(&entity));
	}

	#[test]
	fn test_contains_all_is_set_covering() {
		let entity = user();
		let covered = Attribute::new("groups", ["dev", "admins"]).unwrap();
		let uncovered = Attribute::new("groups", ["admins", "finance"]).unwrap();
		assert!(Filter::contains_all(covered).accept(&entity));
		assert!(!Filter::contains_all(uncovered).accept(&entity));
		assert!(!Filter::contains_all(attr("email", "x")).accept(&entity));
	}

	#[test]
	fn test_contains_substring() {
		let entity = user();
		assert!(Filter::contains(attr("name", "lic"), false).unwrap().accept(&entity));
		assert!(!Filter::contains(attr("name", "bob"), false).unwrap().accept(&entity));
		// multi-valued target never matches
		assert!(!Filter::contains(attr("groups", "ops"), false).unwrap().accept(&entity));
	}

	#[test]
	fn test_contains_case_ignore_not_consulted() {
		let entity = user();
		let ignoring = Filter::contains(attr("name", "ALICE"), true).unwrap();
		let sensitive = Filter::contains(attr("name", "ALICE"), false).unwrap();
		assert_eq!(ignoring.accept(&entity), sensitive.accept(&entity));
		assert!(!ignoring.accept(&entity));

		match ignoring {
			Filter::Contains(f) => assert!(f.case_ignore()),
			other => panic!("unexpected filter {other:?}"),
		}
	}

	#[test]
	fn test_starts_and_ends_with() {
		let entity = user();
		assert!(Filter::starts_with(attr("name", "Al"), false).unwrap().accept(&entity));
		assert!(!Filter::starts_with(attr("name", "ce"), false).unwrap().accept(&entity));
		assert!(Filter::ends_with(attr("name", "ce"), false).unwrap().accept(&entity));
	}

	#[test]
	fn test_string_filter_requires_string() {
		let err = Filter::contains(attr("age", 30), false).unwrap_err();
		assert_eq!(
			err,
			FilterError::NotString {
				name: "age".to_string(),
				kind: ValueKind::Integer
			}
		);
	}

	#[test]
	fn test_comparison_construction_errors() {
		let err = Filter::greater_than(attr("photo", vec![1u8, 2])).unwrap_err();
		assert_eq!(
			err,
			FilterError::NotComparable {
				name: "photo".to_string(),
				kind: ValueKind::Bytes
			}
		);

		let many = Attribute::new("age", [1, 2]).unwrap();
		assert_eq!(
			Filter::greater_than_or_equal(many).unwrap_err(),
			FilterError::NotSingleValue {
				name: "age".to_string(),
				count: 2
			}
		);

		let none = Attribute::empty("age").unwrap();
		assert!(Filter::less_than(none).is_err());
	}

	#[test]
	fn test_comparisons() {
		let entity = user();
		assert!(Filter::greater_than_or_equal(attr("age", "25")).unwrap().accept(&entity));
		assert!(Filter::greater_than_or_equal(attr("age", "30")).unwrap().accept(&entity));
		assert!(!Filter::greater_than(attr("age", "30")).unwrap().accept(&entity));
		assert!(Filter::less_than(attr("age", "31")).unwrap().accept(&entity));
		assert!(Filter::less_than_or_equal(attr("age", "30")).unwrap().accept(&entity));
	}

	#[test]
	fn test_comparison_missing_attribute() {
		let entity = user();
		let ge = Filter::greater_than_or_equal(attr("salary", 10)).unwrap();
		let lt = Filter::less_than(attr("salary", 10)).unwrap();
		assert!(!ge.accept(&entity));
		// presence gates the comparison even though missing orders as Less
		assert!(!lt.accept(&entity));

		match lt {
			Filter::LessThan(c) => assert_eq!(c.compare(&entity), Some(Ordering::Less)),
			other => panic!("unexpected filter {other:?}"),
		}
	}

	#[test]
	fn test_comparison_kind_mismatch() {
		let entity = user();
		// age is stored as a string
		assert!(!Filter::greater_than(attr("age", 1)).unwrap().accept(&entity));
		assert!(!Filter::less_than(attr("age", 100)).unwrap().accept(&entity));
	}

	#[test]
	fn test_not() {
		let entity = user();
		let present = Filter::presence("name").unwrap();
		assert!(!Filter::not(present.clone()).accept(&entity));
		assert!(Filter::not(Filter::not(present)).accept(&entity));
	}

	#[test]
	fn test_and_or() {
		let entity = user();
		let yes = Filter::presence("name").unwrap();
		let no = Filter::presence("email").unwrap();
		assert!(Filter::and(yes.clone(), yes.clone()).accept(&entity));
		assert!(!Filter::and(yes.clone(), no.clone()).accept(&entity));
		assert!(Filter::or(no.clone(), yes.clone()).accept(&entity));
		assert!(!Filter::or(no.clone(), no).accept(&entity));
	}

	#[test]
	fn test_and_all_collapses() {
		assert_eq!(Filter::and_all(Vec::new()), None);
		let only = Filter::presence("a").unwrap();
		assert_eq!(Filter::and_all(vec![only.clone()]), Some(only.clone()));
		assert_eq!(Filter::or_all(vec![only.clone()]), Some(only.clone()));
		let both = Filter::and_all(vec![only.clone(), only]).unwrap();
		assert_eq!(both.tag(), FilterTag::And);
	}

	#[test]
	fn test_composite_rejects_empty() {
		assert_eq!(
			Filter::composite(Junction::Or, Vec::new()).unwrap_err(),
			FilterError::EmptyComposite
		);
		let single = Filter::composite(Junction::And, vec![Filter::presence("a").unwrap()]).unwrap();
		match single {
			Filter::And(c) => assert!(c.rhs().is_none()),
			other => panic!("unexpected filter {other:?}"),
		}
	}

	#[test]
	fn test_lhs_rhs() {
		let a = Filter::presence("a").unwrap();
		let b = Filter::presence("b").unwrap();
		let c = Filter::presence("c").unwrap();

		let pair = Filter::and(a.clone(), b.clone());
		let Filter::And(pair) = pair else {
			panic!("expected and")
		};
		assert_eq!(pair.lhs(), &a);
		assert_eq!(pair.rhs().unwrap().as_ref(), &b);

		let triple = Filter::or_all(vec![a.clone(), b.clone(), c.clone()]).unwrap();
		let Filter::Or(triple) = triple else {
			panic!("expected or")
		};
		assert_eq!(triple.lhs(), &a);
		assert_eq!(triple.rhs().unwrap().into_owned(), Filter::or(b, c));
	}

	#[test]
	fn test_attribute_name() {
		assert_eq!(Filter::presence("a").unwrap().attribute_name(), Some("a"));
		assert_eq!(
			Filter::not(Filter::presence("a").unwrap()).attribute_name(),
			None
		);
	}

	#[test]
	fn test_record_evaluation() {
		let mut record = Record::new();
		record.insert("name".to_string(), AttributeValue::from("Alice"));
		record.insert("age".to_string(), AttributeValue::from(30));

		assert!(Filter::presence("name").unwrap().accept_record(&record));
		assert!(!Filter::presence("email").unwrap().accept_record(&record));
		assert!(Filter::equal(attr("name", "Alice")).accept_record(&record));
		assert!(!Filter::equal(Attribute::empty("name").unwrap()).accept_record(&record));
		assert!(Filter::contains(attr("name", "li"), false).unwrap().accept_record(&record));
		assert!(Filter::greater_than(attr("age", 18)).unwrap().accept_record(&record));
		assert!(!Filter::greater_than(attr("salary", 18)).unwrap().accept_record(&record));
		assert!(Filter::contains_all(attr("age", 30)).accept_record(&record));

		let either = Filter::or(
			Filter::presence("email").unwrap(),
			Filter::less_than(attr("age", 40)).unwrap(),
		);
		assert!(either.accept_record(&record));
	}

	#[test]
	fn test_display_renders_expression() {
		let filter = Filter::and(
			Filter::equal(attr("name", "Alice")),
			Filter::greater_than_or_equal(attr("age", 25)).unwrap(),
		);
		assert_eq!(filter.to_string(), r#"name eq "Alice" and age ge 25"#);
	}
}
