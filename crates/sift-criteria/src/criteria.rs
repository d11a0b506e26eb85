// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::hash::{Hash, Hasher};

use sift_filter::Filter;
use sift_object::AttributeSource;
use tracing::trace;

use crate::criterion::Criterion;
use crate::operator::Conjunction;

/// An ordered criterion list under one conjunction.
///
/// Equality and hashing go through the rendered form, so the same
/// criterions in a different order make a different `Criteria`.
#[derive(Debug, Clone)]
pub struct Criteria {
	conjunction: Conjunction,
	criterions: Vec<Criterion>,
}

impl Criteria {
	pub fn builder(conjunction: Conjunction) -> CriteriaBuilder {
		CriteriaBuilder {
			conjunction,
			criterions: Vec::new(),
		}
	}

	pub fn conjunction(&self) -> Conjunction {
		self.conjunction
	}

	pub fn criterions(&self) -> &[Criterion] {
		&self.criterions
	}

	pub fn len(&self) -> usize {
		self.criterions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.criterions.is_empty()
	}

	/// The equivalent filter, `None` when there are no criterions.
	pub fn to_filter(&self) -> Option<Filter> {
		let filters = self
			.criterions
			.iter()
			.map(|criterion| criterion.to_filter().clone())
			.collect::<Vec<_>>();
		match self.conjunction {
			Conjunction::And => Filter::and_all(filters),
			Conjunction::Or => Filter::or_all(filters),
			Conjunction::Not => Filter::or_all(filters).map(Filter::not),
		}
	}

	/// Evaluates the list against `source`.
	///
	/// `AND` needs every criterion, `OR` any, and `NOT` none. An empty list
	/// matches under `AND` and `NOT` only.
	pub fn matches<S: AttributeSource + ?Sized>(&self, source: &S) -> bool {
		let mut criterions = self.criterions.iter();
		let matched = match self.conjunction {
			Conjunction::And => criterions.all(|c| c.matches(source)),
			Conjunction::Or => criterions.any(|c| c.matches(source)),
			Conjunction::Not => !criterions.any(|c| c.matches(source)),
		};
		trace!(criteria = %self, matched, "criteria evaluated");
		matched
	}
}

impl fmt::Display for Criteria {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.conjunction.as_str())?;
		for criterion in &self.criterions {
			write!(f, " [{criterion}]")?;
		}
		Ok(())
	}
}

impl PartialEq for Criteria {
	fn eq(&self, other: &Self) -> bool {
		self.to_string() == other.to_string()
	}
}

impl Eq for Criteria {}

impl Hash for Criteria {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.to_string().hash(state);
	}
}

/// Collects criterions for an immutable [`Criteria`].
#[derive(Debug, Clone)]
pub struct CriteriaBuilder {
	conjunction: Conjunction,
	criterions: Vec<Criterion>,
}

impl CriteriaBuilder {
	pub fn criterion(mut self, criterion: Criterion) -> Self {
		self.criterions.push(criterion);
		self
	}

	pub fn criteria(mut self, criterions: impl IntoIterator<Item = Criterion>) -> Self {
		self.criterions.extend(criterions);
		self
	}

	pub fn push(&mut self, criterion: Criterion) -> &mut Self {
		self.criterions.push(criterion);
		self
	}

	pub fn build(self) -> Criteria {
		Criteria {
			conjunction: self.conjunction,
			criterions: self.criterions,
		}
	}
}
