// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sift_filter::{Comparison, Equals, FilterTranslator, StringFilter};
use sift_object::AttributeValue;
use tracing::debug;

use crate::criteria::Criteria;
use crate::criterion::Criterion;
use crate::operator::{Conjunction, Operator};

/// Translates filters into flat [`Criteria`].
///
/// Negation folds into the operator. Presence and `ca` have no criterion
/// form, nor do multi-valued equality tests, so those leaves are left for
/// the caller to evaluate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriteriaTranslator;

impl CriteriaTranslator {
	fn leaf(name: &str, value: &AttributeValue, operator: Operator, not: bool) -> Option<Criteria> {
		let operator = if not { operator.negate() } else { operator };
		match Criterion::new(name, value.clone(), operator) {
			Ok(criterion) => Some(Criteria::builder(Conjunction::And).criterion(criterion).build()),
			Err(e) => {
				debug!(error = %e, "leaf has no criterion form");
				None
			}
		}
	}

	fn string(filter: &StringFilter, operator: Operator, not: bool) -> Option<Criteria> {
		Self::leaf(filter.name(), &AttributeValue::from(filter.value()), operator, not)
	}

	fn comparison(filter: &Comparison, operator: Operator, not: bool) -> Option<Criteria> {
		Self::leaf(filter.name(), filter.value(), operator, not)
	}

	fn join(lhs: &Criteria, rhs: &Criteria, conjunction: Conjunction) -> Option<Criteria> {
		if !joins(lhs, conjunction) || !joins(rhs, conjunction) {
			return None;
		}
		Some(
			Criteria::builder(conjunction)
				.criteria(lhs.criterions().iter().cloned())
				.criteria(rhs.criterions().iter().cloned())
				.build(),
		)
	}
}

/// Whether `criteria` can merge into a list under `conjunction`.
fn joins(criteria: &Criteria, conjunction: Conjunction) -> bool {
	criteria.conjunction() == conjunction
		|| (criteria.len() == 1 && criteria.conjunction() != Conjunction::Not)
}

impl FilterTranslator for CriteriaTranslator {
	type Expr = Criteria;

	fn create_and(&self, lhs: &Criteria, rhs: &Criteria) -> Option<Criteria> {
		Self::join(lhs, rhs, Conjunction::And)
	}

	fn create_or(&self, lhs: &Criteria, rhs: &Criteria) -> Option<Criteria> {
		Self::join(lhs, rhs, Conjunction::Or)
	}

	fn create_equals(&self, filter: &Equals, not: bool) -> Option<Criteria> {
		let attribute = filter.attribute();
		match attribute.values() {
			[value] => Self::leaf(attribute.name(), value, Operator::Equal, not),
			_ => None,
		}
	}

	fn create_contains(&self, filter: &StringFilter, not: bool) -> Option<Criteria> {
		Self::string(filter, Operator::Contains, not)
	}

	fn create_starts_with(&self, filter: &StringFilter, not: bool) -> Option<Criteria> {
		Self::string(filter, Operator::StartsWith, not)
	}

	fn create_ends_with(&self, filter: &StringFilter, not: bool) -> Option<Criteria> {
		Self::string(filter, Operator::EndsWith, not)
	}

	fn create_greater_than(&self, filter: &Comparison, not: bool) -> Option<Criteria> {
		Self::comparison(filter, Operator::GreaterThan, not)
	}

	fn create_greater_than_or_equal(&self, filter: &Comparison, not: bool) -> Option<Criteria> {
		Self::comparison(filter, Operator::GreaterEqual, not)
	}

	fn create_less_than(&self, filter: &Comparison, not: bool) -> Option<Criteria> {
		Self::comparison(filter, Operator::LessThan, not)
	}

	fn create_less_than_or_equal(&self, filter: &Comparison, not: bool) -> Option<Criteria> {
		Self::comparison(filter, Operator::LessEqual, not)
	}
}
