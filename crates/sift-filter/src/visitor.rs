// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::filter::{Comparison, Composite, ContainsAll, Equals, Filter, Presence, StringFilter};

/// Double-dispatch contract for turning a filter tree into something else.
///
/// `R` is the result type and `P` a caller-supplied parameter threaded
/// through every call. Implementations recurse by calling
/// [`Filter::accept_visitor`] on child filters.
pub trait FilterVisitor<R, P> {
	fn and(&self, param: P, filter: &Composite) -> R;

	fn or(&self, param: P, filter: &Composite) -> R;

	fn not(&self, param: P, inner: &Filter) -> R;

	fn presence(&self, param: P, filter: &Presence) -> R;

	fn equal(&self, param: P, filter: &Equals) -> R;

	fn contains_all(&self, param: P, filter: &ContainsAll) -> R;

	fn contains(&self, param: P, filter: &StringFilter) -> R;

	fn starts_with(&self, param: P, filter: &StringFilter) -> R;

	fn ends_with(&self, param: P, filter: &StringFilter) -> R;

	fn greater_than(&self, param: P, filter: &Comparison) -> R;

	fn greater_than_or_equal(&self, param: P, filter: &Comparison) -> R;

	fn less_than(&self, param: P, filter: &Comparison) -> R;

	fn less_than_or_equal(&self, param: P, filter: &Comparison) -> R;
}

impl Filter {
	/// Calls the one visitor method matching this variant.
	pub fn accept_visitor<R, P, V>(&self, visitor: &V, param: P) -> R
	where
		V: FilterVisitor<R, P> + ?Sized,
	{
		match self {
			Filter::And(c) => visitor.and(param, c),
			Filter::Or(c) => visitor.or(param, c),
			Filter::Not(inner) => visitor.not(param, inner),
			Filter::Presence(p) => visitor.presence(param, p),
			Filter::Equals(f) => visitor.equal(param, f),
			Filter::ContainsAll(f) => visitor.contains_all(param, f),
			Filter::Contains(f) => visitor.contains(param, f),
			Filter::StartsWith(f) => visitor.starts_with(param, f),
			Filter::EndsWith(f) => visitor.ends_with(param, f),
			Filter::GreaterThan(c) => visitor.greater_than(param, c),
			Filter::GreaterThanOrEqual(c) => visitor.greater_than_or_equal(param, c),
			Filter::LessThan(c) => visitor.less_than(param, c),
			Filter::LessThanOrEqual(c) => visitor.less_than_or_equal(param, c),
		}
	}
}
