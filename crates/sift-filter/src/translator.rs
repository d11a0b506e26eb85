// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Normal-form translation of filters into a target query language.
//!
//! A translator only says how to build single leaves and, where the target
//! allows it, how to join two expressions. [`FilterTranslator::translate`]
//! does the rest: negations are pushed down to the leaves, leaves the target
//! cannot express are dropped, `and` is distributed over `or` when the target
//! cannot express the mixed tree, and an `or` the target cannot join turns
//! into several alternative expressions.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::error::TranslateError;
use crate::filter::{Comparison, Composite, ContainsAll, Equals, Filter, Presence, StringFilter};

type Result<T> = std::result::Result<T, TranslateError>;

/// Builds target expressions from filter leaves.
///
/// Every hook returns `None` when the target cannot express the input.
/// `not` asks for the negated form of the leaf.
pub trait FilterTranslator {
	type Expr: Clone + Eq + Hash + Debug;

	fn create_and(&self, _lhs: &Self::Expr, _rhs: &Self::Expr) -> Option<Self::Expr> {
		None
	}

	fn create_or(&self, _lhs: &Self::Expr, _rhs: &Self::Expr) -> Option<Self::Expr> {
		None
	}

	fn create_presence(&self, _filter: &Presence, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_equals(&self, _filter: &Equals, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_contains_all(&self, _filter: &ContainsAll, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_contains(&self, _filter: &StringFilter, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_starts_with(&self, _filter: &StringFilter, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_ends_with(&self, _filter: &StringFilter, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_greater_than(&self, _filter: &Comparison, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_greater_than_or_equal(&self, _filter: &Comparison, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_less_than(&self, _filter: &Comparison, _not: bool) -> Option<Self::Expr> {
		None
	}

	fn create_less_than_or_equal(&self, _filter: &Comparison, _not: bool) -> Option<Self::Expr> {
		None
	}

	/// Translates `filter` into alternative target expressions.
	///
	/// The result holds no duplicates and keeps first-seen order. An empty
	/// result means nothing could be translated and the caller has to
	/// evaluate the whole filter itself.
	fn translate(&self, filter: Option<&Filter>) -> Result<Vec<Self::Expr>> {
		let Some(filter) = filter else {
			return Ok(Vec::new());
		};

		let normalized = normalize_not(filter);
		let Some(simplified) = simplify_and_distribute(self, &normalized)? else {
			debug!(filter = %filter, "no part of the filter is translatable");
			return Ok(Vec::new());
		};
		debug!(simplified = %simplified, "filter normalized for translation");

		let exprs = translate_internal(self, &simplified)?;
		let mut seen = HashSet::with_capacity(exprs.len());
		Ok(exprs
			.into_iter()
			.filter(|expr| seen.insert(expr.clone()))
			.collect())
	}
}

/// Splits a composite into its binary `lhs`/`rhs` view.
fn split(composite: &Composite) -> (Filter, Option<Filter>) {
	(
		composite.lhs().clone(),
		composite.rhs().map(|rhs| rhs.into_owned()),
	)
}

fn normalize_not(filter: &Filter) -> Filter {
	match filter {
		Filter::And(c) => match split(c) {
			(lhs, Some(rhs)) => Filter::and(normalize_not(&lhs), normalize_not(&rhs)),
			(lhs, None) => normalize_not(&lhs),
		},
		Filter::Or(c) => match split(c) {
			(lhs, Some(rhs)) => Filter::or(normalize_not(&lhs), normalize_not(&rhs)),
			(lhs, None) => normalize_not(&lhs),
		},
		Filter::Not(inner) => negate(normalize_not(inner)),
		leaf => leaf.clone(),
	}
}

fn negate(filter: Filter) -> Filter {
	match filter {
		Filter::And(c) => match split(&c) {
			(lhs, Some(rhs)) => Filter::or(negate(lhs), negate(rhs)),
			(lhs, None) => negate(lhs),
		},
		Filter::Or(c) => match split(&c) {
			(lhs, Some(rhs)) => Filter::and(negate(lhs), negate(rhs)),
			(lhs, None) => negate(lhs),
		},
		Filter::Not(inner) => *inner,
		leaf => Filter::not(leaf),
	}
}

fn simplify_and_distribute<T>(translator: &T, filter: &Filter) -> Result<Option<Filter>>
where
	T: FilterTranslator + ?Sized,
{
	match filter {
		Filter::And(c) => {
			let (lhs, rhs) = split(c);
			let Some(rhs) = rhs else {
				return simplify_and_distribute(translator, &lhs);
			};
			let left = simplify_and_distribute(translator, &lhs)?;
			let right = simplify_and_distribute(translator, &rhs)?;
			let (left, right) = match (left, right) {
				(None, right) => return Ok(right),
				(left, None) => return Ok(left),
				(Some(left), Some(right)) => (left, right),
			};

			let left_exprs = translate_internal(translator, &left)?;
			let right_exprs = translate_internal(translator, &right)?;
			if left_exprs.is_empty() {
				return Err(inconsistent(&left_exprs));
			}
			if right_exprs.is_empty() {
				return Err(inconsistent(&right_exprs));
			}

			let any_and_possible = left_exprs.iter().any(|l| {
				right_exprs
					.iter()
					.any(|r| translator.create_and(l, r).is_some())
			});
			if !any_and_possible {
				// keep the side that yields fewer alternatives
				debug!("target cannot join both sides of an and; keeping one");
				return Ok(Some(if left_exprs.len() <= right_exprs.len() {
					left
				} else {
					right
				}));
			}

			if left_exprs.len() > 1 {
				let (a, b) = or_parts(&left, &left_exprs)?;
				let distributed = Filter::or(Filter::and(a, right.clone()), Filter::and(b, right));
				simplify_and_distribute(translator, &distributed)
			} else if right_exprs.len() > 1 {
				let (a, b) = or_parts(&right, &right_exprs)?;
				let distributed = Filter::or(Filter::and(left.clone(), a), Filter::and(left, b));
				simplify_and_distribute(translator, &distributed)
			} else {
				Ok(Some(Filter::and(left, right)))
			}
		}
		Filter::Or(c) => {
			let (lhs, rhs) = split(c);
			let Some(rhs) = rhs else {
				return simplify_and_distribute(translator, &lhs);
			};
			let left = simplify_and_distribute(translator, &lhs)?;
			let right = simplify_and_distribute(translator, &rhs)?;
			match (left, right) {
				(Some(left), Some(right)) => Ok(Some(Filter::or(left, right))),
				_ => Ok(None),
			}
		}
		leaf => Ok(create_leaf(translator, leaf).map(|_| leaf.clone())),
	}
}

/// The two sides of a filter that translated into several alternatives,
/// which only an `or` can produce.
fn or_parts<E: Debug>(filter: &Filter, exprs: &[E]) -> Result<(Filter, Filter)> {
	match filter {
		Filter::Or(c) => match split(c) {
			(lhs, Some(rhs)) => Ok((lhs, rhs)),
			(_, None) => Err(inconsistent(exprs)),
		},
		_ => Err(inconsistent(exprs)),
	}
}

fn translate_internal<T>(translator: &T, filter: &Filter) -> Result<Vec<T::Expr>>
where
	T: FilterTranslator + ?Sized,
{
	match filter {
		Filter::And(c) => Ok(vec![translate_and(translator, c)?]),
		Filter::Or(c) => translate_or(translator, c),
		leaf => Ok(create_leaf(translator, leaf).into_iter().collect()),
	}
}

fn translate_and<T>(translator: &T, composite: &Composite) -> Result<T::Expr>
where
	T: FilterTranslator + ?Sized,
{
	let (lhs, rhs) = split(composite);
	let left = single(translate_internal(translator, &lhs)?)?;
	let Some(rhs) = rhs else {
		return Ok(left);
	};
	let right = single(translate_internal(translator, &rhs)?)?;
	translator.create_and(&left, &right).ok_or_else(|| {
		TranslateError::Inconsistent(format!("create_and refused {left:?} and {right:?}"))
	})
}

fn translate_or<T>(translator: &T, composite: &Composite) -> Result<Vec<T::Expr>>
where
	T: FilterTranslator + ?Sized,
{
	let (lhs, rhs) = split(composite);
	let mut left = translate_internal(translator, &lhs)?;
	let Some(rhs) = rhs else {
		return Ok(left);
	};
	let right = translate_internal(translator, &rhs)?;
	if left.is_empty() {
		return Err(inconsistent(&left));
	}
	if right.is_empty() {
		return Err(inconsistent(&right));
	}

	if let ([l], [r]) = (left.as_slice(), right.as_slice()) {
		if let Some(joined) = translator.create_or(l, r) {
			return Ok(vec![joined]);
		}
	}
	left.extend(right);
	Ok(left)
}

fn single<E: Debug>(mut exprs: Vec<E>) -> Result<E> {
	if exprs.len() != 1 {
		return Err(inconsistent(&exprs));
	}
	exprs.pop().ok_or_else(|| inconsistent(&exprs))
}

fn create_leaf<T>(translator: &T, filter: &Filter) -> Option<T::Expr>
where
	T: FilterTranslator + ?Sized,
{
	match filter {
		Filter::Not(inner) => create_leaf_with(translator, inner, true),
		leaf => create_leaf_with(translator, leaf, false),
	}
}

fn create_leaf_with<T>(translator: &T, filter: &Filter, not: bool) -> Option<T::Expr>
where
	T: FilterTranslator + ?Sized,
{
	match filter {
		Filter::Presence(f) => translator.create_presence(f, not),
		Filter::Equals(f) => translator.create_equals(f, not),
		Filter::ContainsAll(f) => translator.create_contains_all(f, not),
		Filter::Contains(f) => translator.create_contains(f, not),
		Filter::StartsWith(f) => translator.create_starts_with(f, not),
		Filter::EndsWith(f) => translator.create_ends_with(f, not),
		Filter::GreaterThan(f) => translator.create_greater_than(f, not),
		Filter::GreaterThanOrEqual(f) => translator.create_greater_than_or_equal(f, not),
		Filter::LessThan(f) => translator.create_less_than(f, not),
		Filter::LessThanOrEqual(f) => translator.create_less_than_or_equal(f, not),
		Filter::And(_) | Filter::Or(_) | Filter::Not(_) => None,
	}
}

fn inconsistent<E: Debug>(exprs: &[E]) -> TranslateError {
	TranslateError::Inconsistent(format!("{exprs:?}"))
}
