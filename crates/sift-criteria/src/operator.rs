// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use crate::error::CriteriaError;

/// How a criterion relates its attribute to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Equal,
	NotEqual,
	LessEqual,
	LessThan,
	GreaterThan,
	GreaterEqual,
	Contains,
	NotContains,
	StartsWith,
	NotStartsWith,
	EndsWith,
	NotEndsWith,
}

impl Operator {
	pub const ALL: [Operator; 12] = [
		Operator::Equal,
		Operator::NotEqual,
		Operator::LessEqual,
		Operator::LessThan,
		Operator::GreaterThan,
		Operator::GreaterEqual,
		Operator::Contains,
		Operator::NotContains,
		Operator::StartsWith,
		Operator::NotStartsWith,
		Operator::EndsWith,
		Operator::NotEndsWith,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Equal => "EQUAL",
			Operator::NotEqual => "NOT_EQUAL",
			Operator::LessEqual => "LESS_EQUAL",
			Operator::LessThan => "LESS_THAN",
			Operator::GreaterThan => "GREATER_THAN",
			Operator::GreaterEqual => "GREATER_EQUAL",
			Operator::Contains => "CONTAINS",
			Operator::NotContains => "NOT_CONTAINS",
			Operator::StartsWith => "STARTS_WITH",
			Operator::NotStartsWith => "NOT_STARTS_WITH",
			Operator::EndsWith => "ENDS_WITH",
			Operator::NotEndsWith => "NOT_ENDS_WITH",
		}
	}

	/// The operator matching exactly the values this one rejects.
	///
	/// Orderings flip to their complement, so `LESS_THAN` becomes
	/// `GREATER_EQUAL` rather than `GREATER_THAN`.
	pub fn negate(&self) -> Operator {
		match self {
			Operator::Equal => Operator::NotEqual,
			Operator::NotEqual => Operator::Equal,
			Operator::LessEqual => Operator::GreaterThan,
			Operator::LessThan => Operator::GreaterEqual,
			Operator::GreaterThan => Operator::LessEqual,
			Operator::GreaterEqual => Operator::LessThan,
			Operator::Contains => Operator::NotContains,
			Operator::NotContains => Operator::Contains,
			Operator::StartsWith => Operator::NotStartsWith,
			Operator::NotStartsWith => Operator::StartsWith,
			Operator::EndsWith => Operator::NotEndsWith,
			Operator::NotEndsWith => Operator::EndsWith,
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Operator {
	type Err = CriteriaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Operator::ALL
			.into_iter()
			.find(|op| op.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| CriteriaError::UnknownOperator(s.to_string()))
	}
}

/// The single logical operator applied across a criteria list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
	And,
	Or,
	Not,
}

impl Conjunction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Conjunction::And => "AND",
			Conjunction::Or => "OR",
			Conjunction::Not => "NOT",
		}
	}
}

impl fmt::Display for Conjunction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Conjunction {
	type Err = CriteriaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Conjunction::And, Conjunction::Or, Conjunction::Not]
			.into_iter()
			.find(|c| c.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| CriteriaError::UnknownConjunction(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_operator_names_parse_back() {
		for op in Operator::ALL {
			assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
		}
		assert_eq!("not_equal".parse::<Operator>().unwrap(), Operator::NotEqual);
	}

	#[test]
	fn test_unknown_names() {
		assert_eq!(
			"LIKE".parse::<Operator>().unwrap_err(),
			CriteriaError::UnknownOperator("LIKE".to_string())
		);
		assert_eq!(
			"XOR".parse::<Conjunction>().unwrap_err(),
			CriteriaError::UnknownConjunction("XOR".to_string())
		);
	}

	#[test]
	fn test_negate_is_involution() {
		for op in Operator::ALL {
			assert_ne!(op.negate(), op);
			assert_eq!(op.negate().negate(), op);
		}
	}

	#[test]
	fn test_negated_orderings_are_complements() {
		assert_eq!(Operator::LessThan.negate(), Operator::GreaterEqual);
		assert_eq!(Operator::LessEqual.negate(), Operator::GreaterThan);
		assert_eq!(Operator::GreaterThan.negate(), Operator::LessEqual);
		assert_eq!(Operator::GreaterEqual.negate(), Operator::LessThan);
	}

	#[test]
	fn test_conjunction_display() {
		assert_eq!(Conjunction::Not.to_string(), "NOT");
		assert_eq!("or".parse::<Conjunction>().unwrap(), Conjunction::Or);
	}
}
