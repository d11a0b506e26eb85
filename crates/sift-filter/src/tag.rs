// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Short identifier of a filter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
	And,
	Or,
	Not,
	Presence,
	Equal,
	ContainsAll,
	Contains,
	StartsWith,
	EndsWith,
	GreaterThan,
	GreaterOrEqual,
	LessThan,
	LessOrEqual,
}

impl FilterTag {
	pub const ALL: [FilterTag; 13] = [
		FilterTag::And,
		FilterTag::Or,
		FilterTag::Not,
		FilterTag::Presence,
		FilterTag::Equal,
		FilterTag::ContainsAll,
		FilterTag::Contains,
		FilterTag::StartsWith,
		FilterTag::EndsWith,
		FilterTag::GreaterThan,
		FilterTag::GreaterOrEqual,
		FilterTag::LessThan,
		FilterTag::LessOrEqual,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			FilterTag::And => "and",
			FilterTag::Or => "or",
			FilterTag::Not => "not",
			FilterTag::Presence => "pr",
			FilterTag::Equal => "eq",
			FilterTag::ContainsAll => "ca",
			FilterTag::Contains => "co",
			FilterTag::StartsWith => "sw",
			FilterTag::EndsWith => "ew",
			FilterTag::GreaterThan => "gt",
			FilterTag::GreaterOrEqual => "ge",
			FilterTag::LessThan => "lt",
			FilterTag::LessOrEqual => "le",
		}
	}

	/// Whether the tag names a logical rather than an attribute filter.
	pub fn is_logical(&self) -> bool {
		matches!(self, FilterTag::And | FilterTag::Or | FilterTag::Not)
	}
}

impl fmt::Display for FilterTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FilterTag {
	type Err = FilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FilterTag::ALL
			.into_iter()
			.find(|tag| tag.as_str() == s)
			.ok_or_else(|| FilterError::UnknownTag(s.to_string()))
	}
}
