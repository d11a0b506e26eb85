// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for filter construction, parsing and translation.

use sift_object::{ObjectError, ValueKind};
use thiserror::Error;

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors raised while building or parsing a filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
	#[error(transparent)]
	Object(#[from] ObjectError),

	#[error("attribute '{name}' holds a {kind} value, which has no natural ordering")]
	NotComparable { name: String, kind: ValueKind },

	#[error("attribute '{name}' must hold exactly one value, found {count}")]
	NotSingleValue { name: String, count: usize },

	#[error("attribute '{name}' must hold a string value, found {kind}")]
	NotString { name: String, kind: ValueKind },

	#[error("composite filter requires at least one child filter")]
	EmptyComposite,

	#[error("unknown filter tag: {0}")]
	UnknownTag(String),

	#[error("invalid filter expression: {0}")]
	InvalidExpression(String),

	#[error("value '{value}' of attribute '{name}' does not match date format '{format}'")]
	InvalidDate {
		name: String,
		value: String,
		format: String,
	},
}

/// Errors raised when a translator's hooks contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
	#[error("translation method is inconsistent: {0}")]
	Inconsistent(String),
}
