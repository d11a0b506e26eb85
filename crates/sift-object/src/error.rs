// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the object model.

use thiserror::Error;

/// Result type for object model operations.
pub type Result<T> = std::result::Result<T, ObjectError>;

/// Errors raised while building attributes, entities and records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectError {
	#[error("attribute name must not be blank")]
	BlankName,

	#[error("entity type must not be blank")]
	BlankType,

	#[error("attribute '{name}' is not single valued ({count} values)")]
	NotSingleValue { name: String, count: usize },

	#[error("field '{field}' holds unsupported JSON {found}")]
	UnsupportedJson { field: String, found: &'static str },
}
