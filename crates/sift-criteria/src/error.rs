// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sift_filter::FilterError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CriteriaError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
	#[error(transparent)]
	Filter(#[from] FilterError),

	#[error("unknown criterion operator: {0}")]
	UnknownOperator(String),

	#[error("unknown criteria conjunction: {0}")]
	UnknownConjunction(String),
}
